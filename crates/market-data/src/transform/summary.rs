use crate::errors::Result;
use crate::models::{DatasetEnvelope, StockSummary, Variation};

use super::naming::formatted_stock_name;
use super::prices::{
    current_closing_price, fixed2, percent_change_from, previous_closing_price,
    price_change_between,
};
use super::time::last_update_time;

/// Build the dashboard tile for one dataset.
///
/// Fails with the first error any constituent raises; there are no partial
/// summaries.
pub fn get_stock_item_properties(envelope: &DatasetEnvelope) -> Result<StockSummary> {
    let dataset = &envelope.dataset;

    let stock_name = formatted_stock_name(&dataset.name)?;
    let current_value = current_closing_price(&dataset.data)?;
    let previous_close = previous_closing_price(&dataset.data)?;
    let price_change = price_change_between(current_value, previous_close)?;
    let percent_change = percent_change_from(price_change, previous_close)?;
    let last_updated = last_update_time(&dataset.refreshed_at)?;

    Ok(StockSummary {
        stock_name,
        stock_code: dataset.dataset_code.clone(),
        current_value,
        price_change: fixed2(price_change),
        percent_change: fixed2(percent_change),
        last_updated,
        previous_close,
        variation: Variation::from_change(price_change),
    })
}
