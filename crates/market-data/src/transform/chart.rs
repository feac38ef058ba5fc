use futures::future::{self, Ready};
use log::debug;

use crate::errors::Result;
use crate::models::{ChartSeries, ChartSeriesPoint, DatasetEnvelope, RawStockRow};

use super::time::epoch_millis;

/// Map raw rows to `[epochMillis, adjustedClose]` points, preserving order.
pub(crate) fn convert_series_to_chart_format(
    series: &[RawStockRow],
) -> Result<Vec<ChartSeriesPoint>> {
    series
        .iter()
        .map(|row| {
            Ok(ChartSeriesPoint::new(
                epoch_millis(row.date())?,
                row.adjusted_close(),
            ))
        })
        .collect()
}

/// Chart series for a single dataset, named by its code.
pub fn chart_series_for(envelope: &DatasetEnvelope) -> Result<ChartSeries> {
    let dataset = &envelope.dataset;
    Ok(ChartSeries {
        name: dataset.dataset_code.clone(),
        data: convert_series_to_chart_format(&dataset.data)?,
    })
}

/// Chart series for every dataset.
///
/// Returns `None` when there is nothing to convert; callers branch on that
/// before awaiting. The conversion itself runs eagerly and the returned future
/// is already resolved, which keeps the contract stable should the data ever
/// come from a remote source.
pub fn get_required_stock_props(
    datasets: Option<&[DatasetEnvelope]>,
) -> Option<Ready<Result<Vec<ChartSeries>>>> {
    let datasets = datasets?;
    debug!("Converting {} datasets to chart series", datasets.len());

    let series = datasets.iter().map(chart_series_for).collect();
    Some(future::ready(series))
}
