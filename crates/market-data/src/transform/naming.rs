use crate::errors::{Result, StockDataError};

/// Strip the provider's parenthetical annotation from a dataset name.
///
/// Everything from the character before the first `(` onward is removed, so
/// `"Apple Inc. (NASDAQ: AAPL)"` becomes `"Apple Inc."`.
pub fn formatted_stock_name(name: &str) -> Result<String> {
    let open_paren = name
        .find('(')
        .ok_or_else(|| StockDataError::MalformedName(name.to_string()))?;

    let end = name[..open_paren]
        .char_indices()
        .next_back()
        .map(|(idx, _)| idx)
        .ok_or_else(|| StockDataError::MalformedName(name.to_string()))?;

    Ok(name[..end].to_string())
}
