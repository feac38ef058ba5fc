//! Helpers for tracking which instruments are already on the board.

use crate::models::DatasetEnvelope;

/// Dataset codes in input order.
pub fn get_stock_codes_from_props(datasets: &[DatasetEnvelope]) -> Vec<String> {
    datasets
        .iter()
        .map(|envelope| envelope.dataset.dataset_code.clone())
        .collect()
}

/// Whether `candidate` is among `codes`. Duplicates in `codes` are fine.
pub fn is_stock_present<S: AsRef<str>>(codes: &[S], candidate: &str) -> bool {
    codes.iter().any(|code| code.as_ref() == candidate)
}

pub fn is_stock_list_empty<T>(datasets: &[T]) -> bool {
    datasets.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawStockDataset;

    fn envelope(code: &str) -> DatasetEnvelope {
        DatasetEnvelope::new(RawStockDataset {
            dataset_code: code.to_string(),
            name: format!("{code} Inc. (NASDAQ: {code})"),
            data: Vec::new(),
            refreshed_at: "2018-03-27T21:46:11.036Z".to_string(),
        })
    }

    #[test]
    fn test_codes_preserve_order() {
        let datasets = vec![envelope("MSFT"), envelope("AAPL"), envelope("MSFT")];
        assert_eq!(
            get_stock_codes_from_props(&datasets),
            vec!["MSFT", "AAPL", "MSFT"]
        );
    }

    #[test]
    fn test_codes_empty() {
        assert!(get_stock_codes_from_props(&[]).is_empty());
    }

    #[test]
    fn test_is_stock_present() {
        let codes = ["AAPL", "MSFT"];
        assert!(is_stock_present(codes.as_slice(), "AAPL"));
        assert!(!is_stock_present(codes.as_slice(), "GOOG"));
        assert!(!is_stock_present::<&str>(&[], "AAPL"));
    }

    #[test]
    fn test_is_stock_present_is_case_sensitive() {
        let codes = vec!["AAPL".to_string()];
        assert!(!is_stock_present(codes.as_slice(), "aapl"));
    }

    #[test]
    fn test_is_stock_list_empty() {
        assert!(is_stock_list_empty::<DatasetEnvelope>(&[]));
        assert!(!is_stock_list_empty(&[envelope("AAPL")]));
    }
}
