use serde::Serialize;

use crate::warehouse::Warehouse;

/// Snapshot of a warehouse's aggregates, ready to be printed as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct WarehouseSummary {
    pub label: String,
    pub number_of_articles: usize,
    pub total_price_in_pence: i64,
    /// -1.0 when the total is 0.
    pub average_price_in_pence: f64,
    pub most_expensive: Option<String>,
    pub contents: String,
}

impl WarehouseSummary {
    pub fn new(label: impl Into<String>, warehouse: &Warehouse) -> Self {
        Self {
            label: label.into(),
            number_of_articles: warehouse.number_of_articles(),
            total_price_in_pence: warehouse.total_price_in_pence(),
            average_price_in_pence: warehouse.average_price_in_pence_or_sentinel(),
            most_expensive: warehouse.most_expensive_article().map(|a| a.to_string()),
            contents: warehouse.to_string(),
        }
    }
}
