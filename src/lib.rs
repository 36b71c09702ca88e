pub mod aggregator;
pub mod article;
pub mod config;
pub mod report;
pub mod warehouse;

pub use article::{Article, SharedArticle};
pub use report::WarehouseSummary;
pub use warehouse::{AVERAGE_SENTINEL, Warehouse};
