use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::article::Article;
use crate::warehouse::Warehouse;

#[derive(Debug, Deserialize, Clone)]
pub struct WarehouseConfig {
    pub label: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl WarehouseConfig {
    /// Builds a warehouse whose articles are freshly shared handles.
    pub fn build(&self) -> Warehouse {
        let articles: Vec<_> = self
            .articles
            .iter()
            .map(|article| Some(Article::shared(article.name(), article.price_in_pence())))
            .collect();
        Warehouse::from_articles(&articles)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneralSettings {
    pub min_price_in_pence: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub general: GeneralSettings,
    #[serde(default)]
    pub warehouses: Vec<WarehouseConfig>,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Reads `<dir>/default.toml`, overridden by `<dir>/local.toml` if present.
    pub fn load_from(dir: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(&format!("{}/default", dir)).required(true))
            .add_source(File::with_name(&format!("{}/local", dir)).required(false));

        builder.build()?.try_deserialize()
    }
}
