use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// A named item with a price in pence. Prices are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    name: String,
    price_in_pence: i64,
}

/// Handle used by warehouses, so several of them can hold the same article.
pub type SharedArticle = Rc<Article>;

impl Article {
    pub fn new(name: impl Into<String>, price_in_pence: i64) -> Self {
        Self {
            name: name.into(),
            price_in_pence,
        }
    }

    /// Convenience for building a shared handle directly.
    pub fn shared(name: impl Into<String>, price_in_pence: i64) -> SharedArticle {
        Rc::new(Self::new(name, price_in_pence))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_in_pence(&self) -> i64 {
        self.price_in_pence
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.name, self.price_in_pence)
    }
}
