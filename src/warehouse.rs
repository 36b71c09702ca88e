use std::fmt;
use std::rc::Rc;

use crate::aggregator::{average_price, max_by_price, total_price};
use crate::article::SharedArticle;

/// Value reported by callers that still expect a number when there is no
/// meaningful average.
pub const AVERAGE_SENTINEL: f64 = -1.0;

/// An ordered collection of shared articles. Duplicates are allowed and no
/// slot is ever empty.
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    articles: Vec<SharedArticle>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a warehouse holding the present entries of `articles`, in order.
    /// The slice is only read; the articles themselves are shared.
    pub fn from_articles(articles: &[Option<SharedArticle>]) -> Self {
        let mut warehouse = Self::new();
        warehouse.add_all(articles);
        warehouse
    }

    /// Stores `article` if there is one. Returns whether it was stored.
    pub fn add(&mut self, article: Option<SharedArticle>) -> bool {
        match article {
            Some(article) => {
                self.articles.push(article);
                true
            }
            None => {
                log::debug!("Ignoring absent article");
                false
            }
        }
    }

    /// Stores every present entry. Returns true if at least one was present.
    pub fn add_all(&mut self, articles: &[Option<SharedArticle>]) -> bool {
        let before = self.articles.len();
        self.articles.extend(articles.iter().flatten().cloned());
        let added = self.articles.len() - before;
        if added < articles.len() {
            log::debug!("Ignored {} absent article(s)", articles.len() - added);
        }
        added > 0
    }

    pub fn reset(&mut self) {
        self.articles.clear();
    }

    /// Drops, in place, every article priced below `min_price_in_pence`.
    pub fn keep_only_articles_with(&mut self, min_price_in_pence: i64) {
        let before = self.articles.len();
        self.articles
            .retain(|article| article.price_in_pence() >= min_price_in_pence);
        let removed = before - self.articles.len();
        if removed > 0 {
            log::debug!("Removed {} article(s) priced below {}", removed, min_price_in_pence);
        }
    }

    pub fn number_of_articles(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedArticle> {
        self.articles.iter()
    }

    pub fn total_price_in_pence(&self) -> i64 {
        total_price(self.iter().map(|article| article.price_in_pence()))
    }

    /// Mean price in pence, or `None` when the total is exactly 0.
    ///
    /// Note the check is on the total, not the count: articles whose prices
    /// cancel out report no average, just like an empty warehouse.
    pub fn average_price_in_pence(&self) -> Option<f64> {
        average_price(self.iter().map(|article| article.price_in_pence()))
    }

    pub fn average_price_in_pence_or_sentinel(&self) -> f64 {
        self.average_price_in_pence().unwrap_or(AVERAGE_SENTINEL)
    }

    /// One of the highest priced articles, or `None` for an empty warehouse.
    pub fn most_expensive_article(&self) -> Option<&SharedArticle> {
        max_by_price(self.iter(), |article| article.price_in_pence())
    }

    /// Returns a new warehouse sharing exactly the articles priced at or above
    /// `min_price_in_pence`, in their current order. `self` is left untouched.
    pub fn make_new_warehouse_with(&self, min_price_in_pence: i64) -> Warehouse {
        self.iter()
            .filter(|article| article.price_in_pence() >= min_price_in_pence)
            .cloned()
            .collect()
    }

    /// Picks one of the present warehouses with the greatest total price.
    ///
    /// Absent entries are skipped. Returns `None` when there is nothing to
    /// pick from, including a slice made up only of absent entries.
    pub fn most_valued_warehouse<'a>(warehouses: &[Option<&'a Warehouse>]) -> Option<&'a Warehouse> {
        max_by_price(warehouses.iter().flatten().copied(), |warehouse| {
            warehouse.total_price_in_pence()
        })
    }

    /// True when `article` is this very handle, not merely an equal value.
    pub fn contains(&self, article: &SharedArticle) -> bool {
        self.iter().any(|stored| Rc::ptr_eq(stored, article))
    }
}

impl FromIterator<SharedArticle> for Warehouse {
    fn from_iter<I: IntoIterator<Item = SharedArticle>>(iter: I) -> Self {
        Self {
            articles: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, article) in self.articles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", article)?;
        }
        write!(f, "]")
    }
}
