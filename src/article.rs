// src/article.rs
use crate::category::Category;
use serde::{Deserialize, Serialize};

/// One sampled article: a category plus its byline in publication order.
///
/// Byline order carries no weight during graph construction; names are
/// opaque, case-sensitive identifiers and are never split or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub category: Category,
    pub authors: Vec<String>,
}

impl Article {
    #[must_use]
    pub fn new(category: Category, authors: Vec<String>) -> Self {
        Self { category, authors }
    }
}
