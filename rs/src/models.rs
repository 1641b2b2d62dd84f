//! Core data models for the daily guessing game
//!
//! JSON field names match what the game's HTTP endpoints have always returned,
//! so clients can consume these types directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building or loading an article pool
///
/// These are configuration-time failures. A pool that made it through
/// [`ArticlePool::new`] never fails at selection time.
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Article pool has no categories")]
    EmptyPool,

    #[error("Category {name:?} has no articles")]
    EmptyCategory { name: String },

    #[error("Category {name:?} has zero weight")]
    ZeroWeight { name: String },

    #[error("Category {category:?} lists {title:?} more than once")]
    DuplicateArticle { category: String, title: String },

    #[error("Category {name:?} appears more than once")]
    DuplicateCategory { name: String },

    #[error("Total category weight overflows")]
    WeightOverflow,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A named group of candidate articles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Display name, e.g. "Science & Technology"
    pub name: String,

    /// Article titles in selection order
    #[serde(alias = "candidates")]
    pub articles: Vec<String>,

    /// Relative selection weight; higher means picked more often
    pub weight: u32,
}

impl Category {
    pub fn new<S: Into<String>>(name: S, articles: &[&str], weight: u32) -> Self {
        Self {
            name: name.into(),
            articles: articles.iter().map(|a| a.to_string()).collect(),
            weight,
        }
    }

    /// Whether `title` is one of this category's articles
    pub fn contains(&self, title: &str) -> bool {
        self.articles.iter().any(|a| a == title)
    }
}

/// Validated, read-only pool of weighted categories
///
/// Invariants: at least one category, every category has at least one
/// article and a positive weight, and the total weight fits in a `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePool {
    categories: Vec<Category>,
    total_weight: u32,
}

impl ArticlePool {
    /// Validate `categories` and build a pool from them
    pub fn new(categories: Vec<Category>) -> Result<Self, PoolError> {
        if categories.is_empty() {
            return Err(PoolError::EmptyPool);
        }

        let mut names = HashSet::new();
        let mut total_weight: u32 = 0;

        for category in &categories {
            if !names.insert(category.name.as_str()) {
                return Err(PoolError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }
            if category.articles.is_empty() {
                return Err(PoolError::EmptyCategory {
                    name: category.name.clone(),
                });
            }
            if category.weight == 0 {
                return Err(PoolError::ZeroWeight {
                    name: category.name.clone(),
                });
            }

            let mut seen = HashSet::new();
            for title in &category.articles {
                if !seen.insert(title.as_str()) {
                    return Err(PoolError::DuplicateArticle {
                        category: category.name.clone(),
                        title: title.clone(),
                    });
                }
            }

            total_weight = total_weight
                .checked_add(category.weight)
                .ok_or(PoolError::WeightOverflow)?;
        }

        Ok(Self {
            categories,
            total_weight,
        })
    }

    /// Build a pool from compiled-in data that is checked by unit tests
    pub(crate) fn from_trusted(categories: Vec<Category>) -> Self {
        let total_weight = categories.iter().map(|c| c.weight).sum();
        Self {
            categories,
            total_weight,
        }
    }

    /// Categories in their fixed selection order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Sum of all category weights (always > 0)
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Whether `title` belongs to the category called `category`
    pub fn contains(&self, category: &str, title: &str) -> bool {
        self.category(category).is_some_and(|c| c.contains(title))
    }

    /// Every article title, flattened in pool order
    pub fn all_articles(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.articles.iter().map(String::as_str))
            .collect()
    }
}

/// The article chosen for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailySelection {
    pub title: String,
    pub category: String,
}

/// A daily selection together with the date it belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpcomingArticle {
    /// ISO calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub title: String,
    pub category: String,
}

// Guess checking request/response

/// Parameters for checking a guess against the day's article
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckGuessParams {
    /// The player's free-text guess
    #[serde(default)]
    pub guess: Option<String>,
    /// Title of the article being guessed
    #[serde(default)]
    pub article_title: Option<String>,
}

/// Verdict for a single guess
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuessVerdict {
    /// Whether the similarity reached the match threshold
    pub is_correct: bool,
    /// Similarity score in [0, 1]
    pub similarity: f64,
    pub normalized_guess: String,
    pub normalized_title: String,
}
