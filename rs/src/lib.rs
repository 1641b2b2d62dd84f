//! WikiGuess: daily Wikipedia guessing game core
//!
//! Picks one article per calendar day from a weighted category pool and
//! decides whether a player's free-text guess names that article.
//!
//! Both halves are pure functions over immutable data, so they can be called
//! from any number of threads without coordination.

pub mod constants;
pub mod matcher;
pub mod models;
pub mod pool;
pub mod selector;

// Re-export main types for convenience
pub use matcher::{check_guess, is_match, normalize, similarity, GuessError};
pub use models::{
    ArticlePool, Category, CheckGuessParams, DailySelection, GuessVerdict, PoolError,
    UpcomingArticle,
};
pub use pool::{builtin_pool, load_pool};
pub use selector::{get_daily_article_selection, get_upcoming_articles};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
