//! Deterministic daily article selection
//!
//! Every player sees the same article on the same calendar day without the
//! choice ever being stored: it is a pure function of the date string and the
//! pool. Two rolling hashes over the date's UTF-16 code units drive the
//! choice, one picking a category by weight and one picking an article inside
//! that category.

use crate::constants::{DATE_FORMAT, HASH1_SHIFT, HASH2_SHIFT, HASH_MASK};
use crate::models::{ArticlePool, Category, DailySelection, UpcomingArticle};
use crate::pool::builtin_pool;
use chrono::{NaiveDate, Utc};

/// Compute the two selection hashes for `date`
///
/// Arithmetic wraps at 32 bits before masking to 31 bits, which reproduces
/// the historical selections bit for bit.
pub fn date_hashes(date: &str) -> (u32, u32) {
    date.encode_utf16().fold((0u32, 0u32), |(h1, h2), unit| {
        let unit = u32::from(unit);
        let h1 = (h1 << HASH1_SHIFT).wrapping_sub(h1).wrapping_add(unit) & HASH_MASK;
        let h2 = (h2 << HASH2_SHIFT).wrapping_add(h2).wrapping_add(unit) & HASH_MASK;
        (h1, h2)
    })
}

/// Format a calendar date as a selection key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's UTC calendar date
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl ArticlePool {
    /// Pick a category with probability proportional to its weight
    pub fn weighted_category(&self, seed: u32) -> &Category {
        let categories = self.categories();
        let mut remaining = i64::from(seed % self.total_weight());

        for category in categories {
            remaining -= i64::from(category.weight);
            if remaining < 0 {
                return category;
            }
        }

        // Unreachable while total_weight > 0
        &categories[0]
    }

    /// Select the article for `date`
    ///
    /// `date` is normally `YYYY-MM-DD`, but any string is accepted. The empty
    /// string hashes to zero and lands on the first article of the first
    /// category.
    pub fn select(&self, date: &str) -> DailySelection {
        let (hash1, hash2) = date_hashes(date);
        let category = self.weighted_category(hash1);
        let index = hash2 as usize % category.articles.len();
        let title = &category.articles[index];

        tracing::debug!(
            "Selected {:?} from {:?} for {:?} (hashes {}, {})",
            title,
            category.name,
            date,
            hash1,
            hash2
        );

        DailySelection {
            title: title.clone(),
            category: category.name.clone(),
        }
    }

    /// Select the article for a calendar date
    pub fn select_for(&self, date: NaiveDate) -> DailySelection {
        self.select(&date_key(date))
    }

    /// Select the article for a calendar date, keeping the date alongside
    pub fn dated(&self, date: NaiveDate) -> UpcomingArticle {
        let date = date_key(date);
        let DailySelection { title, category } = self.select(&date);
        UpcomingArticle {
            date,
            title,
            category,
        }
    }

    /// Selections for `days` consecutive calendar days starting at `start`
    pub fn upcoming(&self, start: NaiveDate, days: u32) -> Vec<UpcomingArticle> {
        start
            .iter_days()
            .take(days as usize)
            .map(|date| self.dated(date))
            .collect()
    }
}

/// Select the article for `date` from the built-in pool
pub fn get_daily_article_selection(date: &str) -> DailySelection {
    builtin_pool().select(date)
}

/// Upcoming selections from the built-in pool
pub fn get_upcoming_articles(start: NaiveDate, days: u32) -> Vec<UpcomingArticle> {
    builtin_pool().upcoming(start, days)
}
