//! Free-text guess matching
//!
//! Guesses and titles are normalized the same way, then scored with a
//! three-tier rule where the first tier that applies wins:
//! exact match, substring match, then word overlap.

use crate::constants::{
    EXACT_MATCH_SCORE, MATCH_THRESHOLD, MIN_OVERLAP_WORD_LEN, SUBSTRING_MATCH_SCORE,
};
use crate::models::{CheckGuessParams, GuessVerdict};
use std::collections::HashSet;
use thiserror::Error;

/// Errors returned when a guess request cannot be scored
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GuessError {
    #[error("Invalid input: {field} is missing or empty")]
    InvalidInput { field: &'static str },
}

/// Canonical comparison form of `text`
///
/// Lowercases, drops everything except ASCII letters, digits, underscores and
/// whitespace, then collapses whitespace runs to single spaces and trims.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Similarity of two raw strings, in [0, 1]
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(&normalize(a), &normalize(b))
}

fn normalized_similarity(a: &str, b: &str) -> f64 {
    // Text with no word characters never matches anything
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a == b {
        return EXACT_MATCH_SCORE;
    }

    if a.contains(b) || b.contains(a) {
        return SUBSTRING_MATCH_SCORE;
    }

    let words_a: Vec<&str> = a.split(' ').collect();
    let words_b: Vec<&str> = b.split(' ').collect();

    let set_b: HashSet<&str> = words_b.iter().copied().collect();
    let shared = words_a
        .iter()
        .copied()
        .filter(|w| w.len() >= MIN_OVERLAP_WORD_LEN && set_b.contains(w))
        .collect::<HashSet<_>>()
        .len();

    let max_words = words_a.len().max(words_b.len());
    if max_words == 0 {
        return 0.0;
    }
    shared as f64 / max_words as f64
}

/// Whether `score` reaches `threshold`
pub fn meets_threshold(score: f64, threshold: f64) -> bool {
    score >= threshold
}

/// Whether `guess` names `title` under the default threshold
pub fn is_match(guess: &str, title: &str) -> bool {
    is_match_with_threshold(guess, title, MATCH_THRESHOLD)
}

pub fn is_match_with_threshold(guess: &str, title: &str, threshold: f64) -> bool {
    meets_threshold(similarity(guess, title), threshold)
}

/// Score a guess against the target title
///
/// Rejects empty or whitespace-only inputs; any other content is scored,
/// including text that normalizes to nothing.
pub fn check_guess(guess: &str, title: &str) -> Result<GuessVerdict, GuessError> {
    check_guess_with_threshold(guess, title, MATCH_THRESHOLD)
}

pub fn check_guess_with_threshold(
    guess: &str,
    title: &str,
    threshold: f64,
) -> Result<GuessVerdict, GuessError> {
    if guess.trim().is_empty() {
        return Err(GuessError::InvalidInput { field: "guess" });
    }
    if title.trim().is_empty() {
        return Err(GuessError::InvalidInput {
            field: "articleTitle",
        });
    }

    let normalized_guess = normalize(guess);
    let normalized_title = normalize(title);
    let similarity = normalized_similarity(&normalized_guess, &normalized_title);
    let is_correct = meets_threshold(similarity, threshold);

    tracing::debug!(
        "Guess {:?} vs {:?}: similarity {:.3}, correct {}",
        normalized_guess,
        normalized_title,
        similarity,
        is_correct
    );

    Ok(GuessVerdict {
        is_correct,
        similarity,
        normalized_guess,
        normalized_title,
    })
}

impl CheckGuessParams {
    /// Score this request, rejecting missing fields
    pub fn check(&self) -> Result<GuessVerdict, GuessError> {
        let guess = self
            .guess
            .as_deref()
            .ok_or(GuessError::InvalidInput { field: "guess" })?;
        let title = self.article_title.as_deref().ok_or(GuessError::InvalidInput {
            field: "articleTitle",
        })?;
        check_guess(guess, title)
    }
}
