//! Integration tests for WikiGuess
//!
//! These exercise the public API the way the game's request handlers use it:
//! pick the day's article, then score guesses against its title.

use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;
use wikiguess::{
    builtin_pool, check_guess, get_daily_article_selection, get_upcoming_articles, is_match,
    load_pool, normalize, similarity, ArticlePool, CheckGuessParams, GuessError, PoolError,
};

/// Every preview entry is a real article from the category it reports
#[test]
fn test_upcoming_fortnight_is_consistent() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let upcoming = get_upcoming_articles(start, 14);

    assert_eq!(upcoming.len(), 14);
    for article in &upcoming {
        assert!(!article.title.is_empty());
        assert!(
            builtin_pool().contains(&article.category, &article.title),
            "{} is not in {}",
            article.title,
            article.category
        );
    }

    assert_eq!(upcoming[0].date, "2025-01-01");
    assert_eq!(upcoming[0].title, "Mount Everest");
    assert_eq!(upcoming[13].date, "2025-01-14");
    assert_eq!(upcoming[13].title, "Acropolis of Athens");
    assert_eq!(upcoming[13].category, "Landmarks & Monuments");
}

/// Enumeration has no hidden state
#[test]
fn test_upcoming_is_restartable() {
    let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
    let first = get_upcoming_articles(start, 5);
    let second = get_upcoming_articles(start, 5);
    assert_eq!(first, second);

    // Crosses the leap day
    let dates: Vec<&str> = first.iter().map(|a| a.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]
    );
}

/// Date keys and calendar dates select the same article
#[test]
fn test_select_for_matches_select() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let selection = builtin_pool().select_for(date);
    assert_eq!(selection, get_daily_article_selection("2025-06-15"));
    assert_eq!(selection.title, "Berlin Wall");
}

/// A rebuilt pool with the same data selects identically
#[test]
fn test_selection_depends_only_on_pool_contents() {
    let rebuilt = ArticlePool::new(builtin_pool().categories().to_vec()).unwrap();
    for day in 0..60 {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap() + chrono::Days::new(day);
        assert_eq!(rebuilt.select_for(date), builtin_pool().select_for(date));
    }
}

/// Concurrent callers share the pool without coordination
#[test]
fn test_concurrent_selection_and_matching() {
    let expected = get_daily_article_selection("2026-10-18");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let selection = get_daily_article_selection("2026-10-18");
                let verdict = check_guess("apollo 11", &selection.title).unwrap();
                (selection, verdict.is_correct)
            })
        })
        .collect();

    for handle in handles {
        let (selection, correct) = handle.join().unwrap();
        assert_eq!(selection, expected);
        assert!(correct);
    }
}

/// Loading a custom pool from disk and playing a round against it
#[tokio::test]
async fn test_custom_pool_round() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "Bridges", "articles": ["Golden Gate Bridge", "Brooklyn Bridge"], "weight": 1}},
            {{"name": "Towers", "candidates": ["Eiffel Tower"], "weight": 1}}
        ]"#
    )
    .unwrap();

    let pool = load_pool(file.path()).await.unwrap();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for article in pool.upcoming(start, 10) {
        assert!(pool.contains(&article.category, &article.title));
        let verdict = check_guess(&article.title.to_uppercase(), &article.title).unwrap();
        assert!(verdict.is_correct);
        assert_eq!(verdict.similarity, 1.0);
    }
}

/// Malformed pool files are rejected at load time
#[tokio::test]
async fn test_malformed_pool_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[{{"name": "Empty", "articles": [], "weight": 5}}]"#).unwrap();

    let result = load_pool(file.path()).await;
    assert!(matches!(result, Err(PoolError::EmptyCategory { .. })));
}

/// Guess requests as they arrive over the wire
#[test]
fn test_guess_request_round() {
    let params: CheckGuessParams =
        serde_json::from_str(r#"{"guess": "The Great Wall, China!", "articleTitle": "Great Wall of China"}"#)
            .unwrap();
    let verdict = params.check().unwrap();

    assert_eq!(verdict.normalized_guess, "the great wall china");
    assert_eq!(verdict.normalized_title, "great wall of china");
    assert_eq!(verdict.similarity, 0.75);
    assert!(verdict.is_correct);

    let missing: CheckGuessParams = serde_json::from_str(r#"{"guess": "moon"}"#).unwrap();
    assert_eq!(
        missing.check(),
        Err(GuessError::InvalidInput {
            field: "articleTitle"
        })
    );
}

/// Table of guesses a player might type for real pool titles
#[test]
fn test_guess_table() {
    let cases = [
        ("albert einstein", "Albert Einstein", true),
        ("Einstein", "Albert Einstein", true),
        ("da vinci", "Leonardo da Vinci", true),
        ("Notre Dame de Paris", "Notre-Dame de Paris", false),
        ("notre-dame", "Notre-Dame de Paris", true),
        ("Apollo", "Apollo 11", true),
        ("world war 2", "World War II", false),
        ("moon", "Moon landing", true),
        ("Mars", "Jupiter", false),
        ("E = mc²", "Theory of relativity", false),
    ];

    for (guess, title, expected) in cases {
        assert_eq!(
            is_match(guess, title),
            expected,
            "{guess:?} vs {title:?} (similarity {})",
            similarity(guess, title)
        );
    }
}

/// Normalization is a fixed point over every title in the pool
#[test]
fn test_normalize_pool_titles() {
    for title in builtin_pool().all_articles() {
        let normalized = normalize(title);
        assert_eq!(normalize(&normalized), normalized);
        assert_eq!(similarity(title, &normalized), 1.0);
    }
}
