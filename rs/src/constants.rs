//! Constants for daily selection and guess matching
//!
//! The hashing constants must not change: they determine which article every
//! player has seen on every past day.

// Guess matching

/// Minimum similarity for a guess to count as correct.
pub const MATCH_THRESHOLD: f64 = 0.7;

/// Score for normalized texts that are identical.
pub const EXACT_MATCH_SCORE: f64 = 1.0;

/// Score when one normalized text contains the other.
pub const SUBSTRING_MATCH_SCORE: f64 = 0.8;

/// Words shorter than this are ignored when counting word overlap.
pub const MIN_OVERLAP_WORD_LEN: usize = 3;

// Daily selection

/// Keeps both date hashes inside the non-negative 31-bit range.
pub const HASH_MASK: u32 = 0x7FFF_FFFF;

/// Left shift for the first hash recurrence, `(h << 5) - h`, i.e. `h * 31`.
pub const HASH1_SHIFT: u32 = 5;

/// Left shift for the second hash recurrence, `(h << 3) + h`, i.e. `h * 9`.
pub const HASH2_SHIFT: u32 = 3;

/// Calendar date format used as the selection key.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of days shown by the upcoming-articles preview.
pub const DEFAULT_PREVIEW_DAYS: u32 = 14;
