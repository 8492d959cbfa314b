//! Top-level module for the transition analysis system.
//!
//! This crate provides a word-level transition statistics builder, including:
//! - Frequency-ranked transition tables (`TransitionTable`)
//! - Per-context ranked continuations (`ContextState`)
//! - A high-level fetch-and-analyze interface (`Predictor`)

/// High-level interface tying acquisition, tokenization and table
/// construction together.
///
/// Exposes page fetching and the analysis entry points with configurable
/// case normalization.
pub mod predictor;

/// Frequency-ranked n-gram transition table.
///
/// Handles window generation, lexicographic sorting, grouping by context,
/// and read-only lookups over the finished table.
pub mod transition_table;

/// Ranked continuations observed after a single context tuple.
///
/// Counts continuation occurrences within one sorted window group and
/// ranks them by descending count.
pub mod context_state;
