//! N-gram transition analysis library.
//!
//! This crate builds word-level transition tables from a single web page:
//! - Page retrieval and HTML-to-text extraction
//! - Unicode-aware word tokenization with caller-supplied case normalization
//! - Frequency-ranked transition tables (context tuple -> continuations)
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Transition table construction and the high-level analysis interface.
///
/// This module exposes the predictor facade and the transition table types
/// while keeping text acquisition internal.
pub mod model;

/// Word tokenization (Unicode-aware splitting, normalization hook).
pub mod tokenize;

/// Web text acquisition (HTTP fetch, markup stripping).
///
/// Not exposed
pub(crate) mod web;
