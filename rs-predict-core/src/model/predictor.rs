use std::error::Error;

use log::info;

use super::transition_table::TransitionTable;
use crate::tokenize::Tokenizer;
use crate::web::WebTextSource;

/// High-level interface for building transition tables from web pages.
///
/// # Responsibilities
/// - Fetch a page and strip its markup down to plain text
/// - Tokenize normalized text into word, number and symbol tokens
/// - Build the frequency-ranked transition table over the token sequence
///
/// # Notes
/// - The pipeline is strictly sequential: the fetch completes before
///   tokenization begins, tokenization completes before the table is built.
/// - The HTTP client and the compiled word pattern are built once and
///   reused across calls.
#[derive(Clone, Debug)]
pub struct Predictor {
	source: WebTextSource,
	tokenizer: Tokenizer,
}

impl Predictor {
	/// Creates a predictor with a fresh HTTP client and compiled tokenizer.
	///
	/// # Errors
	/// Returns an error if the HTTP client cannot be constructed.
	pub fn new() -> Result<Self, Box<dyn Error>> {
		Ok(Self {
			source: WebTextSource::new()?,
			tokenizer: Tokenizer::new(),
		})
	}

	/// Fetches `url` and returns the page's visible text, markup stripped.
	///
	/// # Errors
	/// Propagates network, HTTP status and body decoding failures unchanged;
	/// there is no retry and no caching.
	pub fn fetch_text(&self, url: &str) -> Result<String, Box<dyn Error>> {
		self.source.fetch_text(url)
	}

	/// Builds the transition table for `raw` with lowercase normalization.
	///
	/// Equivalent to `analyze_with(raw, back, ahead, str::to_lowercase)`.
	///
	/// # Errors
	/// Returns an error if `back` or `ahead` is zero.
	pub fn analyze(&self, raw: &str, back: usize, ahead: usize) -> Result<TransitionTable, String> {
		self.analyze_with(raw, back, ahead, str::to_lowercase)
	}

	/// Builds the transition table for `raw` with a caller-supplied
	/// normalization function.
	///
	/// # Parameters
	/// - `raw`: The text to analyze, markup already stripped.
	/// - `back`: Context length in tokens (>= 1).
	/// - `ahead`: Continuation length in tokens (>= 1).
	/// - `normalize`: Applied to the whole text before tokenization, so
	///   case variants collapse to a single token identity.
	///
	/// # Errors
	/// Returns an error if `back` or `ahead` is zero. A text shorter than
	/// `back + ahead` tokens yields an empty table, not an error.
	pub fn analyze_with<N>(
		&self,
		raw: &str,
		back: usize,
		ahead: usize,
		normalize: N,
	) -> Result<TransitionTable, String>
	where
		N: Fn(&str) -> String,
	{
		let tokens = self.tokenizer.tokenize(raw, normalize);
		info!("generating transitions...");
		TransitionTable::build(&tokens, back, ahead)
	}
}
