use regex::Regex;

/// Word pattern: letter runs with internal apostrophes, digit runs,
/// or runs of other non-whitespace symbols.
const WORD_PATTERN: &str = r"\p{L}+(?:['’]\p{L}+)*|\p{N}+|[^\s\p{L}\p{N}]+";

/// Unicode-aware word tokenizer.
///
/// Splits normalized text into word, number and symbol tokens. The exact
/// split policy is an implementation detail; callers may only rely on the
/// result being deterministic for identical input.
#[derive(Clone, Debug)]
pub struct Tokenizer {
	word_re: Regex,
}

impl Tokenizer {
	/// Creates a tokenizer with the compiled word pattern.
	pub fn new() -> Self {
		// Should not panic, the pattern is constant
		Self { word_re: Regex::new(WORD_PATTERN).expect("word pattern must compile") }
	}

	/// Splits `raw` into an ordered sequence of tokens.
	///
	/// `normalize` is applied to the whole text before splitting, so case
	/// variants collapse to a single token identity.
	pub fn tokenize<N>(&self, raw: &str, normalize: N) -> Vec<String>
	where
		N: Fn(&str) -> String,
	{
		let text = normalize(raw);
		self.word_re.find_iter(&text).map(|m| m.as_str().to_owned()).collect()
	}
}

impl Default for Tokenizer {
	fn default() -> Self {
		Self::new()
	}
}
