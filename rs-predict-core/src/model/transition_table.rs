use std::collections::HashMap;

use log::debug;

use super::context_state::ContextState;

/// Frequency-ranked n-gram transition table over a token sequence.
///
/// The `TransitionTable` maps every context of `back` consecutive tokens
/// observed in the input to the ranked list of `ahead`-token continuations
/// that followed it.
///
/// # Responsibilities
/// - Slide a window of `back + ahead` tokens over the input sequence
/// - Sort and group the windows to count continuation occurrences
/// - Rank continuations by descending count with a reproducible tie-break
/// - Expose read-only lookups over the finished table
///
/// # Invariants
/// - `back` and `ahead` are always >= 1
/// - Every key has exactly `back` tokens; every continuation in every value
///   has exactly `ahead` tokens
/// - Every (context, continuation) pair, concatenated in order, equals a
///   contiguous window of `back + ahead` tokens that occurred in the input
/// - Ranked lists are sorted by non-increasing count; equal counts keep
///   ascending lexicographic order of the continuation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
	/// Number of leading tokens forming the lookup context
	back: usize,

	/// Number of trailing tokens forming the predicted continuation
	ahead: usize,

	/// Mapping from a context tuple (length `back`) to its ranked continuations
	states: HashMap<Vec<String>, ContextState>,
}

impl TransitionTable {
	/// Builds the transition table for `tokens`.
	///
	/// Every contiguous window of `back + ahead` tokens contributes one
	/// observation: its `back` leading tokens are the context, its `ahead`
	/// trailing tokens the continuation. The full window collection is
	/// sorted lexicographically over its entire content, grouped by context,
	/// and each group's continuations are counted and ranked by descending
	/// count. Because the sort covers whole windows and the count sort is
	/// stable, equal-count continuations always rank in ascending
	/// lexicographic order, making the table fully deterministic.
	///
	/// # Parameters
	/// - `tokens`: The input token sequence, already normalized.
	/// - `back`: Context length in tokens (>= 1).
	/// - `ahead`: Continuation length in tokens (>= 1).
	///
	/// # Errors
	/// Returns an error if `back` or `ahead` is zero.
	///
	/// # Notes
	/// - An input shorter than `back + ahead` tokens yields an empty table,
	///   not an error.
	pub fn build(tokens: &[String], back: usize, ahead: usize) -> Result<Self, String> {
		if back < 1 {
			return Err("back must be >= 1".to_owned());
		}
		if ahead < 1 {
			return Err("ahead must be >= 1".to_owned());
		}

		let size = back + ahead;
		if tokens.len() < size {
			// Input too short, no windows to count
			return Ok(Self { back, ahead, states: HashMap::new() });
		}

		// Overlapping windows, sorted over their whole content
		let mut windows: Vec<&[String]> = tokens.windows(size).collect();
		windows.sort();

		// Windows sharing a context are contiguous after the sort
		let mut states = HashMap::new();
		for group in windows.chunk_by(|a, b| a[..back] == b[..back]) {
			let state = ContextState::from_sorted_group(group, back);
			states.insert(state.context().to_vec(), state);
		}

		debug!("ranked {} contexts from {} windows", states.len(), windows.len());

		Ok(Self { back, ahead, states })
	}

	/// Returns the context length this table was built with.
	pub fn back(&self) -> usize {
		self.back
	}

	/// Returns the continuation length this table was built with.
	pub fn ahead(&self) -> usize {
		self.ahead
	}

	/// Returns the number of distinct contexts in the table.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Returns `true` if the table holds no contexts at all.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Looks up the ranked continuations observed after `context`.
	///
	/// Returns `None` if the context never occurred in the input.
	pub fn get(&self, context: &[String]) -> Option<&ContextState> {
		self.states.get(context)
	}

	/// Iterates over every `(context, state)` pair in the table.
	///
	/// Iteration order is unspecified; the ranking inside each state is not.
	pub fn iter(&self) -> impl Iterator<Item = (&[String], &ContextState)> {
		self.states.iter().map(|(context, state)| (context.as_slice(), state))
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn tokens(words: &[&str]) -> Vec<String> {
		words.iter().map(|w| w.to_string()).collect()
	}

	#[test]
	fn rejects_zero_window_sizes() {
		let input = tokens(&["a", "b", "c"]);
		assert!(TransitionTable::build(&input, 0, 1).is_err());
		assert!(TransitionTable::build(&input, 1, 0).is_err());
	}

	#[test]
	fn short_input_yields_empty_table() {
		let table = TransitionTable::build(&[], 2, 1).unwrap();
		assert!(table.is_empty());
		assert_eq!(table.len(), 0);

		let table = TransitionTable::build(&tokens(&["a", "b"]), 2, 1).unwrap();
		assert!(table.is_empty());
	}

	#[test]
	fn single_window_builds_single_entry() {
		let table = TransitionTable::build(&tokens(&["a", "b", "c"]), 2, 1).unwrap();
		assert_eq!(table.len(), 1);

		let state = table.get(&tokens(&["a", "b"])).unwrap();
		assert_eq!(state.ranked(), vec![(vec!["c".to_string()], 1)]);
	}

	#[test]
	fn ranks_continuations_by_descending_count() {
		// Windows: (a,b),(b,a),(a,b),(b,a),(a,c)
		let table = TransitionTable::build(&tokens(&["a", "b", "a", "b", "a", "c"]), 1, 1).unwrap();
		assert_eq!(table.len(), 2);

		let state = table.get(&tokens(&["a"])).unwrap();
		assert_eq!(
			state.ranked(),
			vec![(vec!["b".to_string()], 2), (vec!["c".to_string()], 1)]
		);

		let state = table.get(&tokens(&["b"])).unwrap();
		assert_eq!(state.ranked(), vec![(vec!["a".to_string()], 2)]);
	}

	#[test]
	fn breaks_count_ties_lexicographically() {
		// Windows: (a,b,c),(b,c,a),(c,a,b),(a,b,d)
		let table = TransitionTable::build(&tokens(&["a", "b", "c", "a", "b", "d"]), 2, 1).unwrap();
		assert_eq!(table.len(), 3);

		let state = table.get(&tokens(&["a", "b"])).unwrap();
		assert_eq!(
			state.ranked(),
			vec![(vec!["c".to_string()], 1), (vec!["d".to_string()], 1)]
		);

		let state = table.get(&tokens(&["b", "c"])).unwrap();
		assert_eq!(state.ranked(), vec![(vec!["a".to_string()], 1)]);

		let state = table.get(&tokens(&["c", "a"])).unwrap();
		assert_eq!(state.ranked(), vec![(vec!["b".to_string()], 1)]);
	}

	#[test]
	fn continuation_length_follows_ahead() {
		let table = TransitionTable::build(&tokens(&["a", "b", "c", "a", "b", "c"]), 1, 2).unwrap();

		let state = table.get(&tokens(&["a"])).unwrap();
		assert_eq!(
			state.ranked(),
			vec![(vec!["b".to_string(), "c".to_string()], 2)]
		);
	}

	#[test]
	fn identical_inputs_build_identical_tables() {
		let input = tokens(&["the", "cat", "sat", "on", "the", "mat", "the", "cat"]);
		let first = TransitionTable::build(&input, 2, 1).unwrap();
		let second = TransitionTable::build(&input, 2, 1).unwrap();
		assert_eq!(first, second);
	}

	proptest! {
		#[test]
		fn structural_invariants(
			input in proptest::collection::vec("[a-e]", 0..32),
			back in 1..4usize,
			ahead in 1..4usize,
		) {
			let table = TransitionTable::build(&input, back, ahead).unwrap();
			let size = back + ahead;

			if input.len() < size {
				prop_assert!(table.is_empty());
			}

			let mut total = 0;
			for (context, state) in table.iter() {
				prop_assert_eq!(context.len(), back);
				prop_assert_eq!(context, state.context());

				let mut previous = usize::MAX;
				for (continuation, count) in state.ranked() {
					prop_assert_eq!(continuation.len(), ahead);
					prop_assert!(*count >= 1);
					prop_assert!(*count <= previous);
					previous = *count;
				}

				// Counts in a group account for every window with this context
				let expected = input
					.windows(size)
					.filter(|window| &window[..back] == context)
					.count();
				prop_assert_eq!(state.total(), expected);
				total += state.total();
			}

			// No window is lost or duplicated across groups
			prop_assert_eq!(total, input.windows(size).count());
		}
	}
}
