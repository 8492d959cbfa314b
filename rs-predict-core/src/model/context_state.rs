/// Ranked continuations observed after a single context tuple.
///
/// A `ContextState` corresponds to a fixed context of `back` leading tokens
/// and stores every `ahead`-token continuation observed after it, ranked by
/// occurrence count.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Count continuation occurrences within one sorted window group
/// - Expose the ranked (continuation, count) pairs
/// - Report the total number of windows behind the ranking
///
/// ## Invariants
/// - All continuations belong to the same `context`
/// - Every continuation has the same length `ahead`
/// - Counts are strictly positive and non-increasing over `ranked`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextState {
	/// The context tuple this state belongs to (length `back`).
	context: Vec<String>,
	/// Continuation tuples ranked by descending occurrence count.
	/// Equal counts keep ascending lexicographic order of the continuation.
	/// Example: [ (["the"], 42), (["a"], 3) ]
	ranked: Vec<(Vec<String>, usize)>,
}

impl ContextState {
	/// Builds the ranked continuations for one group of sorted windows.
	///
	/// `group` must be non-empty and hold every window whose `back` leading
	/// tokens are equal, in the order produced by the full lexicographic
	/// window sort. Equal continuations are then contiguous and are counted
	/// as runs; the final stable sort by descending count keeps equal-count
	/// continuations in ascending lexicographic order.
	pub(crate) fn from_sorted_group(group: &[&[String]], back: usize) -> Self {
		let context = group[0][..back].to_vec();

		let mut ranked: Vec<(Vec<String>, usize)> = Vec::new();
		for window in group {
			let continuation = &window[back..];
			match ranked.last_mut() {
				Some((last, count)) if last.as_slice() == continuation => *count += 1,
				_ => ranked.push((continuation.to_vec(), 1)),
			}
		}

		// Stable sort: equal counts keep their lexicographic order
		ranked.sort_by(|a, b| b.1.cmp(&a.1));

		Self { context, ranked }
	}

	/// Returns the context tuple this state belongs to.
	pub fn context(&self) -> &[String] {
		&self.context
	}

	/// Returns the ranked `(continuation, count)` pairs, most frequent first.
	pub fn ranked(&self) -> &[(Vec<String>, usize)] {
		&self.ranked
	}

	/// Returns the total number of windows behind this ranking.
	///
	/// This is the sum of all continuation counts, i.e. the number of times
	/// the context occurred with a full continuation after it.
	pub fn total(&self) -> usize {
		self.ranked.iter().map(|(_, count)| count).sum()
	}

	/// Returns the most frequent continuation.
	///
	/// Returns `None` if the state has no continuations.
	pub fn top(&self) -> Option<&[String]> {
		self.ranked.first().map(|(continuation, _)| continuation.as_slice())
	}
}
