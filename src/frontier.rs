// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{cmp::Ordering, collections::BinaryHeap};


/// A popped frontier candidate: the cell's arena index and the cost it was
/// discovered at.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Entry {
	pub(crate) index: usize,
	pub(crate) cost: usize,
}

#[derive(PartialEq, Eq)]
struct Candidate {
	preferred: bool,
	seq: usize,
	entry: Entry,
}

impl PartialOrd for Candidate {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Candidate {
	fn cmp(&self, other: &Self) -> Ordering {
		Ordering::Equal
			.then_with(|| self.preferred.cmp(&other.preferred))
			.then_with(|| self.entry.cost.cmp(&other.entry.cost).reverse())
			.then_with(|| self.seq.cmp(&other.seq).reverse())
	}
}


/// Discovered cells awaiting expansion. Cells at the preferred elevation pop
/// first, then the cheapest; ties go to whichever was pushed first.
/// Duplicates are kept.
pub(crate) struct Frontier {
	heap: BinaryHeap<Candidate>,
	preferred: Option<u8>,
	pushed: usize,
}

impl Frontier {
	pub(crate) fn new(preferred: Option<u8>) -> Self {
		Frontier { heap: BinaryHeap::new(), preferred, pushed: 0 }
	}

	pub(crate) fn push(&mut self, index: usize, elevation: u8, cost: usize) {
		self.heap.push(Candidate {
			preferred: self.preferred == Some(elevation),
			seq: self.pushed,
			entry: Entry { index, cost },
		});
		self.pushed += 1;
	}

	pub(crate) fn pop_best(&mut self) -> Option<Entry> {
		self.heap.pop().map(|c| c.entry)
	}

	pub(crate) fn len(&self) -> usize { self.heap.len() }
}


#[test]
fn tests() {
	macro_rules! drain { ( $frontier:expr ) => {
		std::iter::from_fn(|| $frontier.pop_best()).map(|e| e.index).collect::<Vec<_>>()
	} }

	let mut frontier = Frontier::new(Some(0));
	assert_eq!(frontier.pop_best(), None);

	frontier.push(10, 3, 5);
	frontier.push(11, 2, 2);
	frontier.push(12, 0, 9);
	frontier.push(13, 4, 2);
	frontier.push(14, 0, 1);
	frontier.push(11, 2, 2);
	assert_eq!(frontier.len(), 6);
	assert_eq!(frontier.pop_best(), Some(Entry { index: 14, cost: 1 }));
	assert_eq!(drain!(frontier), [12, 11, 13, 11, 10]);
	assert_eq!(frontier.len(), 0);

	let mut frontier = Frontier::new(None);
	for (i, cost) in [4, 1, 3, 1, 0].into_iter().enumerate() { frontier.push(i, 0, cost) }
	assert_eq!(drain!(frontier), [4, 1, 3, 2, 0]);

	// Pops interleaved with pushes still honour the policy.
	let mut frontier = Frontier::new(Some(0));
	frontier.push(0, 1, 1);
	frontier.push(1, 1, 1);
	assert_eq!(frontier.pop_best().map(|e| e.index), Some(0));
	frontier.push(2, 0, 7);
	frontier.push(3, 1, 0);
	assert_eq!(drain!(frontier), [2, 3, 1]);
}
