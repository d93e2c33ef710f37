// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Which cells a search starts from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub(crate) enum Seeding {
	/// Every cell at the lowest elevation, each at cost 1. Moves out of a
	/// lowest cell cost 1 again, and lowest cells jump the frontier queue.
	#[default]
	Lowest,
	/// Only the start marker, at cost 0; a plain step count from there.
	StartHint,
}

impl Seeding {
	pub(crate) fn seed_cost(self) -> usize {
		match self {
			Seeding::Lowest => 1,
			Seeding::StartHint => 0,
		}
	}
}


/// Input bytes the grid builder recognizes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Markers {
	pub(crate) start: u8,
	pub(crate) goal: u8,
	pub(crate) lowest: u8,
	pub(crate) highest: u8,
}

impl Default for Markers {
	fn default() -> Self {
		Markers { start: b'S', goal: b'E', lowest: b'a', highest: b'z' }
	}
}

impl Markers {
	/// Elevation for an input byte; the start marker sits at the bottom of the
	/// range, the goal marker at the top.
	pub(crate) fn elevation(&self, b: u8) -> Option<u8> {
		match b {
			_ if b == self.start => Some(0),
			_ if b == self.goal => Some(self.highest - self.lowest),
			_ if (self.lowest..=self.highest).contains(&b) => Some(b - self.lowest),
			_ => None,
		}
	}
}


#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SearchConfig {
	pub(crate) seeding: Seeding,
	/// Cap on visited cells; the grid's cell count when `None`.
	pub(crate) max_visits: Option<usize>,
}


#[test]
fn tests() {
	let markers = Markers::default();
	assert_eq!(markers.elevation(b'S'), Some(0));
	assert_eq!(markers.elevation(b'E'), Some(25));
	assert_eq!(markers.elevation(b'a'), Some(0));
	assert_eq!(markers.elevation(b'q'), Some(16));
	assert_eq!(markers.elevation(b'z'), Some(25));
	assert_eq!(markers.elevation(b'A'), None);
	assert_eq!(markers.elevation(b'\r'), None);

	let digits = Markers { start: b's', goal: b'g', lowest: b'0', highest: b'9' };
	assert_eq!(digits.elevation(b'g'), Some(9));
	assert_eq!(digits.elevation(b'4'), Some(4));

	assert_eq!(SearchConfig::default().seeding, Seeding::Lowest);
	assert_eq!(Seeding::Lowest.seed_cost(), 1);
	assert_eq!(Seeding::StartHint.seed_cost(), 0);
}
