// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Column (`x`) and row (`y`) of a grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Position {
	pub(crate) x: usize,
	pub(crate) y: usize,
}

impl Position {
	pub(crate) const fn new(x: usize, y: usize) -> Self {
		Position { x, y }
	}

	/// Returns `None` when either coordinate would drop below zero; the upper
	/// bound is the grid's business.
	pub(crate) fn offset(self, dx: isize, dy: isize) -> Option<Self> {
		Some(Position {
			x: self.x.checked_add_signed(dx)?,
			y: self.y.checked_add_signed(dy)?,
		})
	}
}

impl std::fmt::Display for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{},{}", self.x, self.y)
	}
}


#[test]
fn tests() {
	let origin = Position::new(0, 0);
	assert_eq!(origin.offset(1, 0), Some(Position::new(1, 0)));
	assert_eq!(origin.offset(0, -1), None);
	assert_eq!(origin.offset(-1, 0), None);
	assert_eq!(Position::new(3, 2).offset(-1, 1), Some(Position::new(2, 3)));
	assert_eq!(Position::new(3, 2).to_string(), "3,2");
}
