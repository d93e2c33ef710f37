// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::position::Position;


#[cfg_attr(test, derive(PartialEq, Eq))]
#[derive(Clone, Debug)]
pub(crate) struct Cell {
	pub(crate) position: Position,
	pub(crate) elevation: u8,
	/// Moves from the nearest source; assigned once, when first discovered.
	pub(crate) cost: Option<usize>,
	/// Set once the cell's neighbors have been expanded.
	pub(crate) visited: bool,
}

/// Row-major arena of [`Cell`]s; every position in `[0, width) × [0, height)`
/// maps to exactly one of them.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
	cells: Vec<Cell>,
	width: usize,
}

impl Grid {
	/// Callers guarantee `elevations.len()` is a non-zero multiple of `width`.
	pub(crate) fn new(width: usize, elevations: impl IntoIterator<Item = u8>) -> Self {
		let cells = elevations.into_iter()
			.enumerate()
			.map(|(i, elevation)| Cell {
				position: Position::new(i % width, i / width),
				elevation,
				cost: None,
				visited: false,
			})
			.collect::<Vec<_>>();
		debug_assert!(width > 0 && !cells.is_empty() && cells.len() % width == 0);
		Grid { cells, width }
	}

	pub(crate) fn width(&self) -> usize { self.width }

	pub(crate) fn height(&self) -> usize { self.cells.len() / self.width }

	pub(crate) fn len(&self) -> usize { self.cells.len() }

	pub(crate) fn cells(&self) -> &[Cell] { &self.cells }

	pub(crate) fn index(&self, position: Position) -> Option<usize> {
		(position.x < self.width && position.y < self.height())
			.then(|| position.y * self.width + position.x)
	}

	pub(crate) fn get(&self, position: Position) -> Option<&Cell> {
		self.index(position).map(|i| &self.cells[i])
	}

	/// Panics if `index` did not come from [`Grid::index`].
	pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Cell {
		&mut self.cells[index]
	}

	pub(crate) fn min_elevation(&self) -> Option<u8> {
		self.cells.iter().map(|c| c.elevation).min()
	}

	/// In-bounds orthogonal neighbors of `position`: above, right, below, left.
	pub(crate) fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> {
		let (width, height) = (self.width, self.height());
		[(0, -1), (1, 0), (0, 1), (-1, 0)].into_iter()
			.filter_map(move |(dx, dy)| position.offset(dx, dy))
			.filter(move |p| p.x < width && p.y < height)
	}

	/// Renders search state with `current` marked; see [`Render`].
	pub(crate) fn render(&self, current: Position) -> Render<'_> {
		Render { grid: self, current }
	}
}


/// Textual snapshot of a search: `X` is the current cell, `.` a visited
/// cell, a digit the last digit of a discovered cell's cost, and a letter
/// the elevation of a cell not yet reached.
pub(crate) struct Render<'g> {
	grid: &'g Grid,
	current: Position,
}

impl std::fmt::Display for Render<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use itertools::Itertools as _;
		let symbol = |cell: &Cell| match cell {
			Cell { position, .. } if *position == self.current => 'X',
			Cell { visited: true, .. } => '.',
			Cell { cost: Some(cost), .. } => char::from(b'0' + (cost % 10) as u8),
			Cell { elevation, .. } => char::from(b'a'.saturating_add(*elevation)),
		};
		f.write_str(&self.grid.cells.chunks(self.grid.width)
			.map(|row| row.iter().map(symbol).collect::<String>())
			.join("\n"))
	}
}


#[test]
fn tests() {
	use itertools::{iproduct, Itertools as _};

	let mut grid = Grid::new(3, [0, 1, 2, 3, 4, 5]);
	assert_eq!((grid.width(), grid.height(), grid.len()), (3, 2, 6));
	assert_eq!(grid.min_elevation(), Some(0));

	for (y, x) in iproduct!(0..2, 0..3) {
		let cell = grid.get(Position::new(x, y)).unwrap();
		assert_eq!(cell.position, Position::new(x, y));
		assert_eq!(cell.elevation as usize, y * 3 + x);
		assert_eq!((cell.cost, cell.visited), (None, false));
	}
	assert!(grid.get(Position::new(3, 0)).is_none());
	assert!(grid.get(Position::new(0, 2)).is_none());
	assert!(grid.get(Position::new(usize::MAX, 0)).is_none());
	assert_eq!(grid.index(Position::new(2, 1)), Some(5));

	let p = Position::new;
	assert_eq!(grid.neighbors(p(0, 0)).collect_vec(), [p(1, 0), p(0, 1)]);
	assert_eq!(grid.neighbors(p(1, 0)).collect_vec(), [p(2, 0), p(1, 1), p(0, 0)]);
	assert_eq!(grid.neighbors(p(2, 1)).collect_vec(), [p(2, 0), p(1, 1)]);
	assert_eq!(Grid::new(3, [0; 9]).neighbors(p(1, 1)).collect_vec(),
		[p(1, 0), p(2, 1), p(1, 2), p(0, 1)]);
	assert_eq!(Grid::new(1, [0]).neighbors(p(0, 0)).count(), 0);

	grid.cell_mut(1).cost = Some(12);
	let cell = grid.cell_mut(2);
	(cell.cost, cell.visited) = (Some(3), true);
	assert_eq!(grid.render(p(0, 1)).to_string(), "a2.\nXef");
}
