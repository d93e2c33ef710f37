// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{config::{Markers, Seeding}, grid::Grid, position::Position};


/// A parsed elevation map plus the positions its start and goal markers
/// occupied.
pub(crate) struct Heightmap {
	pub(crate) grid: Grid,
	pub(crate) start: Position,
	pub(crate) goal: Position,
}

impl Heightmap {
	/// Cells a search under `seeding` starts from.
	pub(crate) fn seeds(&self, seeding: Seeding) -> impl Iterator<Item = Position> + '_ {
		use {std::iter::once, either::Either};
		match seeding {
			Seeding::StartHint => Either::Left(once(self.start)),
			Seeding::Lowest => {
				let lowest = self.grid.min_elevation();
				Either::Right(self.grid.cells().iter()
					.filter(move |c| Some(c.elevation) == lowest)
					.map(|c| c.position))
			}
		}
	}
}


#[derive(Clone, Copy)]
pub(crate) struct GridBuilder {
	markers: Markers,
}

impl GridBuilder {
	pub(crate) fn new(markers: Markers) -> Self {
		GridBuilder { markers }
	}

	pub(crate) fn build(&self, s: &str) -> Result<Heightmap, MalformedGrid> {
		parsing::heightmap_from_str(s, &self.markers)
	}
}


#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum MalformedGrid {
	#[error("empty input")]
	Empty,
	#[error("line {line}: expected {} columns, found {found}",
		.len.map_or_else(|| "at least one".to_owned(), |l| l.to_string()))]
	LineLen { line: usize, len: Option<usize>, found: usize },
	#[error("line {line}, column {column}: invalid byte {found:#04x}")]
	InvalidByte { line: usize, column: usize, found: u8 },
	#[error("line {line}, column {column}: second start marker")]
	DuplicateStart { line: usize, column: usize },
	#[error("line {line}, column {column}: second goal marker")]
	DuplicateGoal { line: usize, column: usize },
	#[error("no start marker")]
	NoStart,
	#[error("no goal marker")]
	NoGoal,
}


mod parsing {
	use crate::{config::Markers, grid::Grid, position::Position};
	use super::{Heightmap, MalformedGrid};

	impl std::str::FromStr for Heightmap {
		type Err = MalformedGrid;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			heightmap_from_str(s, &Markers::default())
		}
	}

	pub(super) fn heightmap_from_str(s: &str, markers: &Markers) -> Result<Heightmap, MalformedGrid> {
		if s.trim_end_matches(['\r', '\n']).is_empty() { return Err(MalformedGrid::Empty) }

		let mut elevations = vec![];
		let mut width = None;
		let mut start = None;
		let mut goal = None;

		for (l, line) in s.lines().enumerate() {

			macro_rules! ret_line_len_err { ( $found:expr ) => {
				return Err(MalformedGrid::LineLen { line: l + 1, len: width, found: $found })
			} }

			macro_rules! set_start_or_goal { ( $which:ident, $which_err:ident, $c:expr ) => {
				if $which.is_some() { return Err(MalformedGrid::$which_err {
					line: l + 1, column: $c + 1 }) }
				$which = Some(Position::new($c, l));
			} }

			for (c, b) in line.bytes().enumerate() {
				if Some(c) == width { ret_line_len_err!(line.len()) }
				let Some(elevation) = markers.elevation(b) else {
					return Err(MalformedGrid::InvalidByte { line: l + 1, column: c + 1, found: b })
				};
				match b {
					_ if b == markers.start => { set_start_or_goal!(start, DuplicateStart, c); }
					_ if b == markers.goal => { set_start_or_goal!(goal, DuplicateGoal, c); }
					_ => (),
				}
				elevations.push(elevation);
			}

			match width {
				None if line.is_empty() => ret_line_len_err!(0),
				None => width = Some(line.len()),
				Some(len) => if line.len() != len { ret_line_len_err!(line.len()) }
			}
		}

		let width = width.ok_or(MalformedGrid::Empty)?;
		Ok(Heightmap {
			grid: Grid::new(width, elevations),
			start: start.ok_or(MalformedGrid::NoStart)?,
			goal: goal.ok_or(MalformedGrid::NoGoal)?,
		})
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };

	#[test]
	fn example() {
		let heightmap: Heightmap = INPUT.parse().unwrap();
		let grid = &heightmap.grid;
		assert_eq!((grid.width(), grid.height()), (8, 5));
		assert_eq!(heightmap.start, Position::new(0, 0));
		assert_eq!(heightmap.goal, Position::new(5, 2));
		assert_eq!(grid.get(heightmap.start).unwrap().elevation, 0);
		assert_eq!(grid.get(heightmap.goal).unwrap().elevation, 25);
		assert_eq!(grid.get(Position::new(3, 0)).unwrap().elevation, b'q' - b'a');
		assert!(grid.cells().iter().all(|c| c.cost.is_none() && !c.visited));

		assert_eq!(heightmap.seeds(Seeding::StartHint).collect::<Vec<_>>(), [Position::new(0, 0)]);
		let lowest = heightmap.seeds(Seeding::Lowest).collect::<Vec<_>>();
		assert_eq!(lowest.len(), 6);
		assert_eq!(lowest[..3], [Position::new(0, 0), Position::new(1, 0), Position::new(0, 1)]);
		assert!(lowest.iter().all(|p| grid.get(*p).unwrap().elevation == 0));
	}

	#[test]
	fn custom_markers() {
		let builder = GridBuilder::new(Markers { start: b'@', goal: b'$', lowest: b'0', highest: b'9' });
		let heightmap = builder.build("@12\n34$\n").unwrap();
		assert_eq!(heightmap.goal, Position::new(2, 1));
		assert_eq!(heightmap.grid.get(heightmap.goal).unwrap().elevation, 9);
		assert_eq!(heightmap.grid.get(Position::new(0, 1)).unwrap().elevation, 3);
		assert!(matches!(builder.build("Sab\nbcE"),
			Err(MalformedGrid::InvalidByte { line: 1, column: 1, found: b'S' })));
	}

	#[test]
	fn crlf() {
		let heightmap: Heightmap = "Sb\r\ncE\r\n".parse().unwrap();
		assert_eq!((heightmap.grid.width(), heightmap.grid.height()), (2, 2));
	}

	#[test_case("" => MalformedGrid::Empty ; "empty")]
	#[test_case("\n\n" => MalformedGrid::Empty ; "blank lines")]
	#[test_case("Sab\nbcdE" => MalformedGrid::LineLen { line: 2, len: Some(3), found: 4 } ; "long line")]
	#[test_case("Sabc\nbcE" => MalformedGrid::LineLen { line: 2, len: Some(4), found: 3 } ; "short line")]
	#[test_case("\nSE" => MalformedGrid::LineLen { line: 1, len: None, found: 0 } ; "leading blank")]
	#[test_case("Sa\nb?\nEa" => MalformedGrid::InvalidByte { line: 2, column: 2, found: b'?' } ; "invalid byte")]
	#[test_case("SaS\nbcE" => MalformedGrid::DuplicateStart { line: 1, column: 3 } ; "two starts")]
	#[test_case("SaE\nEcd" => MalformedGrid::DuplicateGoal { line: 2, column: 1 } ; "two goals")]
	#[test_case("abc\nbcE" => MalformedGrid::NoStart ; "no start")]
	#[test_case("Sbc\nbcd" => MalformedGrid::NoGoal ; "no goal")]
	fn malformed(input: &str) -> MalformedGrid {
		match input.parse::<Heightmap>() {
			Ok(_) => panic!("{input:?} should not parse"),
			Err(e) => e,
		}
	}

	#[test]
	fn messages() {
		assert_eq!(MalformedGrid::LineLen { line: 2, len: Some(3), found: 4 }.to_string(),
			"line 2: expected 3 columns, found 4");
		assert_eq!(MalformedGrid::InvalidByte { line: 1, column: 5, found: b'?' }.to_string(),
			"line 1, column 5: invalid byte 0x3f");
		assert_eq!(MalformedGrid::NoGoal.to_string(), "no goal marker");
	}
}
