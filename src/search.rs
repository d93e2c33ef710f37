// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{config::SearchConfig, frontier::Frontier, grid::Grid, position::Position};


#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum SearchError {
	#[error("no path to goal after visiting {visited} cells")]
	NoPathFound { visited: usize },
	#[error("gave up after visiting {budget} cells")]
	SearchBudgetExceeded { budget: usize },
}


/// Drives a single frontier search over a [`Grid`] it borrows for the
/// duration of [`SearchEngine::run`].
pub(crate) struct SearchEngine {
	config: SearchConfig,
}

impl SearchEngine {
	pub(crate) fn new(config: SearchConfig) -> Self {
		SearchEngine { config }
	}

	/// Returns the cost recorded at `goal` once it is visited. Cells keep
	/// their costs and visited flags afterwards, so `grid` should be fresh.
	pub(crate) fn run(
		&self,
		grid: &mut Grid,
		starts: impl IntoIterator<Item = Position>,
		goal: Position,
	) -> Result<usize, SearchError> {
		use crate::config::Seeding;

		let seed_cost = self.config.seeding.seed_cost();
		let source_elevation = match self.config.seeding {
			Seeding::Lowest => grid.min_elevation(),
			Seeding::StartHint => None,
		};

		let mut frontier = Frontier::new(source_elevation);
		for start in starts {
			let Some(index) = grid.index(start) else {
				log::warn!("Ignoring start {start} outside {}x{} grid", grid.width(), grid.height());
				continue
			};
			let cell = grid.cell_mut(index);
			cell.cost = Some(seed_cost);
			cell.visited = false;
			frontier.push(index, cell.elevation, seed_cost);
		}

		let budget = self.config.max_visits.unwrap_or(grid.len());
		log::debug!("Searching for {goal} from {} seed(s), budget {budget}", frontier.len());

		let mut visits = 0;
		let mut neighbors = Vec::with_capacity(4);

		while let Some(entry) = frontier.pop_best() {
			let cell = grid.cell_mut(entry.index);
			if cell.visited { continue }
			if visits == budget {
				log::debug!("Budget exhausted with {} candidates left", frontier.len() + 1);
				return Err(SearchError::SearchBudgetExceeded { budget })
			}
			visits += 1;
			cell.visited = true;

			let (position, elevation, cost) = (cell.position, cell.elevation, entry.cost);

			if log::log_enabled!(log::Level::Trace) {
				log::trace!("{position} @ {cost}: {elevation}\n{}", grid.render(position));
			}

			if position == goal {
				log::debug!("Reached {goal} at cost {cost} after {visits} visits");
				return Ok(cost)
			}

			let next_cost = if source_elevation == Some(elevation) { 1 } else { cost + 1 };

			neighbors.clear();
			neighbors.extend(grid.neighbors(position));
			for &neighbor in &neighbors {
				let Some(index) = grid.index(neighbor) else { continue };
				let next = grid.cell_mut(index);
				if next.cost.is_some() || next.elevation > elevation.saturating_add(1) { continue }
				next.cost = Some(next_cost);
				frontier.push(index, next.elevation, next_cost);
			}
		}

		log::debug!("Frontier exhausted after {visits} visits");
		Err(SearchError::NoPathFound { visited: visits })
	}
}
