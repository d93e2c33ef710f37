// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod builder;
mod config;
mod frontier;
mod grid;
mod position;
mod search;

use std::{io::Read as _, path::PathBuf, process::ExitCode};
use {builder::{GridBuilder, MalformedGrid}, config::{Markers, SearchConfig, Seeding}, search::{SearchEngine, SearchError}};


/// Counts the fewest steps up an elevation map to its goal marker.
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Heightmap files; standard input is read when none are given
	paths: Vec<PathBuf>,

	/// Which cells the search starts from
	#[arg(long, value_enum, default_value_t = Seeding::Lowest)]
	seeding: Seeding,

	/// Cap on visited cells, instead of the map's cell count
	#[arg(long)]
	max_visits: Option<usize>,

	/// Print the explored map after each search
	#[arg(long)]
	render: bool,
}

#[derive(Debug, thiserror::Error)]
enum Error {
	#[error("failed to read input: {0}")]
	Read(#[from] std::io::Error),
	#[error("malformed heightmap: {0}")]
	Malformed(#[from] MalformedGrid),
}

struct Report {
	steps: Result<usize, SearchError>,
	render: Option<String>,
}


fn solve(input: &str, config: SearchConfig, render: bool) -> Result<Report, Error> {
	let mut heightmap = GridBuilder::new(Markers::default()).build(input)?;
	if let Some(goal) = heightmap.grid.get(heightmap.goal) {
		log::info!("start: {}, goal: {} at elevation {}", heightmap.start, goal.position, goal.elevation);
	}

	let seeds = heightmap.seeds(config.seeding).collect::<Vec<_>>();
	let steps = SearchEngine::new(config).run(&mut heightmap.grid, seeds, heightmap.goal);
	let render = render.then(|| heightmap.grid.render(heightmap.goal).to_string());
	Ok(Report { steps, render })
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = <Args as clap::Parser>::parse();
	let config = SearchConfig { seeding: args.seeding, max_visits: args.max_visits };

	let reports: Vec<(String, Result<Report, Error>)> = if args.paths.is_empty() {
		let mut input = String::new();
		let report = std::io::stdin().read_to_string(&mut input)
			.map_err(Error::from)
			.and_then(|_| solve(&input, config, args.render));
		vec![("<stdin>".to_owned(), report)]
	} else {
		use rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _};
		args.paths.par_iter()
			.map(|path| (path.display().to_string(), std::fs::read_to_string(path)
				.map_err(Error::from)
				.and_then(|input| solve(&input, config, args.render))))
			.collect()
	};

	let mut status = ExitCode::SUCCESS;
	for (name, report) in reports {
		match report {
			Ok(Report { steps, render }) => {
				match steps {
					Ok(steps) => println!("{name}: took {steps} steps"),
					Err(e) => println!("{name}: unreachable ({e})"),
				}
				if let Some(render) = render { println!("{render}") }
			}
			Err(e) => {
				eprintln!("{name}: {e}");
				status = ExitCode::FAILURE;
			}
		}
	}
	status
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };

	let report = solve(INPUT, SearchConfig::default(), true).unwrap();
	assert_eq!(report.steps, Ok(29));
	let render = report.render.unwrap();
	assert_eq!(render.lines().count(), 5);
	assert_eq!(render.lines().nth(2).unwrap().chars().nth(5), Some('X'));

	let config = SearchConfig { seeding: Seeding::StartHint, max_visits: None };
	let report = solve(INPUT, config, false).unwrap();
	assert_eq!(report.steps, Ok(31));
	assert!(report.render.is_none());

	let config = SearchConfig { max_visits: Some(3), ..config };
	assert_eq!(solve(INPUT, config, false).unwrap().steps,
		Err(SearchError::SearchBudgetExceeded { budget: 3 }));

	assert!(matches!(solve("Sab\nbc", SearchConfig::default(), false),
		Err(Error::Malformed(MalformedGrid::LineLen { line: 2, .. }))));
	assert!(matches!(solve("Sab\nbcd", SearchConfig::default(), false),
		Err(Error::Malformed(MalformedGrid::NoGoal))));

	use clap::CommandFactory as _;
	Args::command().debug_assert();
	let args = <Args as clap::Parser>::try_parse_from(
		["hillclimb", "--seeding", "start-hint", "--max-visits", "9", "a.txt", "b.txt"]).unwrap();
	assert_eq!(args.seeding, Seeding::StartHint);
	assert_eq!(args.max_visits, Some(9));
	assert_eq!(args.paths.len(), 2);
	assert!(!args.render);
}
