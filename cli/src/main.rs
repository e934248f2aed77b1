use std::{error::Error, io::Write, str::FromStr};

use clap::Parser;
use strum::{Display, IntoEnumIterator};
use tracing::info;
use tracing_subscriber::EnvFilter;

use facecube::{prelude::*, snapshot};

#[derive(
	PartialEq, Eq, Default, Debug, Display, Copy, Clone, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[repr(usize)]
#[non_exhaustive]
enum SolveMode {
	#[default]
	Sequential,
	Parallel,
}

/// Brute force solver for a cube made of six faces
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the cube, e.g. "F R U"
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Set the cube from a string (the same format as when you output the cube via the "-c"-flag)
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Start from a snapshot written with --save
	#[arg(long)]
	load: Option<String>,

	/// Write a snapshot of the final cube
	#[arg(long)]
	save: Option<String>,

	/// Scramble the cube with that many random turns
	#[arg(short, long, default_value_t = 0)]
	random: usize,

	/// Solve the cube (the output is a sequence)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Longest sequence tried when solving
	#[arg(short, long, default_value_t = DEFAULT_MAX_LENGTH)]
	max_length: usize,

	/// Specify how the search is run
	#[arg(long, default_value_t = SolveMode::default())]
	mode: SolveMode,

	/// Print all search modes and quit
	#[arg(long, default_value_t = false)]
	list_modes: bool,

	/// Number of worker threads for the parallel mode
	#[arg(short, long)]
	threads: Option<usize>,

	/// Output length of sequence (if --solve is used)
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Output the cube as a string rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Output how many facelets are in their solved place
	#[arg(long, default_value_t = false)]
	score: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	#[cfg(debug_assertions)]
	std::env::set_var("RUST_BACKTRACE", "1");

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn std::io::Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};
	let mut cube = FaceCube::default();

	// List the modes and exit
	if args.list_modes {
		for mode in SolveMode::iter() {
			writeln!(out, "{}", mode)?;
		}
		return Ok(());
	}

	if let Some(path) = &args.load {
		cube = snapshot::load(path)?;
		info!(path = %path, "loaded snapshot");
	}

	// Parses a cube out of the cube string
	if !args.set.is_empty() {
		cube = FaceCube::from_str(args.set.as_str())?;
	}

	// Scramble the cube
	if args.random > 0 {
		let turns = random_sequence(args.random, &mut rand::thread_rng());
		info!(scramble = %format_turns(&turns), "scrambling");
		cube.apply_turns(turns);
	}

	cube.apply_turns(parse_turns(&args.sequence)?);

	if let Some(path) = &args.save {
		snapshot::save(path, &cube)?;
		info!(path = %path, "saved snapshot");
	}

	if args.score {
		writeln!(out, "score={}/{}", cube.match_score(), NUM_FACELETS)?;
	}

	// Solve the cube and only outputs the sequence
	if args.solve {
		let config = SolverConfig {
			threads: args.threads,
			..SolverConfig::default()
		};
		let solver = Solver::with_config(cube, config);

		let outcome = match args.mode {
			SolveMode::Parallel => solver.solve_parallel(args.max_length)?,
			_ => solver.solve(args.max_length)?,
		};

		return match outcome {
			SolveOutcome::Solved(turns) => {
				write!(out, "{}", format_turns(&turns))?;
				if args.length {
					writeln!(out, " (len={})", turns.len())?;
				} else {
					writeln!(out)?;
				}
				Ok(())
			}
			SolveOutcome::Exhausted => Err(format!(
				"No solution with at most {} turns, try a larger --max-length",
				args.max_length
			)
			.into()),
		};
	}

	// Print the resulting cube (either as a string or with colors)
	if args.char_print {
		let s: String = cube.into();
		writeln!(out, "{}", s)?;
	} else if args.output.is_empty() {
		cube.print();
	} else {
		write!(out, "{}", cube)?;
	}

	Ok(())
}
