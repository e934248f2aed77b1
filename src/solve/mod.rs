pub mod bruteforce;
pub mod counter;

use crate::cube::{turn::Turn, CubeError};

/// The search bound used when the caller doesn't pick one
pub const DEFAULT_MAX_LENGTH: usize = 6;

/// How a finished search ended.
/// Running out of sequences is a normal result, not an error.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SolveOutcome {
	/// The first sequence (in enumeration order) which solves the cube
	Solved(Vec<Turn>),
	/// No sequence up to the bound solves the cube
	Exhausted,
}

impl SolveOutcome {
	pub fn turns(&self) -> Option<&[Turn]> {
		match self {
			SolveOutcome::Solved(turns) => Some(turns),
			SolveOutcome::Exhausted => None,
		}
	}
}

#[derive(thiserror::Error, Debug)]
pub enum SolveError {
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),
	#[error(transparent)]
	Cube(#[from] CubeError),
}

/// Knobs of the brute force solver
#[derive(Clone, Debug)]
pub struct SolverConfig {
	/// Log a progress line every that many attempts (0 disables it)
	pub progress_interval: u64,
	/// Size of the thread pool for the parallel search.
	/// `None` uses rayon's global pool.
	pub threads: Option<usize>,
}

impl Default for SolverConfig {
	fn default() -> Self {
		Self {
			progress_interval: 100_000,
			threads: None,
		}
	}
}
