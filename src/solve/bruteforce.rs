//! Exhaustive search over turn sequences.
//!
//! Sequences are tried by increasing length and, within a length, in the
//! order of a [`SequenceCounter`]. Every candidate is replayed on its own
//! clone of the starting cube, so nothing has to be undone.

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::cube::{facecube::FaceCube, turn::*, RubiksCube};
use crate::solve::{counter::SequenceCounter, SolveError, SolveOutcome, SolverConfig};

/// Where a [`Search`] currently is
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SearchState {
	Searching,
	Done(SolveOutcome),
}

/// A single bounded search, advanced one candidate at a time.
/// Stop calling [`Search::step`] to cancel it.
pub struct Search<'a> {
	start: &'a FaceCube,
	counter: SequenceCounter,
	max_length: usize,
	attempts: u64,
	progress_interval: u64,
	state: SearchState,
}

impl<'a> Search<'a> {
	pub fn new(
		start: &'a FaceCube,
		max_length: usize,
		config: &SolverConfig,
	) -> Result<Self, SolveError> {
		let counter = SequenceCounter::new(NUM_TURNS)?;

		let state = if start.is_solved() {
			SearchState::Done(SolveOutcome::Solved(vec![]))
		} else if max_length == 0 {
			SearchState::Done(SolveOutcome::Exhausted)
		} else {
			SearchState::Searching
		};

		Ok(Self {
			start,
			counter,
			max_length,
			attempts: 0,
			progress_interval: config.progress_interval,
			state,
		})
	}

	pub fn state(&self) -> &SearchState {
		&self.state
	}

	/// Number of candidate sequences evaluated so far
	pub fn attempts(&self) -> u64 {
		self.attempts
	}

	/// Evaluate the next candidate. Does nothing once the search is done.
	pub fn step(&mut self) -> Result<&SearchState, SolveError> {
		if let SearchState::Done(_) = self.state {
			return Ok(&self.state);
		}

		let turns = self.counter.turns()?;
		let mut cube = self.start.clone();
		cube.apply_turns(turns.iter().copied());
		self.attempts += 1;

		if self.progress_interval != 0 && self.attempts % self.progress_interval == 0 {
			trace!(attempts = self.attempts, sequence = %format_turns(&turns), "still searching");
		}

		if cube.is_solved() {
			info!(attempts = self.attempts, length = turns.len(), "found a solution");
			self.state = SearchState::Done(SolveOutcome::Solved(turns));
			return Ok(&self.state);
		}

		let len = self.counter.len();
		self.counter.increment();
		if self.max_length < self.counter.len() {
			debug!(attempts = self.attempts, max_length = self.max_length, "search space exhausted");
			self.state = SearchState::Done(SolveOutcome::Exhausted);
		} else if len != self.counter.len() {
			debug!(length = self.counter.len(), attempts = self.attempts, "trying longer sequences");
		}

		Ok(&self.state)
	}
}

/// Brute force solver for a fixed starting cube
pub struct Solver {
	start: FaceCube,
	config: SolverConfig,
}

impl Solver {
	pub fn new(start: FaceCube) -> Self {
		Self::with_config(start, SolverConfig::default())
	}

	pub fn with_config(start: FaceCube, config: SolverConfig) -> Self {
		Self { start, config }
	}

	pub fn search(&self, max_length: usize) -> Result<Search<'_>, SolveError> {
		Search::new(&self.start, max_length, &self.config)
	}

	/// Try every sequence of at most `max_length` turns and return the first
	/// one which solves the cube.
	pub fn solve(&self, max_length: usize) -> Result<SolveOutcome, SolveError> {
		let mut search = self.search(max_length)?;

		loop {
			if let SearchState::Done(outcome) = search.step()? {
				#[cfg(debug_assertions)]
				if let SolveOutcome::Solved(turns) = outcome {
					let mut c = self.start.clone();
					c.apply_turns(turns.iter().copied());
					assert!(c.is_solved());
				}

				return Ok(outcome.clone());
			}
		}
	}

	/// Same result as [`Solver::solve`], but every length is split across a
	/// rayon thread pool.
	pub fn solve_parallel(&self, max_length: usize) -> Result<SolveOutcome, SolveError> {
		match self.config.threads {
			Some(n) => {
				let pool = rayon::ThreadPoolBuilder::new()
					.num_threads(n)
					.build()
					.map_err(|e| SolveError::InvalidConfiguration(e.to_string()))?;
				pool.install(|| self.solve_sharded(max_length))
			}
			None => self.solve_sharded(max_length),
		}
	}

	fn solve_sharded(&self, max_length: usize) -> Result<SolveOutcome, SolveError> {
		if self.start.is_solved() {
			return Ok(SolveOutcome::Solved(vec![]));
		}

		for len in 1..=max_length {
			let count = u32::try_from(len)
				.ok()
				.and_then(|exp| NUM_TURNS.checked_pow(exp))
				.ok_or_else(|| {
					SolveError::InvalidConfiguration(format!("{} turns are too many to enumerate", len))
				})?;

			debug!(length = len, candidates = count, "searching in parallel");

			// find_first keeps the enumeration order, so the answer matches the sequential search
			let found = (0..count).into_par_iter().find_first(|idx| {
				let mut cube = self.start.clone();
				cube.apply_turns(sequence_at(*idx, len));
				cube.is_solved()
			});

			if let Some(idx) = found {
				let turns = sequence_at(idx, len);
				info!(length = len, "found a solution");
				return Ok(SolveOutcome::Solved(turns));
			}
		}

		debug!(max_length, "search space exhausted");
		Ok(SolveOutcome::Exhausted)
	}
}

/// The `idx`-th sequence of the given length in counter order
fn sequence_at(idx: usize, len: usize) -> Vec<Turn> {
	let mut rest = idx;
	(0..len)
		.map(|_| {
			let turn = ALL_TURNS[rest % NUM_TURNS];
			rest /= NUM_TURNS;
			turn
		})
		.collect()
}
