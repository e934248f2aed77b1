use std::str::FromStr;

use rand::Rng;
use strum::EnumCount;

use crate::cube::{CubeError, Side};

/// A clockwise quarter turn of one side, as seen when facing that side
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Debug)]
#[derive(strum::EnumIter, strum::EnumCount)]
#[repr(u8)]
pub enum Turn {
	U,
	D,
	L,
	R,
	F,
	B,
}

/// Total number of distinct turns
pub const NUM_TURNS: usize = Turn::COUNT;

/// All turns, ordered by their sequence digit
pub const ALL_TURNS: [Turn; NUM_TURNS] = [Turn::U, Turn::D, Turn::L, Turn::R, Turn::F, Turn::B];

impl Turn {
	/// The side which is turned
	pub const fn side(self) -> Side {
		match self {
			Turn::U => Side::Up,
			Turn::D => Side::Down,
			Turn::L => Side::Left,
			Turn::R => Side::Right,
			Turn::F => Side::Front,
			Turn::B => Side::Back,
		}
	}

	/// Map a sequence digit onto its turn.
	pub fn from_index(idx: usize) -> Result<Self, CubeError> {
		ALL_TURNS
			.get(idx)
			.copied()
			.ok_or_else(|| CubeError::InvalidMove(idx.to_string()))
	}

	/// The sequence which undoes this turn.
	/// Every turn has order four, so that's the same turn three more times.
	pub const fn inverse(self) -> [Turn; 3] {
		[self; 3]
	}
}

impl std::fmt::Display for Turn {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let c = match self {
			Turn::U => "U",
			Turn::D => "D",
			Turn::L => "L",
			Turn::R => "R",
			Turn::F => "F",
			Turn::B => "B",
		};
		f.write_str(c)
	}
}

impl FromStr for Turn {
	type Err = CubeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let turn = match s {
			"U" => Turn::U,
			"D" => Turn::D,
			"L" => Turn::L,
			"R" => Turn::R,
			"F" => Turn::F,
			"B" => Turn::B,
			_ => return Err(CubeError::InvalidMove(s.to_string())),
		};
		Ok(turn)
	}
}

/// Parse a whitespace separated list of turns, e.g. "U F R".
pub fn parse_turns(string: &str) -> Result<Vec<Turn>, CubeError> {
	string.split_whitespace().map(Turn::from_str).collect()
}

/// Format a list of turns the way [`parse_turns`] reads them
pub fn format_turns(turns: &[Turn]) -> String {
	turns
		.iter()
		.map(|t| t.to_string())
		.collect::<Vec<_>>()
		.join(" ")
}

/// Uniformly random turns, used to scramble a cube.
pub fn random_sequence<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Turn> {
	(0..n)
		.map(|_| ALL_TURNS[rng.gen_range(0..NUM_TURNS)])
		.collect()
}
