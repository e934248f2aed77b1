pub mod face;
pub mod facecube;
pub mod turn;

use turn::*;

/// The dimension of the cube
pub const CUBE_DIM: usize = 3;

/// The number of facelets per side
pub const CUBE_AREA: usize = CUBE_DIM * CUBE_DIM;

/// The number of sides of a cube
pub const NUM_SIDES: usize = 6;

/// The number of facelets of the whole cube
pub const NUM_FACELETS: usize = CUBE_AREA * NUM_SIDES;

/// The label of a face. The cube stores its faces in exactly this order.
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount, strum::FromRepr,
)]
#[repr(u8)]
pub enum Side {
	// It must only contain unit fields!
	Up,
	Down,
	Left,
	Right,
	Front,
	Back,
}

/// The color of a single facelet
#[derive(
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Debug,
	strum::EnumIter,
	strum::EnumCount,
	strum::FromRepr,
	strum::Display,
	serde::Serialize,
	serde::Deserialize,
)]
#[repr(u8)]
pub enum Color {
	Yellow,
	White,
	Green,
	Blue,
	Red,
	Magenta,
}

/// The color every side has on a solved cube, indexed by `Side as usize`.
pub const SIDE_COLORS: [Color; NUM_SIDES] = [
	Color::Yellow,  // up
	Color::White,   // down
	Color::Green,   // left
	Color::Blue,    // right
	Color::Red,     // front
	Color::Magenta, // back
];

impl Side {
	/// The color of this side on the solved cube
	pub const fn solved_color(self) -> Color {
		SIDE_COLORS[self as usize]
	}
}

impl Color {
	/// The character used for the color in cube strings and plain output
	pub const fn initial(self) -> char {
		match self {
			Color::Yellow => 'Y',
			Color::White => 'W',
			Color::Green => 'G',
			Color::Blue => 'B',
			Color::Red => 'R',
			Color::Magenta => 'M',
		}
	}

	/// Inverse of [`Color::initial`]. Lowercase is accepted as well.
	pub fn from_initial(c: char) -> Option<Self> {
		let res = match c.to_ascii_uppercase() {
			'Y' => Color::Yellow,
			'W' => Color::White,
			'G' => Color::Green,
			'B' => Color::Blue,
			'R' => Color::Red,
			'M' => Color::Magenta,
			_ => return None,
		};
		Some(res)
	}
}

/// Returns the ANSI-colorcode for the given color.
pub fn get_ansii_color(color: Color) -> &'static str {
	match color {
		Color::Yellow => "\x1b[93m",
		Color::White => "\x1b[00m",
		Color::Green => "\x1b[32m",
		Color::Blue => "\x1b[34m",
		Color::Red => "\x1b[31m",
		Color::Magenta => "\x1b[35m",
	}
}

/// Everything that can go wrong when building or turning a cube
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CubeError {
	#[error("\"{0}\" is not a valid move, expected one of U, D, L, R, F, B")]
	InvalidMove(String),
	#[error("The given cube string has length {0}, expected {}", NUM_FACELETS)]
	Length(usize),
	#[error("'{0}' is not a valid color")]
	Color(char),
}

/// The RubiksCube trait.
pub trait RubiksCube {
	fn apply_turn(&mut self, turn: Turn);

	fn is_solved(&self) -> bool;

	/// Apply the given sequence of turns.
	fn apply_turns<I>(&mut self, turns: I)
	where
		I: IntoIterator<Item = Turn>,
		Self: Sized,
	{
		for turn in turns {
			self.apply_turn(turn);
		}
	}
}
