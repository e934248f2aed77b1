use std::str::FromStr;

use crate::cube::{face::*, turn::*, *};
use crate::cube::face::EdgeSide::{Bottom, Left as LeftEdge, Right as RightEdge, Top};
use crate::cube::Side::*;

use const_for::const_for;
use strum::IntoEnumIterator;

type Faces = [Face; NUM_SIDES];

/// A Rubiks Cube representation as six independent faces.
/// Turning is done by rotating a face and cycling the four strips
/// bordering it. Slow compared to a permutation table, but every
/// facelet can be read directly.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct FaceCube {
	faces: Faces,
}

impl Default for FaceCube {
	/// Creates a *solved* rubiks cube!
	fn default() -> Self {
		Self { faces: SOLVED }
	}
}

const fn solved_faces() -> Faces {
	let mut out = [Face::uniform(Color::Yellow); NUM_SIDES];

	const_for!(i in 0..NUM_SIDES => {
		out[i] = Face::uniform(SIDE_COLORS[i]);
	});

	out
}

/// The reference configuration, one uniform face per side
const SOLVED: Faces = solved_faces();

// ===== Turn Cycles =====

/*
 * Each turn rotates its own face and moves four border strips along a cycle.
 * The strip read at position i is written to position i+1 (and the last one
 * back to the first). A strip is reversed when read if its neighbour sees
 * it in the opposite direction.
 */

/// A border strip of one face
#[derive(Clone, Copy)]
struct Seam {
	side: Side,
	edge: EdgeSide,
	reversed: bool,
}

const fn seam(side: Side, edge: EdgeSide) -> Seam {
	Seam { side, edge, reversed: false }
}

const fn rev(side: Side, edge: EdgeSide) -> Seam {
	Seam { side, edge, reversed: true }
}

type Cycle = [Seam; 4];

/// The cycles, indexed by `Turn as usize`
#[rustfmt::skip]
const CYCLES: [Cycle; NUM_TURNS] = [
	// U
	[seam(Front, Top), seam(Left, Top), seam(Back, Top), seam(Right, Top)],
	// D
	[seam(Front, Bottom), seam(Right, Bottom), seam(Back, Bottom), seam(Left, Bottom)],
	// L
	[seam(Front, LeftEdge), seam(Down, LeftEdge), seam(Back, RightEdge), seam(Up, LeftEdge)],
	// R
	[seam(Front, RightEdge), rev(Up, RightEdge), rev(Back, LeftEdge), seam(Down, RightEdge)],
	// F
	[rev(Left, RightEdge), seam(Up, Bottom), rev(Right, LeftEdge), seam(Down, Top)],
	// B
	[rev(Up, Top), rev(Left, LeftEdge), seam(Down, Bottom), seam(Right, RightEdge)],
];

impl RubiksCube for FaceCube {
	fn apply_turn(&mut self, turn: Turn) {
		self.face_mut(turn.side()).rotate_clockwise();
		self.cycle_seams(&CYCLES[turn as usize]);
	}

	fn is_solved(&self) -> bool {
		self.faces == SOLVED
	}
}

impl FaceCube {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn face(&self, side: Side) -> &Face {
		&self.faces[side as usize]
	}

	fn face_mut(&mut self, side: Side) -> &mut Face {
		&mut self.faces[side as usize]
	}

	/// The color grid of one side, e.g. for a renderer
	pub fn face_grid(&self, side: Side) -> &Grid {
		self.face(side).grid()
	}

	fn cycle_seams(&mut self, cycle: &Cycle) {
		let strips = cycle.map(|s| {
			let mut strip = self.face(s.side).edge(s.edge);
			if s.reversed {
				strip.reverse();
			}
			strip
		});

		for (i, strip) in strips.into_iter().enumerate() {
			let dst = cycle[(i + 1) % cycle.len()];
			self.face_mut(dst.side).set_edge(dst.edge, strip);
		}
	}

	/// The number of facelets which have the color of the solved cube (0 to 54)
	pub fn match_score(&self) -> usize {
		self.faces
			.iter()
			.zip(SOLVED.iter())
			.map(|(face, solved)| face.matching(solved))
			.sum()
	}

	/// Print the cube in the *standard output* with ANSI-colors
	pub fn print(&self) {
		print!("{}", self.render(true));
	}

	/// The net of the cube, Up on top, then Left Front Right Back, then Down.
	fn render(&self, ansi: bool) -> String {
		// Generate a space depending on the size of CUBE_DIM
		let space: String = " ".repeat(2 * CUBE_DIM + 1);
		let cell = |color: Color| {
			if ansi {
				format!("{}■ ", get_ansii_color(color))
			} else {
				format!("{} ", color.initial())
			}
		};

		let mut out = String::new();

		for row in self.face_grid(Up) {
			out.push_str(&space);
			row.iter().for_each(|c| out.push_str(&cell(*c)));
			out.push('\n');
		}

		const MIDDLE: [Side; 4] = [Left, Front, Right, Back];
		for j in 0..CUBE_DIM {
			for s in MIDDLE {
				self.face_grid(s)[j].iter().for_each(|c| out.push_str(&cell(*c)));
				out.push(' ');
			}
			out.push('\n');
		}

		for row in self.face_grid(Down) {
			out.push_str(&space);
			row.iter().for_each(|c| out.push_str(&cell(*c)));
			out.push('\n');
		}

		if ansi {
			// Reset ansii color
			out.push_str("\x1b[00m");
		}
		out
	}
}

impl std::fmt::Display for FaceCube {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str(&self.render(false))
	}
}

impl FromStr for FaceCube {
	type Err = CubeError;

	/// Parses 54 color initials, one side after another (in `Side` order),
	/// each side row by row.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let colors = s
			.chars()
			.map(|c| Color::from_initial(c).ok_or(CubeError::Color(c)))
			.collect::<Result<Vec<_>, _>>()?;

		if colors.len() != NUM_FACELETS {
			return Err(CubeError::Length(colors.len()));
		}

		let mut cube = FaceCube::new();
		for (side, chunk) in Side::iter().zip(colors.chunks(CUBE_AREA)) {
			let mut grid = [[Color::Yellow; CUBE_DIM]; CUBE_DIM];
			for (i, color) in chunk.iter().enumerate() {
				grid[i / CUBE_DIM][i % CUBE_DIM] = *color;
			}
			*cube.face_mut(side) = Face::from_grid(grid);
		}

		Ok(cube)
	}
}

impl From<FaceCube> for String {
	fn from(val: FaceCube) -> Self {
		val.faces
			.iter()
			.flat_map(|face| face.grid().iter().flatten())
			.map(|c| c.initial())
			.collect()
	}
}

impl From<Vec<Turn>> for FaceCube {
	/// The solved cube with the given turns applied
	fn from(item: Vec<Turn>) -> Self {
		let mut cube = Self::new();
		cube.apply_turns(item);
		cube
	}
}

// ===== Tests =====

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{rngs::StdRng, SeedableRng};
	use std::error::Error;

	#[test]
	/// Every turn has order four, also on scrambled cubes
	fn turns_have_order_four() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut cube = FaceCube::new();
		cube.apply_turns(random_sequence(30, &mut rng));

		for turn in Turn::iter() {
			let bef = cube.clone();
			for i in 1..=4 {
				cube.apply_turn(turn);
				if i < 4 {
					assert_ne!(cube, bef, "{}^{} is the identity", turn, i);
				}
			}
			assert_eq!(cube, bef, "{}^4 is not the identity", turn);
		}
	}

	#[test]
	/// A single front turn unsolves, four of them solve again
	fn front_turn_round_trip() {
		let mut cube = FaceCube::new();
		cube.apply_turn(Turn::F);
		assert!(!cube.is_solved());

		cube.apply_turns(Turn::F.inverse());
		assert!(cube.is_solved());
	}

	#[test]
	/// The inverse of a sequence is the reversed sequence of inverse turns
	fn sequence_inverse() -> Result<(), Box<dyn Error>> {
		let seq = parse_turns("R U F B L D R R F")?;
		let mut cube = FaceCube::from(seq.clone());
		assert!(!cube.is_solved());

		for turn in seq.iter().rev() {
			cube.apply_turns(turn.inverse());
		}
		assert!(cube.is_solved());
		Ok(())
	}

	#[test]
	/// Turning the front face moves the strips of its neighbours
	fn front_turn_facelets() {
		let cube = FaceCube::from(vec![Turn::F]);

		// Left's right column ends up on the bottom row of Up
		assert_eq!(cube.face(Up).edge(Bottom), [Color::Green; 3]);
		// Up's bottom row ends up on the left column of Right
		assert_eq!(cube.face(Right).edge(LeftEdge), [Color::Yellow; 3]);
		// Right's left column ends up on the top row of Down
		assert_eq!(cube.face(Down).edge(Top), [Color::Blue; 3]);
		// Down's top row ends up on the right column of Left
		assert_eq!(cube.face(Left).edge(RightEdge), [Color::White; 3]);

		// The back is untouched
		assert_eq!(*cube.face(Back), Face::uniform(Color::Magenta));
		assert_eq!(*cube.face(Front), Face::uniform(Color::Red));
	}

	#[test]
	/// Reversed strips land mirrored on their neighbour
	fn strip_orientation() -> Result<(), Box<dyn Error>> {
		// Up's right column after R is Front's right column, not reversed.
		// Going on, Back's left column receives it reversed.
		let mut cube = FaceCube::from(parse_turns("U")?);
		let front_right = cube.face(Front).edge(RightEdge);
		cube.apply_turn(Turn::R);
		assert_eq!(cube.face(Up).edge(RightEdge), front_right);

		let up_right = cube.face(Up).edge(RightEdge);
		cube.apply_turn(Turn::R);
		let mut expected = up_right;
		expected.reverse();
		assert_eq!(cube.face(Back).edge(LeftEdge), expected);
		Ok(())
	}

	#[test]
	/// The up turn moves the top rows from front to left
	fn up_turn_direction() {
		let cube = FaceCube::from(vec![Turn::U]);
		assert_eq!(cube.face(Left).edge(Top), [Color::Red; 3]);
		assert_eq!(cube.face(Back).edge(Top), [Color::Green; 3]);
		assert_eq!(cube.face(Right).edge(Top), [Color::Magenta; 3]);
		assert_eq!(cube.face(Front).edge(Top), [Color::Blue; 3]);
		assert_eq!(*cube.face(Down), Face::uniform(Color::White));
	}

	#[test]
	/// Clones don't share any facelets with the original
	fn clone_is_independent() {
		let original = FaceCube::new();
		let mut copy = original.clone();
		assert_eq!(copy, original);

		copy.apply_turn(Turn::L);
		assert_ne!(copy, original);
		assert!(original.is_solved());
		assert_eq!(*original.face_grid(Front), [[Color::Red; 3]; 3]);
	}

	#[test]
	/// The score counts the facelets matching the solved cube
	fn match_score() {
		let mut cube = FaceCube::new();
		assert_eq!(cube.match_score(), NUM_FACELETS);

		// A quarter turn moves 12 border facelets onto a differently colored side
		cube.apply_turn(Turn::U);
		assert_eq!(cube.match_score(), NUM_FACELETS - 12);

		// A face fixture rotated on its own
		let mut grid = [[Color::Red; CUBE_DIM]; CUBE_DIM];
		grid[0][0] = Color::Blue;
		let mut cube = FaceCube::new();
		*cube.face_mut(Front) = Face::from_grid(grid);
		let before = cube.match_score();
		cube.face_mut(Front).rotate_clockwise();
		assert_eq!(before, NUM_FACELETS - 1);
		assert_eq!(cube.match_score(), before);
		assert!(cube.face(Front).matching(&Face::from_grid(grid)) < CUBE_AREA);

		// A checker leaves the corners and the center in place
		let mut cube = FaceCube::new();
		*cube.face_mut(Front) = Face::checker(Color::Red, Color::Blue);
		assert_eq!(cube.match_score(), NUM_FACELETS - 4);
		*cube.face_mut(Back) = Face::checker(Color::White, Color::Magenta);
		assert_eq!(cube.match_score(), NUM_FACELETS - 4 - 5);
		assert!(!cube.is_solved());
	}

	#[test]
	/// Check the conversion between FaceCube and Strings
	fn string_conversion() {
		let mut rng = StdRng::seed_from_u64(3);
		let cube = FaceCube::from(random_sequence(40, &mut rng));

		let s: String = cube.clone().into();
		assert_eq!(s.len(), NUM_FACELETS);
		assert_eq!(FaceCube::from_str(&s), Ok(cube));

		let solved: String = FaceCube::new().into();
		assert_eq!(&solved[..CUBE_AREA], "YYYYYYYYY");
		assert_eq!(&solved[NUM_FACELETS - CUBE_AREA..], "MMMMMMMMM");
	}

	#[test]
	/// Bad cube strings are rejected
	fn string_errors() {
		assert_eq!(FaceCube::from_str("YYY"), Err(CubeError::Length(3)));
		let mut s: String = FaceCube::new().into();
		s.replace_range(10..11, "x");
		assert_eq!(FaceCube::from_str(&s), Err(CubeError::Color('x')));
	}

	#[test]
	/// The plain net has the up face on top
	fn plain_net() {
		let net = FaceCube::new().to_string();
		let lines: Vec<&str> = net.lines().collect();
		assert_eq!(lines.len(), 3 * CUBE_DIM);
		assert_eq!(lines[0].trim(), "Y Y Y");
		assert_eq!(lines[3].split_whitespace().collect::<String>(), "GGGRRRBBBMMM");
		assert_eq!(lines[8].trim(), "W W W");
	}
}
