use crate::cube::*;

use const_for::const_for;

/// The row-major grid of a single face
pub type Grid = [[Color; CUBE_DIM]; CUBE_DIM];

/// The three facelets along one border of a face
pub type Strip = [Color; CUBE_DIM];

/// The border of a face which touches a neighbouring face
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIter)]
pub enum EdgeSide {
	Top,
	Bottom,
	Left,
	Right,
}

/// One side of the cube as seen when looking straight at it in the net.
///
/// `cells[row][col]` with row 0 on top and col 0 on the left.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct Face {
	cells: Grid,
}

impl Face {
	/// A face carrying a single color, i.e. a solved face
	pub const fn uniform(color: Color) -> Self {
		Self {
			cells: [[color; CUBE_DIM]; CUBE_DIM],
		}
	}

	/// Alternating colors with `a` on the corners and the center
	pub const fn checker(a: Color, b: Color) -> Self {
		let mut cells = [[a; CUBE_DIM]; CUBE_DIM];

		const_for!(row in 0..CUBE_DIM => {
			const_for!(col in 0..CUBE_DIM => {
				if (row + col) % 2 == 1 {
					cells[row][col] = b;
				}
			});
		});

		Self { cells }
	}

	pub const fn from_grid(cells: Grid) -> Self {
		Self { cells }
	}

	pub const fn grid(&self) -> &Grid {
		&self.cells
	}

	pub const fn get(&self, row: usize, col: usize) -> Color {
		self.cells[row][col]
	}

	/// The face turned by a quarter clockwise.
	/// The facelet at (row, col) lands on (col, 2 - row).
	pub const fn rotated(&self) -> Self {
		let mut cells = self.cells;

		const_for!(row in 0..CUBE_DIM => {
			const_for!(col in 0..CUBE_DIM => {
				cells[col][CUBE_DIM - 1 - row] = self.cells[row][col];
			});
		});

		Self { cells }
	}

	pub fn rotate_clockwise(&mut self) {
		*self = self.rotated();
	}

	/// Read the strip along the given border.
	/// Rows are read left to right, columns top to bottom.
	pub fn edge(&self, side: EdgeSide) -> Strip {
		match side {
			EdgeSide::Top => self.cells[0],
			EdgeSide::Bottom => self.cells[CUBE_DIM - 1],
			EdgeSide::Left => self.cells.map(|row| row[0]),
			EdgeSide::Right => self.cells.map(|row| row[CUBE_DIM - 1]),
		}
	}

	/// Overwrite the strip along the given border, same order as [`Face::edge`].
	pub fn set_edge(&mut self, side: EdgeSide, strip: Strip) {
		match side {
			EdgeSide::Top => self.cells[0] = strip,
			EdgeSide::Bottom => self.cells[CUBE_DIM - 1] = strip,
			EdgeSide::Left => {
				for (row, color) in self.cells.iter_mut().zip(strip) {
					row[0] = color;
				}
			}
			EdgeSide::Right => {
				for (row, color) in self.cells.iter_mut().zip(strip) {
					row[CUBE_DIM - 1] = color;
				}
			}
		}
	}

	/// Number of facelets which agree with the other face
	pub fn matching(&self, other: &Face) -> usize {
		self.cells
			.iter()
			.flatten()
			.zip(other.cells.iter().flatten())
			.filter(|(a, b)| a == b)
			.count()
	}
}

// ===== Tests =====
