//! A 3x3x3 cube stored as six faces, and a brute force solver for it.
//!
//! ```
//! use facecube::prelude::*;
//!
//! let mut cube = FaceCube::new();
//! cube.apply_turns(parse_turns("F").unwrap());
//! assert!(!cube.is_solved());
//!
//! let solution = Solver::new(cube.clone()).solve(4).unwrap();
//! assert_eq!(solution, SolveOutcome::Solved(parse_turns("F F F").unwrap()));
//!
//! cube.apply_turns(solution.turns().unwrap().to_vec());
//! assert!(cube.is_solved());
//! assert_eq!(cube.face(Side::Front), &Face::uniform(Color::Red));
//! assert_eq!(cube.match_score(), NUM_FACELETS);
//! ```
//!
//! Turns are always clockwise quarter turns, a counterclockwise turn is the
//! same turn three times.

pub mod cube;
pub mod snapshot;
pub mod solve;

pub mod prelude {
	// Items only, a glob over `cube` would also pull in the `facecube` module
	// and shadow the crate name for `use facecube::prelude::*` users.
	pub use crate::cube::{
		face::*, facecube::FaceCube, get_ansii_color, turn::*, Color, CubeError, RubiksCube, Side,
		CUBE_AREA, CUBE_DIM, NUM_FACELETS, NUM_SIDES, SIDE_COLORS,
	};
	pub use crate::solve::{bruteforce::*, counter::*, *};
}
