//! Binary snapshots of a cube, so a scramble can be handed from one run to the next.

use std::{
	fs::File,
	io::{BufReader, BufWriter, Write},
	path::Path,
};

use crate::cube::facecube::FaceCube;

#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
	#[error("Could not access the snapshot: {0}")]
	Io(#[from] std::io::Error),
	#[error("The snapshot is corrupted: {0}")]
	Decode(#[from] bincode::Error),
}

pub fn save<P: AsRef<Path>>(path: P, cube: &FaceCube) -> Result<(), SnapshotError> {
	let mut writer = BufWriter::new(File::create(path)?);
	bincode::serialize_into(&mut writer, cube)?;
	writer.flush()?;
	Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<FaceCube, SnapshotError> {
	let file = File::open(path)?;
	let cube = bincode::deserialize_from(BufReader::new(file))?;
	Ok(cube)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::{turn::*, RubiksCube};
	use tempfile::tempdir;

	#[test]
	/// A saved cube loads back unchanged
	fn save_and_load() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("cube.bin");

		let cube = FaceCube::from(parse_turns("F R U B").unwrap());
		save(&path, &cube).unwrap();

		let loaded = load(&path).unwrap();
		assert_eq!(loaded, cube);
		assert!(!loaded.is_solved());
	}

	#[test]
	/// Missing and garbled files are reported
	fn broken_snapshots() {
		let dir = tempdir().unwrap();

		let missing = dir.path().join("missing.bin");
		assert!(matches!(load(&missing), Err(SnapshotError::Io(_))));

		let garbage = dir.path().join("garbage.bin");
		std::fs::write(&garbage, [0xffu8; 7]).unwrap();
		assert!(matches!(load(&garbage), Err(SnapshotError::Decode(_))));
	}
}
