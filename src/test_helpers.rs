use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tempdir::TempDir;

/// Writes `source` to `<name>.bf` inside a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_source(name: &str, source: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new("bf2mips").unwrap();

    let path = dir.path().join(format!("{name}.bf"));
    let mut file = File::create(&path).unwrap();
    file.write_all(source).unwrap();

    (dir, path)
}

pub fn read_output(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
