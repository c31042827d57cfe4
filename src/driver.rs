use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

use crate::{compile_source, frontend::parser::ParseError};

pub const OUTPUT_EXTENSION: &str = "asm";

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("compile error: {0}")]
    Compile(#[from] ParseError),
}

/// `prog.bf` becomes `prog.asm`; a path without extension gains one.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

// Written next to the target so the rename stays on one filesystem.
fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_owned();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}

/// Compiles `input` into `output` (or the derived path when `None`).
///
/// The output file is only touched once the whole program has compiled.
pub fn compile_file(
    input: &Path,
    output: Option<&Path>,
) -> Result<PathBuf, DriverError> {
    let output = output.map_or_else(|| output_path_for(input), Path::to_path_buf);

    let source = fs::read(input).map_err(|source| DriverError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", source.len(), input.display());

    let asm = compile_source(&source)?;

    write_atomically(&output, &asm).map_err(|source| DriverError::Write {
        path: output.clone(),
        source,
    })?;
    info!("wrote {}", output.display());

    Ok(output)
}
