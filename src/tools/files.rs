use log::{error, info};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::options::Mode;
use crate::compression::artifact::Artifact;
use crate::error::{Result, SeqError};

/// File name suffix written by each operation.
pub fn suffix(mode: Mode) -> &'static str {
    match mode {
        Mode::Transform => "_bwt.txt",
        Mode::Invert => "_inversion.txt",
        Mode::Compress => "_compressed.txt",
        Mode::CompressBwt => "_bwt_compressed.txt",
        Mode::Decompress => "_decompressed.txt",
        Mode::DecompressInvert => "_decompressed_original.txt",
    }
}

/// Output path next to `input`: the input's extension is replaced by the mode's suffix.
pub fn output_path(input: &Path, mode: Mode) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", stem, suffix(mode)))
}

/// Read a whole input file as text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        error!("Cannot read from the file {}", path.display());
        SeqError::Io(e)
    })
}

/// Write `text`, refusing to replace an existing file unless `force` is set.
pub fn write_text(path: &Path, text: &str, force: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut f_out = options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            error!("{} exists, use --force to overwrite it.", path.display());
        }
        SeqError::Io(e)
    })?;
    f_out.write_all(text.as_bytes())?;
    info!("Wrote {}.", path.display());
    Ok(())
}

/// Read and parse an artifact file.
pub fn read_artifact(path: &Path) -> Result<Artifact> {
    let raw = fs::read(path)?;
    let text = String::from_utf8(raw)
        .map_err(|_| SeqError::MalformedArtifact("file is not valid UTF-8".to_string()))?;
    Artifact::deserialize(&text)
}

/// Serialize and write an artifact file.
pub fn write_artifact(path: &Path, artifact: &Artifact, force: bool) -> Result<()> {
    write_text(path, &artifact.serialize()?, force)
}
