// src/write.rs
use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::trace;

/// `<dir>/<name>.<extension>`
pub fn output_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, extension))
}

/// Write `content` to `<dir>/<name>.<extension>`, replacing whatever was there.
///
/// - creates `dir` (and parents) when missing
/// - creates the file when missing, truncates it otherwise
///
/// Returns the path written.
pub fn write_output(dir: &Path, name: &str, extension: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating output directory {:?}", dir))?;

    let path = output_path(dir, name, extension);
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("opening {:?}", path))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("writing {:?}", path))?;
    file.flush().with_context(|| format!("flushing {:?}", path))?;

    trace!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(path)
}
