//! Wordlist file export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write wordlist: {0}")]
    Write(#[from] std::io::Error),
}

/// Writes candidates to `path`, one per line, newline-separated, UTF-8, with
/// no trailing metadata. An existing file is overwritten.
pub fn write_wordlist<P: AsRef<Path>>(path: P, entries: &[String]) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(entry.as_bytes())?;
    }
    writer.flush()?;

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist exported: {} candidates to {}", entries.len(), path.display());

    Ok(())
}
