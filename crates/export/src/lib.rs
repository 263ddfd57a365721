//! Export helpers for JSON, CSV, and PNG artifacts.

pub mod plotly;
pub mod preview;
pub mod trajectory;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use orbit_scene::SceneDescription;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("filesystem error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("plot rendering failed: {0}")]
    Plot(String),
    #[error("invalid color '{0}', expected #rrggbb")]
    Color(String),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    ensure_parent(path)?;
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub(crate) fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write the scene description itself as pretty JSON.
pub fn write_scene_json(path: &Path, scene: &SceneDescription) -> Result<(), ExportError> {
    let mut writer = writer_for_path(path)?;
    serde_json::to_writer_pretty(&mut writer, scene)?;
    writeln!(writer)?;
    writer.flush()?;
    debug!(path = %path.display(), "wrote scene description");
    Ok(())
}
