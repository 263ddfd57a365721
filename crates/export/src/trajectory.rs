//! Trajectory CSV export.

use std::path::Path;

use orbit_core::TrajectoryResult;
use serde::Serialize;
use tracing::debug;

use crate::{ExportError, writer_for_path};

#[derive(Debug, Serialize)]
struct Row {
    index: usize,
    x_km: f64,
    y_km: f64,
    z_km: f64,
}

/// Write positions as `index,x_km,y_km,z_km` rows in propagation order.
pub fn write_csv(path: &Path, result: &TrajectoryResult) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer_for_path(path)?);
    if result.is_empty() {
        writer.write_record(["index", "x_km", "y_km", "z_km"])?;
    }
    for (index, point) in result.positions().iter().enumerate() {
        writer.serialize(Row {
            index,
            x_km: point.x,
            y_km: point.y,
            z_km: point.z,
        })?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = result.len(), "wrote trajectory CSV");
    Ok(())
}
