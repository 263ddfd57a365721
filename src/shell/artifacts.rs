use std::path::PathBuf;

use orbit_core::TrajectoryResult;
use orbit_export::{ExportError, plotly, preview, trajectory, write_scene_json};
use orbit_scene::SceneDescription;

/// Files written after each successful request. Unset targets are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTargets {
    pub scene_json: Option<PathBuf>,
    pub plotly_json: Option<PathBuf>,
    pub png: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub png_size: (u32, u32),
}

impl Default for ExportTargets {
    fn default() -> Self {
        Self {
            scene_json: None,
            plotly_json: None,
            png: None,
            csv: None,
            png_size: (1_000, 800),
        }
    }
}

impl ExportTargets {
    pub fn is_empty(&self) -> bool {
        self.scene_json.is_none()
            && self.plotly_json.is_none()
            && self.png.is_none()
            && self.csv.is_none()
    }

    /// Write every configured artifact and return the paths written.
    pub fn write_all(
        &self,
        result: &TrajectoryResult,
        scene: &SceneDescription,
    ) -> Result<Vec<PathBuf>, ExportError> {
        let mut written = Vec::new();
        if let Some(path) = &self.scene_json {
            write_scene_json(path, scene)?;
            written.push(path.clone());
        }
        if let Some(path) = &self.plotly_json {
            plotly::write_figure(path, scene)?;
            written.push(path.clone());
        }
        if let Some(path) = &self.csv {
            trajectory::write_csv(path, result)?;
            written.push(path.clone());
        }
        if let Some(path) = &self.png {
            preview::render_png(path, scene, self.png_size)?;
            written.push(path.clone());
        }
        Ok(written)
    }
}
