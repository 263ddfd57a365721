//! Display defaults for the two traces and the layout.

use crate::{Axis, Camera, Margin, TraceStyle};

/// Presentation knobs applied by the transformer. `Default` reproduces the stock look.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub title: String,
    pub trajectory_name: String,
    pub trajectory: TraceStyle,
    pub body_name: String,
    pub body: TraceStyle,
    pub camera: Camera,
    pub margin: Margin,
    pub show_legend: bool,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            title: "Satellite Orbit (3D Visualization)".to_string(),
            trajectory_name: "Satellite Orbit".to_string(),
            trajectory: TraceStyle {
                color: "#1f77b4".to_string(),
                size: 4.0,
            },
            body_name: "Earth (Center)".to_string(),
            body: TraceStyle {
                color: "#2ca02c".to_string(),
                size: 8.0,
            },
            camera: Camera {
                eye: [1.5, 1.5, 1.5],
            },
            margin: Margin {
                left: 0,
                right: 0,
                bottom: 0,
                top: 40,
            },
            show_legend: true,
        }
    }
}

pub(crate) fn km_axis(name: &str) -> Axis {
    Axis {
        label: format!("{name} (km)"),
    }
}
