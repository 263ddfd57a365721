//! Renderer-agnostic scene descriptions built from propagated trajectories.
//!
//! A scene is a list of named traces plus a camera/axis layout. The renderer
//! on the other side only has to understand polylines, point markers, a per-axis
//! label, an aspect ratio and an initial camera eye.

pub mod style;
pub mod transform;

use orbit_core::TrajectoryPoint;
use orbit_core::units::rad_to_deg;
use orbit_core::vector;
use serde::{Deserialize, Serialize};

pub use style::SceneStyle;
pub use transform::{SceneTransformer, transform};

/// How a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Connected polyline in point order.
    Line,
    /// Individual markers.
    Point,
}

/// Role of a trace within the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    Trajectory,
    ReferenceBody,
}

/// Display color (CSS hex) and line width or marker size, depending on mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStyle {
    pub color: String,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub kind: TraceKind,
    pub name: String,
    pub mode: RenderMode,
    pub points: Vec<TrajectoryPoint>,
    pub style: TraceStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
}

/// Camera eye position in normalized scene units, looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: [f64; 3],
}

impl Camera {
    /// Angle of the eye around the z axis, measured from +x (degrees).
    pub fn azimuth_deg(&self) -> f64 {
        rad_to_deg(self.eye[1].atan2(self.eye[0]))
    }

    /// Angle of the eye above the x-y plane (degrees).
    pub fn elevation_deg(&self) -> f64 {
        let horizontal = self.eye[0].hypot(self.eye[1]);
        rad_to_deg(self.eye[2].atan2(horizontal))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
    pub top: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub z_axis: Axis,
    /// Always true for orbit scenes; unequal axes turn ellipses into non-physical shapes.
    pub equal_aspect: bool,
    pub aspect_ratio: [f64; 3],
    pub camera: Camera,
    pub margin: Margin,
    pub show_legend: bool,
}

/// Everything a renderer needs to draw one propagated orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub traces: Vec<Trace>,
    pub layout: SceneLayout,
}

impl SceneDescription {
    pub fn trace(&self, kind: TraceKind) -> Option<&Trace> {
        self.traces.iter().find(|trace| trace.kind == kind)
    }

    pub fn trajectory(&self) -> Option<&Trace> {
        self.trace(TraceKind::Trajectory)
    }

    pub fn reference_body(&self) -> Option<&Trace> {
        self.trace(TraceKind::ReferenceBody)
    }

    /// Largest absolute coordinate over all traces (km).
    pub fn extent_km(&self) -> f64 {
        self.traces
            .iter()
            .flat_map(|trace| trace.points.iter())
            .map(|p| vector::max_abs(&p.as_vector()))
            .fold(0.0, f64::max)
    }
}
