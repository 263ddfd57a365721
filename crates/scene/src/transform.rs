//! Trajectory → scene conversion.

use orbit_core::{TrajectoryPoint, TrajectoryResult};

use crate::style::{SceneStyle, km_axis};
use crate::{RenderMode, SceneDescription, SceneLayout, Trace, TraceKind};

/// Builds scene descriptions with a fixed style.
#[derive(Debug, Clone, Default)]
pub struct SceneTransformer {
    style: SceneStyle,
}

impl SceneTransformer {
    pub fn new(style: SceneStyle) -> Self {
        Self { style }
    }

    /// Convert a trajectory into a trajectory polyline plus a marker at the body centre.
    ///
    /// Positions are copied in propagation order; an empty trajectory yields an
    /// empty polyline rather than an error.
    pub fn transform(&self, result: &TrajectoryResult) -> SceneDescription {
        let style = &self.style;
        let trajectory = Trace {
            kind: TraceKind::Trajectory,
            name: style.trajectory_name.clone(),
            mode: RenderMode::Line,
            points: result.positions().to_vec(),
            style: style.trajectory.clone(),
        };
        let body = Trace {
            kind: TraceKind::ReferenceBody,
            name: style.body_name.clone(),
            mode: RenderMode::Point,
            points: vec![TrajectoryPoint::ORIGIN],
            style: style.body.clone(),
        };

        SceneDescription {
            traces: vec![trajectory, body],
            layout: SceneLayout {
                title: style.title.clone(),
                x_axis: km_axis("X"),
                y_axis: km_axis("Y"),
                z_axis: km_axis("Z"),
                equal_aspect: true,
                aspect_ratio: [1.0, 1.0, 1.0],
                camera: style.camera,
                margin: style.margin,
                show_legend: style.show_legend,
            },
        }
    }
}

/// Transform with the default style.
pub fn transform(result: &TrajectoryResult) -> SceneDescription {
    SceneTransformer::default().transform(result)
}
