//! Plotly figure JSON (`data` + `layout`) for browser rendering.

use std::io::Write;
use std::path::Path;

use orbit_scene::{RenderMode, SceneDescription, Trace};
use serde::Serialize;
use tracing::debug;

use crate::{ExportError, writer_for_path};

#[derive(Debug, Serialize)]
pub struct Figure {
    pub data: Vec<Scatter3d>,
    pub layout: Layout,
}

#[derive(Debug, Serialize)]
pub struct Scatter3d {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
}

#[derive(Debug, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Serialize)]
pub struct MarkerStyle {
    pub color: String,
    pub size: f64,
    pub symbol: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Layout {
    pub title: Title,
    pub autosize: bool,
    pub scene: Scene,
    pub margin: Margin,
    pub showlegend: bool,
}

#[derive(Debug, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct Scene {
    pub xaxis: AxisSpec,
    pub yaxis: AxisSpec,
    pub zaxis: AxisSpec,
    pub aspectmode: &'static str,
    pub aspectratio: Xyz,
    pub camera: CameraSpec,
}

#[derive(Debug, Serialize)]
pub struct AxisSpec {
    pub title: Title,
}

#[derive(Debug, Serialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Serialize)]
pub struct CameraSpec {
    pub eye: Xyz,
}

#[derive(Debug, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

/// Map a scene description onto a Plotly figure.
pub fn figure(scene: &SceneDescription) -> Figure {
    let layout = &scene.layout;
    let [ax, ay, az] = layout.aspect_ratio;
    let [ex, ey, ez] = layout.camera.eye;
    Figure {
        data: scene.traces.iter().map(scatter).collect(),
        layout: Layout {
            title: Title {
                text: layout.title.clone(),
            },
            autosize: true,
            scene: Scene {
                xaxis: axis(&layout.x_axis.label),
                yaxis: axis(&layout.y_axis.label),
                zaxis: axis(&layout.z_axis.label),
                aspectmode: if layout.equal_aspect { "manual" } else { "auto" },
                aspectratio: Xyz {
                    x: ax,
                    y: ay,
                    z: az,
                },
                camera: CameraSpec {
                    eye: Xyz {
                        x: ex,
                        y: ey,
                        z: ez,
                    },
                },
            },
            margin: Margin {
                l: layout.margin.left,
                r: layout.margin.right,
                b: layout.margin.bottom,
                t: layout.margin.top,
            },
            showlegend: layout.show_legend,
        },
    }
}

fn axis(label: &str) -> AxisSpec {
    AxisSpec {
        title: Title {
            text: label.to_string(),
        },
    }
}

fn scatter(trace: &Trace) -> Scatter3d {
    let (line, marker, mode) = match trace.mode {
        RenderMode::Line => (
            Some(LineStyle {
                color: trace.style.color.clone(),
                width: trace.style.size,
            }),
            None,
            "lines",
        ),
        RenderMode::Point => (
            None,
            Some(MarkerStyle {
                color: trace.style.color.clone(),
                size: trace.style.size,
                symbol: "circle",
            }),
            "markers",
        ),
    };
    Scatter3d {
        kind: "scatter3d",
        name: trace.name.clone(),
        mode,
        x: trace.points.iter().map(|p| p.x).collect(),
        y: trace.points.iter().map(|p| p.y).collect(),
        z: trace.points.iter().map(|p| p.z).collect(),
        line,
        marker,
    }
}

/// Write the Plotly figure for `scene` as pretty JSON.
pub fn write_figure(path: &Path, scene: &SceneDescription) -> Result<(), ExportError> {
    let mut writer = writer_for_path(path)?;
    serde_json::to_writer_pretty(&mut writer, &figure(scene))?;
    writeln!(writer)?;
    writer.flush()?;
    debug!(path = %path.display(), "wrote plotly figure");
    Ok(())
}
