//! Static PNG preview of a scene using a plotters 3D chart.
//!
//! All three axes share one symmetric range so the orbit keeps its true shape.

use std::fmt::Display;
use std::path::Path;

use orbit_core::constants::EARTH_RADIUS_KM;
use orbit_core::units::deg_to_rad;
use orbit_scene::{RenderMode, SceneDescription};
use plotters::prelude::*;
use tracing::debug;

use crate::{ExportError, ensure_parent};

/// Render `scene` to a PNG of `size` pixels.
pub fn render_png(
    path: &Path,
    scene: &SceneDescription,
    size: (u32, u32),
) -> Result<(), ExportError> {
    ensure_parent(path)?;
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let half = half_span_km(scene);
    let caption_font = FontDesc::new(select_font_family(), 22.0, FontStyle::Bold);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(scene.layout.title.clone(), caption_font)
        .build_cartesian_3d(-half..half, -half..half, -half..half)
        .map_err(plot_err)?;

    let camera = scene.layout.camera;
    chart.with_projection(|mut pb| {
        pb.yaw = deg_to_rad(camera.azimuth_deg());
        pb.pitch = deg_to_rad(camera.elevation_deg());
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()
        .map_err(plot_err)?;

    for trace in &scene.traces {
        if trace.points.is_empty() {
            continue;
        }
        let color = parse_hex_color(&trace.style.color)?;
        let coords: Vec<(f64, f64, f64)> = trace.points.iter().map(|p| (p.x, p.y, p.z)).collect();
        let size_px = trace.style.size.max(1.0).round() as u32;
        let anno = match trace.mode {
            RenderMode::Line => chart.draw_series(std::iter::once(PathElement::new(
                coords,
                ShapeStyle::from(&color).stroke_width(size_px),
            ))),
            RenderMode::Point => chart.draw_series(
                coords
                    .into_iter()
                    .map(|c| Circle::new(c, size_px, color.filled())),
            ),
        }
        .map_err(plot_err)?;
        anno.label(trace.name.clone()).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], ShapeStyle::from(&color).stroke_width(3))
        });
    }

    if scene.layout.show_legend {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    debug!(path = %path.display(), width = size.0, height = size.1, "rendered scene preview");
    Ok(())
}

/// Parse a `#rrggbb` color.
pub fn parse_hex_color(text: &str) -> Result<RGBColor, ExportError> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ExportError::Color(text.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ExportError::Color(text.to_string()))
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

fn half_span_km(scene: &SceneDescription) -> f64 {
    (scene.extent_km() * 1.1).max(EARTH_RADIUS_KM)
}

fn plot_err(err: impl Display) -> ExportError {
    ExportError::Plot(err.to_string())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
