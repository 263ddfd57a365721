//! Conversion from loaded configuration into runtime components.

use std::time::Duration;

use orbit_client::{HttpComputeService, RequestController, ServiceError, ServiceSettings};
use orbit_config::{ClientConfig, OutputConfig, ParameterDefaults, SceneConfig, ServiceConfig};
use orbit_params::{OrbitalParameters, ParameterModel, ValidationError};
use orbit_scene::{Camera, SceneStyle, SceneTransformer};
use thiserror::Error;

use crate::shell::{ExportTargets, Session};

/// Errors surfaced while assembling a session from configuration.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("configured parameters are invalid: {0}")]
    Parameters(#[from] ValidationError),
    #[error("unable to create HTTP client: {0}")]
    Service(#[from] ServiceError),
    #[error("service timeout of {0} seconds is too large")]
    Timeout(f64),
}

/// Zero, negative or non-finite timeouts disable the deadline.
pub fn service_settings(config: &ServiceConfig) -> Result<ServiceSettings, SetupError> {
    let timeout = match config.timeout_secs {
        Some(secs) if secs.is_finite() && secs > 0.0 => Some(
            Duration::try_from_secs_f64(secs).map_err(|_| SetupError::Timeout(secs))?,
        ),
        _ => None,
    };
    Ok(ServiceSettings {
        base_url: config.base_url.clone(),
        compute_path: config.compute_path.clone(),
        health_path: config.health_path.clone(),
        timeout,
    })
}

/// Raw configured elements; range checks happen in [`ParameterModel::new`].
pub fn initial_parameters(defaults: &ParameterDefaults) -> OrbitalParameters {
    OrbitalParameters {
        semi_major_axis: defaults.semi_major_axis,
        eccentricity: defaults.eccentricity,
        inclination: defaults.inclination,
        raan: defaults.raan,
        argp: defaults.argp,
        true_anomaly: defaults.true_anomaly,
    }
}

pub fn scene_style(config: &SceneConfig) -> SceneStyle {
    let mut style = SceneStyle::default();
    if let Some(title) = &config.title {
        style.title = title.clone();
    }
    if let Some(name) = &config.trajectory_name {
        style.trajectory_name = name.clone();
    }
    if let Some(color) = &config.trajectory_color {
        style.trajectory.color = color.clone();
    }
    if let Some(width) = config.trajectory_width {
        style.trajectory.size = width;
    }
    if let Some(name) = &config.body_name {
        style.body_name = name.clone();
    }
    if let Some(color) = &config.body_color {
        style.body.color = color.clone();
    }
    if let Some(size) = config.body_size {
        style.body.size = size;
    }
    if let Some(eye) = config.camera_eye {
        style.camera = Camera { eye };
    }
    if let Some(show) = config.show_legend {
        style.show_legend = show;
    }
    style
}

pub fn export_targets(config: &OutputConfig) -> ExportTargets {
    ExportTargets {
        scene_json: config.scene_json.clone(),
        plotly_json: config.plotly_json.clone(),
        png: config.png.clone(),
        csv: config.csv.clone(),
        png_size: (config.png_width, config.png_height),
    }
}

/// Assemble an HTTP-backed session from a loaded configuration.
pub fn build_session(config: &ClientConfig) -> Result<Session<HttpComputeService>, SetupError> {
    let model = ParameterModel::new(initial_parameters(&config.parameters))?;
    let service = HttpComputeService::new(service_settings(&config.service)?)?;
    let controller =
        RequestController::new(service).with_max_message_chars(config.service.max_error_chars);
    Ok(Session::new(
        model,
        controller,
        SceneTransformer::new(scene_style(&config.scene)),
        export_targets(&config.output),
    ))
}
