//! Text rendering of parameters, status and results.

use orbit_client::RequestState;
use orbit_core::TrajectoryResult;
use orbit_core::units::seconds_to_minutes;
use orbit_params::{OrbitalParameters, ParameterField};

const PREVIEW_POINTS: usize = 5;

pub fn status_line(state: &RequestState) -> String {
    format!("Calculation Status: {}", state.label())
}

pub fn parameter_table(params: &OrbitalParameters) -> Vec<String> {
    ParameterField::ALL
        .into_iter()
        .map(|field| {
            format!(
                "{:<16} {:>12} {:<4} valid {}",
                field.name(),
                params.get(field),
                field.unit(),
                field.range()
            )
        })
        .collect()
}

/// Period, point count and a JSON preview of the first few positions.
pub fn result_summary(result: &TrajectoryResult) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Orbit Period: {:.2} seconds ({:.1} min)",
            result.period_seconds(),
            seconds_to_minutes(result.period_seconds())
        ),
        format!("Received {} position points.", result.len()),
    ];
    let head = &result.positions()[..result.len().min(PREVIEW_POINTS)];
    if let Ok(preview) = serde_json::to_string_pretty(head) {
        lines.extend(preview.lines().map(str::to_string));
    }
    lines
}

pub fn error_lines(message: &str) -> Vec<String> {
    std::iter::once("Error:".to_string())
        .chain(message.lines().map(|line| format!("  {line}")))
        .collect()
}

pub fn help() -> Vec<String> {
    let fields: Vec<&str> = ParameterField::ALL.iter().map(|f| f.name()).collect();
    vec![
        "show                  list current parameters".to_string(),
        "set <field> <value>   change one parameter".to_string(),
        "submit                send parameters to the propagation service".to_string(),
        "status                show the request status".to_string(),
        "quit                  leave the shell".to_string(),
        format!("fields: {}", fields.join(", ")),
    ]
}
