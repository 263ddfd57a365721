//! Line-oriented presentation shell.
//!
//! The shell owns the parameter model and the request controller for one
//! session. Commands edit or submit parameters; every observed controller
//! transition is rendered as text and, on success, turned into a scene and the
//! configured artifacts.

mod artifacts;
mod command;
pub mod render;

pub use artifacts::ExportTargets;
pub use command::{Command, CommandError, parse_command};

use orbit_client::{ComputeService, RequestController, RequestState, StateChange};
use orbit_params::{OrbitalParameters, ParameterField, ParameterModel, ValidationError};
use orbit_scene::{SceneDescription, SceneTransformer};
use tracing::warn;

/// What the driver should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(Vec<String>),
    Quit,
}

pub struct Session<S> {
    model: ParameterModel,
    controller: RequestController<S>,
    transformer: SceneTransformer,
    targets: ExportTargets,
    last_scene: Option<SceneDescription>,
    export_error: Option<String>,
}

impl<S: ComputeService> Session<S> {
    pub fn new(
        model: ParameterModel,
        controller: RequestController<S>,
        transformer: SceneTransformer,
        targets: ExportTargets,
    ) -> Self {
        Self {
            model,
            controller,
            transformer,
            targets,
            last_scene: None,
            export_error: None,
        }
    }

    pub fn parameters(&self) -> OrbitalParameters {
        self.model.get()
    }

    pub fn controller(&self) -> &RequestController<S> {
        &self.controller
    }

    pub fn targets_mut(&mut self) -> &mut ExportTargets {
        &mut self.targets
    }

    /// Scene built from the most recent successful request.
    pub fn last_scene(&self) -> Option<&SceneDescription> {
        self.last_scene.as_ref()
    }

    /// Artifact failure from the most recent successful request, if any.
    pub fn export_error(&self) -> Option<&str> {
        self.export_error.as_deref()
    }

    /// Apply one parameter edit; a rejected edit leaves every parameter unchanged.
    pub fn set(
        &mut self,
        field: ParameterField,
        raw: &str,
    ) -> Result<OrbitalParameters, ValidationError> {
        self.model.update(field, raw)
    }

    pub fn handle_line(&mut self, line: &str) -> Flow {
        match parse_command(line) {
            Ok(command) => self.handle(command),
            Err(err) => Flow::Continue(vec![err.to_string()]),
        }
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        let lines = match command {
            Command::Empty => Vec::new(),
            Command::Help => render::help(),
            Command::Show => render::parameter_table(&self.model.get()),
            Command::Status => vec![render::status_line(&self.controller.current_state())],
            Command::Set { field, raw } => match self.set(field, &raw) {
                Ok(params) => vec![format!("{field} = {}", params.get(field))],
                Err(err) => vec![format!(
                    "rejected {}: {} ({err})",
                    err.field(),
                    err.reason()
                )],
            },
            Command::Submit => {
                let ticket = self.controller.submit(self.model.get());
                vec![format!("submitted request #{}", ticket.sequence())]
            }
            Command::Quit => return Flow::Quit,
        };
        Flow::Continue(lines)
    }

    /// Render one controller transition, building the scene and writing artifacts on success.
    pub fn observe(&mut self, change: &StateChange) -> Vec<String> {
        let mut lines = vec![render::status_line(&change.state)];
        match &change.state {
            RequestState::Succeeded { result } => {
                lines.extend(render::result_summary(result));
                let scene = self.transformer.transform(result);
                match self.targets.write_all(result, &scene) {
                    Ok(paths) => {
                        self.export_error = None;
                        lines.extend(
                            paths
                                .iter()
                                .map(|path| format!("wrote {}", path.display())),
                        );
                    }
                    Err(err) => {
                        warn!("artifact export failed: {err}");
                        lines.push(format!("export failed: {err}"));
                        self.export_error = Some(err.to_string());
                    }
                }
                self.last_scene = Some(scene);
            }
            RequestState::Failed { message } => lines.extend(render::error_lines(message)),
            RequestState::Idle | RequestState::InFlight { .. } => {}
        }
        lines
    }
}
