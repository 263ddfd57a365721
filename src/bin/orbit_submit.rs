//! One-shot client: submit the configured elements, wait for the outcome, export the scene.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use clap::Parser;
use orbit_visualizer::client::RequestState;
use orbit_visualizer::config::load_or_default;
use orbit_visualizer::logging::init_tracing;
use orbit_visualizer::params::ParameterField;
use orbit_visualizer::settings;
use orbit_visualizer::shell::{Command, Flow, render};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Submit orbital elements to the propagation service and export the resulting scene"
)]
struct Cli {
    /// Client configuration (TOML or YAML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the service base URL
    #[arg(long)]
    url: Option<String>,

    /// Parameter override, e.g. `--set eccentricity=0.2` (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    overrides: Vec<String>,

    /// Write the scene description JSON here
    #[arg(long)]
    scene_out: Option<PathBuf>,

    /// Write a Plotly figure JSON here
    #[arg(long)]
    plotly_out: Option<PathBuf>,

    /// Render a PNG preview here
    #[arg(long)]
    png_out: Option<PathBuf>,

    /// Write the trajectory CSV here
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Only query the service health endpoint
    #[arg(long, default_value_t = false)]
    ping: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing("info");
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.service.base_url = url;
    }
    let mut session = settings::build_session(&config)?;

    if cli.ping {
        let message = session.controller().service().ping().await?;
        println!("{message}");
        return Ok(ExitCode::SUCCESS);
    }

    for item in &cli.overrides {
        let (name, raw) = item
            .split_once('=')
            .ok_or_else(|| anyhow!("expected FIELD=VALUE, got '{item}'"))?;
        let field: ParameterField = name.parse()?;
        let params = session
            .set(field, raw)
            .with_context(|| format!("parameter override '{item}' rejected"))?;
        println!("{field} = {}", params.get(field));
    }

    let targets = session.targets_mut();
    override_target(&mut targets.scene_json, cli.scene_out);
    override_target(&mut targets.plotly_json, cli.plotly_out);
    override_target(&mut targets.png, cli.png_out);
    override_target(&mut targets.csv, cli.csv_out);

    print_lines(&render::parameter_table(&session.parameters()));

    let mut subscription = session.controller().subscribe();
    if let Flow::Continue(lines) = session.handle(Command::Submit) {
        print_lines(&lines);
    }

    loop {
        let change = subscription
            .next()
            .await
            .context("controller stopped before the request settled")?;
        print_lines(&session.observe(&change));
        match change.state {
            RequestState::Succeeded { .. } if session.export_error().is_some() => {
                return Ok(ExitCode::FAILURE);
            }
            RequestState::Succeeded { .. } => return Ok(ExitCode::SUCCESS),
            RequestState::Failed { .. } => return Ok(ExitCode::FAILURE),
            RequestState::Idle | RequestState::InFlight { .. } => {}
        }
    }
}

fn override_target(slot: &mut Option<PathBuf>, value: Option<PathBuf>) {
    if value.is_some() {
        *slot = value;
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
