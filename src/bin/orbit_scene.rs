//! Offline scene builder: turn a saved propagation response into scene artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use orbit_visualizer::client::decode_response;
use orbit_visualizer::config::load_or_default;
use orbit_visualizer::export::write_scene_json;
use orbit_visualizer::logging::init_tracing;
use orbit_visualizer::scene::SceneTransformer;
use orbit_visualizer::settings;
use orbit_visualizer::shell::render;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Build a 3D scene from a saved propagation response (JSON)"
)]
struct Cli {
    /// Response body saved from the propagation service
    #[arg(long)]
    input: PathBuf,

    /// Client configuration (TOML or YAML) for scene style and output defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the scene description JSON here (`-` for stdout)
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

    #[arg(long, default_value_t = 1000)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    init_tracing("warn");
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    let body = fs::read(&cli.input)
        .with_context(|| format!("unable to read {}", cli.input.display()))?;
    let result = decode_response(&body)
        .with_context(|| format!("{} is not a valid propagation response", cli.input.display()))?;
    let scene = SceneTransformer::new(settings::scene_style(&config.scene)).transform(&result);

    let mut targets = settings::export_targets(&config.output);
    targets.png_size = (cli.width, cli.height);
    for (slot, value) in [
        (&mut targets.scene_json, cli.scene_out),
        (&mut targets.plotly_json, cli.plotly_out),
        (&mut targets.png, cli.png_out),
        (&mut targets.csv, cli.csv_out),
    ] {
        if value.is_some() {
            *slot = value;
        }
    }

    if targets.is_empty() {
        write_scene_json(Path::new("-"), &scene)?;
        return Ok(());
    }

    for line in render::result_summary(&result) {
        println!("{line}");
    }
    for path in targets.write_all(&result, &scene)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}
