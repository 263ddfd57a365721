//! Interactive shell: edit parameters, submit, and watch the request lifecycle.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use orbit_visualizer::config::load_or_default;
use orbit_visualizer::logging::init_tracing;
use orbit_visualizer::settings;
use orbit_visualizer::shell::{Flow, render};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(author, version, about = "Interactive orbit visualizer shell")]
struct Cli {
    /// Client configuration (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the service base URL
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("warn");
    let cli = Cli::parse();
    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.service.base_url = url;
    }

    let mut session = settings::build_session(&config)?;
    let mut subscription = session.controller().subscribe();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!(
        "Interactive Orbit Visualizer ({})",
        session.controller().service().settings().compute_url()
    );
    print_lines(&render::parameter_table(&session.parameters()));
    println!("{}", render::status_line(&session.controller().current_state()));
    prompt()?;

    loop {
        tokio::select! {
            line = input.next_line() => {
                let Some(line) = line? else { break };
                match session.handle_line(&line) {
                    Flow::Continue(lines) => print_lines(&lines),
                    Flow::Quit => break,
                }
                prompt()?;
            }
            Some(change) = subscription.next() => {
                println!();
                print_lines(&session.observe(&change));
                prompt()?;
            }
        }
    }
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("orbit> ");
    std::io::stdout().flush()
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
