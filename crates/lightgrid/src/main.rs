//! Lightgrid - lay out a grid scene and print every pass as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use layout::GridConfig;
use lightgrid::{run_scene, Scene};

/// Lightgrid - fixed-placement grid layout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a scene file and replay its viewport changes
    Layout {
        /// Scene JSON file
        scene: PathBuf,

        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,
    },
    /// Print the default grid options
    Defaults,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Layout { scene, pretty } => {
            info!("Lightgrid v{}", lightgrid::VERSION);
            let scene = Scene::load(&scene)?;
            let report = run_scene(&scene)?;
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", json);
        }
        Command::Defaults => {
            println!("{}", serde_json::to_string_pretty(&GridConfig::default())?);
        }
    }

    Ok(())
}
