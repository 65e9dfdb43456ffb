//! Matrix Draw CLI - Draw images or play effects on the key matrix.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser, Subcommand};

use matrix_draw::{
    EffectError, EffectRegistry, Frame, MatrixConfig, Player, read_rows, resolve_device,
};

/// Draws on the keyboard matrix.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// The path to the device. May just be the device identifier.
    device: String,
    /// Actual command
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Draw a static image
    Image {
        /// The image to draw. Should be 22x6, may be PNG, JPEG or CSV.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Play an effect until interrupted
    Effect {
        /// Effect name
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    let config = match &cli.config {
        Some(path) => MatrixConfig::load(path)?,
        None => MatrixConfig::default(),
    };
    let mut device = resolve_device(&cli.device, &config.devices_dir)?;

    match command {
        Command::Image { path } => {
            if !path.exists() {
                bail!("File not found: {}", path.display());
            }
            let frame = Frame::from_rows(read_rows(&path)?)
                .with_context(|| format!("Invalid image {}", path.display()))?;

            log::info!("Drawing {} on {}", path.display(), device.path().display());
            frame.draw(&mut device)?;
        }
        Command::Effect { name } => {
            let registry = EffectRegistry::with_config(&config)?;
            let effect = registry.get(&name).inspect_err(|err| {
                if let EffectError::NotFound(_) = err {
                    let names: Vec<&str> = registry.names().collect();
                    log::error!("Available effects: {}", names.join(", "));
                }
            })?;

            Player::new().play(effect, &mut device)?;
        }
    }

    Ok(())
}
