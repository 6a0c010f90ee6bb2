use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use carousel_config::{SettingsLoad, SettingsLoader, SettingsWarnings};
use carousel_model::{Measurement, WrapMode};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod clock;
mod replay;
mod script;

use replay::{Replay, Stage};

#[derive(Parser)]
#[command(
    name = "carouselctl",
    about = "Replay carousel interactions headlessly and check settings files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a JSON script of interaction steps and print one JSON frame per render
    Replay {
        /// Path to the script (a JSON array of steps)
        script: PathBuf,
        #[arg(long, default_value_t = 4)]
        slides: usize,
        /// Slide width in pixels
        #[arg(long, default_value_t = 320.0)]
        width: f32,
        /// Gap between slides in pixels
        #[arg(long, default_value_t = 0.0)]
        gap: f32,
        /// Settings file (TOML with a [carousel] table)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Wrap around at the ends regardless of settings
        #[arg(long = "loop")]
        looping: bool,
        /// Render without prev/next controls
        #[arg(long)]
        no_controls: bool,
        /// Render without indicator dots
        #[arg(long)]
        no_indicators: bool,
    },
    /// Load and validate a settings file, printing the effective settings
    Check {
        /// Settings file to check
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Frames go to stdout; keep logs on stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            script,
            slides,
            width,
            gap,
            config,
            looping,
            no_controls,
            no_indicators,
        } => {
            let mut loader = SettingsLoader::new();
            if let Some(path) = config {
                loader = loader.with_config_path(path);
            }
            let SettingsLoad {
                mut settings,
                warnings,
                ..
            } = loader.load().context("failed to load carousel settings")?;
            log_warnings(&warnings);
            if looping {
                settings.wrap = WrapMode::Loop;
            }

            let steps = script::load(&script)?;
            let stage = Stage {
                slides,
                measurement: Measurement::new(width, gap),
                controls: !no_controls,
                indicators: !no_indicators,
            };
            let stdout = io::stdout().lock();
            let mut replay = Replay::new(stage, settings, stdout)?;
            replay.run(&steps)?;
            tracing::info!(
                steps = steps.len(),
                index = replay.carousel().current_index(),
                "replay finished"
            );
        }
        Command::Check { file } => {
            let load = SettingsLoader::new()
                .with_config_path(&file)
                .load()
                .with_context(|| format!("{} is not valid", file.display()))?;
            println!("{}", serde_json::to_string_pretty(&load.settings)?);
            for warning in load.warnings.iter() {
                match &warning.hint {
                    Some(hint) => {
                        println!("warning: {} (hint: {hint})", warning.message)
                    }
                    None => println!("warning: {}", warning.message),
                }
            }
            println!("{}: ok", file.display());
        }
    }

    Ok(())
}

fn log_warnings(warnings: &SettingsWarnings) {
    for warning in warnings.iter() {
        tracing::warn!(hint = ?warning.hint, "{}", warning.message);
    }
}
