//! gotodlg - headless host for the goto dialog controller
//!
//! This is the binary entry point. All logic lives in the libraries.

use std::path::PathBuf;

use clap::Parser;
use goto_app::config::{default_config_path, init_config_file, load_settings, load_settings_strict};
use goto_app::Settings;
use goto_core::prelude::*;

/// gotodlg - drive the goto dialog controller over NDJSON
#[derive(Parser, Debug)]
#[command(name = "gotodlg")]
#[command(about = "Drive the goto dialog controller over stdin/stdout", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    goto_core::logging::init()?;

    let config_path = args.config.clone().or_else(default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            eprintln!("❌ No config directory available; pass --config <PATH>");
            std::process::exit(1);
        };
        if init_config_file(&path)? {
            eprintln!("✅ Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists at {}", path.display());
        }
        let log_file = goto_core::logging::get_current_log_file()?;
        eprintln!("Logs are written to {}", log_file.display());
        return Ok(());
    }

    let settings = match (&args.config, config_path) {
        // An explicitly requested file must exist and parse.
        (Some(path), _) => load_settings_strict(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        (None, Some(path)) => load_settings(&path),
        (None, None) => Settings::default(),
    };

    goto_dialog::run_headless(settings).await
}
