use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use twenty48::core::config::{self, CliOverrides, GameConfig};
use twenty48::tui;

#[derive(Parser)]
#[command(name = "twenty48", version, about = "Slide and merge tiles to reach 2048")]
struct Args {
    /// Fix the spawn seed for a reproducible game (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Draw tiles without color
    #[arg(long)]
    no_color: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors are reported once the logger is up; defaults apply
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (GameConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        seed: args.seed,
        log_level: args.log_level,
        log_file: args.log_file,
        no_color: args.no_color,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - the terminal belongs to the game
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("twenty48 starting up with {:?}", resolved);

    tui::run(resolved)
}
