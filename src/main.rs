use clap::Parser;
use reel::core::config::{self, ConfigError};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reel", about = "Browse a paginated movie poster catalog in the terminal")]
struct Args {
    /// Catalog base URL (overrides REEL_BASE_URL and the config file)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Where to write the log file
    #[arg(long, default_value = "reel.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(|e| config_failure("load", e))?;
    let resolved = config::resolve(&file_config, args.base_url.as_deref())
        .map_err(|e| config_failure("resolve", e))?;

    log::info!("Reel starting up with catalog at {}", resolved.base_url);

    reel::tui::run(resolved)
}

/// Logs a configuration failure and turns it into the process error.
fn config_failure(stage: &str, e: ConfigError) -> std::io::Error {
    log::error!("Failed to {} config: {}", stage, e);
    std::io::Error::other(e)
}
