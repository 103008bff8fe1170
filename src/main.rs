use std::fs::OpenOptions;

use clap::Parser;
use horsempdc::catalog::MopidyClient;
use horsempdc::core::config::{self, CliOverrides, HorseConfig};
use horsempdc::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "horsempdc", about = "Browse a Mopidy library by band and album")]
struct Args {
    /// Mopidy host, as `host` or `host:port`
    #[arg(long)]
    host: Option<String>,

    /// Log at debug level
    #[arg(long)]
    debug: bool,

    /// Skip the intro animation
    #[arg(long)]
    no_intro: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let dir = config::ensure_config_dir()?;
    let (file_config, config_error) = match config::load_config() {
        Ok(file_config) => (file_config, None),
        Err(e) => (HorseConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        host: args.host,
        debug: args.debug,
        no_intro: args.no_intro,
    };
    let resolved = config::resolve(&file_config, &cli);

    // File logger: the terminal belongs to the UI.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_ignore_str("reqwest")
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("hyper_util")
        .build();
    let level = if resolved.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("horsempdc.log"))
    {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("HorseMPDC starting up against {}", resolved.host);
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    let client = MopidyClient::new(&resolved.host, resolved.timeout)?;
    tui::run(&resolved, Box::new(client))
}
