use clap::Parser;
use log::warn;
use quotes::core::config::{self, CliOverrides, QuotesConfig};
use quotes::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "quotes", about = "Browse quotations from a remote quotes API")]
struct Args {
    /// Base URL of the quotes API (overrides config and QUOTES_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Skip the network reachability probe before each fetch
    #[arg(long)]
    no_reachability_check: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to quotes.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("quotes.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            warn!("{e}, falling back to defaults");
            eprintln!("quotes: {e}, falling back to defaults");
            QuotesConfig::default()
        }
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        skip_reachability_check: args.no_reachability_check,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!("Quotes starting up against {}", resolved.client.base_url);

    tui::run(resolved)
}
