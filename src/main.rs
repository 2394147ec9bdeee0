use clap::Parser;
use shelf::core::config::{self, CliOverrides};
use shelf::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelf", about = "Search books, keep a reading list, track progress")]
struct Args {
    /// Directory holding the document store and session file
    #[arg(long, value_name = "DIR")]
    store: Option<PathBuf>,

    /// Query run the first time the search screen opens
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to shelf.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("shelf.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            config::ShelfConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            store_dir: args.store,
            default_query: args.query,
        },
    );

    log::info!(
        "Shelf starting up (catalog {}, store {})",
        resolved.catalog_base_url,
        resolved.store_dir.display()
    );

    tui::run(resolved)
}
