use asker::backend::HttpBackend;
use asker::core::config;
use asker::{headless, tui};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asker", about = "Ask a question, get an answer")]
struct Args {
    /// Backend base URL (overrides ASKER_API_BASE_URL and the config file)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Ask once without the terminal UI and print the response
    #[arg(short, long)]
    question: Option<String>,

    /// Where diagnostic logs are written
    #[arg(long, default_value = "asker.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::AskerConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("Asker starting up with base URL {:?}", resolved.base_url);

    if let Some(question) = args.question {
        let backend = HttpBackend::new(resolved.base_url);
        let app = headless::ask_once(&backend, question).await;
        if !app.response.is_empty() {
            println!("{}", app.response);
        }
        return Ok(());
    }

    tui::run(resolved)
}
