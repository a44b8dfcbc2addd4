use clap::Parser;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging, info level unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let result = match args.into_scraper() {
        Ok(scraper) => scraper.run().await,
        Err(e) => Err(e),
    };

    match &result {
        Ok(summary) => {
            ::log::info!(
                "Scrape complete - {} of {} pages scraped, {} failed",
                summary.scraped,
                summary.attempted,
                summary.failed
            );
        }
        Err(e) if e.is_sink_failure() => {
            ::log::error!("Scraped pages were not saved: {}", e);
        }
        Err(e) => {
            ::log::error!("{}", e);
        }
    }

    ExitCode::from(page_harvest::exit_code(&result))
}
