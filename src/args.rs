use clap::Parser;
use page_harvest::{ScrapeError, Scraper, ScraperConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(about = "Generic web scraper: extracts titles, headings, paragraphs, links and images")]
#[command(version)]
pub struct Args {
    /// Path to file containing URLs (one per line) [default: urls.txt]
    #[arg(short, long)]
    pub urls: Option<PathBuf>,

    /// Output JSON file [default: scraped_data.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds [default: 10]
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Number of pages fetched concurrently [default: 1]
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub concurrency: Option<u64>,

    /// User-Agent header sent with each request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// JSON configuration file; explicit flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Build the scraper: defaults, then config file, then explicit flags
    pub fn into_scraper(self) -> Result<Scraper, ScrapeError> {
        let mut scraper = match &self.config {
            Some(path) => Scraper::default().with_config_file(path)?,
            None => Scraper::new(ScraperConfig::default()),
        };

        if let Some(urls) = self.urls {
            scraper = scraper.with_urls_file(urls);
        }
        if let Some(output) = self.output {
            scraper = scraper.with_output_file(output);
        }
        if let Some(timeout) = self.timeout {
            scraper = scraper.with_timeout(timeout);
        }
        if let Some(concurrency) = self.concurrency {
            scraper = scraper.with_max_concurrency(concurrency as usize);
        }
        if let Some(user_agent) = self.user_agent {
            scraper = scraper.with_user_agent(user_agent);
        }

        Ok(scraper)
    }
}
