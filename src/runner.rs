use crate::fetcher::{FetchOutcome, Fetcher};
use crate::parsers;
use crate::results::{PageRecord, ResultSet};
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};

/// Fetches and extracts every URL, returning records in input order.
///
/// With `max_concurrency <= 1` pages are handled strictly one after another.
/// Otherwise up to `max_concurrency` fetches run at once and completions are
/// reordered before they reach the result set.
pub async fn scrape_urls(fetcher: &Fetcher, urls: &[String], max_concurrency: usize) -> ResultSet {
    if max_concurrency <= 1 {
        return scrape_sequential(fetcher, urls).await;
    }
    scrape_concurrent(fetcher, urls, max_concurrency).await
}

/// Fetch and extract a single page, logging the outcome
pub async fn scrape_page(fetcher: &Fetcher, url: &str) -> Option<PageRecord> {
    match fetcher.fetch(url).await {
        FetchOutcome::Success(body) => {
            let record = parsers::extract(url, &body);
            ::log::info!("Scraped {}", url);
            Some(record)
        }
        FetchOutcome::Failure(reason) => {
            ::log::error!("Failed to fetch {}", reason);
            None
        }
    }
}

async fn scrape_sequential(fetcher: &Fetcher, urls: &[String]) -> ResultSet {
    let mut results = ResultSet::new();
    for url in urls {
        if let Some(record) = scrape_page(fetcher, url).await {
            results.push(record);
        }
    }
    results
}

async fn scrape_concurrent(fetcher: &Fetcher, urls: &[String], max_concurrency: usize) -> ResultSet {
    ::log::debug!(
        "Scraping {} URLs with up to {} concurrent requests",
        urls.len(),
        max_concurrency
    );

    let semaphore = Arc::new(Semaphore::new(max_concurrency));
    let (result_tx, mut result_rx) = mpsc::channel::<(usize, Option<PageRecord>)>(max_concurrency);

    for (index, url) in urls.iter().enumerate() {
        let fetcher = fetcher.clone();
        let semaphore = Arc::clone(&semaphore);
        let result_tx = result_tx.clone();
        let url = url.clone();

        tokio::spawn(async move {
            let record = match semaphore.acquire_owned().await {
                Ok(_permit) => scrape_page(&fetcher, &url).await,
                Err(e) => {
                    ::log::error!("Worker for {} could not start: {}", url, e);
                    None
                }
            };

            if let Err(e) = result_tx.send((index, record)).await {
                ::log::error!("Failed to send result for {}: {}", url, e);
            }
        });
    }

    // Drop the original sender so the channel closes once every task is done
    drop(result_tx);

    // Completions arrive in any order; slot them back by input index
    let mut slots: Vec<Option<PageRecord>> = vec![None; urls.len()];
    while let Some((index, record)) = result_rx.recv().await {
        slots[index] = record;
    }

    slots.into_iter().flatten().collect()
}
