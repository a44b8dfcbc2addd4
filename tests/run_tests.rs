use page_harvest::{ResultSet, ScrapeError, Scraper, ScraperConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tokio::net::TcpListener;

const PAGE: &str = r#"<html><head><title> Home </title>
<meta name="description" content="  A site  "></head>
<body><h2>B</h2><h1>A</h1><p>Hello</p><a href="/x">X</a><img src="y.png"></body></html>"#;

fn scraper_for(dir: &TempDir, urls: &[String]) -> Scraper {
    let urls_file = dir.path().join("urls.txt");
    let mut contents = String::from("# test targets\n\n");
    for url in urls {
        contents.push_str(&format!("  {}  \n", url));
    }
    fs::write(&urls_file, contents).unwrap();

    Scraper::new(ScraperConfig::default())
        .with_urls_file(urls_file)
        .with_output_file(dir.path().join("scraped_data.json"))
        .with_timeout(1)
}

fn read_output(path: &Path) -> ResultSet {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Accepts connections and never answers, so requests run into the timeout
async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}/slow", addr)
}

#[tokio::test]
async fn test_run_writes_successful_pages_and_skips_failures() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/p")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(PAGE)
        .create_async()
        .await;
    server
        .mock("GET", "/broken")
        .with_status(500)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let slow = silent_server().await;
    let urls = vec![
        format!("{}/p", server.url()),
        slow,
        format!("{}/broken", server.url()),
    ];
    let scraper = scraper_for(&dir, &urls);

    let summary = scraper.run().await.unwrap();
    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.scraped, 1);
    assert_eq!(summary.failed, 2);

    let output = read_output(&scraper.config().output_file);
    assert_eq!(output.len(), 1);
    let page = &output.records()[0];
    assert_eq!(page.url, urls[0]);
    assert_eq!(page.title.as_deref(), Some("Home"));
    assert_eq!(page.meta_description.as_deref(), Some("A site"));
    assert_eq!(page.headings, vec!["A", "B"]);
    assert_eq!(page.links[0].url, format!("{}/x", server.url()));
    assert_eq!(page.images[0].url, format!("{}/y.png", server.url()));
}

#[tokio::test]
async fn test_missing_url_file_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("scraped_data.json");
    let scraper = Scraper::new(ScraperConfig::default())
        .with_urls_file(dir.path().join("does-not-exist.txt"))
        .with_output_file(&output);

    let err = scraper.run().await.unwrap_err();
    assert!(matches!(err, ScrapeError::SourceUnavailable { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_sink_failure() {
    let dir = TempDir::new().unwrap();
    let scraper = scraper_for(&dir, &[])
        .with_output_file(dir.path().join("no-such-dir").join("out.json"));

    let err = scraper.run().await.unwrap_err();
    assert!(matches!(err, ScrapeError::SinkUnavailable { .. }));
}

#[tokio::test]
async fn test_empty_url_list_writes_empty_array() {
    let dir = TempDir::new().unwrap();
    let scraper = scraper_for(&dir, &[]);

    let summary = scraper.run().await.unwrap();
    assert_eq!(summary.attempted, 0);

    let written = fs::read_to_string(&scraper.config().output_file).unwrap();
    assert_eq!(written, "[]");
}

#[tokio::test]
async fn test_concurrent_scrape_preserves_input_order() {
    let mut server = mockito::Server::new_async().await;
    let mut urls = Vec::new();
    for i in 0..8 {
        let path = format!("/page{}", i);
        server
            .mock("GET", path.as_str())
            .with_status(if i == 3 { 404 } else { 200 })
            .with_body(format!("<title>Page {}</title>", i))
            .create_async()
            .await;
        urls.push(format!("{}{}", server.url(), path));
    }

    let scraper = Scraper::new(ScraperConfig::default())
        .with_timeout(5)
        .with_max_concurrency(4);
    let results = scraper.scrape(&urls).await.unwrap();

    let titles: Vec<_> = results
        .records()
        .iter()
        .map(|r| r.title.clone().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Page 0", "Page 1", "Page 2", "Page 4", "Page 5", "Page 6", "Page 7"]
    );
}
