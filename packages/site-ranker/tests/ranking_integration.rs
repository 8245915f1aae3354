//! Integration tests for the full ranking flow.
//!
//! These tests drive `Ranker` end to end over mock collaborators:
//! 1. Discover candidates on each homepage
//! 2. Extract visible text
//! 3. Score against the query
//! 4. Aggregate and sort

use std::io::Write;
use std::time::{Duration, Instant};

use site_ranker::{
    load_domains, to_csv, MockEmbedder, MockFetcher, RankConfig, RankError, Ranker,
};

/// Helper to build a homepage linking to the given paths.
fn homepage(paths: &[&str]) -> String {
    let anchors: String = paths
        .iter()
        .map(|p| format!(r#"<a href="{}">{}</a>"#, p, p))
        .collect();
    format!("<html><body><nav>{}</nav></body></html>", anchors)
}

fn domains(list: &[&str]) -> Vec<String> {
    list.iter().map(|d| d.to_string()).collect()
}

/// Sequential config without host spacing, so tests run fast.
fn config() -> RankConfig {
    RankConfig::default().with_host_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_reachable_domain_outranks_dead_one() {
    let fetcher = MockFetcher::new()
        .fail_url("https://a.example/")
        .with_html("https://b.example/", homepage(&["/collection"]))
        .with_html(
            "https://b.example/collection",
            "<h1>Luxury watches</h1><p>Affluent men 35+</p>",
        );

    let ranker = Ranker::new(fetcher, MockEmbedder::new(), config());
    let report = ranker
        .rank(
            &domains(&["https://a.example/", "https://b.example/"]),
            "Luxury watches",
            "Affluent men 35+",
        )
        .await
        .unwrap();

    assert_eq!(report.len(), 2);

    let top = report.top().unwrap();
    assert_eq!(top.domain, "https://b.example/");
    assert_eq!(top.best_url.as_deref(), Some("https://b.example/collection"));
    assert!(top.best_score > 0.9, "score was {}", top.best_score);

    let dead = report.get("https://a.example/").unwrap();
    assert_eq!(dead.best_score, 0.0);
    assert_eq!(dead.best_url, None);
    assert_eq!(dead.texts_found, 0);
}

#[tokio::test]
async fn test_one_row_per_domain_sorted_descending() {
    let fetcher = MockFetcher::new()
        .with_html("https://watch.example/", homepage(&["/about"]))
        .with_html("https://watch.example/about", "<p>luxury watches for men</p>")
        .with_html("https://garden.example/", homepage(&["/about"]))
        .with_html("https://garden.example/about", "<p>garden hose repair kit</p>")
        .with_html("https://empty.example/", "<p>no links here</p>");

    let list = domains(&[
        "https://garden.example/",
        "https://empty.example/",
        "https://watch.example/",
        "https://missing.example/",
    ]);

    let report = Ranker::new(fetcher, MockEmbedder::new(), config())
        .rank(&list, "luxury watches", "men")
        .await
        .unwrap();

    assert_eq!(report.len(), list.len());
    assert_eq!(report.top().unwrap().domain, "https://watch.example/");

    let scores: Vec<f32> = report.iter().map(|r| r.best_score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{:?}", scores);

    // Both degenerate rows keep input order
    let tail: Vec<&str> = report
        .iter()
        .filter(|r| r.best_url.is_none())
        .map(|r| r.domain.as_str())
        .collect();
    assert_eq!(tail, vec!["https://empty.example/", "https://missing.example/"]);
}

#[tokio::test]
async fn test_deep_links_never_fetched() {
    let fetcher = MockFetcher::new()
        .with_html("https://deep.example/", homepage(&["/a/b/c", "/a/b"]))
        .with_html("https://deep.example/a/b", "<p>shallow enough</p>")
        .with_html("https://deep.example/a/b/c", "<p>too deep</p>");

    let report = Ranker::new(fetcher.clone(), MockEmbedder::new(), config())
        .rank(&domains(&["https://deep.example/"]), "shallow", "enough")
        .await
        .unwrap();

    assert_eq!(
        report.top().unwrap().best_url.as_deref(),
        Some("https://deep.example/a/b")
    );
    assert!(!fetcher.calls().iter().any(|u| u.ends_with("/a/b/c")));
}

#[tokio::test]
async fn test_empty_product_makes_no_calls() {
    let fetcher = MockFetcher::new().with_html("https://a.example/", homepage(&["/x"]));
    let embedder = MockEmbedder::new();

    let err = Ranker::new(fetcher.clone(), embedder.clone(), config())
        .rank(&domains(&["https://a.example/"]), "", "men")
        .await
        .unwrap_err();

    assert!(matches!(err, RankError::InvalidInput { .. }));
    assert_eq!(fetcher.call_count(), 0);
    assert_eq!(embedder.embed_call_count(), 0);
}

#[tokio::test]
async fn test_concurrent_ranking_matches_sequential() {
    let mut fetcher = MockFetcher::new().with_latency(Duration::from_millis(5));
    let mut list = Vec::new();
    for i in 0..8 {
        let root = format!("https://site{}.example/", i);
        let words = if i % 3 == 0 { "luxury watches men" } else { "kitchen sink" };
        fetcher = fetcher
            .with_html(root.clone(), homepage(&["/p"]))
            .with_html(format!("{}p", root), format!("<p>{} {}</p>", words, i));
        list.push(root);
    }

    let sequential = Ranker::new(fetcher.clone(), MockEmbedder::new(), config())
        .rank(&list, "luxury watches", "men")
        .await
        .unwrap();
    let concurrent = Ranker::new(
        fetcher,
        MockEmbedder::new(),
        config().with_domain_concurrency(4),
    )
    .rank(&list, "luxury watches", "men")
    .await
    .unwrap();

    assert_eq!(sequential, concurrent);
}

#[tokio::test]
async fn test_default_config_spaces_same_host_requests() {
    let fetcher = MockFetcher::new()
        .with_html("https://slow.example/", homepage(&["/one", "/two"]))
        .with_html("https://slow.example/one", "<p>one</p>")
        .with_html("https://slow.example/two", "<p>two</p>");

    let start = Instant::now();
    let report = Ranker::new(fetcher.clone(), MockEmbedder::new(), RankConfig::default())
        .rank(&domains(&["https://slow.example/"]), "one", "two")
        .await
        .unwrap();

    assert_eq!(report.top().unwrap().texts_found, 2);
    // Three same-host requests at the default 500ms spacing: two waits
    assert!(start.elapsed() >= Duration::from_millis(950), "{:?}", start.elapsed());
    assert_eq!(fetcher.call_count(), 3);
}

#[tokio::test]
async fn test_host_delay_does_not_hold_back_other_hosts() {
    let mut fetcher = MockFetcher::new();
    let mut list = Vec::new();
    for i in 0..4 {
        let root = format!("https://host{}.example/", i);
        fetcher = fetcher.with_html(root.clone(), "<p>no links</p>");
        list.push(root);
    }

    let start = Instant::now();
    let report = Ranker::new(fetcher, MockEmbedder::new(), RankConfig::default())
        .rank(&list, "one", "two")
        .await
        .unwrap();

    assert_eq!(report.len(), 4);
    assert!(start.elapsed() < Duration::from_millis(400), "{:?}", start.elapsed());
}

#[tokio::test]
async fn test_domain_file_to_csv() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "https://b.example/").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "https://a.example/").unwrap();

    let fetcher = MockFetcher::new()
        .with_html("https://b.example/", homepage(&["/shop"]))
        .with_html("https://b.example/shop", "<p>watches</p>");

    let list = load_domains(file.path()).unwrap();
    let report = Ranker::new(fetcher, MockEmbedder::new(), config())
        .rank(&list, "watches", "men")
        .await
        .unwrap();

    let csv = to_csv(&report);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "domain,best_url,match_percent,texts_found");
    assert!(lines[1].starts_with("https://b.example/,https://b.example/shop,"));
    assert!(lines[1].ends_with(",1"));
    assert_eq!(lines[2], "https://a.example/,,0.00,0");
}
