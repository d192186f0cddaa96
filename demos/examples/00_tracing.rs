use porthist::HistoryDownloadManager;
use porthist_demos::common::{DAY_START, HOUR, get_source};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,porthist=trace,porthist_core=trace,porthist_http=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Mock in CI when PORTHIST_DEMOS_USE_MOCK is set
    let source = get_source();
    let mut history = HistoryDownloadManager::builder("boiler.temperature", source)
        .page_limit(250)
        .build()?;

    // Morning, then the whole day: the second call only downloads the afternoon.
    let morning = history.fetch(DAY_START, DAY_START + 12 * HOUR, 0).await?;
    tracing::info!(samples = morning.len(), "morning loaded");

    let day = history.fetch(DAY_START, DAY_START + 24 * HOUR, 0).await?;
    tracing::info!(
        samples = day.len(),
        requests = history.request_count(),
        "day loaded"
    );

    Ok(())
}
