use porthist::{HistoryDownloadManager, TimeRange};
use porthist_demos::common::{DAY_START, HOUR, clock, get_source};

fn describe(gaps: &[TimeRange]) -> String {
    if gaps.is_empty() {
        return "served from cache".to_string();
    }
    gaps.iter()
        .map(|g| format!("[{} .. {})", clock(g.from), clock(g.to)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = get_source();
    let mut history = HistoryDownloadManager::new("boiler.temperature", source);

    // A chart the user pans and zooms; each window is an independent fetch.
    let windows = [
        ("open 06:00-10:00", DAY_START + 6 * HOUR, DAY_START + 10 * HOUR),
        ("zoom 07:00-08:00", DAY_START + 7 * HOUR, DAY_START + 8 * HOUR),
        ("pan 09:00-13:00", DAY_START + 9 * HOUR, DAY_START + 13 * HOUR),
        ("jump 18:00-20:00", DAY_START + 18 * HOUR, DAY_START + 20 * HOUR),
        ("zoom out 00:00-24:00", DAY_START, DAY_START + 24 * HOUR),
        ("again 00:00-24:00", DAY_START, DAY_START + 24 * HOUR),
    ];

    for (label, from, to) in windows {
        let report = history.fetch_with_report(from, to, 20).await?;
        let (lo, hi) = report
            .samples
            .iter()
            .filter_map(|s| s.value.as_f64())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        println!(
            "{label:<22} {:>5} samples  min {lo:>5.1}  max {hi:>5.1}  {} request(s): {}",
            report.samples.len(),
            report.requests,
            describe(&report.gaps),
        );
    }

    println!(
        "cache now holds {} interval(s)",
        history.cached_intervals().len()
    );
    Ok(())
}
