use porthist::{HistoryDownloadManager, HistoryError};
use porthist_demos::common::{DAY_START, HOUR, get_source};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = get_source();
    // Small pages make the budget visible: a full day needs several requests.
    let mut history = HistoryDownloadManager::builder("boiler.temperature", source)
        .page_limit(100)
        .default_max_requests(4)
        .build()?;

    match history.fetch_default(DAY_START, DAY_START + 24 * HOUR).await {
        Ok(day) => println!("whole day fit the budget: {} samples", day.len()),
        Err(HistoryError::TooManyRequests { max_requests }) => {
            println!("whole day needs more than {max_requests} requests; narrowing the window");
        }
        Err(e) => return Err(e.into()),
    }

    // Walk the day in smaller windows; each fetch gets a fresh budget.
    let mut from = DAY_START;
    while from < DAY_START + 24 * HOUR {
        let to = from + 4 * HOUR;
        let got = history.fetch_default(from, to).await?;
        println!(
            "{:>2}h-{:>2}h: {:>4} samples in {} request(s)",
            (from - DAY_START) / HOUR,
            (to - DAY_START) / HOUR,
            got.len(),
            history.request_count()
        );
        from = to;
    }

    let day = history.fetch_default(DAY_START, DAY_START + 24 * HOUR).await?;
    println!(
        "whole day from cache: {} samples, {} request(s)",
        day.len(),
        history.request_count()
    );
    Ok(())
}
