use porthist::HistoryDownloadManager;
use porthist_demos::common::{DAY_START, HOUR, clock, get_source};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = get_source();
    let mut door = HistoryDownloadManager::new("door.contact", source);

    let events = door.fetch(DAY_START, DAY_START + 24 * HOUR, 0).await?;
    let mut opened = 0;
    for s in &events {
        match s.value.as_bool() {
            Some(true) => {
                opened += 1;
                println!("{} opened", clock(s.timestamp));
            }
            Some(false) => println!("{} closed", clock(s.timestamp)),
            None => println!("{} unexpected numeric value", clock(s.timestamp)),
        }
    }
    println!("door opened {opened} time(s)");

    // Quiet stretches are cached too: this needs no request.
    let quiet = door.fetch(DAY_START + HOUR + 15 * 60_000, DAY_START + 2 * HOUR, 0).await?;
    println!(
        "{} event(s) between 01:15 and 02:00, {} request(s)",
        quiet.len(),
        door.request_count()
    );
    Ok(())
}
