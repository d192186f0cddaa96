use chrono::{NaiveDate, NaiveDateTime};
use porthist_core::Sample;

/// Start of every fixture series: 2024-03-01 00:00:00 UTC.
fn origin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn ms(minutes: i64) -> i64 {
    origin().and_utc().timestamp_millis() + minutes * 60_000
}

pub fn by_port(port: &str) -> Option<Vec<Sample>> {
    match port {
        // One reading per minute over a day, slowly oscillating around 55 degrees.
        "boiler.temperature" | "SLOW" => Some(
            (0..24 * 60)
                .map(|m: i32| {
                    let v = 55.0 + 5.0 * (f64::from(m) / 90.0).sin();
                    Sample::new(ms(i64::from(m)), (v * 10.0).round() / 10.0)
                })
                .collect(),
        ),
        // Sparse boolean signal: the door opens for ten minutes every three hours.
        "door.contact" => Some(
            (0..8)
                .flat_map(|k: i64| {
                    let open = k * 180 + 60;
                    [Sample::new(ms(open), true), Sample::new(ms(open + 10), false)]
                })
                .collect(),
        ),
        // A port that never reported anything.
        "spare.input" => Some(Vec::new()),
        _ => None,
    }
}
