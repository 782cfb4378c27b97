use crate::models::{LogicalTable, Quantity, Resource, StatusSnapshot};
use crate::utils::units::{format_elapsed, micros_to_seconds, plain, with_units};
use chrono::{DateTime, Utc};
use log::debug;
use std::time::Instant;

pub const TITLE: &str = "manager stats";

pub fn collect_manager_table(snapshot: &StatusSnapshot, now: DateTime<Utc>) -> LogicalTable {
    let start = Instant::now();

    let mut pairs: Vec<(String, String)> = snapshot
        .counters()
        .into_iter()
        .map(|(key, value)| (key.replace('_', " "), plain(value, "na")))
        .collect();

    pairs.push(("sent".into(), megabytes(snapshot.bytes_sent)));
    pairs.push(("received".into(), megabytes(snapshot.bytes_received)));

    pairs.push(("total send time".into(), elapsed(Some(snapshot.time_send))));
    pairs.push(("total receive time".into(), elapsed(snapshot.time_receive)));
    pairs.push((
        "total good task time".into(),
        elapsed(Some(snapshot.time_workers_execute_good)),
    ));
    pairs.push((
        "total task time".into(),
        elapsed(Some(snapshot.time_workers_execute)),
    ));

    // Both sides in microseconds.
    let runtime = snapshot
        .time_when_started
        .map(|started| now.timestamp_micros() as f64 - started);
    pairs.push(("runtime".into(), elapsed(runtime)));

    debug!(
        "collect_manager_table took: {} ms",
        start.elapsed().as_millis()
    );
    LogicalTable::from_pairs(TITLE, pairs)
}

fn megabytes(bytes: f64) -> String {
    with_units(Resource::Disk, &Quantity::from(bytes / 1e6), "na")
}

fn elapsed(micros: Option<f64>) -> String {
    match micros {
        Some(micros) => format_elapsed(micros_to_seconds(micros)),
        None => "na".to_string(),
    }
}
