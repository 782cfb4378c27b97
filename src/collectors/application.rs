use crate::models::{ApplicationMetrics, LogicalTable, Quantity, Resource};
use crate::utils::units::with_units;
use serde_json::Value;

pub const TITLE: &str = "application info";
pub const INTERNAL_ERROR_LABEL: &str = "internal error reading status";

/// Builds the application table from the raw payload.
///
/// A payload that does not parse as application metrics collapses into a single
/// diagnostic row instead of failing the refresh. No values means no table.
pub fn collect_application_table(payload: &Value) -> Option<LogicalTable> {
    let pairs = match ApplicationMetrics::from_payload(payload) {
        Ok(Some(metrics)) if metrics.values.is_empty() => return None,
        Ok(Some(metrics)) => metric_pairs(&metrics),
        Ok(None) => return None,
        Err(e) => vec![(INTERNAL_ERROR_LABEL.to_string(), e.to_string())],
    };
    Some(LogicalTable::from_pairs(TITLE, pairs))
}

fn metric_pairs(metrics: &ApplicationMetrics) -> Vec<(String, String)> {
    metrics
        .values
        .iter()
        .map(|(name, value)| {
            let display = match metrics.unit(name) {
                Some("MB") => with_units(Resource::Disk, &Quantity::from(value), "na"),
                Some(unit) => format!("{} {}", display_value(value), unit),
                None => display_value(value),
            };
            (name.replace('_', " "), display)
        })
        .collect()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "na".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
