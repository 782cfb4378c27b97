use crate::models::{Quantity, Resource};

const STORAGE_SUFFIXES: [&str; 3] = ["MB", "GB", "TB"];

/// Human readable form of a manager value.
///
/// Storage resources are taken as megabytes and scaled by 1000 up to terabytes; every
/// other resource is printed with one decimal place. Missing and negative values read
/// as `na`.
pub fn with_units(resource: Resource, value: &Quantity, na: &str) -> String {
    match value {
        Quantity::Missing | Quantity::Negative(_) => na.to_string(),
        Quantity::NonNumeric(text) => text.clone(),
        Quantity::Numeric(v) if !resource.is_storage() => format!("{:.1}", v),
        Quantity::Numeric(v) => {
            let mut scaled = *v;
            let mut suffix = STORAGE_SUFFIXES[0];
            for next in STORAGE_SUFFIXES.iter().skip(1) {
                if scaled < 1000.0 {
                    break;
                }
                scaled /= 1000.0;
                suffix = *next;
            }
            format!("{:.2} {}", scaled, suffix)
        }
    }
}

/// A counter as the manager reported it: numbers without a trailing `.0`, text
/// verbatim, `na` when absent. Negative numbers are shown, not hidden.
pub fn plain(value: &Quantity, na: &str) -> String {
    match value {
        Quantity::Missing => na.to_string(),
        Quantity::NonNumeric(text) => text.clone(),
        Quantity::Numeric(v) | Quantity::Negative(v) => format!("{}", v),
    }
}

/// Ceiling conversion of a microsecond counter to whole seconds.
pub fn micros_to_seconds(micros: f64) -> i64 {
    (micros / 1e6).ceil() as i64
}

/// `H:MM:SS`, prefixed with the day count once a full day has elapsed.
pub fn format_elapsed(seconds: i64) -> String {
    let duration = seconds.max(0);
    let days = duration / (24 * 3600);
    let hours = (duration % (24 * 3600)) / 3600;
    let minutes = (duration % 3600) / 60;
    let secs = duration % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, secs);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}
