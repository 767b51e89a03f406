//! Small formatting helpers for values handed to LIO / the kernel target.

use std::fmt::Display;

use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Builds a kernel control string (`key=value,key=value`) from control
/// arguments, skipping unset values. Returns `None` when nothing is set.
pub fn control_string<K, V>(controls: impl IntoIterator<Item = (K, Option<V>)>) -> Option<String>
where
    K: Display,
    V: Display,
{
    let pairs: Vec<String> = controls
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| format!("{key}={value}")))
        .collect();

    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join(","))
    }
}

pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current UTC time, as recorded in the gateway configuration object.
pub fn utc_timestamp() -> String {
    timestamp(Utc::now())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
