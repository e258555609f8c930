//! Human-readable site activity record.
//!
//! Grants, registrations and affiliations each leave one plain-language line
//! here, separate from the structured diagnostic logs. Records are emitted as
//! `tracing` events under the dedicated `activity` target so an env-filter
//! directive can route them to their own sink.

use core::fmt;

use chrono::Local;

/// Writes one activity record. `rf` distinguishes RF-originated activity from
/// network-originated activity.
pub fn record(proto: &'static str, rf: bool, args: fmt::Arguments) {
    let ts = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let origin = if rf { "RF" } else { "Net" };
    tracing::info!(target: "activity", "{} {} {} {}", ts, proto, origin, args);
}

#[macro_export]
macro_rules! activity_log {
    ($proto:expr, $rf:expr, $($arg:tt)*) => {
        $crate::activity::record($proto, $rf, format_args!($($arg)*))
    };
}
