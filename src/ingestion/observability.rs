use std::fmt;
use std::sync::Arc;

use crate::error::SalesError;

/// Minimal stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of loaded sale records.
    pub rows: usize,
    /// Number of records kept with an unset date after a date-parse failure.
    pub dates_unset: usize,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics or logs. Date-parse failures are
/// non-fatal and are reported per row as they occur; the record is kept
/// with an unset date.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _stats: LoadStats) {}

    /// Called when a row's date text does not match the expected format.
    fn on_date_parse_failure(&self, _line: usize, _raw: &str) {}

    /// Called when a load fails.
    fn on_failure(&self, _error: &SalesError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(stats);
        }
    }

    fn on_date_parse_failure(&self, line: usize, raw: &str) {
        for o in &self.observers {
            o.on_date_parse_failure(line, raw);
        }
    }

    fn on_failure(&self, error: &SalesError) {
        for o in &self.observers {
            o.on_failure(error);
        }
    }
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, stats: LoadStats) {
        eprintln!(
            "[load][ok] rows={} dates_unset={}",
            stats.rows, stats.dates_unset
        );
    }

    fn on_date_parse_failure(&self, line: usize, raw: &str) {
        eprintln!("[load][date-unset] line={line} raw='{raw}'");
    }

    fn on_failure(&self, error: &SalesError) {
        eprintln!("[load][fail] err={error}");
    }
}
