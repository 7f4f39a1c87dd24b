//! Observability hook
//!
//! The labeling engine never prints. Callers that want timing or the region
//! count as a side channel pass a [`RegioningObserver`]; it is notified once
//! per call, after the result has been fully computed, and cannot change it.

use std::time::Duration;

/// Summary of one regioning call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegioningReport {
    /// Raster width in pixels
    pub width: u32,
    /// Raster height in pixels
    pub height: u32,
    /// Provisional labels issued by the first pass
    pub provisional_labels: u32,
    /// Equivalence pairs recorded by the first pass
    pub equivalences: usize,
    /// Distinct regions found
    pub region_count: usize,
    /// Wall-clock time for all three stages
    pub elapsed: Duration,
}

/// Receives a report after each regioning call
pub trait RegioningObserver {
    /// Called once the output is complete.
    fn on_complete(&mut self, report: &RegioningReport);
}

/// Observer that ignores every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RegioningObserver for NoopObserver {
    fn on_complete(&mut self, _report: &RegioningReport) {}
}

/// Observer that forwards reports to the `log` facade at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RegioningObserver for LogObserver {
    fn on_complete(&mut self, report: &RegioningReport) {
        log::info!(
            "sequential regioning: regions found: {} ({}x{}, {} provisional labels, {} equivalences)",
            report.region_count,
            report.width,
            report.height,
            report.provisional_labels,
            report.equivalences
        );
        log::info!(
            "sequential regioning: elapsed time: {} ms",
            report.elapsed.as_millis()
        );
    }
}

/// Closures can observe directly.
impl<F: FnMut(&RegioningReport)> RegioningObserver for F {
    fn on_complete(&mut self, report: &RegioningReport) {
        self(report)
    }
}
