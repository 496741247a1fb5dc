//! Observational events emitted while resolving rule sets.
//!
//! Sinks only observe; nothing they do feeds back into the traversal.

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::rule::RuleSetName;

/// A single traversal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent {
    /// Name matched the ignore policy and was skipped without reading.
    Ignored { name: RuleSetName },
    /// About to read the named rule set.
    Processing { name: RuleSetName },
    /// The provider has no such rule set.
    NotFound { name: RuleSetName },
    /// The rule set exists but could not be read.
    ReadFailed { name: RuleSetName, error: String },
    /// `target` was reached for the first time and queued.
    IncludeQueued { from: RuleSetName, target: RuleSetName },
    /// `target` was already queued or processed.
    IncludeSkipped { from: RuleSetName, target: RuleSetName },
    /// Finished a rule set, read or not; totals are running counts for the
    /// whole run.
    FileDone {
        name: RuleSetName,
        suffix_total: usize,
        full_total: usize,
    },
}

/// Receiver of traversal events.
pub trait Diagnostics: Send + Sync {
    fn event(&self, event: TraversalEvent);
}

/// Sink that logs every event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn event(&self, event: TraversalEvent) {
        match event {
            TraversalEvent::Ignored { name } => info!(%name, "skipping ignored rule set"),
            TraversalEvent::Processing { name } => debug!(%name, "processing rule set"),
            TraversalEvent::NotFound { name } => warn!(%name, "rule set not found"),
            TraversalEvent::ReadFailed { name, error } => {
                warn!(%name, %error, "failed to read rule set")
            }
            TraversalEvent::IncludeQueued { from, target } => {
                debug!(%from, %target, "new include queued")
            }
            TraversalEvent::IncludeSkipped { from, target } => {
                debug!(%from, %target, "include already visited, skipped")
            }
            TraversalEvent::FileDone {
                name,
                suffix_total,
                full_total,
            } => info!(%name, suffix_total, full_total, "rule set done"),
        }
    }
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn event(&self, _event: TraversalEvent) {}
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<TraversalEvent>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far.
    pub fn events(&self) -> Vec<TraversalEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the recorded events.
    pub fn take(&self) -> Vec<TraversalEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn event(&self, event: TraversalEvent) {
        self.events.lock().push(event);
    }
}
