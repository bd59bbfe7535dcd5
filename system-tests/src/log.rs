// system-tests/src/log.rs
// ============================================================================
// Module: Scenario Event Log
// Description: Shared ordered event log for system-test scenarios.
// Purpose: Let hooks and bodies record call order across a whole suite.
// Dependencies: std::sync
// ============================================================================

//! ## Overview
//! An append-only, newline-delimited event log shared between the hooks and
//! bodies of a scenario. Clones share one buffer, so every callback handed
//! out by a single log contributes to one ordered sequence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

// ============================================================================
// SECTION: Event Log
// ============================================================================

/// Append-only event log shared across a scenario.
#[derive(Clone, Default)]
pub struct EventLog {
    /// Accumulated entries in append order.
    entries: Arc<Mutex<String>>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry followed by a newline.
    ///
    /// Poisoned locks are recovered: an unwinding test body is the normal
    /// case here, not a corruption signal.
    pub fn record(&self, entry: &str) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push_str(entry);
        entries.push('\n');
    }

    /// Returns the accumulated log contents.
    #[must_use]
    pub fn snapshot(&self) -> String {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns a hook callback recording `entry` on every call.
    #[must_use]
    pub fn hook(&self, entry: &str) -> impl Fn() + Send + Sync + 'static {
        let log = self.clone();
        let entry = entry.to_owned();
        move || log.record(&entry)
    }
}
