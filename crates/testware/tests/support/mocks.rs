// crates/testware/tests/support/mocks.rs
// ============================================================================
// Module: Mock Resources
// Description: Shared closable-resource mocks for resource hook tests.
// ============================================================================
//! ## Overview
//! Mock resource handles whose acquisition and release append to a shared
//! action log, with an optional injected release failure.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use testware::Closable;

use super::hooks::ActionLog;

// ========================================================================
// Mock Resource Types
// ========================================================================

/// Closable handle that logs its release and optionally reports a failure.
pub struct LoggedResource {
    /// Log receiving the release entry.
    log: ActionLog,
    /// Entry appended when the resource is released.
    release_entry: String,
    /// Failure message returned by `close`, when injected.
    failure: Option<String>,
}

impl Closable for LoggedResource {
    type Error = String;

    fn close(self) -> Result<(), String> {
        self.log.append(&self.release_entry);
        match self.failure {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}

// ========================================================================
// Acquisition Helpers
// ========================================================================

/// Returns an acquire callback logging acquisition and clean release.
pub fn acquire_logged(
    log: &ActionLog,
    acquire_entry: &str,
    release_entry: &str,
) -> impl Fn() -> LoggedResource + Send + Sync + 'static {
    build_acquire(log, acquire_entry, release_entry, None)
}

/// Returns an acquire callback whose resource fails to release.
pub fn acquire_failing(
    log: &ActionLog,
    acquire_entry: &str,
    release_entry: &str,
    failure: &str,
) -> impl Fn() -> LoggedResource + Send + Sync + 'static {
    build_acquire(log, acquire_entry, release_entry, Some(failure.to_owned()))
}

/// Shared constructor for the acquisition helpers above.
fn build_acquire(
    log: &ActionLog,
    acquire_entry: &str,
    release_entry: &str,
    failure: Option<String>,
) -> impl Fn() -> LoggedResource + Send + Sync + 'static {
    let log = log.clone();
    let acquire_entry = acquire_entry.to_owned();
    let release_entry = release_entry.to_owned();
    move || {
        log.append(&acquire_entry);
        LoggedResource {
            log: log.clone(),
            release_entry: release_entry.clone(),
            failure: failure.clone(),
        }
    }
}
