// crates/testware/src/scope.rs
// ============================================================================
// Module: Deferred Cleanup Scope
// Description: Guaranteed-cleanup execution primitive for test bodies.
// Purpose: Run a cleanup callback on every exit path of a body closure.
// Dependencies: std::panic
// ============================================================================

//! ## Overview
//! The unwind-safe execution scope underlying the hook composer. The body
//! runs first; the cleanup callback runs on every exit path. A payload
//! captured from a panicking body is re-raised once cleanup has completed,
//! so the caller still observes the original failure.
//!
//! Precedence hazard: a panic raised by the cleanup callback itself
//! propagates immediately and replaces a payload already captured from the
//! body. Callers relying on observing the body's failure message will
//! instead see the cleanup failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::panic;
use std::panic::AssertUnwindSafe;

// ============================================================================
// SECTION: Cleanup Scope
// ============================================================================

/// Runs `body`, then `cleanup`, re-raising a captured body panic afterward.
///
/// The body's unwind is caught so that `cleanup` always executes, then the
/// captured payload is re-raised with [`panic::resume_unwind`] — the library
/// never swallows a failure. When `cleanup` panics, that panic propagates
/// instead and the captured body payload is dropped.
///
/// # Panics
/// Re-raises any panic from `body` after `cleanup` completes, and propagates
/// any panic from `cleanup` directly.
pub fn run_with_cleanup<T>(body: impl FnOnce() -> T, cleanup: impl FnOnce()) -> T {
    let outcome = panic::catch_unwind(AssertUnwindSafe(body));
    cleanup();

    match outcome {
        Ok(value) => value,
        Err(payload) => panic::resume_unwind(payload),
    }
}
