// crates/testware/src/error.rs
// ============================================================================
// Module: Hook Error Definitions
// Description: Typed failures raised by the hook composer.
// Purpose: Provide a stable panic payload for resource-release failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The hook composer has exactly one typed failure: a resource release that
//! reports an error after the test body has finished. All other failures
//! are opaque panic payloads that the composer re-raises verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;

// ============================================================================
// SECTION: Hook Error
// ============================================================================

/// Failures surfaced by the hook composer.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - `ReleaseFailed` is the panic payload raised when a resource release
///   reports an error; runners downcast the payload to this type.
#[derive(Debug, Error)]
pub enum HookError {
    /// Resource release reported a failure after the test body finished.
    #[error("resource release failed: {message}")]
    ReleaseFailed {
        /// Human-readable failure reported by the resource.
        message: String,
    },
}

impl HookError {
    /// Creates a release failure from the resource's error value.
    #[must_use]
    pub fn release_failed(error: impl fmt::Display) -> Self {
        Self::ReleaseFailed {
            message: error.to_string(),
        }
    }

    /// Returns the human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::ReleaseFailed { message } => message,
        }
    }
}
