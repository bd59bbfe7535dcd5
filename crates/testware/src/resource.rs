// crates/testware/src/resource.rs
// ============================================================================
// Module: Closable Resources
// Description: Releasable-resource seam consumed by the closer operations.
// Purpose: Define the single release operation and a closure adapter.
// Dependencies: std::fmt
// ============================================================================

//! ## Overview
//! A closable resource exposes exactly one release operation, which
//! consumes the handle and may report failure. Resource implementations are
//! external collaborators; this module only declares the seam and a closure
//! adapter so callers can build handles without a dedicated type.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Closable Trait
// ============================================================================

/// Releasable resource handle consumed by [`crate::compose::closer`].
///
/// The release operation consumes the handle, so a resource is closed at
/// most once per acquisition.
pub trait Closable {
    /// Failure reported by the release operation.
    type Error: fmt::Display;

    /// Releases the resource.
    ///
    /// # Errors
    /// Returns the resource's release failure, which the hook composer
    /// converts into a panic carrying [`crate::error::HookError`].
    fn close(self) -> Result<(), Self::Error>;
}

// ============================================================================
// SECTION: Closure Adapter
// ============================================================================

/// Adapter implementing [`Closable`] over a release closure.
pub struct CloseFn<F> {
    /// Callback invoked exactly once on release.
    release: F,
}

impl<F> CloseFn<F> {
    /// Wraps a release closure into a closable handle.
    #[must_use]
    pub const fn new(release: F) -> Self {
        Self {
            release,
        }
    }
}

impl<F, E> Closable for CloseFn<F>
where
    F: FnOnce() -> Result<(), E>,
    E: fmt::Display,
{
    type Error = E;

    fn close(self) -> Result<(), E> {
        (self.release)()
    }
}
