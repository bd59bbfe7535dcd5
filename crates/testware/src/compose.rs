// crates/testware/src/compose.rs
// ============================================================================
// Module: Hook Composer
// Description: Setup/teardown composition over test functions.
// Purpose: Wrap test bodies with before, after, and resource hooks.
// Dependencies: crate::{error, resource, scope}, std::{panic, sync}
// ============================================================================

//! ## Overview
//! The hook composer is a flat set of higher-order functions over one
//! abstraction: a [`TestFunction`] takes a test-context handle, produces no
//! result, and signals failure by panicking. Each operation returns a new
//! test function with setup or teardown behavior interleaved; the curried
//! `*_middleware` constructors return reusable [`Middleware`] transformers
//! instead.
//!
//! Teardown callbacks run on every exit path of the wrapped body. A body
//! panic is re-raised after teardown completes; a teardown panic takes
//! precedence and discards the body's payload. Composing several
//! middlewares nests outer-to-inner in natural function-composition order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::panic;
use std::sync::Arc;

use crate::error::HookError;
use crate::resource::Closable;
use crate::scope::run_with_cleanup;

// ============================================================================
// SECTION: Type Aliases
// ============================================================================

/// Unit of test logic invoked with a test-context handle.
///
/// A test function signals failure by panicking; completing normally means
/// the test passed. Wrapped functions are `Send + Sync` so an external
/// runner may invoke independent test cases concurrently; each invocation
/// is self-contained.
pub type TestFunction<C> = Box<dyn Fn(&mut C) + Send + Sync>;

/// Transformer from one test function to another.
///
/// A middleware layers setup/teardown behavior around any test function it
/// is applied to, and may be applied to many.
pub type Middleware<C> = Box<dyn Fn(TestFunction<C>) -> TestFunction<C> + Send + Sync>;

// ============================================================================
// SECTION: Before Hooks
// ============================================================================

/// Runs `setup` synchronously before the test body.
///
/// When `setup` panics the body is never invoked and the panic propagates
/// unchanged. No error wrapping takes place.
#[must_use]
pub fn before<C>(
    setup: impl Fn() + Send + Sync + 'static,
    test: TestFunction<C>,
) -> TestFunction<C>
where
    C: 'static,
{
    Box::new(move |context: &mut C| {
        setup();
        test(context);
    })
}

/// Curried form of [`before`].
#[must_use]
pub fn before_middleware<C>(setup: impl Fn() + Send + Sync + 'static) -> Middleware<C>
where
    C: 'static,
{
    let setup = Arc::new(setup);
    Box::new(move |test: TestFunction<C>| {
        let setup = Arc::clone(&setup);
        before(move || setup(), test)
    })
}

// ============================================================================
// SECTION: After Hooks
// ============================================================================

/// Runs `teardown` on every exit path of the test body.
///
/// Teardown runs during the unwind when the body panics; the body's payload
/// is re-raised once teardown completes, so the runner still observes the
/// failure. A panic raised by `teardown` itself takes precedence and the
/// body's payload is discarded — see [`run_with_cleanup`].
#[must_use]
pub fn after<C>(
    teardown: impl Fn() + Send + Sync + 'static,
    test: TestFunction<C>,
) -> TestFunction<C>
where
    C: 'static,
{
    Box::new(move |context: &mut C| run_with_cleanup(|| test(context), &teardown))
}

/// Curried form of [`after`].
#[must_use]
pub fn after_middleware<C>(teardown: impl Fn() + Send + Sync + 'static) -> Middleware<C>
where
    C: 'static,
{
    let teardown = Arc::new(teardown);
    Box::new(move |test: TestFunction<C>| {
        let teardown = Arc::clone(&teardown);
        after(move || teardown(), test)
    })
}

// ============================================================================
// SECTION: Combined Hooks
// ============================================================================

/// Runs `setup` before the body and `teardown` on every exit path.
///
/// Equivalent to `before(setup, after(teardown, test))`: the call order is
/// setup, body, teardown regardless of the body's outcome, and a body panic
/// is re-raised after teardown completes.
#[must_use]
pub fn before_after<C>(
    setup: impl Fn() + Send + Sync + 'static,
    teardown: impl Fn() + Send + Sync + 'static,
    test: TestFunction<C>,
) -> TestFunction<C>
where
    C: 'static,
{
    before(setup, after(teardown, test))
}

/// Curried form of [`before_after`].
#[must_use]
pub fn before_after_middleware<C>(
    setup: impl Fn() + Send + Sync + 'static,
    teardown: impl Fn() + Send + Sync + 'static,
) -> Middleware<C>
where
    C: 'static,
{
    let setup = Arc::new(setup);
    let teardown = Arc::new(teardown);
    Box::new(move |test: TestFunction<C>| {
        let setup = Arc::clone(&setup);
        let teardown = Arc::clone(&teardown);
        before_after(move || setup(), move || teardown(), test)
    })
}

// ============================================================================
// SECTION: Resource Hooks
// ============================================================================

/// Acquires a resource before the body and releases it on every exit path.
///
/// `acquire` runs as setup; the handle it returns lives in a
/// per-invocation slot consumed by the release on exit. When the release
/// reports an error the failure is raised as a panic carrying
/// [`HookError::ReleaseFailed`], which supersedes any panic already in
/// flight from the body.
///
/// # Panics
/// Raises [`HookError::ReleaseFailed`] when the resource's release
/// operation reports an error, and re-raises body panics like [`after`].
#[must_use]
pub fn closer<C, R>(
    acquire: impl Fn() -> R + Send + Sync + 'static,
    test: TestFunction<C>,
) -> TestFunction<C>
where
    C: 'static,
    R: Closable,
{
    Box::new(move |context: &mut C| {
        let resource = acquire();
        run_with_cleanup(
            || test(context),
            move || {
                if let Err(error) = resource.close() {
                    panic::panic_any(HookError::release_failed(error));
                }
            },
        );
    })
}

/// Curried form of [`closer`].
#[must_use]
pub fn closer_middleware<C, R>(acquire: impl Fn() -> R + Send + Sync + 'static) -> Middleware<C>
where
    C: 'static,
    R: Closable,
{
    let acquire = Arc::new(acquire);
    Box::new(move |test: TestFunction<C>| {
        let acquire = Arc::clone(&acquire);
        closer(move || acquire(), test)
    })
}
