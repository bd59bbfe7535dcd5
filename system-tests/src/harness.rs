// system-tests/src/harness.rs
// ============================================================================
// Module: Miniature Test Runner
// Description: Table-driven runner for wrapped test functions.
// Purpose: Record pass/fail outcomes the way an external harness would.
// Dependencies: testware, std::panic
// ============================================================================

//! ## Overview
//! A table-driven stand-in for the external test runner. Registered cases
//! are invoked in order with a fresh context handle each; a case passes when
//! its function returns normally and fails when it unwinds, with the panic
//! payload rendered into the failure message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any::Any;
use std::panic;
use std::panic::AssertUnwindSafe;

use testware::HookError;
use testware::TestFunction;

// ============================================================================
// SECTION: Context and Outcomes
// ============================================================================

/// Context handle passed to every test case run by the harness.
pub struct HarnessContext {
    /// Name of the case currently executing.
    pub case_name: String,
}

/// Result recorded for one executed case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The case's function returned normally.
    Passed,
    /// The case's function unwound.
    Failed {
        /// Rendered panic payload.
        message: String,
    },
}

/// Named outcome for one executed case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// Case name as registered.
    pub name: String,
    /// Recorded outcome.
    pub outcome: CaseOutcome,
}

impl CaseReport {
    /// Returns whether the case passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome == CaseOutcome::Passed
    }
}

// ============================================================================
// SECTION: Harness
// ============================================================================

/// Table-driven runner over wrapped test functions.
#[derive(Default)]
pub struct Harness {
    /// Registered cases in execution order.
    cases: Vec<(String, TestFunction<HarnessContext>)>,
}

impl Harness {
    /// Creates an empty harness.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a case; cases run in registration order.
    pub fn register(&mut self, name: impl Into<String>, function: TestFunction<HarnessContext>) {
        self.cases.push((name.into(), function));
    }

    /// Runs every registered case and returns the per-case reports.
    #[must_use]
    pub fn run(self) -> Vec<CaseReport> {
        self.cases
            .into_iter()
            .map(|(name, function)| {
                let mut context = HarnessContext {
                    case_name: name.clone(),
                };
                let outcome =
                    match panic::catch_unwind(AssertUnwindSafe(|| function(&mut context))) {
                        Ok(()) => CaseOutcome::Passed,
                        Err(payload) => CaseOutcome::Failed {
                            message: describe_payload(payload.as_ref()),
                        },
                    };
                CaseReport {
                    name,
                    outcome,
                }
            })
            .collect()
    }
}

// ============================================================================
// SECTION: Payload Rendering
// ============================================================================

/// Renders a panic payload into a failure message.
fn describe_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_owned()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else if let Some(error) = payload.downcast_ref::<HookError>() {
        error.to_string()
    } else {
        "opaque panic payload".to_owned()
    }
}
