//! Headless change-check harness.
//!
//! A check captures a baseline model, later compares it with the current one
//! and reports whether the observed difference matches the expectation. Hosts
//! show the resulting banner after a manual editing session.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Model, ModelDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeExpectation {
    ExpectChange,
    ExpectUnchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    Passed,
    Failed,
}

impl CheckOutcome {
    #[must_use]
    pub fn is_pass(self) -> bool {
        self == Self::Passed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeCheck {
    name: String,
    expectation: ChangeExpectation,
    baseline: Model,
}

impl ChangeCheck {
    #[must_use]
    pub fn new(name: impl Into<String>, expectation: ChangeExpectation, baseline: Model) -> Self {
        Self {
            name: name.into(),
            expectation,
            baseline,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn baseline(&self) -> &Model {
        &self.baseline
    }

    #[must_use]
    pub fn evaluate(&self, current: &Model) -> CheckReport {
        let diff = ModelDiff::compute(&self.baseline, current);
        let changed = !diff.is_empty();
        let outcome = match (self.expectation, changed) {
            (ChangeExpectation::ExpectChange, true)
            | (ChangeExpectation::ExpectUnchanged, false) => CheckOutcome::Passed,
            _ => CheckOutcome::Failed,
        };

        if outcome.is_pass() {
            debug!(check = %self.name, changed, "change check passed");
        } else {
            warn!(
                check = %self.name,
                changed,
                expectation = ?self.expectation,
                "change check failed"
            );
        }

        CheckReport {
            name: self.name.clone(),
            expectation: self.expectation,
            outcome,
            diff,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub name: String,
    pub expectation: ChangeExpectation,
    pub outcome: CheckOutcome,
    pub diff: ModelDiff,
}

impl CheckReport {
    #[must_use]
    pub fn banner(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            CheckOutcome::Passed => write!(f, "PASS: {}", self.name),
            CheckOutcome::Failed => write!(f, "FAIL: {}", self.name),
        }
    }
}
