use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Outcome of a single check.
///
/// Built once by the check that owns it and never mutated afterwards:
/// `with_detail` consumes the value, so details can only be attached while
/// the result is still being assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    passed: bool,
    message: String,
    details: IndexMap<String, Value>,
}

impl CheckResult {
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            details: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            details: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.passed
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured details in insertion order.
    #[must_use]
    pub const fn details(&self) -> &IndexMap<String, Value> {
        &self.details
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
