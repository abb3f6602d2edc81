//! Validator options and the result type returned by every public check.

use serde::{Deserialize, Serialize};

use crate::error::GeoJsonError;

/// How a public check reports its outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorMode {
    /// `true` when no finding was produced, `false` otherwise.
    #[default]
    Boolean,
    /// The full list of findings; an empty list means the value is valid.
    Trace,
}

impl From<bool> for ErrorMode {
    fn from(trace: bool) -> Self {
        if trace {
            ErrorMode::Trace
        } else {
            ErrorMode::Boolean
        }
    }
}

impl ErrorMode {
    /// Formats the findings collected by a check.
    pub fn finish(self, errors: Vec<String>) -> ValidationResult {
        match self {
            ErrorMode::Boolean => ValidationResult::Bool(errors.is_empty()),
            ErrorMode::Trace => ValidationResult::Errors(errors),
        }
    }
}

/// Whether a Feature must carry a `properties` member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertiesPolicy {
    /// The member must be present; `null` is accepted.
    #[default]
    Required,
    /// Missing or `null` properties are both accepted.
    Optional,
}

impl From<bool> for PropertiesPolicy {
    fn from(required: bool) -> Self {
        if required {
            PropertiesPolicy::Required
        } else {
            PropertiesPolicy::Optional
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorOptions {
    pub errors: ErrorMode,
    pub properties: PropertiesPolicy,
    /// Require the first and last position of every linear ring to be equal.
    pub ring_closure: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            errors: ErrorMode::Boolean,
            properties: PropertiesPolicy::Required,
            ring_closure: true,
        }
    }
}

impl ValidatorOptions {
    pub fn trace(mut self, trace: bool) -> Self {
        self.errors = trace.into();
        self
    }

    pub fn properties(mut self, policy: PropertiesPolicy) -> Self {
        self.properties = policy;
        self
    }

    pub fn ring_closure(mut self, required: bool) -> Self {
        self.ring_closure = required;
        self
    }

    /// Decodes options from a JSON document, e.g. `{"errors": "trace"}`.
    /// Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, GeoJsonError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Outcome of a public check, shaped by the [`ErrorMode`] it ran with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Bool(bool),
    Errors(Vec<String>),
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        match self {
            ValidationResult::Bool(ok) => *ok,
            ValidationResult::Errors(errors) => errors.is_empty(),
        }
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The findings, or an empty slice in boolean mode.
    pub fn errors(&self) -> &[String] {
        match self {
            ValidationResult::Bool(_) => &[],
            ValidationResult::Errors(errors) => errors,
        }
    }

    pub fn into_errors(self) -> Vec<String> {
        match self {
            ValidationResult::Bool(_) => Vec::new(),
            ValidationResult::Errors(errors) => errors,
        }
    }
}

impl From<ValidationResult> for bool {
    fn from(result: ValidationResult) -> bool {
        result.is_ok()
    }
}
