//! Custom validators layered on top of the built-in checks.
//!
//! A [`Registry`] maps a [`GeoJsonType`] to at most one caller-supplied
//! function. After the built-in check for that type has run, the function is
//! called with the raw value and whatever it returns is appended to the
//! findings. Faults inside a custom validator (an `Err` return or a panic)
//! are turned into a single finding and never escape the validation call.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use serde_json::Value;

use crate::constants::Finding;
use crate::kind::GeoJsonType;

/// What a custom validator reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CustomOutcome {
    #[default]
    Pass,
    One(String),
    Many(Vec<String>),
}

impl From<()> for CustomOutcome {
    fn from(_: ()) -> Self {
        CustomOutcome::Pass
    }
}

impl From<String> for CustomOutcome {
    fn from(message: String) -> Self {
        CustomOutcome::One(message)
    }
}

impl From<&str> for CustomOutcome {
    fn from(message: &str) -> Self {
        CustomOutcome::One(message.to_string())
    }
}

impl From<Vec<String>> for CustomOutcome {
    fn from(messages: Vec<String>) -> Self {
        CustomOutcome::Many(messages)
    }
}

impl From<Option<String>> for CustomOutcome {
    fn from(message: Option<String>) -> Self {
        message.map_or(CustomOutcome::Pass, CustomOutcome::One)
    }
}

impl CustomOutcome {
    fn into_findings(self) -> Vec<String> {
        match self {
            CustomOutcome::Pass => Vec::new(),
            CustomOutcome::One(message) => vec![message],
            CustomOutcome::Many(messages) => messages,
        }
    }
}

/// Stored form of a custom validator; `Err` carries the fault description.
pub type CustomFn = Arc<dyn Fn(&Value) -> Result<CustomOutcome, String> + Send + Sync>;

type Table = HashMap<GeoJsonType, CustomFn>;

/// Copy-on-write table of custom validators.
///
/// Readers take a snapshot of the table and release the lock before calling
/// into user code, so registrations never wait on a running validation.
#[derive(Default)]
pub struct Registry {
    table: RwLock<Arc<Table>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<GeoJsonType> = self.snapshot().keys().copied().collect();
        kinds.sort();
        f.debug_struct("Registry").field("kinds", &kinds).finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an infallible custom validator, replacing any previous one
    /// for `kind`. The function may return `()`, a `String`/`&str`,
    /// `Option<String>` or `Vec<String>`.
    pub fn register<F, O>(&self, kind: GeoJsonType, validator: F)
    where
        F: Fn(&Value) -> O + Send + Sync + 'static,
        O: Into<CustomOutcome>,
    {
        self.insert(
            kind,
            Arc::new(move |value: &Value| -> Result<CustomOutcome, String> {
                Ok(validator(value).into())
            }),
        );
    }

    /// Registers a custom validator that can fail. An `Err` is reported as a
    /// "Problem with custom definition" finding.
    pub fn register_fallible<F, O, E>(&self, kind: GeoJsonType, validator: F)
    where
        F: Fn(&Value) -> Result<O, E> + Send + Sync + 'static,
        O: Into<CustomOutcome>,
        E: std::fmt::Display,
    {
        self.insert(
            kind,
            Arc::new(move |value: &Value| -> Result<CustomOutcome, String> {
                validator(value)
                    .map(Into::into)
                    .map_err(|e| e.to_string())
            }),
        );
    }

    pub fn unregister(&self, kind: GeoJsonType) -> bool {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if !table.contains_key(&kind) {
            return false;
        }
        Arc::make_mut(&mut *table).remove(&kind);
        tracing::debug!(%kind, "custom validator removed");
        true
    }

    pub fn clear(&self) {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        *table = Arc::default();
    }

    pub fn contains(&self, kind: GeoJsonType) -> bool {
        self.snapshot().contains_key(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn insert(&self, kind: GeoJsonType, validator: CustomFn) {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = Arc::make_mut(&mut *table).insert(kind, validator).is_some();
        tracing::debug!(%kind, replaced, "custom validator registered");
    }

    fn snapshot(&self) -> Arc<Table> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*table)
    }

    /// Runs the custom validator registered for `kind`, if any, and appends
    /// its findings to `errors`.
    pub(crate) fn apply(&self, kind: GeoJsonType, value: &Value, errors: &mut Vec<String>) {
        let Some(validator) = self.snapshot().get(&kind).cloned() else {
            return;
        };
        let outcome = catch_unwind(AssertUnwindSafe(|| validator(value)))
            .unwrap_or_else(|payload| Err(panic_message(payload.as_ref())));
        match outcome {
            Ok(outcome) => errors.extend(outcome.into_findings()),
            Err(fault) => {
                tracing::warn!(%kind, %fault, "custom validator failed");
                errors.push(Finding::CustomFault { kind, fault }.to_string());
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "custom validator panicked".to_string()
    }
}

/// The process-wide registry used by the free functions of this crate.
pub fn global() -> &'static Arc<Registry> {
    static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();
    GLOBAL.get_or_init(|| Arc::new(Registry::new()))
}
