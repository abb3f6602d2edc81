//! Runtime validator for decoded GeoJSON values.
//!
//! Every check comes in two layers: a `check_*` function that always collects
//! the full list of findings (so that nested findings can be prefixed and
//! merged) and a public method that formats those findings once, according to
//! the validator's [`ErrorMode`].

mod coords;
mod dispatch;
mod feature;
mod geometry;
mod object;
mod position;

use std::sync::Arc;

use serde_json::Value;

use crate::kind::GeoJsonType;
use crate::registry::{self, Registry};
use crate::types::{ErrorMode, PropertiesPolicy, ValidationResult, ValidatorOptions};

pub use position::positions_equal;

/// A configured GeoJSON validator.
///
/// Cheap to clone; clones share the same custom validator [`Registry`].
#[derive(Debug, Clone)]
pub struct Validator {
    options: ValidatorOptions,
    registry: Arc<Registry>,
}

impl Default for Validator {
    /// Default options backed by the process-wide registry.
    fn default() -> Self {
        Self::with_registry(ValidatorOptions::default(), Arc::clone(registry::global()))
    }
}

impl Validator {
    /// A validator with its own, initially empty, custom validator registry.
    pub fn new(options: ValidatorOptions) -> Self {
        Self::with_registry(options, Arc::new(Registry::new()))
    }

    pub fn with_registry(options: ValidatorOptions, registry: Arc<Registry>) -> Self {
        Self { options, registry }
    }

    /// A validator using the process-wide registry that [`crate::define_custom`] fills.
    pub fn global(options: ValidatorOptions) -> Self {
        Self::with_registry(options, Arc::clone(registry::global()))
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Same registry, different output mode.
    pub fn traced(&self, trace: bool) -> Self {
        Self {
            options: self.options.clone().trace(trace),
            registry: Arc::clone(&self.registry),
        }
    }

    /// Registers a custom validator on this validator's registry.
    pub fn define<F, O>(&self, kind: GeoJsonType, validator: F)
    where
        F: Fn(&Value) -> O + Send + Sync + 'static,
        O: Into<crate::registry::CustomOutcome>,
    {
        self.registry.register(kind, validator);
    }

    fn finish(&self, errors: Vec<String>) -> ValidationResult {
        self.options.errors.finish(errors)
    }

    fn mode(&self) -> ErrorMode {
        self.options.errors
    }

    pub fn position(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_position(value))
    }

    pub fn bbox(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_bbox(value))
    }

    pub fn multi_point_coords(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_multi_point_coords(value))
    }

    pub fn line_string_coords(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_line_string_coords(value))
    }

    pub fn multi_line_string_coords(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_multi_line_string_coords(value))
    }

    pub fn polygon_coords(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_polygon_coords(value))
    }

    pub fn multi_polygon_coords(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_multi_polygon_coords(value))
    }

    pub fn point(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_point(value))
    }

    pub fn multi_point(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_multi_point(value))
    }

    pub fn line_string(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_line_string(value))
    }

    pub fn multi_line_string(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_multi_line_string(value))
    }

    pub fn polygon(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_polygon(value))
    }

    pub fn multi_polygon(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_multi_polygon(value))
    }

    pub fn geometry_collection(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_geometry_collection(value))
    }

    /// Validates a Feature using the configured [`PropertiesPolicy`].
    pub fn feature(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_feature(value, self.options.properties))
    }

    /// Validates a Feature with an explicit properties policy.
    pub fn feature_with(&self, value: &Value, properties: PropertiesPolicy) -> ValidationResult {
        self.finish(self.check_feature(value, properties))
    }

    pub fn feature_collection(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_feature_collection(value))
    }

    /// Validates any of the seven geometry kinds, chosen by the `type` member.
    pub fn geometry_object(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_geometry_object(value))
    }

    /// Validates any GeoJSON object, chosen by the `type` member.
    pub fn geojson_object(&self, value: &Value) -> ValidationResult {
        self.finish(self.check_geojson_object(value))
    }

    /// Alias of [`Validator::geojson_object`].
    pub fn valid(&self, value: &Value) -> ValidationResult {
        self.geojson_object(value)
    }

    /// Runs the check for `kind` regardless of the value's own `type` member.
    pub fn validate_as(&self, kind: GeoJsonType, value: &Value) -> ValidationResult {
        let errors = self.check_kind(kind, value);
        tracing::trace!(%kind, mode = ?self.mode(), findings = errors.len(), "validated");
        self.finish(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn traced_shares_registry() {
        let plain = Validator::new(ValidatorOptions::default());
        let traced = plain.traced(true);
        plain.define(GeoJsonType::Point, |_: &Value| "custom");

        assert_eq!(
            traced.point(&json!({"type": "Point", "coordinates": [1, 2]})),
            ValidationResult::Errors(vec!["custom".to_string()])
        );
        assert_eq!(
            plain.point(&json!({"type": "Point", "coordinates": [1, 2]})),
            ValidationResult::Bool(false)
        );
    }

    #[test]
    fn isolated_registries() {
        let a = Validator::new(ValidatorOptions::default());
        let b = Validator::new(ValidatorOptions::default());
        a.define(GeoJsonType::Bbox, |_: &Value| "nope");
        assert!(a.bbox(&json!([0, 0, 1, 1])).is_err());
        assert!(b.bbox(&json!([0, 0, 1, 1])).is_ok());
    }

    #[test]
    fn validate_as_ignores_type_member() {
        let v = Validator::new(ValidatorOptions::default().trace(true));
        let point = json!({"type": "Point", "coordinates": [1, 2]});
        assert!(v.validate_as(GeoJsonType::Point, &point).is_ok());
        assert_eq!(
            v.validate_as(GeoJsonType::MultiPoint, &point).into_errors(),
            [
                "type must be 'MultiPoint'",
                "at 0: Position must be an array",
                "at 1: Position must be an array",
            ]
        );
        assert!(v.validate_as(GeoJsonType::Position, &json!([1, 2])).is_ok());
        assert!(v.validate_as(GeoJsonType::GeoJson, &point).is_ok());
    }
}
