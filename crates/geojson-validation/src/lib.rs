//! `geojson-validation`: structural validation of decoded GeoJSON values.
//!
//! Checks a [`serde_json::Value`] against the GeoJSON object model: positions,
//! bounding boxes, the seven geometry kinds, Features and FeatureCollections.
//! Every check either answers with a boolean or, in trace mode, returns the
//! list of findings with `at <index>: ` breadcrumbs for nested array members.
//!
//! # Example
//!
//! ```
//! use geojson_validation::{is_geojson_object, is_polygon, ValidationResult};
//! use serde_json::json;
//!
//! let square = json!({
//!     "type": "Polygon",
//!     "coordinates": [[[100, 0], [101, 0], [101, 1], [100, 1], [100, 0]]]
//! });
//! assert!(is_polygon(&square, false).is_ok());
//!
//! let feature = json!({"type": "Feature", "geometry": null});
//! assert_eq!(
//!     is_geojson_object(&feature, true),
//!     ValidationResult::Errors(vec![
//!         "must have a member with the name 'properties'".to_string()
//!     ])
//! );
//! ```
//!
//! The free functions share one process-wide custom validator registry (see
//! [`define_custom`]). Use a [`Validator`] with its own [`Registry`] when
//! isolation is needed.

pub mod constants;
pub mod error;
pub mod kind;
pub mod registry;
pub mod types;
pub mod validator;

use serde_json::Value;

pub use constants::Finding;
pub use error::GeoJsonError;
pub use kind::GeoJsonType;
pub use registry::{CustomOutcome, Registry};
pub use types::{ErrorMode, PropertiesPolicy, ValidationResult, ValidatorOptions};
pub use validator::{positions_equal, Validator};

fn global(trace: bool) -> Validator {
    Validator::global(ValidatorOptions::default().trace(trace))
}

/// Registers a custom validator on the process-wide registry, replacing any
/// earlier one for `kind`.
pub fn define_custom<F, O>(kind: GeoJsonType, validator: F)
where
    F: Fn(&Value) -> O + Send + Sync + 'static,
    O: Into<CustomOutcome>,
{
    registry::global().register(kind, validator);
}

/// Like [`define_custom`], registering by type name (e.g. `"Feature"`).
pub fn define_custom_named<F, O>(type_name: &str, validator: F) -> Result<(), GeoJsonError>
where
    F: Fn(&Value) -> O + Send + Sync + 'static,
    O: Into<CustomOutcome>,
{
    define_custom(type_name.parse()?, validator);
    Ok(())
}

pub fn is_position(value: &Value, trace: bool) -> ValidationResult {
    global(trace).position(value)
}

pub fn is_bbox(value: &Value, trace: bool) -> ValidationResult {
    global(trace).bbox(value)
}

pub fn is_multi_point_coords(value: &Value, trace: bool) -> ValidationResult {
    global(trace).multi_point_coords(value)
}

pub fn is_line_string_coords(value: &Value, trace: bool) -> ValidationResult {
    global(trace).line_string_coords(value)
}

pub fn is_multi_line_string_coords(value: &Value, trace: bool) -> ValidationResult {
    global(trace).multi_line_string_coords(value)
}

pub fn is_polygon_coords(value: &Value, trace: bool) -> ValidationResult {
    global(trace).polygon_coords(value)
}

pub fn is_multi_polygon_coords(value: &Value, trace: bool) -> ValidationResult {
    global(trace).multi_polygon_coords(value)
}

pub fn is_point(value: &Value, trace: bool) -> ValidationResult {
    global(trace).point(value)
}

pub fn is_multi_point(value: &Value, trace: bool) -> ValidationResult {
    global(trace).multi_point(value)
}

pub fn is_line_string(value: &Value, trace: bool) -> ValidationResult {
    global(trace).line_string(value)
}

pub fn is_multi_line_string(value: &Value, trace: bool) -> ValidationResult {
    global(trace).multi_line_string(value)
}

pub fn is_polygon(value: &Value, trace: bool) -> ValidationResult {
    global(trace).polygon(value)
}

pub fn is_multi_polygon(value: &Value, trace: bool) -> ValidationResult {
    global(trace).multi_polygon(value)
}

pub fn is_geometry_collection(value: &Value, trace: bool) -> ValidationResult {
    global(trace).geometry_collection(value)
}

/// `properties_required = false` accepts Features whose `properties` member
/// is missing or null.
pub fn is_feature(value: &Value, trace: bool, properties_required: bool) -> ValidationResult {
    global(trace).feature_with(value, properties_required.into())
}

pub fn is_feature_collection(value: &Value, trace: bool) -> ValidationResult {
    global(trace).feature_collection(value)
}

pub fn is_geometry_object(value: &Value, trace: bool) -> ValidationResult {
    global(trace).geometry_object(value)
}

pub fn is_geojson_object(value: &Value, trace: bool) -> ValidationResult {
    global(trace).geojson_object(value)
}

/// Alias of [`is_geojson_object`].
pub fn valid(value: &Value, trace: bool) -> ValidationResult {
    is_geojson_object(value, trace)
}
