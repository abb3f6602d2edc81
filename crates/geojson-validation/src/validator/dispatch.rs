//! Routing on the `type` member.

use serde_json::Value;

use crate::constants::Finding;
use crate::kind::GeoJsonType;

use super::Validator;

const SHORT_FORM_CHARS: usize = 32;

/// A bounded rendering of a `type` member for log fields.
fn short_form(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > SHORT_FORM_CHARS => {
            let head: String = s.chars().take(SHORT_FORM_CHARS).collect();
            format!("{head:?}...")
        }
        Value::String(s) => format!("{s:?}"),
        Value::Array(items) => format!("array of {}", items.len()),
        Value::Object(map) => format!("object of {}", map.len()),
        scalar => scalar.to_string(),
    }
}

impl Validator {
    /// Runs the check for `kind`. Feature checks use the configured
    /// properties policy.
    pub(super) fn check_kind(&self, kind: GeoJsonType, value: &Value) -> Vec<String> {
        match kind {
            GeoJsonType::Point => self.check_point(value),
            GeoJsonType::MultiPoint => self.check_multi_point(value),
            GeoJsonType::LineString => self.check_line_string(value),
            GeoJsonType::MultiLineString => self.check_multi_line_string(value),
            GeoJsonType::Polygon => self.check_polygon(value),
            GeoJsonType::MultiPolygon => self.check_multi_polygon(value),
            GeoJsonType::GeometryCollection => self.check_geometry_collection(value),
            GeoJsonType::Feature => self.check_feature(value, self.options.properties),
            GeoJsonType::FeatureCollection => self.check_feature_collection(value),
            GeoJsonType::Position => self.check_position(value),
            GeoJsonType::Bbox => self.check_bbox(value),
            GeoJsonType::GeometryObject => self.check_geometry_object(value),
            GeoJsonType::GeoJson => self.check_geojson_object(value),
        }
    }

    /// Dispatches to one of the seven geometry checks. When no geometry kind
    /// can be chosen, the finding is reported at the `GeometryObject` level.
    pub(super) fn check_geometry_object(&self, value: &Value) -> Vec<String> {
        self.dispatch(
            value,
            GeoJsonType::GeometryObject,
            |kind| kind.is_geometry().then_some(kind),
            Finding::UnknownGeometryType,
        )
    }

    /// Dispatches to any GeoJSON object check. Feature and FeatureCollection
    /// are tried before the geometry kinds.
    pub(super) fn check_geojson_object(&self, value: &Value) -> Vec<String> {
        self.dispatch(
            value,
            GeoJsonType::GeoJson,
            |kind| kind.is_object().then_some(kind),
            Finding::UnknownObjectType,
        )
    }

    fn dispatch<F>(
        &self,
        value: &Value,
        level: GeoJsonType,
        accept: F,
        unknown: Finding,
    ) -> Vec<String>
    where
        F: Fn(GeoJsonType) -> Option<GeoJsonType>,
    {
        let mut errors = Vec::new();
        match value.as_object().map(|obj| obj.get("type")) {
            None => errors.push(Finding::NotObject.to_string()),
            Some(None) => errors.push(Finding::MissingMember("type").to_string()),
            Some(Some(type_)) => match GeoJsonType::of(type_).and_then(accept) {
                Some(kind) => {
                    tracing::debug!(%level, %kind, "dispatch");
                    return self.check_kind(kind, value);
                }
                None => {
                    let type_ = short_form(type_);
                    tracing::debug!(%level, %type_, "unrecognized type member");
                    errors.push(unknown.to_string());
                }
            },
        }
        self.registry.apply(level, value, &mut errors);
        errors
    }
}
