//! Shared object-shape checks for every GeoJSON object kind.

use serde_json::{Map, Value};

use crate::constants::Finding;
use crate::kind::GeoJsonType;

use super::Validator;

type PayloadCheck = fn(&Validator, &Value) -> Vec<String>;

impl Validator {
    /// Checks the members common to all GeoJSON objects: an optional `bbox`
    /// and a `type` member equal to `expected`.
    pub(super) fn check_header(
        &self,
        obj: &Map<String, Value>,
        expected: GeoJsonType,
        errors: &mut Vec<String>,
    ) {
        if let Some(bbox) = obj.get("bbox") {
            errors.extend(self.check_bbox(bbox));
        }
        match obj.get("type") {
            Some(type_) if type_.as_str() == Some(expected.as_str()) => {}
            Some(_) => errors.push(Finding::TypeMismatch(expected).to_string()),
            None => errors.push(Finding::MissingMember("type").to_string()),
        }
    }

    /// Runs `body` on the value if it is a JSON object, then the custom
    /// validator registered for `kind`.
    pub(super) fn check_object<F>(&self, value: &Value, kind: GeoJsonType, body: F) -> Vec<String>
    where
        F: FnOnce(&Map<String, Value>, &mut Vec<String>),
    {
        let mut errors = Vec::new();
        match value.as_object() {
            Some(obj) => {
                self.check_header(obj, kind, &mut errors);
                body(obj, &mut errors);
            }
            None => errors.push(Finding::NotObject.to_string()),
        }
        self.registry.apply(kind, value, &mut errors);
        errors
    }

    /// A geometry whose payload lives in `coordinates`.
    pub(super) fn check_coordinate_geometry(
        &self,
        value: &Value,
        kind: GeoJsonType,
        coordinates: PayloadCheck,
    ) -> Vec<String> {
        self.check_object(value, kind, |obj, errors| match obj.get("coordinates") {
            Some(coords) => errors.extend(coordinates(self, coords)),
            None => errors.push(Finding::MissingMember("coordinates").to_string()),
        })
    }

    /// A required member that must hold an array; each element goes through
    /// `element` with index-prefixed findings.
    pub(super) fn check_member_array(
        &self,
        obj: &Map<String, Value>,
        member: &'static str,
        element: PayloadCheck,
        errors: &mut Vec<String>,
    ) {
        match obj.get(member) {
            Some(Value::Array(items)) => errors.extend(self.check_each(items, element)),
            Some(_) => errors.push(Finding::MemberNotArray(member).to_string()),
            None => errors.push(Finding::MissingMember(member).to_string()),
        }
    }
}
