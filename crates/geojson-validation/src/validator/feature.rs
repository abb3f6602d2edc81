//! Feature and FeatureCollection.

use serde_json::Value;

use crate::constants::Finding;
use crate::kind::GeoJsonType;
use crate::types::PropertiesPolicy;

use super::Validator;

impl Validator {
    /// The contents of `properties` are never inspected.
    pub(super) fn check_feature(&self, value: &Value, properties: PropertiesPolicy) -> Vec<String> {
        self.check_object(value, GeoJsonType::Feature, |obj, errors| {
            if properties == PropertiesPolicy::Required && !obj.contains_key("properties") {
                errors.push(Finding::MissingMember("properties").to_string());
            }
            match obj.get("geometry") {
                Some(Value::Null) => {}
                Some(geometry) => errors.extend(self.check_geometry_object(geometry)),
                None => errors.push(Finding::MissingMember("geometry").to_string()),
            }
        })
    }

    fn check_collection_member(&self, value: &Value) -> Vec<String> {
        self.check_feature(value, self.options.properties)
    }

    pub(super) fn check_feature_collection(&self, value: &Value) -> Vec<String> {
        self.check_object(value, GeoJsonType::FeatureCollection, |obj, errors| {
            self.check_member_array(obj, "features", Validator::check_collection_member, errors)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidatorOptions;
    use serde_json::json;

    fn v() -> Validator {
        Validator::new(ValidatorOptions::default())
    }

    #[test]
    fn properties_policy() {
        let feature = json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [0, 0]}});
        assert_eq!(
            v().check_feature(&feature, PropertiesPolicy::Required),
            ["must have a member with the name 'properties'"]
        );
        assert!(v().check_feature(&feature, PropertiesPolicy::Optional).is_empty());

        let null_props = json!({"type": "Feature", "geometry": null, "properties": null});
        assert!(v().check_feature(&null_props, PropertiesPolicy::Required).is_empty());
        assert!(v().check_feature(&null_props, PropertiesPolicy::Optional).is_empty());
    }

    #[test]
    fn geometry_member() {
        assert_eq!(
            v().check_feature(&json!({"type": "Feature", "properties": {}}), PropertiesPolicy::Required),
            ["must have a member with the name 'geometry'"]
        );
        assert_eq!(
            v().check_feature(
                &json!({"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": "x"}}),
                PropertiesPolicy::Required
            ),
            ["Position must be an array"]
        );
        assert_eq!(
            v().check_feature(
                &json!({"type": "feature", "properties": {"a": [1, {}]}, "geometry": 4}),
                PropertiesPolicy::Required
            ),
            ["type must be 'Feature'", "must be a JSON Object"]
        );
    }

    #[test]
    fn feature_collection() {
        let fc = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[102, 0], [103, 1], [0.0], [105, 1]]},
                "properties": {}
            }]
        });
        assert_eq!(
            v().check_feature_collection(&fc),
            ["at 0: at 2: Position must be at least two elements"]
        );

        assert_eq!(
            v().check_feature_collection(&json!({"type": "FeatureCollection", "features": [{"type": "Feature", "geometry": null}]})),
            ["at 0: must have a member with the name 'properties'"]
        );
        assert_eq!(
            v().check_feature_collection(&json!({"type": "FeatureCollection", "features": {}})),
            ["'features' must be an array"]
        );
        assert_eq!(
            v().check_feature_collection(&json!({"type": "FeatureCollection"})),
            ["must have a member with the name 'features'"]
        );
    }

    #[test]
    fn collection_members_follow_configured_policy() {
        let v = Validator::new(ValidatorOptions::default().properties(PropertiesPolicy::Optional));
        let fc = json!({"type": "FeatureCollection", "features": [{"type": "Feature", "geometry": null}]});
        assert!(v.check_feature_collection(&fc).is_empty());
    }
}
