//! The seven geometry kinds.

use serde_json::Value;

use crate::kind::GeoJsonType;

use super::Validator;

impl Validator {
    pub(super) fn check_point(&self, value: &Value) -> Vec<String> {
        self.check_coordinate_geometry(value, GeoJsonType::Point, Validator::check_position)
    }

    pub(super) fn check_multi_point(&self, value: &Value) -> Vec<String> {
        self.check_coordinate_geometry(
            value,
            GeoJsonType::MultiPoint,
            Validator::check_multi_point_coords,
        )
    }

    pub(super) fn check_line_string(&self, value: &Value) -> Vec<String> {
        self.check_coordinate_geometry(
            value,
            GeoJsonType::LineString,
            Validator::check_line_string_coords,
        )
    }

    pub(super) fn check_multi_line_string(&self, value: &Value) -> Vec<String> {
        self.check_coordinate_geometry(
            value,
            GeoJsonType::MultiLineString,
            Validator::check_multi_line_string_coords,
        )
    }

    pub(super) fn check_polygon(&self, value: &Value) -> Vec<String> {
        self.check_coordinate_geometry(value, GeoJsonType::Polygon, Validator::check_polygon_coords)
    }

    pub(super) fn check_multi_polygon(&self, value: &Value) -> Vec<String> {
        self.check_coordinate_geometry(
            value,
            GeoJsonType::MultiPolygon,
            Validator::check_multi_polygon_coords,
        )
    }

    /// Members of `geometries` may be any geometry, including further
    /// collections.
    pub(super) fn check_geometry_collection(&self, value: &Value) -> Vec<String> {
        self.check_object(value, GeoJsonType::GeometryCollection, |obj, errors| {
            self.check_member_array(obj, "geometries", Validator::check_geometry_object, errors)
        })
    }
}
