//! GeoJSON object type names.
//!
//! The `type` discriminant of every GeoJSON object maps onto [`GeoJsonType`].
//! A few extra names (`Position`, `Bbox`, `GeometryObject`, `GeoJSON`) are not
//! object types; they only exist as keys for custom validators.

use std::fmt;
use std::str::FromStr;

use crate::error::GeoJsonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeoJsonType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Feature,
    FeatureCollection,
    Position,
    Bbox,
    GeometryObject,
    GeoJson,
}

impl GeoJsonType {
    /// The seven geometry kinds, in dispatch order.
    pub const GEOMETRIES: [GeoJsonType; 7] = [
        GeoJsonType::Point,
        GeoJsonType::MultiPoint,
        GeoJsonType::LineString,
        GeoJsonType::MultiLineString,
        GeoJsonType::Polygon,
        GeoJsonType::MultiPolygon,
        GeoJsonType::GeometryCollection,
    ];

    /// Every kind a top-level GeoJSON object may carry in its `type` member.
    pub const OBJECTS: [GeoJsonType; 9] = [
        GeoJsonType::Point,
        GeoJsonType::MultiPoint,
        GeoJsonType::LineString,
        GeoJsonType::MultiLineString,
        GeoJsonType::Polygon,
        GeoJsonType::MultiPolygon,
        GeoJsonType::GeometryCollection,
        GeoJsonType::Feature,
        GeoJsonType::FeatureCollection,
    ];

    pub const ALL: [GeoJsonType; 13] = [
        GeoJsonType::Point,
        GeoJsonType::MultiPoint,
        GeoJsonType::LineString,
        GeoJsonType::MultiLineString,
        GeoJsonType::Polygon,
        GeoJsonType::MultiPolygon,
        GeoJsonType::GeometryCollection,
        GeoJsonType::Feature,
        GeoJsonType::FeatureCollection,
        GeoJsonType::Position,
        GeoJsonType::Bbox,
        GeoJsonType::GeometryObject,
        GeoJsonType::GeoJson,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GeoJsonType::Point => "Point",
            GeoJsonType::MultiPoint => "MultiPoint",
            GeoJsonType::LineString => "LineString",
            GeoJsonType::MultiLineString => "MultiLineString",
            GeoJsonType::Polygon => "Polygon",
            GeoJsonType::MultiPolygon => "MultiPolygon",
            GeoJsonType::GeometryCollection => "GeometryCollection",
            GeoJsonType::Feature => "Feature",
            GeoJsonType::FeatureCollection => "FeatureCollection",
            GeoJsonType::Position => "Position",
            GeoJsonType::Bbox => "Bbox",
            GeoJsonType::GeometryObject => "GeometryObject",
            GeoJsonType::GeoJson => "GeoJSON",
        }
    }

    pub fn is_geometry(self) -> bool {
        Self::GEOMETRIES.contains(&self)
    }

    /// True for kinds that can appear as the `type` member of a GeoJSON object.
    pub fn is_object(self) -> bool {
        Self::OBJECTS.contains(&self)
    }

    /// Reads the `type` member of a JSON object, if it names a known kind.
    ///
    /// Matching is exact and case-sensitive: `"point"` is not a kind.
    pub fn of(type_member: &serde_json::Value) -> Option<GeoJsonType> {
        type_member.as_str().and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for GeoJsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoJsonType {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoJsonType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GeoJsonError::UnknownType(s.to_string()))
    }
}

/// Joins kind names as `'A', 'B' or 'C'`, with `last_sep` before the final name.
pub(crate) fn one_of(kinds: &[GeoJsonType], last_sep: &str) -> String {
    let quoted: Vec<String> = kinds.iter().map(|k| format!("'{k}'")).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{}{last_sep}{last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_every_name_back() {
        for kind in GeoJsonType::ALL {
            assert_eq!(kind.as_str().parse::<GeoJsonType>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("point".parse::<GeoJsonType>().is_err());
        assert!("lineString".parse::<GeoJsonType>().is_err());
        assert_eq!(
            "Geojson".parse::<GeoJsonType>().unwrap_err(),
            GeoJsonError::UnknownType("Geojson".to_string())
        );
    }

    #[test]
    fn reads_type_member() {
        assert_eq!(GeoJsonType::of(&json!("Polygon")), Some(GeoJsonType::Polygon));
        assert_eq!(GeoJsonType::of(&json!(42)), None);
        assert_eq!(GeoJsonType::of(&json!(null)), None);
    }

    #[test]
    fn classification() {
        assert!(GeoJsonType::GeometryCollection.is_geometry());
        assert!(!GeoJsonType::Feature.is_geometry());
        assert!(GeoJsonType::FeatureCollection.is_object());
        assert!(!GeoJsonType::Bbox.is_object());
        assert_eq!(GeoJsonType::GeoJson.to_string(), "GeoJSON");
    }

    #[test]
    fn one_of_lists() {
        assert_eq!(
            one_of(&[GeoJsonType::Point, GeoJsonType::Polygon], " or "),
            "'Point' or 'Polygon'"
        );
        assert_eq!(
            one_of(
                &[GeoJsonType::Point, GeoJsonType::Feature, GeoJsonType::FeatureCollection],
                ", or "
            ),
            "'Point', 'Feature', or 'FeatureCollection'"
        );
        assert_eq!(one_of(&[GeoJsonType::Bbox], " or "), "'Bbox'");
    }
}
