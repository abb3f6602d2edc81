//! Catalogue of validation findings.
//!
//! Every message a built-in check can produce is a [`Finding`] variant; the
//! `#[error]` attribute is the exact text returned to callers in trace mode.

use serde_json::Value;
use thiserror::Error;

use crate::kind::{one_of, GeoJsonType};

/// Separator placed between an array index and a nested finding.
pub const INDEX_PREFIX: &str = "at ";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Finding {
    #[error("must be a JSON Object")]
    NotObject,
    #[error("must have a member with the name '{0}'")]
    MissingMember(&'static str),
    #[error("'{0}' must be an array")]
    MemberNotArray(&'static str),
    #[error("type must be '{0}'")]
    TypeMismatch(GeoJsonType),
    #[error("type must be one of: {}", one_of(&GeoJsonType::GEOMETRIES, " or "))]
    UnknownGeometryType,
    #[error("type must be one of: {}", one_of(&GeoJsonType::OBJECTS, ", or "))]
    UnknownObjectType,

    #[error("Position must be an array")]
    PositionNotArray,
    #[error("Position must be at least two elements")]
    PositionTooShort,
    #[error("Position must only contain numbers. Item {item} at index {index} is invalid.")]
    PositionNotNumber { index: usize, item: String },

    #[error("bbox must be an array")]
    BboxNotArray,
    #[error("bbox, must be a 2*n array")]
    BboxOddLength,

    #[error("coordinates must be an array")]
    CoordinatesNotArray,
    #[error("coordinates must have at least two elements")]
    TooFewLinePositions,
    #[error("coordinates must have at least four positions")]
    TooFewRingPositions,
    #[error("The first and last positions must be equivalent")]
    RingNotClosed,

    #[error("Problem with custom definition for {kind}: {fault}")]
    CustomFault { kind: GeoJsonType, fault: String },
}

impl Finding {
    /// Stable machine-readable name of the finding.
    pub fn code(&self) -> &'static str {
        match self {
            Finding::NotObject => "NOT_OBJECT",
            Finding::MissingMember(_) => "MISSING_MEMBER",
            Finding::MemberNotArray(_) => "MEMBER_NOT_ARRAY",
            Finding::TypeMismatch(_) => "TYPE_MISMATCH",
            Finding::UnknownGeometryType => "UNKNOWN_GEOMETRY_TYPE",
            Finding::UnknownObjectType => "UNKNOWN_OBJECT_TYPE",
            Finding::PositionNotArray => "POSITION_NOT_ARRAY",
            Finding::PositionTooShort => "POSITION_TOO_SHORT",
            Finding::PositionNotNumber { .. } => "POSITION_NOT_NUMBER",
            Finding::BboxNotArray => "BBOX_NOT_ARRAY",
            Finding::BboxOddLength => "BBOX_ODD_LENGTH",
            Finding::CoordinatesNotArray => "COORDINATES_NOT_ARRAY",
            Finding::TooFewLinePositions => "TOO_FEW_LINE_POSITIONS",
            Finding::TooFewRingPositions => "TOO_FEW_RING_POSITIONS",
            Finding::RingNotClosed => "RING_NOT_CLOSED",
            Finding::CustomFault { .. } => "CUSTOM_FAULT",
        }
    }

    pub(crate) fn not_number(index: usize, item: &Value) -> Self {
        let item = match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Finding::PositionNotNumber { index, item }
    }
}

/// Prefixes a nested finding with the index of the array element it came from.
pub fn at_index(index: usize, message: &str) -> String {
    format!("{INDEX_PREFIX}{index}: {message}")
}
