//! Leaf checks: positions and bounding boxes.

use serde_json::Value;

use crate::constants::Finding;
use crate::kind::GeoJsonType;

use super::Validator;

fn is_finite_number(value: &Value) -> bool {
    value.as_f64().is_some_and(f64::is_finite)
}

/// Built-in position findings, without any custom validator.
pub(super) fn position_findings(value: &Value) -> Vec<String> {
    match value.as_array() {
        None => vec![Finding::PositionNotArray.to_string()],
        Some(items) if items.len() < 2 => vec![Finding::PositionTooShort.to_string()],
        Some(items) => items
            .iter()
            .enumerate()
            .filter(|(_, item)| !is_finite_number(item))
            .map(|(index, item)| Finding::not_number(index, item).to_string())
            .collect(),
    }
}

impl Validator {
    pub(super) fn check_position(&self, value: &Value) -> Vec<String> {
        let mut errors = position_findings(value);
        self.registry.apply(GeoJsonType::Position, value, &mut errors);
        errors
    }

    /// Numeric content of a bbox is not checked, only its shape.
    pub(super) fn check_bbox(&self, value: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        match value.as_array() {
            None => errors.push(Finding::BboxNotArray.to_string()),
            Some(items) if items.len() % 2 != 0 => {
                errors.push(Finding::BboxOddLength.to_string())
            }
            Some(_) => {}
        }
        self.registry.apply(GeoJsonType::Bbox, value, &mut errors);
        errors
    }
}

/// Element-wise numeric equality of two positions.
///
/// Both must be arrays of the same length whose elements are equal numbers,
/// so `[1, 2]` equals `[1.0, 2.0]` but not `[1, 2, 0]`. Two integers are
/// compared exactly; anything else is compared as `f64`.
pub fn positions_equal(a: &Value, b: &Value) -> bool {
    match (a.as_array(), b.as_array()) {
        (Some(a), Some(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| numbers_equal(x, y))
        }
        _ => false,
    }
}

fn numbers_equal(x: &Value, y: &Value) -> bool {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return x == y;
    }
    // One side is a u64 beyond i64 and the other a negative i64.
    if (x.is_i64() && y.is_u64()) || (x.is_u64() && y.is_i64()) {
        return false;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
