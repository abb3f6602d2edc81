//! Coordinate-array checks.
//!
//! The multi-geometry payloads are all built the same way: an array whose
//! elements go through the check one nesting level down, with each nested
//! finding prefixed by the element index.

use serde_json::Value;

use crate::constants::{at_index, Finding};

use super::position::position_findings;
use super::Validator;

type ElementCheck = fn(&Validator, &Value) -> Vec<String>;

impl Validator {
    /// Applies `element` to every item of `items`, prefixing failures with
    /// their index. Items are visited in ascending order.
    pub(super) fn check_each(&self, items: &[Value], element: ElementCheck) -> Vec<String> {
        items
            .iter()
            .enumerate()
            .flat_map(|(index, item)| {
                element(self, item)
                    .into_iter()
                    .map(move |message| at_index(index, &message))
            })
            .collect()
    }

    fn check_coordinate_array(&self, value: &Value, element: ElementCheck) -> Vec<String> {
        match value.as_array() {
            Some(items) => self.check_each(items, element),
            None => vec![Finding::CoordinatesNotArray.to_string()],
        }
    }

    pub(super) fn check_multi_point_coords(&self, value: &Value) -> Vec<String> {
        self.check_coordinate_array(value, Validator::check_position)
    }

    pub(super) fn check_line_string_coords(&self, value: &Value) -> Vec<String> {
        match value.as_array() {
            Some(items) if items.len() <= 1 => vec![Finding::TooFewLinePositions.to_string()],
            _ => self.check_coordinate_array(value, Validator::check_position),
        }
    }

    pub(super) fn check_multi_line_string_coords(&self, value: &Value) -> Vec<String> {
        self.check_coordinate_array(value, Validator::check_line_string_coords)
    }

    /// A linear ring: four or more positions, closed unless closure checking
    /// is switched off. Closure is only checked once every position passes the
    /// built-in position rules; custom Position findings do not suppress it.
    pub(super) fn check_linear_ring(&self, value: &Value) -> Vec<String> {
        let items = match value.as_array() {
            None => return vec![Finding::CoordinatesNotArray.to_string()],
            Some(items) if items.len() < 4 => {
                return vec![Finding::TooFewRingPositions.to_string()]
            }
            Some(items) => items,
        };
        let mut errors = self.check_each(items, Validator::check_position);
        let positions_valid = items.iter().all(|item| position_findings(item).is_empty());
        if positions_valid && self.options.ring_closure {
            if let (Some(first), Some(last)) = (items.first(), items.last()) {
                if !super::positions_equal(first, last) {
                    errors.push(Finding::RingNotClosed.to_string());
                }
            }
        }
        errors
    }

    pub(super) fn check_polygon_coords(&self, value: &Value) -> Vec<String> {
        self.check_coordinate_array(value, Validator::check_linear_ring)
    }

    pub(super) fn check_multi_polygon_coords(&self, value: &Value) -> Vec<String> {
        self.check_coordinate_array(value, Validator::check_polygon_coords)
    }
}
