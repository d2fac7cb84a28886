//! Response aggregation.
//!
//! Turns an attendee's sparse "yes" selections into a complete response row
//! set covering every date option of the event. The same shape is produced
//! for new attendees and for edits, so an edit always replaces every row.

use std::collections::HashMap;

use serde_json::Value;

use crate::models::{DateResponse, EventDateOption, FormField};

/// Returns true if a submitted control value counts as "yes".
///
/// Follows JavaScript truthiness: `null`, `false`, `0`, NaN and the empty
/// string are "no"; every other value, including any non-empty string, is "yes".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Collapses submitted name/value pairs into a date-option-id → yes map.
///
/// Names that are not integer ids are ignored. A later pair for the same id
/// overrides an earlier one.
pub fn parse_yes_selections(pairs: &[FormField]) -> HashMap<i64, bool> {
    pairs
        .iter()
        .filter_map(|pair| {
            pair.name
                .trim()
                .parse::<i64>()
                .ok()
                .map(|id| (id, is_truthy(&pair.value)))
        })
        .collect()
}

/// Produces exactly one response per date option, in option order.
///
/// A response is `true` only if the option's id is selected with a truthy
/// value; selections for ids outside `options` are dropped.
pub fn aggregate_responses(
    options: &[EventDateOption],
    selections: &HashMap<i64, bool>,
) -> Vec<DateResponse> {
    options
        .iter()
        .map(|option| {
            let response = selections.get(&option.id).copied().unwrap_or(false);
            DateResponse::new(option.id, response)
        })
        .collect()
}

/// Convenience wrapper: parse the submitted pairs and aggregate them.
pub fn responses_from_form(options: &[EventDateOption], pairs: &[FormField]) -> Vec<DateResponse> {
    aggregate_responses(options, &parse_yes_selections(pairs))
}
