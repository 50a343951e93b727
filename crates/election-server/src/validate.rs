//! Required-field checks for write requests.

use serde_json::{Map, Value};

/// Returns one `"No <field> specified."` message per required field that is
/// absent, `null`, or an empty string, or `None` when all are present.
///
/// Presence is the only rule: values are not type-checked here.
pub fn missing_fields(record: &Map<String, Value>, required: &[&str]) -> Option<Vec<String>> {
    let problems: Vec<String> = required
        .iter()
        .filter(|field| match record.get(**field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        })
        .map(|field| format!("No {field} specified."))
        .collect();

    if problems.is_empty() {
        None
    } else {
        Some(problems)
    }
}
