//! Checkbox/flag resolution

use std::collections::BTreeMap;

/// Resolve a flag-bearing table cell to its rendered text.
///
/// An explicit non-empty value keyed by `flag_key` wins; otherwise the
/// presence of `flag_key` in `flags` renders as a literal `"X"` mark;
/// otherwise the cell stays empty. This is the checkbox/value duality used
/// throughout the drilling table.
pub fn resolve_flag_value(
    flag_key: &str,
    explicit_values: &BTreeMap<String, String>,
    flags: &[String],
) -> String {
    if let Some(value) = explicit_values.get(flag_key) {
        if !value.trim().is_empty() {
            return value.clone();
        }
    }

    if flags.iter().any(|f| f == flag_key) {
        return "X".to_string();
    }

    String::new()
}
