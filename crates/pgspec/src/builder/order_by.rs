//! ORDER BY templating.

use crate::spec::SortField;

/// Build the ORDER BY clause for an ordered sort sequence.
///
/// Sort keys are emitted in input order, alias-qualified the same way filters
/// are. Empty input yields an empty string.
pub fn build_order_by(sorts: &[SortField]) -> String {
    if sorts.is_empty() {
        return String::new();
    }

    let keys: Vec<String> = sorts
        .iter()
        .map(|sort| format!("{} {}", sort.qualified_name(), sort.order))
        .collect();

    format!("ORDER BY {}", keys.join(", "))
}
