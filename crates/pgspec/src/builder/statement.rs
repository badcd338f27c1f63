//! Stateless statement templates: INSERT, UPDATE, column-list SELECT, and
//! aliased column lists.
//!
//! These are an independent branch used for writes and projection lists; they
//! are never composed with the predicate assembler. Column names are used
//! verbatim here, unlike the predicate and sort builders.

use crate::param::ParamList;
use crate::spec::Field;

/// Build an INSERT whose first column is a caller-supplied `id`.
///
/// Placeholder `$1` binds `id`; the remaining columns follow in input order.
/// The statement returns the row's `created_at`.
pub fn build_insert(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (0..columns.len()).map(|i| format!("${}", i + 2)).collect();

    format!(
        "INSERT INTO {} (id,{}) VALUES ($1,{}) RETURNING created_at",
        table,
        columns.join(","),
        placeholders.join(",")
    )
}

/// Build an INSERT for tables that generate their own identifier.
///
/// Placeholders start at `$1`; the statement returns the generated `id` and
/// `created_at`.
pub fn build_insert_no_id(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING id, created_at",
        table,
        columns.join(","),
        placeholders.join(",")
    )
}

/// Build an UPDATE keyed on `id`, always touching `updated_at`.
///
/// The identifying value binds the last placeholder, `$N+1` for N columns.
/// Empty columns yield an empty string.
pub fn build_update_by_id(table: &str, columns: &[&str]) -> String {
    if columns.is_empty() {
        return String::new();
    }

    let assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ${}", col, i + 1))
        .collect();

    format!(
        "UPDATE {} SET {}, updated_at = now() WHERE id = ${}",
        table,
        assignments.join(", "),
        columns.len() + 1
    )
}

/// Build an UPDATE keyed on an arbitrary column, carrying the new values.
///
/// Every field takes a placeholder slot in input order; fields without a
/// value contribute no argument, and the identifying value for the final
/// `WHERE {by_column} = $N+1` placeholder is bound by the caller at
/// execution. Empty fields yield an empty string and no arguments.
pub fn build_update_by(table: &str, by_column: &str, fields: &[Field]) -> (String, ParamList) {
    if fields.is_empty() {
        return (String::new(), ParamList::new());
    }

    let mut args = ParamList::new();
    let mut assignments = Vec::with_capacity(fields.len());

    for (i, field) in fields.iter().enumerate() {
        assignments.push(format!("{} = ${}", field.name, i + 1));

        if let Some(value) = &field.value {
            args.push(value.clone());
        }
    }

    let sql = format!(
        "UPDATE {} SET {}, updated_at = now() WHERE {} = ${}",
        table,
        assignments.join(", "),
        by_column,
        fields.len() + 1
    );

    (sql, args)
}

/// Build a column-list SELECT. Empty columns yield an empty string.
pub fn build_select(table: &str, columns: &[&str]) -> String {
    if columns.is_empty() {
        return String::new();
    }

    format!("SELECT {} FROM {}", columns.join(", "), table)
}

/// Alias-qualify a column list, bracketed by the bookkeeping columns:
/// `alias.id` first, `alias.created_at, alias.updated_at` last.
///
/// Empty columns yield an empty string.
pub fn columns_aliased(columns: &[&str], alias: &str) -> String {
    if columns.is_empty() {
        return String::new();
    }

    let qualified: Vec<String> = columns.iter().map(|col| format!("{alias}.{col}")).collect();

    format!(
        "{alias}.id, {}, {alias}.created_at, {alias}.updated_at",
        qualified.join(", ")
    )
}
