//! Containment (`IN` / `NOT IN`) encoding.
//!
//! List values are inlined as SQL literals rather than bound parameters, a
//! documented exception to parameter binding. Callers must only pass values
//! drawn from trusted, already-validated sources.

use crate::spec::{ListValue, Op};
use chrono::Datelike;
use std::fmt::Display;

/// Encode `name OP (lit,lit,...)` for a containment filter.
///
/// An empty or absent list degrades to the always-false `name = ''`, so a bad
/// containment list filters out all rows instead of matching everything.
pub(crate) fn encode_containment(name: &str, op: Op, list: Option<&ListValue>) -> String {
    let list = match list {
        Some(list) if !list.is_empty() => list,
        _ => {
            tracing::warn!(
                target: "pgspec.sql",
                column = %name,
                operator = %op,
                "empty or missing containment list, emitting always-false predicate"
            );
            return format!("{name} = ''");
        }
    };

    let literals = match list {
        ListValue::Uints(items) => join_bare(items),
        ListValue::Ints(items) => join_bare(items),
        ListValue::BigInts(items) => join_bare(items),
        ListValue::Strings(items) => join_quoted(items.iter()),
        ListValue::Uuids(items) => join_quoted(items.iter().map(ToString::to_string)),
        ListValue::Dates(items) => join_quoted(
            items
                .iter()
                .map(|d| format!("{}-{}-{}", d.year(), d.month(), d.day())),
        ),
    };

    format!("{name} {op} ({literals})")
}

fn join_bare<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn join_quoted<I, S>(items: I) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    items
        .map(|item| quote(item.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Single-quote a literal, doubling any embedded quote.
fn quote(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}
