//! SQL fragment builders.
//!
//! Each clause has its own builder; [`build_query`] composes them. Only the
//! predicate contributes bound arguments: sort and pagination are plain
//! templates over their descriptors, and the statement templators are an
//! independent branch used for writes.

mod contains;
mod order_by;
mod pagination;
mod statement;
mod where_clause;

pub use order_by::build_order_by;
pub use pagination::build_pagination;
pub use statement::{
    build_insert, build_insert_no_id, build_select, build_update_by, build_update_by_id,
    columns_aliased,
};
pub use where_clause::{build_where, build_where_with_sequence};

use crate::error::BuildResult;
use crate::param::ParamList;
use crate::spec::QuerySpec;

/// Compose a base statement with a specification's predicate, sort, and
/// pagination clauses, in that fixed order.
///
/// Empty sub-clauses are skipped, keeping the result single-space separated.
/// The predicate's arguments are the only arguments returned.
pub fn build_query(initial: &str, spec: &QuerySpec) -> BuildResult<(String, ParamList)> {
    build_query_with_sequence(initial, spec, 1)
}

/// Compose like [`build_query`], with predicate placeholder numbering seeded
/// at `start` so it continues past placeholders the base statement already
/// consumed.
pub fn build_query_with_sequence(
    initial: &str,
    spec: &QuerySpec,
    start: usize,
) -> BuildResult<(String, ParamList)> {
    let (conditions, args) = build_where_with_sequence(&spec.filters, start)?;

    let mut query = initial.to_string();
    let clauses = [
        conditions,
        build_order_by(&spec.sorts),
        build_pagination(&spec.pagination),
    ];

    for clause in &clauses {
        if !clause.is_empty() {
            query.push(' ');
            query.push_str(clause);
        }
    }

    Ok((query, args))
}

#[cfg(test)]
mod tests;
