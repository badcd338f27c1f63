//! LIMIT / OFFSET templating.

use crate::spec::{DEFAULT_MAX_LIMIT, Pagination};

/// Build the pagination clause.
///
/// A fully unset pagination (page 0, limit 0) yields an empty string: all
/// rows. Otherwise `max_limit` falls back to [`DEFAULT_MAX_LIMIT`], `limit`
/// defaults to `max_limit` and is clamped down to it, and `page` defaults
/// to 1.
pub fn build_pagination(pagination: &Pagination) -> String {
    if pagination.page == 0 && pagination.limit == 0 {
        return String::new();
    }

    let max_limit = if pagination.max_limit == 0 {
        DEFAULT_MAX_LIMIT
    } else {
        pagination.max_limit
    };

    let limit = if pagination.limit == 0 || pagination.limit > max_limit {
        max_limit
    } else {
        pagination.limit
    };

    let page = if pagination.page == 0 {
        1
    } else {
        pagination.page
    };

    let offset = (page - 1) * limit;

    format!("LIMIT {limit} OFFSET {offset}")
}
