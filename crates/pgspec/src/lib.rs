//! # pgspec
//!
//! Declarative filter specifications compiled to PostgreSQL query fragments.
//!
//! `pgspec` turns caller-supplied filter, sort, and pagination descriptors
//! into SQL text with Postgres positional placeholders (`$1, $2, ...`) plus
//! an ordered argument list, without ever touching a connection. Execution,
//! pooling, and transactions belong to the driver layer.
//!
//! ## Features
//!
//! - **Bound values stay out of the text**: comparison and range filters emit
//!   placeholders and carry their values in a [`ParamList`] ready for
//!   tokio-postgres.
//! - **Containment lists are inlined**: `IN` / `NOT IN` encode a closed set
//!   of typed collections as SQL literals; an empty or missing list fails
//!   closed to an always-false predicate.
//! - **Flat grouping**: parenthesized groups are per-field open/close
//!   markers, with unmatched opens force-closed after the last field.
//! - **Order is contract**: filters and sorts are ordered sequences;
//!   parameter numbering and chaining follow input order exactly.
//! - **Spliceable**: the `_with_sequence` variants seed placeholder numbering
//!   past slots an enclosing statement already consumed.
//!
//! ## Usage
//!
//! ```ignore
//! use pgspec::{Field, QuerySpec, SortField, build_query};
//!
//! let spec = QuerySpec::new()
//!     .filter(Field::eq("status", "active").source("u"))
//!     .filter(Field::in_list("role_id", vec![1, 2, 3]))
//!     .sort(SortField::desc("created_at"))
//!     .paginate(2, 20);
//!
//! let (sql, args) = build_query("SELECT * FROM users u", &spec)?;
//! // SELECT * FROM users u WHERE u.status = $1 AND role_id IN (1,2,3)
//! //   ORDER BY created_at DESC LIMIT 20 OFFSET 20
//! let rows = client.query(&sql, &args.as_refs()).await?;
//! ```

pub mod builder;
pub mod error;
pub mod param;
pub mod spec;

pub use builder::{
    build_insert, build_insert_no_id, build_order_by, build_pagination, build_query,
    build_query_with_sequence, build_select, build_update_by, build_update_by_id, build_where,
    build_where_with_sequence, columns_aliased,
};
pub use error::{BuildError, BuildResult};
pub use param::{Param, ParamList};
pub use spec::{
    Chain, ColumnRef, DEFAULT_MAX_LIMIT, Field, ListValue, Op, Pagination, QuerySpec, SortField,
    SortOrder,
};
