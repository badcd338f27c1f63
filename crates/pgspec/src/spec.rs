//! Filter, sort, and pagination descriptors for one query build.
//!
//! A [`QuerySpec`] is the declarative contract handed to the builders:
//! ordered [`Field`] filters, ordered [`SortField`] keys, and [`Pagination`].
//! Descriptors are plain per-call values; builds read them and never mutate,
//! so one spec can back any number of builds.

use crate::param::Param;
use chrono::NaiveDate;
use std::fmt;
use tokio_postgres::types::ToSql;
use uuid::Uuid;

/// Default cap applied when pagination does not carry its own `max_limit`.
pub const DEFAULT_MAX_LIMIT: u64 = 100;

/// Filter operator.
///
/// # Example
/// ```ignore
/// use pgspec::{Field, Op};
///
/// Field::eq("status", "active");          // status = $1
/// Field::new("deleted_at", Op::IsNull);   // deleted_at IS NULL
/// Field::between("age", 18, 65);          // age BETWEEN $1 AND $2
/// Field::in_list("role_id", vec![1, 2]);  // role_id IN (1,2)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Op {
    /// Equal: column = value
    #[default]
    Eq,
    /// Not equal: column != value
    Ne,
    /// Greater than: column > value
    Gt,
    /// Greater than or equal: column >= value
    Gte,
    /// Less than: column < value
    Lt,
    /// Less than or equal: column <= value
    Lte,
    /// IN (literal list)
    In,
    /// NOT IN (literal list)
    NotIn,
    /// IS NULL
    IsNull,
    /// IS NOT NULL
    IsNotNull,
    /// BETWEEN a AND b
    Between,
    /// A bare parenthesis marker carrying no comparison of its own.
    Paren,
}

impl Op {
    /// SQL token for this operator. `Paren` has no token of its own.
    pub(crate) fn as_sql(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::In => "IN",
            Op::NotIn => "NOT IN",
            Op::IsNull => "IS NULL",
            Op::IsNotNull => "IS NOT NULL",
            Op::Between => "BETWEEN",
            Op::Paren => "",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Logical connective joining consecutive filter conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chain {
    #[default]
    And,
    Or,
}

impl Chain {
    pub(crate) fn as_sql(self) -> &'static str {
        match self {
            Chain::And => "AND",
            Chain::Or => "OR",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Cross-column comparison target: another column, optionally qualified by a
/// table alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: String,
    pub source: Option<String>,
}

impl ColumnRef {
    /// Reference a column by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
        }
    }

    /// Qualify the column with a table alias.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Alias-qualified, lowercased form used in emitted SQL.
    pub(crate) fn qualified(&self) -> String {
        match self.source.as_deref() {
            Some(source) if !source.is_empty() => {
                format!("{}.{}", source, self.name).to_lowercase()
            }
            _ => self.name.to_lowercase(),
        }
    }
}

/// Homogeneous value collection for `IN` / `NOT IN`.
///
/// A closed set of supported kinds, resolved when the filter is built. The
/// containment encoder inlines these as SQL literals rather than bound
/// parameters, so values must come from trusted, already-validated sources.
#[derive(Debug, Clone, PartialEq)]
pub enum ListValue {
    Uints(Vec<u64>),
    Ints(Vec<i32>),
    BigInts(Vec<i64>),
    Strings(Vec<String>),
    Uuids(Vec<Uuid>),
    Dates(Vec<NaiveDate>),
}

impl ListValue {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            ListValue::Uints(items) => items.len(),
            ListValue::Ints(items) => items.len(),
            ListValue::BigInts(items) => items.len(),
            ListValue::Strings(items) => items.len(),
            ListValue::Uuids(items) => items.len(),
            ListValue::Dates(items) => items.len(),
        }
    }
}

impl From<Vec<u64>> for ListValue {
    fn from(items: Vec<u64>) -> Self {
        ListValue::Uints(items)
    }
}

impl From<Vec<i32>> for ListValue {
    fn from(items: Vec<i32>) -> Self {
        ListValue::Ints(items)
    }
}

impl From<Vec<i64>> for ListValue {
    fn from(items: Vec<i64>) -> Self {
        ListValue::BigInts(items)
    }
}

impl From<Vec<String>> for ListValue {
    fn from(items: Vec<String>) -> Self {
        ListValue::Strings(items)
    }
}

impl From<Vec<&str>> for ListValue {
    fn from(items: Vec<&str>) -> Self {
        ListValue::Strings(items.into_iter().map(String::from).collect())
    }
}

impl From<Vec<Uuid>> for ListValue {
    fn from(items: Vec<Uuid>) -> Self {
        ListValue::Uuids(items)
    }
}

impl From<Vec<NaiveDate>> for ListValue {
    fn from(items: Vec<NaiveDate>) -> Self {
        ListValue::Dates(items)
    }
}

/// One filter condition.
///
/// Constructed through the convenience constructors below, or literally when
/// a caller maps its own request types. Unset operator and chaining default to
/// `Eq` and `And`.
#[derive(Debug, Clone, Default)]
pub struct Field {
    /// Column name, possibly already table-qualified.
    pub name: String,
    /// Table alias used to qualify `name`.
    pub source: Option<String>,
    pub op: Op,
    /// Bound value for comparison operators.
    pub value: Option<Param>,
    /// Literal collection for `In` / `NotIn`.
    pub list: Option<ListValue>,
    /// Lower range bound for `Between`.
    pub from_value: Option<Param>,
    /// Upper range bound for `Between`.
    pub to_value: Option<Param>,
    /// Connective to the following condition.
    pub chain: Chain,
    /// Opens a parenthesized group at this condition.
    pub group_open: bool,
    /// Closes a parenthesized group after this condition.
    pub group_close: bool,
    /// Compare against another column instead of a bound value.
    pub column: Option<ColumnRef>,
}

impl Field {
    /// Create a filter with an explicit operator and nothing bound.
    pub fn new(name: impl Into<String>, op: Op) -> Self {
        Self {
            name: name.into(),
            op,
            ..Self::default()
        }
    }

    fn cmp<T>(name: impl Into<String>, op: Op, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self {
            value: Some(Param::new(value)),
            ..Self::new(name, op)
        }
    }

    /// column = value
    pub fn eq<T>(name: impl Into<String>, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::cmp(name, Op::Eq, value)
    }

    /// column != value
    pub fn ne<T>(name: impl Into<String>, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::cmp(name, Op::Ne, value)
    }

    /// column > value
    pub fn gt<T>(name: impl Into<String>, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::cmp(name, Op::Gt, value)
    }

    /// column >= value
    pub fn gte<T>(name: impl Into<String>, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::cmp(name, Op::Gte, value)
    }

    /// column < value
    pub fn lt<T>(name: impl Into<String>, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::cmp(name, Op::Lt, value)
    }

    /// column <= value
    pub fn lte<T>(name: impl Into<String>, value: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self::cmp(name, Op::Lte, value)
    }

    /// column IS NULL
    pub fn is_null(name: impl Into<String>) -> Self {
        Self::new(name, Op::IsNull)
    }

    /// column IS NOT NULL
    pub fn is_not_null(name: impl Into<String>) -> Self {
        Self::new(name, Op::IsNotNull)
    }

    /// column IN (literal list)
    pub fn in_list(name: impl Into<String>, list: impl Into<ListValue>) -> Self {
        Self {
            list: Some(list.into()),
            ..Self::new(name, Op::In)
        }
    }

    /// column NOT IN (literal list)
    pub fn not_in(name: impl Into<String>, list: impl Into<ListValue>) -> Self {
        Self {
            list: Some(list.into()),
            ..Self::new(name, Op::NotIn)
        }
    }

    /// column BETWEEN from AND to
    pub fn between<T>(name: impl Into<String>, from: T, to: T) -> Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        Self {
            from_value: Some(Param::new(from)),
            to_value: Some(Param::new(to)),
            ..Self::new(name, Op::Between)
        }
    }

    /// Compare against another column instead of a bound value.
    ///
    /// Emits `name OP target` with no placeholder.
    pub fn cmp_column(name: impl Into<String>, op: Op, target: ColumnRef) -> Self {
        Self {
            column: Some(target),
            ..Self::new(name, op)
        }
    }

    /// A bare `(` marker opening a parenthesized group.
    ///
    /// The marker emits only the parenthesis: no comparison, no placeholder,
    /// and no chaining separator after it.
    pub fn open_paren() -> Self {
        Self {
            group_open: true,
            ..Self::new("", Op::Paren)
        }
    }

    /// Qualify the column with a table alias.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Chain to the following condition with OR instead of AND.
    pub fn or(mut self) -> Self {
        self.chain = Chain::Or;
        self
    }

    /// Open a parenthesized group at this condition.
    pub fn open_group(mut self) -> Self {
        self.group_open = true;
        self
    }

    /// Close a parenthesized group after this condition.
    pub fn close_group(mut self) -> Self {
        self.group_close = true;
        self
    }

    /// Resolve defaults into a fresh per-build view of this field.
    ///
    /// Qualifies and lowercases the column name, applies the group-open
    /// prefix, and qualifies a cross-column target. The source field is left
    /// untouched.
    pub(crate) fn normalize(&self) -> NormalizedField {
        let mut name = match self.source.as_deref() {
            Some(source) if !source.is_empty() => format!("{}.{}", source, self.name),
            _ => self.name.clone(),
        }
        .to_lowercase();

        if self.group_open {
            name = if self.op == Op::Paren {
                " (".to_string()
            } else {
                format!("({name}")
            };
        }

        NormalizedField {
            name,
            op: self.op,
            chain: self.chain,
            group_open: self.group_open,
            group_close: self.group_close,
            target: self.column.as_ref().map(ColumnRef::qualified),
        }
    }
}

/// A field after default resolution, as the predicate assembler consumes it.
#[derive(Debug)]
pub(crate) struct NormalizedField {
    pub name: String,
    pub op: Op,
    pub chain: Chain,
    pub group_open: bool,
    pub group_close: bool,
    pub target: Option<String>,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub(crate) fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// One sort key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortField {
    pub name: String,
    /// Table alias used to qualify `name`.
    pub source: Option<String>,
    pub order: SortOrder,
}

impl SortField {
    /// Sort ascending on a column.
    pub fn asc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            order: SortOrder::Asc,
        }
    }

    /// Sort descending on a column.
    pub fn desc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            order: SortOrder::Desc,
        }
    }

    /// Qualify the column with a table alias.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Alias-qualified, lowercased form used in emitted SQL.
    pub(crate) fn qualified_name(&self) -> String {
        match self.source.as_deref() {
            Some(source) if !source.is_empty() => {
                format!("{}.{}", source, self.name).to_lowercase()
            }
            _ => self.name.to_lowercase(),
        }
    }
}

/// Paging parameters. Zero means unset; defaults resolve at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    /// 1-based page number. 0 defaults to 1.
    pub page: u64,
    /// Rows per page. 0 defaults to `max_limit`; larger values clamp to it.
    pub limit: u64,
    /// Cap on `limit`. 0 defaults to [`DEFAULT_MAX_LIMIT`].
    pub max_limit: u64,
}

impl Pagination {
    /// Page `page` with `limit` rows per page.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit,
            max_limit: 0,
        }
    }

    /// Override the limit cap.
    pub fn max_limit(mut self, max_limit: u64) -> Self {
        self.max_limit = max_limit;
        self
    }
}

/// The full declarative contract for one query build.
///
/// Filters and sorts are ordered sequences: parameter numbering, group
/// balancing, and chaining all follow input order, so they must never be
/// collected through an order-agnostic structure.
///
/// # Example
/// ```ignore
/// use pgspec::{Field, QuerySpec, SortField};
///
/// let spec = QuerySpec::new()
///     .filter(Field::eq("status", "active").source("u"))
///     .filter(Field::in_list("role_id", vec![1, 2, 3]))
///     .sort(SortField::desc("created_at"))
///     .paginate(2, 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    pub filters: Vec<Field>,
    pub sorts: Vec<SortField>,
    pub pagination: Pagination,
}

impl QuerySpec {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter condition.
    pub fn filter(mut self, field: Field) -> Self {
        self.filters.push(field);
        self
    }

    /// Append a sort key.
    pub fn sort(mut self, sort: SortField) -> Self {
        self.sorts.push(sort);
        self
    }

    /// Request page `page` with `limit` rows per page.
    pub fn paginate(mut self, page: u64, limit: u64) -> Self {
        self.pagination.page = page;
        self.pagination.limit = limit;
        self
    }

    /// Override the pagination limit cap.
    pub fn max_limit(mut self, max_limit: u64) -> Self {
        self.pagination.max_limit = max_limit;
        self
    }
}
