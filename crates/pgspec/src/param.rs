//! Bound-argument storage handed to the execution layer.

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly bound argument wrapping any ToSql value in an Arc.
///
/// Filter values are stored behind `Arc` so specifications stay cheap to
/// clone and a build never takes ownership of caller data.
#[derive(Clone)]
pub struct Param(pub(crate) Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Create a new argument from any ToSql value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        // drops Send from the bounds, which tokio-postgres does not require
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Param").field(&"<dyn ToSql>").finish()
    }
}

/// The ordered argument list produced alongside query text.
///
/// Element order matches placeholder numbering: the value for `$N` sits at
/// index `N - start` for a build seeded at `start`.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    params: Vec<Param>,
}

impl ParamList {
    /// Create a new empty argument list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Append a pre-wrapped argument.
    pub fn push(&mut self, param: Param) {
        self.params.push(param);
    }

    /// Append any ToSql value.
    pub fn push_value<T: ToSql + Send + Sync + 'static>(&mut self, value: T) {
        self.params.push(Param::new(value));
    }

    /// Get the current argument count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Get all arguments as references for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}
