//! List envelope and query types for collection endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Maximum number of items to return.
    pub limit: Option<u64>,
}

/// Response wrapper for list endpoints.
///
/// `count` is always the number of items in `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// The returned items.
    pub data: Vec<T>,
    /// Number of items in `data`.
    pub count: usize,
}

impl<T> ListResponse<T> {
    /// Wraps a list of items.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

impl<T> FromIterator<T> for ListResponse<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
