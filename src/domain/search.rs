//! Case-insensitive substring matching over names.

use serde::Serialize;

/// True when `term` occurs anywhere in `name`, ignoring case.
/// An empty term matches every name.
#[must_use]
pub fn name_matches(name: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&term.to_lowercase())
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
