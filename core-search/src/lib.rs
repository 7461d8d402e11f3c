//! # Dataset Search Index
//!
//! Quick-search for dataset records on one source catalog.
//!
//! Translates an operator's free-text query plus an "include harvested
//! records" flag into a structured full-text query, and flattens the
//! search-engine hit envelope into a plain result list. This is a
//! first-page-only search (fixed size of 20, offset 0), not a paginated
//! browse.

pub mod error;
pub mod search;

pub use error::{Result, SearchError};
pub use search::{DatasetSearch, SearchResult, SEARCH_PAGE_SIZE};
