//! Symbol search: the two-tier fallback facade and its debounced wrapper.

mod debounce;
mod facade;

pub use debounce::{DebouncedSearch, SEARCH_DEBOUNCE};
pub use facade::SymbolSearch;
