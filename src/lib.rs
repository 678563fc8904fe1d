//! Search subsystem for a game-modding documentation browser.
//!
//! Flattens the pre-crawled API reference collections (scripting API, game
//! events, UI-framework API, UI events) into a uniform record set and serves
//! fuzzy, scoped, ranked lookups over a process-wide memoized index.

pub mod catalog;
pub mod debounce;
pub mod error;
pub mod model;
pub mod search;
pub mod tracing;

pub use catalog::ApiCatalog;
pub use debounce::SearchDebouncer;
pub use search::{
    DEFAULT_LIMIT, IndexCell, RecordKind, Scope, SearchIndex, SearchRecord, collect_records,
};
