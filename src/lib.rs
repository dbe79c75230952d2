//! # Calyx
//!
//! A fast, in-memory search engine for small product catalogs.
//!
//! ## Features
//!
//! - Trie-backed inverted index over product names
//! - Exact-pattern occurrence counting for relevance scoring
//! - Edit-distance spelling correction, including whole-phrase correction
//! - Boolean AND search with facet filters and multi-key sorting
//! - Search-frequency accounting
//!
//! ## Lifecycle
//!
//! The engine is built once at startup and shared by reference afterwards:
//! load the catalog first, then construct the [`SearchEngine`], which indexes
//! every product name. The catalog and the index are never mutated after
//! construction, so queries read them without locks; only the search-frequency
//! tracker mutates under queries and it synchronizes internally.
//!
//! ```
//! use calyx::{Catalog, Product, SearchEngine, SearchOptions};
//!
//! let catalog = Catalog::new(vec![Product {
//!     name: "Oral-B Electric Toothbrush".into(),
//!     brand: "Oral-B".into(),
//!     price: "$39.99".into(),
//!     ..Product::default()
//! }]);
//! let engine = SearchEngine::new(catalog);
//!
//! let options = SearchOptions::builder().sort("price_asc").build();
//! let hits = engine.search("electric toothbrush", &options);
//! assert_eq!(hits.len(), 1);
//! ```

pub mod analysis;
mod catalog;
mod data;
mod engine;
mod error;
mod index;
mod matcher;
pub mod spelling;
mod tracker;

// Re-exports for the public API
pub use catalog::Catalog;
pub use data::{Product, ProductId};
pub use engine::SearchEngine;
pub use engine::search::{SearchOptions, SearchOptionsBuilder, SortKey, apply_sorting};
pub use error::{CalyxError, Result};
pub use index::VocabularyIndex;
pub use matcher::PatternMatcher;
pub use spelling::corrector::{SpellCheckReport, SpellCorrector};
pub use tracker::SearchTracker;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
