//! Data layer: typed orders, loading, aggregation and filtering.
//!
//! Architecture:
//! ```text
//!  superstore.csv (Windows-1252)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  decode + parse rows → Vec<Order>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐     ┌────────────┐
//!   │  Dataset  │ ──▶ │ aggregate  │  seven summary views, computed eagerly
//!   └──────────┘     └────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  predicates per dimension → new Dataset (re-aggregated)
//!   └──────────┘
//! ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod states;

pub use filter::{apply_filters, Dimension, Predicates};
pub use loader::{load, load_file, LoadError};
pub use model::{Dataset, LoadStatus, Order};
