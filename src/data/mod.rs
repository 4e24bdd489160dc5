//! Data layer: table model, loading, and the analysis steps.
//!
//! Architecture:
//! ```text
//!  <root>/.current → <run>/data-*/{runData,algorithms,models}.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read + left-join per batch, concat → Table
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ normalize  │  rename, filter, relabel, derive Type, ms → s
//!   └───────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ investigate  │  disagreement rows → report columns
//!   └─────────────┘
//! ```

pub mod filter;
pub mod investigate;
pub mod join;
pub mod labels;
pub mod loader;
pub mod model;
pub mod normalize;
