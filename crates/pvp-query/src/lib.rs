//! Cascading filters over normalized medication price records.
//!
//! - [`filter`]: the pure stage functions ([`list_ingredients`],
//!   [`list_doses`], [`list_forms`], [`select_matching`])
//! - [`Catalog`]: an immutable, shareable snapshot of a session's records
//! - [`CatalogStore`]: swaps snapshots on reload without touching readers
//! - [`Cascade`]: dependent selector state for interactive front ends

mod cascade;
mod catalog;
mod error;
pub mod filter;

pub use cascade::Cascade;
pub use catalog::{Catalog, CatalogStore};
pub use error::{QueryError, Result, Stage};
pub use filter::{list_doses, list_forms, list_ingredients, select_matching};
