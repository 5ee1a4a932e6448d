//! `catalog-core` — shared building blocks for the product catalog.
//!
//! This crate holds the error taxonomy and identifiers. It has no HTTP or
//! storage concerns.

pub mod error;
pub mod id;

pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use id::ProductId;
