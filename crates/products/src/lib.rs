//! Products catalog module.
//!
//! This crate contains the product record, the validation gate run before
//! every mutation, and the in-memory catalog store (no IO, no HTTP).

pub mod product;
pub mod store;
pub mod validation;

pub use product::{Product, ProductFields};
pub use store::{CatalogStore, ListQuery, PageParam, ProductPage};
pub use validation::{ProductCandidate, validate};
