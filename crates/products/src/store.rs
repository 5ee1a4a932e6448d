//! In-memory catalog store.
//!
//! The store owns the product list behind a single `RwLock`: any number of
//! readers, or exactly one writer. Mutations run the validation gate before
//! taking the write lock, so a rejected request never touches the catalog.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use catalog_core::error::SEARCH_QUERY_REQUIRED;
use catalog_core::{CatalogError, CatalogResult, ProductId};

use crate::product::{self, Product};
use crate::validation::{ProductCandidate, validate};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// A pagination parameter as received from a query string.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PageParam {
    /// Any finite number; fractions are truncated when slicing.
    Value(f64),
    /// Present but not a finite number. Produces an empty page.
    Invalid,
}

impl PageParam {
    /// Parse a raw query value, falling back to `default` when absent.
    pub fn parse(raw: Option<&str>, default: i64) -> Self {
        match raw {
            None => PageParam::from(default),
            Some(s) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => PageParam::Value(v),
                _ => PageParam::Invalid,
            },
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            PageParam::Value(v) => Some(v),
            PageParam::Invalid => None,
        }
    }

    /// Integer part echoed back to the caller (`1.5` reads as page `1`).
    pub fn integer(self) -> Option<i64> {
        self.value().map(|v| v.trunc() as i64)
    }
}

impl From<i64> for PageParam {
    fn from(value: i64) -> Self {
        PageParam::Value(value as f64)
    }
}

/// Filter and pagination for [`CatalogStore::list`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub category: Option<String>,
    pub page: PageParam,
    pub limit: PageParam,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            category: None,
            page: PageParam::from(DEFAULT_PAGE),
            limit: PageParam::from(DEFAULT_LIMIT),
        }
    }
}

impl ListQuery {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn page(mut self, page: i64, limit: i64) -> Self {
        self.page = PageParam::from(page);
        self.limit = PageParam::from(limit);
        self
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPage {
    /// Number of products matching the filter, across all pages.
    pub total: usize,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub products: Vec<Product>,
}

/// Process-local product catalog.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the three starter products.
    pub fn seeded() -> Self {
        Self {
            products: RwLock::new(product::seed()),
        }
    }

    pub fn len(&self) -> CatalogResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Filter by exact category, then slice out one page.
    ///
    /// An empty category means no filter.
    pub fn list(&self, query: &ListQuery) -> CatalogResult<ProductPage> {
        let products = self.read()?;
        let matching: Vec<&Product> = match query.category.as_deref() {
            Some(category) if !category.is_empty() => {
                products.iter().filter(|p| p.category() == category).collect()
            }
            _ => products.iter().collect(),
        };

        let page = match (query.page.value(), query.limit.value()) {
            (Some(page), Some(limit)) => {
                let range = page_range(matching.len(), page, limit);
                matching[range].iter().map(|p| (*p).clone()).collect()
            }
            _ => Vec::new(),
        };

        Ok(ProductPage {
            total: matching.len(),
            page: query.page.integer(),
            limit: query.limit.integer(),
            products: page,
        })
    }

    pub fn get_by_id(&self, id: &str) -> CatalogResult<Product> {
        self.read()?
            .iter()
            .find(|p| p.id().as_str() == id)
            .cloned()
            .ok_or_else(CatalogError::product_not_found)
    }

    /// Validate `candidate` and append it under a freshly generated id.
    pub fn insert(&self, candidate: &ProductCandidate) -> CatalogResult<Product> {
        let fields = validate(candidate)?;
        let product = Product::new(ProductId::generate(), fields);

        self.write()?.push(product.clone());
        tracing::info!(product_id = %product.id(), "product created");
        Ok(product)
    }

    /// Validate `candidate` and overwrite every field of product `id` with it.
    ///
    /// Validation runs first, so an invalid body is reported even when the id
    /// does not exist.
    pub fn replace(&self, id: &str, candidate: &ProductCandidate) -> CatalogResult<Product> {
        let fields = validate(candidate)?;

        let mut products = self.write()?;
        let product = products
            .iter_mut()
            .find(|p| p.id().as_str() == id)
            .ok_or_else(CatalogError::product_not_found)?;
        product.overwrite(fields);

        tracing::info!(product_id = %id, "product replaced");
        Ok(product.clone())
    }

    pub fn remove(&self, id: &str) -> CatalogResult<()> {
        let mut products = self.write()?;
        let index = products
            .iter()
            .position(|p| p.id().as_str() == id)
            .ok_or_else(CatalogError::product_not_found)?;
        products.remove(index);

        tracing::info!(product_id = %id, "product removed");
        Ok(())
    }

    /// Case-insensitive substring match on product names.
    pub fn search(&self, query: Option<&str>) -> CatalogResult<Vec<Product>> {
        let needle = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return Err(CatalogError::validation(SEARCH_QUERY_REQUIRED)),
        };

        Ok(self
            .read()?
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    /// Product count per category, computed on every call.
    pub fn stats_by_category(&self) -> CatalogResult<BTreeMap<String, usize>> {
        let mut stats = BTreeMap::new();
        for product in self.read()?.iter() {
            *stats.entry(product.category().to_string()).or_insert(0) += 1;
        }
        Ok(stats)
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Vec<Product>>> {
        self.products
            .read()
            .map_err(|_| CatalogError::unclassified("catalog lock poisoned"))
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Vec<Product>>> {
        self.products
            .write()
            .map_err(|_| CatalogError::unclassified("catalog lock poisoned"))
    }
}

/// Range for page `page` of size `limit` over `len` items.
///
/// Bounds are computed in floating point and follow array-slice rules:
/// fractions truncate toward zero, negative bounds count back from the end,
/// bounds are clamped to `0..=len`, and an inverted range is empty.
/// Nonsensical page/limit values therefore give odd pages, never a panic.
fn page_range(len: usize, page: f64, limit: f64) -> std::ops::Range<usize> {
    let start = (page - 1.0) * limit;
    let end = page * limit;

    let len_f = len as f64;
    let resolve = |idx: f64| -> usize {
        let idx = idx.trunc();
        let idx = if idx < 0.0 { (len_f + idx).max(0.0) } else { idx.min(len_f) };
        // `idx` is a whole number within 0..=len here.
        idx as usize
    };

    let (start, end) = (resolve(start), resolve(end));
    if start >= end { start..start } else { start..end }
}
