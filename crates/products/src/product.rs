use serde::Serialize;
use serde_json::Number;

use catalog_core::ProductId;

/// Validated product fields (everything except the id).
///
/// Only produced by [`crate::validate`], so a value of this type always
/// satisfies the catalog's field constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    /// Kept as the JSON number the caller sent (`1200` stays `1200`).
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

/// A product stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    #[serde(flatten)]
    fields: ProductFields,
}

impl Product {
    pub(crate) fn new(id: ProductId, fields: ProductFields) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn description(&self) -> &str {
        &self.fields.description
    }

    pub fn price(&self) -> &Number {
        &self.fields.price
    }

    pub fn category(&self) -> &str {
        &self.fields.category
    }

    pub fn in_stock(&self) -> bool {
        self.fields.in_stock
    }

    /// Overwrite every field except the id.
    pub(crate) fn overwrite(&mut self, fields: ProductFields) {
        self.fields = fields;
    }
}

/// The catalog contents a fresh process starts with.
pub(crate) fn seed() -> Vec<Product> {
    vec![
        seed_product(
            "1",
            "Laptop",
            "High-performance laptop with 16GB RAM",
            1200,
            "electronics",
            true,
        ),
        seed_product(
            "2",
            "Smartphone",
            "Latest model with 128GB storage",
            800,
            "electronics",
            true,
        ),
        seed_product(
            "3",
            "Coffee Maker",
            "Programmable coffee maker with timer",
            50,
            "kitchen",
            false,
        ),
    ]
}

fn seed_product(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    category: &str,
    in_stock: bool,
) -> Product {
    Product::new(
        ProductId::from(id),
        ProductFields {
            name: name.to_string(),
            description: description.to_string(),
            price: Number::from(price),
            category: category.to_string(),
            in_stock,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_flat_camel_case_fields() {
        let product = seed().remove(2);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "3",
                "name": "Coffee Maker",
                "description": "Programmable coffee maker with timer",
                "price": 50,
                "category": "kitchen",
                "inStock": false,
            })
        );
    }

    #[test]
    fn overwrite_keeps_the_id() {
        let mut product = seed().remove(0);
        product.overwrite(ProductFields {
            name: "Ultrabook".to_string(),
            description: "Thin".to_string(),
            price: Number::from(999),
            category: "electronics".to_string(),
            in_stock: false,
        });
        assert_eq!(product.id().as_str(), "1");
        assert_eq!(product.name(), "Ultrabook");
        assert!(!product.in_stock());
    }
}
