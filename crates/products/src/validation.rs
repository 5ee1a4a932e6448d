//! Validation gate run before every catalog mutation.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. `name`, `description`, `price`, `category` must all be present
//! 2. `price` must be a non-negative number
//! 3. `inStock` must be a boolean
//!
//! The gate never rewrites input; it only turns an accepted candidate into
//! its typed [`ProductFields`] view.

use serde_json::{Map, Number, Value};

use catalog_core::error::{INVALID_IN_STOCK, INVALID_PRICE, MISSING_REQUIRED_FIELDS};
use catalog_core::{CatalogError, CatalogResult};

use crate::product::ProductFields;

/// Raw, unvalidated product fields as sent by a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCandidate(Map<String, Value>);

impl ProductCandidate {
    /// Build a candidate from any JSON value.
    ///
    /// Anything other than an object carries no fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Run the gate over `candidate`.
pub fn validate(candidate: &ProductCandidate) -> CatalogResult<ProductFields> {
    let name = required_text(candidate.get("name"));
    let description = required_text(candidate.get("description"));
    let category = required_text(candidate.get("category"));
    let price = candidate.get("price");

    let (Some(name), Some(description), Some(category)) = (name, description, category) else {
        return Err(CatalogError::validation(MISSING_REQUIRED_FIELDS));
    };
    if !price_present(price) {
        return Err(CatalogError::validation(MISSING_REQUIRED_FIELDS));
    }

    let price = non_negative_number(price)
        .ok_or_else(|| CatalogError::validation(INVALID_PRICE))?;

    let in_stock = match candidate.get("inStock") {
        Some(Value::Bool(b)) => *b,
        _ => return Err(CatalogError::validation(INVALID_IN_STOCK)),
    };

    Ok(ProductFields {
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        in_stock,
    })
}

/// JSON truthiness: absent, `null`, `false`, `0` and `""` are falsy.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// A text field counts as present only when it is a non-empty string.
fn required_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Zero is a real price, so any number counts as present.
fn price_present(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Number(_))) || is_truthy(value)
}

fn non_negative_number(value: Option<&Value>) -> Option<Number> {
    match value {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f >= 0.0) => Some(n.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ErrorKind;
    use serde_json::json;

    fn candidate(value: Value) -> ProductCandidate {
        ProductCandidate::from_value(value)
    }

    fn valid() -> Value {
        json!({
            "name": "Kettle",
            "description": "1.7L electric kettle",
            "price": 35,
            "category": "kitchen",
            "inStock": true,
        })
    }

    fn with(field: &str, value: Value) -> ProductCandidate {
        let mut body = valid();
        body[field] = value;
        candidate(body)
    }

    fn without(field: &str) -> ProductCandidate {
        let mut body = valid();
        body.as_object_mut().unwrap().remove(field);
        candidate(body)
    }

    fn message(result: CatalogResult<ProductFields>) -> String {
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status_code(), 400);
        err.public_message().to_string()
    }

    #[test]
    fn accepts_a_complete_candidate_unchanged() {
        let fields = validate(&candidate(valid())).unwrap();
        assert_eq!(fields.name, "Kettle");
        assert_eq!(fields.description, "1.7L electric kettle");
        assert_eq!(fields.price, Number::from(35));
        assert_eq!(fields.category, "kitchen");
        assert!(fields.in_stock);
    }

    #[test]
    fn does_not_trim_text() {
        let fields = validate(&with("name", json!("  Kettle  "))).unwrap();
        assert_eq!(fields.name, "  Kettle  ");
    }

    #[test]
    fn rejects_each_missing_required_field() {
        for field in ["name", "description", "price", "category"] {
            assert_eq!(message(validate(&without(field))), "Missing required fields", "{field}");
        }
    }

    #[test]
    fn empty_and_null_values_count_as_missing() {
        for field in ["name", "description", "category", "price"] {
            assert_eq!(message(validate(&with(field, json!("")))), "Missing required fields");
            assert_eq!(message(validate(&with(field, Value::Null))), "Missing required fields");
        }
        assert_eq!(message(validate(&with("price", json!(false)))), "Missing required fields");
    }

    #[test]
    fn non_text_values_for_text_fields_count_as_missing() {
        assert_eq!(message(validate(&with("name", json!(42)))), "Missing required fields");
        assert_eq!(message(validate(&with("category", json!(["a"])))), "Missing required fields");
    }

    #[test]
    fn empty_or_non_object_body_is_missing_everything() {
        assert_eq!(message(validate(&ProductCandidate::default())), "Missing required fields");
        assert_eq!(message(validate(&candidate(json!([1, 2, 3])))), "Missing required fields");
    }

    #[test]
    fn negative_price_is_rejected() {
        assert_eq!(
            message(validate(&with("price", json!(-1)))),
            "Price must be a positive number"
        );
        assert_eq!(
            message(validate(&with("price", json!(-0.01)))),
            "Price must be a positive number"
        );
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        assert_eq!(
            message(validate(&with("price", json!("12")))),
            "Price must be a positive number"
        );
        assert_eq!(
            message(validate(&with("price", json!(true)))),
            "Price must be a positive number"
        );
    }

    // Zero is treated as a present, valid price rather than a missing field.
    #[test]
    fn zero_price_is_accepted() {
        let fields = validate(&with("price", json!(0))).unwrap();
        assert_eq!(fields.price, Number::from(0));
        assert!(validate(&with("price", json!(0.0))).is_ok());
    }

    #[test]
    fn fractional_price_is_kept_as_sent() {
        let fields = validate(&with("price", json!(19.99))).unwrap();
        assert_eq!(fields.price.as_f64(), Some(19.99));
    }

    #[test]
    fn in_stock_must_be_strictly_boolean() {
        assert_eq!(message(validate(&without("inStock"))), "inStock must be a boolean");
        for v in [json!("true"), json!(1), Value::Null] {
            assert_eq!(message(validate(&with("inStock", v))), "inStock must be a boolean");
        }
        assert!(!validate(&with("inStock", json!(false))).unwrap().in_stock);
    }

    #[test]
    fn first_failure_wins() {
        let body = json!({ "price": -5, "inStock": "nope" });
        assert_eq!(message(validate(&candidate(body))), "Missing required fields");

        let body = json!({
            "name": "x", "description": "y", "category": "z",
            "price": -5, "inStock": "nope",
        });
        assert_eq!(message(validate(&candidate(body))), "Price must be a positive number");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let fields = validate(&with("color", json!("red"))).unwrap();
        assert_eq!(fields.name, "Kettle");
    }
}
