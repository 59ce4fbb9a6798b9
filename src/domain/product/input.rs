//! Input schemas for create and update payloads.
//!
//! Payloads arrive as untyped JSON so that every malformed field can be reported at once,
//! instead of failing on the first serde error. Each schema validates at the boundary and
//! only then yields a typed value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;

const NAME: &str = "name";
const PRICE: &str = "price";
const IN_STOCK: &str = "inStock";

/// Create payload. All fields are required.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
}

/// Update payload. Absent fields are left unchanged on the stored record.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl NewProduct {
    /// Validates a create payload. Returns one message per violated field.
    pub fn from_json(payload: &JsonValue) -> Result<Self, Vec<String>> {
        let obj = as_object(payload)?;
        let mut errors = Vec::new();

        let name = required(obj, NAME, check_name, &mut errors);
        let price = required(obj, PRICE, check_price, &mut errors);
        let in_stock = required(obj, IN_STOCK, check_in_stock, &mut errors);

        match (name, price, in_stock) {
            (Some(name), Some(price), Some(in_stock)) if errors.is_empty() => Ok(Self {
                name,
                price,
                in_stock,
            }),
            _ => Err(errors),
        }
    }
}

impl ProductPatch {
    /// Validates an update payload; only fields that are present are checked.
    ///
    /// Unknown keys (including `id`) are ignored.
    pub fn from_json(payload: &JsonValue) -> Result<Self, Vec<String>> {
        let obj = as_object(payload)?;
        let mut errors = Vec::new();

        let patch = Self {
            name: optional(obj, NAME, check_name, &mut errors),
            price: optional(obj, PRICE, check_price, &mut errors),
            in_stock: optional(obj, IN_STOCK, check_in_stock, &mut errors),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }
}

fn as_object(payload: &JsonValue) -> Result<&Map<String, JsonValue>, Vec<String>> {
    payload
        .as_object()
        .ok_or_else(|| vec!["body must be a JSON object".to_string()])
}

fn required<T>(
    obj: &Map<String, JsonValue>,
    field: &str,
    check: fn(&JsonValue) -> Result<T, String>,
    errors: &mut Vec<String>,
) -> Option<T> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => {
            errors.push(format!("{} is required", field));
            None
        }
        Some(v) => check(v).map_err(|e| errors.push(e)).ok(),
    }
}

fn optional<T>(
    obj: &Map<String, JsonValue>,
    field: &str,
    check: fn(&JsonValue) -> Result<T, String>,
    errors: &mut Vec<String>,
) -> Option<T> {
    let v = obj.get(field)?;
    check(v).map_err(|e| errors.push(e)).ok()
}

fn check_name(v: &JsonValue) -> Result<String, String> {
    match v.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err("name must be a non-empty string".to_string()),
    }
}

fn check_price(v: &JsonValue) -> Result<f64, String> {
    match v.as_f64() {
        Some(n) if v.is_number() && n.is_finite() => Ok(n),
        _ => Err("price must be a number".to_string()),
    }
}

fn check_in_stock(v: &JsonValue) -> Result<bool, String> {
    v.as_bool()
        .ok_or_else(|| "inStock must be a boolean".to_string())
}
