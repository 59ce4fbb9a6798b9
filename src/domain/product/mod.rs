//! Domain model for the product collection.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod collection;
pub mod input;

pub use collection::{in_stock, next_id, parse_id, position_of};
pub use input::{NewProduct, ProductPatch};

/// A single product record as stored in the backing file and returned by the API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, unique within the collection.
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
}

impl Product {
    /// Builds a record from a validated create payload and a freshly assigned id.
    pub fn from_new(id: u64, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            price: new.price,
            in_stock: new.in_stock,
        }
    }

    /// Merges the supplied fields over this record. `id` is never touched.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
    }
}
