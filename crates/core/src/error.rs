//! Domain error model.

use thiserror::Error;

use crate::id::Sku;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is recoverable: callers report it and carry on. Nothing in the
/// domain crates logs; failures are only ever returned to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// No part is registered under the SKU.
    #[error("part not found: SKU {0}")]
    NotFound(Sku),

    /// An attribute name or value is outside its declared domain.
    #[error("invalid {attribute}: {value:?}")]
    InvalidAttribute { attribute: String, value: String },

    /// A part kind name did not resolve to a known kind.
    #[error("invalid part type: {0:?}")]
    InvalidKind(String),

    /// A stock adjustment would leave the quantity out of range.
    #[error("cannot adjust stock of SKU {sku} by {delta} (on hand: {on_hand})")]
    InvalidQuantity { sku: Sku, on_hand: i64, delta: i64 },

    /// Free-form text could not be parsed as the expected type.
    #[error("could not parse {field} from {input:?}")]
    Parse { field: String, input: String },
}

impl InventoryError {
    pub fn not_found(sku: Sku) -> Self {
        Self::NotFound(sku)
    }

    pub fn invalid_attribute(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn invalid_kind(name: impl Into<String>) -> Self {
        Self::InvalidKind(name.into())
    }

    pub fn parse(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            input: input.into(),
        }
    }
}
