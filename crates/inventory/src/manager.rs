//! The inventory: SKU-keyed stock of parts and the operations on it.

use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;

use benchstock_core::{Entity, InventoryError, InventoryResult, Sku};
use benchstock_parts::{Part, PartKind};

use crate::criteria::Criteria;

/// Single source of truth for stock state: SKU -> part (with its quantity).
///
/// Iteration order is SKU insertion order. Overwriting a SKU keeps its slot;
/// deleting one keeps the relative order of the rest.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct InventoryManager {
    inventory: IndexMap<Sku, Part>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `part` at its SKU, silently replacing any part already there.
    ///
    /// Returns the replaced part, if any.
    pub fn add_part(&mut self, part: Part) -> Option<Part> {
        self.inventory.insert(part.id(), part)
    }

    /// Add `quantity` units of stock to the part at `sku`, returning the new total.
    ///
    /// Negative quantities remove stock; see [`Part::adjust_stock`] for the bounds.
    pub fn add_inventory(&mut self, sku: Sku, quantity: i64) -> InventoryResult<i64> {
        let part = self
            .inventory
            .get_mut(&sku)
            .ok_or(InventoryError::not_found(sku))?;
        part.adjust_stock(quantity, Utc::now())
    }

    /// Read view of the full mapping.
    pub fn get_inventory(&self) -> &IndexMap<Sku, Part> {
        &self.inventory
    }

    pub fn get(&self, sku: Sku) -> Option<&Part> {
        self.inventory.get(&sku)
    }

    /// Parts of `kind` matching every term of `criteria`, in inventory order.
    pub fn search(&self, kind: PartKind, criteria: &Criteria) -> Vec<&Part> {
        self.inventory
            .values()
            .filter(|part| part.kind() == kind && criteria.matches(part))
            .collect()
    }

    /// Remove and return the part at `sku`.
    pub fn delete_part(&mut self, sku: Sku) -> InventoryResult<Part> {
        self.inventory
            .shift_remove(&sku)
            .ok_or(InventoryError::not_found(sku))
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }
}
