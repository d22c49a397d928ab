//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Stock keeping unit: the unique integer key of a part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(u64);

impl Sku {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for Sku {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Sku> for u64 {
    fn from(value: Sku) -> Self {
        value.0
    }
}

impl FromStr for Sku {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| InventoryError::parse("SKU", s))?;
        Ok(Self(value))
    }
}
