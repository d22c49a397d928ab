//! Inventory domain module.
//!
//! Owns the SKU -> part mapping and the operations on it. Implemented purely as
//! deterministic, single-threaded domain logic (no IO, no logging).

pub mod criteria;
pub mod manager;

pub use criteria::Criteria;
pub use manager::InventoryManager;
