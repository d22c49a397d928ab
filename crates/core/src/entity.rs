//! Entity trait: a value tracked under a stable key.

/// Anything the inventory stores by identity rather than by value.
///
/// Two entities with the same id are the same record, even when their other
/// attributes differ (that is what makes overwrite-by-key well defined).
pub trait Entity {
    /// Strongly-typed identifier (the map key).
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the identifier by value.
    fn id(&self) -> Self::Id;
}
