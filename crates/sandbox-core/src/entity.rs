//! Entity Trait
//!
//! Anything addressed by a stable id in the stores.

/// Core trait for identified records
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
