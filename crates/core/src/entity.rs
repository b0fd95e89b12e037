//! Entity trait: identity + continuity across snapshots.

/// Entity marker + minimal interface.
///
/// Two snapshots of the same product fetched at different times are the same
/// entity when their ids match, even if every other field changed.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
