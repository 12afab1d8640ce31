//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root owns a cluster of related objects and is the only entry
/// point for mutating them. Aggregates in different bounded contexts refer to
/// each other by `Id` only, never by holding the other aggregate.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
