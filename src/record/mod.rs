use std::fmt::Display;

pub mod employee;
pub mod person;
pub mod status;

/// Capability every row stored in a [`Table`](crate::Table) must provide.
///
/// Attribute names are opaque strings to the table. Each record variant decides
/// which names it recognises and how values compare.
///
/// `PartialEq` is the table's notion of "the same record". Implementations must
/// ignore the grouping attribute ([`Record::GROUP_ATTRIBUTE`]) so that one entity
/// filed under two groups still compares equal.
pub trait Record: PartialEq + Display {
    /// Error raised when a value cannot be assigned to an attribute.
    type Error;

    /// Attribute relabelled when a record is found in both tables of a union or
    /// intersection.
    const GROUP_ATTRIBUTE: &'static str;

    /// Returns `true` if `attribute` holds `value`.
    ///
    /// Unknown attributes never match.
    fn check(&self, attribute: &str, value: &str) -> bool;

    /// Assigns `value` to `attribute`.
    ///
    /// Returns `Ok(false)` when the attribute is unknown and nothing changed.
    fn change(&mut self, attribute: &str, value: &str) -> Result<bool, Self::Error>;

    /// Produces an independent record with equal field values.
    fn copy(&self) -> Self;
}
