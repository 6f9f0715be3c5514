//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances with equal attributes are
/// interchangeable. Prices, transaction requests and the editable field set of
/// an item are value objects; an inventory item itself is an [`Entity`].
///
/// They are immutable once built. To "change" one, construct a new value.
///
/// [`Entity`]: crate::Entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
