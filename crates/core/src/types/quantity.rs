//! Line-item quantity.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A quantity of at least one.
///
/// Construction from any integer clamps below at 1, so a line item can never
/// hold a zero or negative quantity. Deserialization goes through the same
/// clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest quantity a line item can hold.
    pub const ONE: Self = Self(1);

    /// Create a quantity, clamping anything below 1 up to 1.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(u32::try_from(value.max(1)).unwrap_or(u32::MAX))
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add another quantity, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self::new(i64::from(value))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_zero_and_negative() {
        assert_eq!(Quantity::new(0), Quantity::ONE);
        assert_eq!(Quantity::new(-4), Quantity::ONE);
        assert_eq!(Quantity::new(3).get(), 3);
    }

    #[test]
    fn test_clamps_above_u32() {
        assert_eq!(Quantity::new(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn test_deserialize_clamps() {
        let q: Quantity = serde_json::from_str("0").unwrap_or(Quantity(7));
        assert_eq!(q, Quantity::ONE);
    }

    #[test]
    fn test_saturating_add() {
        let q = Quantity::new(2).saturating_add(Quantity::new(3));
        assert_eq!(q.get(), 5);
    }
}
