//! Unit price value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// Non-negative price per unit, held in whole cents.
///
/// On the wire it is a decimal number (`15.99`). Amounts with sub-cent
/// digits are rejected rather than rounded, so a stored price always reads
/// back exactly as it was written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UnitPrice(u64);

impl ValueObject for UnitPrice {}

impl UnitPrice {
    pub const ZERO: UnitPrice = UnitPrice(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build from a decimal amount.
    ///
    /// Rejects negative and non-finite values, amounts with more than two
    /// fractional digits, and amounts whose cent count does not fit in `u64`.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("unit price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("unit price cannot be negative"));
        }

        let scaled = amount * 100.0;
        let cents = scaled.round();
        // `amount` is the nearest double to a decimal literal, so a whole-cent
        // price only misses an integer by a few ulps of `scaled`.
        let tolerance = (scaled.abs() * f64::EPSILON * 8.0).max(1e-9);
        if (scaled - cents).abs() > tolerance {
            return Err(DomainError::validation(
                "unit price cannot have more than two decimal places",
            ));
        }
        // 2^64 is exactly representable; anything at or above it would saturate.
        if cents >= u64::MAX as f64 {
            return Err(DomainError::validation("unit price is too large"));
        }
        Ok(Self(cents as u64))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn as_decimal(self) -> f64 {
        cents_to_decimal(self.0)
    }
}

/// Render a cent amount as the decimal number used on the wire.
pub fn cents_to_decimal(cents: u64) -> f64 {
    cents as f64 / 100.0
}

impl core::fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for UnitPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for UnitPrice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        UnitPrice::from_decimal(amount).map_err(serde::de::Error::custom)
    }
}
