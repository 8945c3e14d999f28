//! Money value object in integer minor units.
//!
//! Plan prices traverse the wire as integer agorot. Keeping money in minor
//! units makes price comparison exact, which the plan comparator depends on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// Monetary amount in agorot (1/100 ILS).
///
/// Signed so that price deltas (downgrades are negative) can be represented
/// with the same type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount - the price of the free plan.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from agorot.
    pub fn from_agorot(agorot: i64) -> Self {
        Self(agorot)
    }

    /// Creates an amount from whole shekels.
    pub fn from_shekels(shekels: i64) -> Self {
        Self(shekels * 100)
    }

    /// Returns the amount in agorot.
    pub fn as_agorot(&self) -> i64 {
        self.0
    }

    /// Returns true for a zero amount.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true for a strictly positive amount.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shekels = self.0 / 100;
        let agorot = (self.0 % 100).abs();
        write!(f, "₪{}.{:02}", shekels, agorot)
    }
}
