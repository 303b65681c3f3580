use std::fmt;

use serde::{Deserialize, Serialize};

/// An exact monetary amount in minor currency units.
///
/// There is no currency attached: every amount in a catalog is assumed to be
/// in the same currency.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(amount: u64) -> Self {
        Money(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_mul(self, factor: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(factor)).map(Money)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Money(amount)
    }
}

/// Renders with comma thousands separators: `28000` -> `28,000`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }

        f.pad(&out)
    }
}
