use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Zero;

const CENT_SCALE: i64 = 2;

/// A monetary amount with two-digit cent precision.
///
/// Every value is normalized to scale 2, so sums and products never carry
/// more precision than the store persists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(BigDecimal);

impl Money {
    /// Rounds to cents.
    pub fn new(value: BigDecimal) -> Self {
        Self(value.round(CENT_SCALE).with_scale(CENT_SCALE))
    }

    /// Accepts the value only if it has no sub-cent digits.
    pub fn exact(value: BigDecimal) -> Option<Self> {
        let normalized = value.with_scale(CENT_SCALE);
        if normalized == value {
            Some(Self(normalized))
        } else {
            None
        }
    }

    pub fn zero() -> Self {
        Self(BigDecimal::zero().with_scale(CENT_SCALE))
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    /// Multiplies by an item count.
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(&self.0 * BigDecimal::from(quantity))
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    pub fn into_decimal(self) -> BigDecimal {
        self.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Money> for Money {
    type Output = Money;

    fn add(self, rhs: &'a Money) -> Money {
        Money::new(self.0 + &rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = BigDecimal::from_str(s.trim()).map_err(|_| format!("Invalid amount: {}", s))?;
        Money::exact(value).ok_or_else(|| format!("Amount has sub-cent digits: {}", s))
    }
}

impl From<BigDecimal> for Money {
    fn from(value: BigDecimal) -> Self {
        Money::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn should_normalize_scale_to_cents() {
        assert_eq!(money("30").to_string(), "30.00");
        assert_eq!(money("8.5").to_string(), "8.50");
    }

    #[test]
    fn should_reject_sub_cent_amounts() {
        assert!("1.005".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1.500".parse::<Money>().is_ok());
    }

    #[test]
    fn should_add_without_float_drift() {
        let total: Money = std::iter::repeat_n(money("0.10"), 10).sum();
        assert_eq!(total, money("1.00"));
    }

    #[test]
    fn should_multiply_by_quantity() {
        assert_eq!(money("48.00").times(2), money("96.00"));
        assert_eq!(money("-1.25").times(3), money("-3.75"));
    }

    #[test]
    fn should_detect_negative_amounts() {
        assert!(money("-0.01").is_negative());
        assert!(!Money::zero().is_negative());
    }
}
