//! Non-negative currency amounts.
//!
//! Amounts are exact decimals rounded to the centavo, so cart and order totals
//! are exact sums. A [`Money`] can never be negative; subtraction is not offered.

use std::borrow::Cow;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};

/// A non-negative amount of Mexican pesos, rounded to whole centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "String")]
pub struct Money(Decimal);

impl Money {
    /// Zero pesos
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Create an amount from whole centavos
    pub fn from_centavos(centavos: u64) -> Self {
        Self(Decimal::from_i128_with_scale(i128::from(centavos), 2))
    }

    /// Create an amount from whole pesos
    pub fn from_pesos(pesos: u64) -> Self {
        Self(Decimal::from(pesos))
    }

    /// Round a decimal to the centavo, half away from zero. Negatives are rejected.
    pub fn from_decimal(amount: Decimal) -> ShopResult<Money> {
        if amount.is_zero() {
            return Ok(Money::ZERO);
        }
        if amount.is_sign_negative() {
            return Err(ShopError::InvalidPrice(amount.to_string()));
        }
        Ok(Money(
            amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        ))
    }

    /// Get the amount in centavos, saturating at `u64::MAX`
    pub fn centavos(&self) -> u64 {
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|c| c.to_u64())
            .unwrap_or(u64::MAX)
    }

    /// Multiply by a quantity, saturating at the largest representable amount.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.checked_mul(Decimal::from(quantity)).unwrap_or(Decimal::MAX))
    }

    /// Parse a decimal price such as `"250"`, `"249.5"` or `"1299.99"`.
    ///
    /// Digits past the second decimal place round half-up to the nearest
    /// centavo. Signs, exponents, blanks and anything non-numeric are rejected.
    pub fn parse(raw: &str) -> ShopResult<Money> {
        let invalid = || ShopError::InvalidPrice(raw.to_string());
        let text = raw.trim();
        if text.starts_with(['+', '-']) || text.contains('_') || !text.bytes().any(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // ".5" and "7." are accepted shorthands
        let text = text.strip_suffix('.').unwrap_or(text);
        let text: Cow<'_, str> = if text.starts_with('.') {
            Cow::Owned(format!("0{text}"))
        } else {
            Cow::Borrowed(text)
        };

        let amount = Decimal::from_str(&text).map_err(|_| invalid())?;
        Self::from_decimal(amount).map_err(|_| invalid())
    }

    /// Parse a price, treating anything unreadable as zero.
    ///
    /// Order-form options carry their price as loose text; a malformed one
    /// contributes nothing to the total rather than blocking the order.
    pub fn parse_or_zero(raw: &str) -> Money {
        Self::parse(raw).unwrap_or(Money::ZERO)
    }

    /// Convert a floating-point peso amount, rejecting negatives and non-finite values.
    pub fn from_pesos_f64(pesos: f64) -> ShopResult<Money> {
        let amount = Decimal::from_f64(pesos).ok_or_else(|| ShopError::InvalidPrice(pesos.to_string()))?;
        Self::from_decimal(amount)
    }

    /// Plain decimal form with two fraction digits (`"1299.90"`), no symbol or grouping.
    pub fn to_decimal_string(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&crate::currency::format_mxn(*self))
    }
}

impl From<Money> for String {
    fn from(money: Money) -> String {
        money.to_decimal_string()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = ShopError;

    fn try_from(amount: Decimal) -> ShopResult<Money> {
        Money::from_decimal(amount)
    }
}

/// An order-option price as written in config: a decimal, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum LoosePrice {
    Amount(Decimal),
    Malformed(serde::de::IgnoredAny),
}

/// Deserialize an order-option price, reading anything malformed as zero.
///
/// Catalog products are strict (a bad price skips the product), but an order
/// option with a bad price stays selectable and simply adds nothing.
pub(crate) fn deserialize_loose<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let money = match LoosePrice::deserialize(deserializer)? {
        LoosePrice::Amount(amount) => Money::from_decimal(amount).unwrap_or(Money::ZERO),
        LoosePrice::Malformed(_) => Money::ZERO,
    };
    Ok(money)
}
