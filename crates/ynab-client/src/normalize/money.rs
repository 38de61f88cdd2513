use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult};

const MILLIUNITS_PER_UNIT: i64 = 1000;

/// Signed amount in **milliunits**, 1/1000 of the budget currency's major unit.
///
/// The API sends every amount this way. Keep sums and comparisons in this type
/// and only convert to text at the output boundary.
///
/// - negative = outflow
/// - zero or positive = inflow
///
/// ```rust
/// use ynab_client::normalize::Milliunits;
///
/// let amount = Milliunits::new(-12_340);
/// assert_eq!(amount.to_string(), "-$12.34");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Milliunits(i64);

impl Milliunits {
    pub const ZERO: Milliunits = Milliunits(0);

    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Milliunits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(*self))
    }
}

/// Saturates at the `i64` bounds instead of overflowing.
impl Add for Milliunits {
    type Output = Milliunits;

    fn add(self, rhs: Milliunits) -> Self::Output {
        Milliunits(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Milliunits {
    fn sum<I: Iterator<Item = Milliunits>>(iter: I) -> Self {
        iter.fold(Milliunits::ZERO, Add::add)
    }
}

/// How a budget displays money. Mirrors the API's `currency_format` object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub iso_code: String,
    pub decimal_digits: u32,
    pub decimal_separator: String,
    pub group_separator: String,
    pub symbol_first: bool,
    pub currency_symbol: String,
    pub display_symbol: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            iso_code: "USD".to_string(),
            decimal_digits: 2,
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            symbol_first: true,
            currency_symbol: "$".to_string(),
            display_symbol: true,
        }
    }
}

impl CurrencyFormat {
    /// Renders `amount` with this format.
    ///
    /// Milliunits are rounded to `decimal_digits` (capped at 3) half away from
    /// zero. A value that rounds to zero carries no sign.
    #[must_use]
    pub fn format(&self, amount: Milliunits) -> String {
        let digits = self.decimal_digits.min(3);
        let divisor = 10u64.pow(3 - digits);
        let magnitude = amount.0.unsigned_abs();
        let scaled = (magnitude + divisor / 2) / divisor;

        let unit = 10u64.pow(digits);
        let whole = group_digits(scaled / unit, &self.group_separator);
        let number = if digits == 0 {
            whole
        } else {
            let fraction = scaled % unit;
            format!(
                "{whole}{}{fraction:0width$}",
                self.decimal_separator,
                width = digits as usize
            )
        };

        let body = match (self.display_symbol, self.symbol_first) {
            (false, _) => number,
            (true, true) => format!("{}{number}", self.currency_symbol),
            (true, false) => format!("{number}{}", self.currency_symbol),
        };

        if amount.0 < 0 && scaled > 0 {
            format!("-{body}")
        } else {
            body
        }
    }
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// US-dollar rendering: `$1,234.56`, `-$0.50`.
#[must_use]
pub fn format_currency(amount: Milliunits) -> String {
    CurrencyFormat::default().format(amount)
}

/// Converts a major-unit decimal to milliunits, rounding half away from zero.
pub fn to_milliunits(amount: Decimal) -> ClientResult<Milliunits> {
    amount
        .checked_mul(Decimal::from(MILLIUNITS_PER_UNIT))
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_i64())
        .map(Milliunits)
        .ok_or_else(ClientError::invalid_amount)
}

/// Parses user-typed amount text such as `12.5` or `-40`.
pub fn parse_amount(text: &str) -> ClientResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_amount());
    }
    Decimal::from_str(trimmed).map_err(|_| ClientError::invalid_amount())
}
