//! Money amounts in integer cents.

use std::{fmt, str::FromStr};

use crate::EngineError;

/// Signed amount of money in **cents**.
///
/// Entry values are always positive; a balance goes negative when a user
/// spent more than they earned.
///
/// ```rust
/// use engine::MoneyCents;
///
/// let value: MoneyCents = "1000,50".parse().unwrap();
/// assert_eq!(value.cents(), 100_050);
/// assert_eq!(value.to_string(), "1000.50");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_add(rhs.0).map(MoneyCents)
    }

    /// `None` on overflow.
    #[must_use]
    pub fn checked_sub(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_sub(rhs.0).map(MoneyCents)
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}.{:02}", abs / 100, abs % 100)
    }
}

/// Parses the cents part of an amount: at most two digits, `"5"` means 50.
fn parse_fraction(fraction: &str) -> Option<i64> {
    if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: i64 = if fraction.is_empty() {
        0
    } else {
        fraction.parse().ok()?
    };
    Some(if fraction.len() == 1 { digits * 10 } else { digits })
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Accepts `1234`, `1234.5`, `1234,56` and an optional sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidAmount(format!("cannot parse {s:?}"));

        let s_trim = s.trim();
        let (sign, digits) = match s_trim.as_bytes().first() {
            Some(b'-') => (-1, &s_trim[1..]),
            Some(b'+') => (1, &s_trim[1..]),
            _ => (1, s_trim),
        };
        let (units, fraction) = digits
            .split_once(['.', ','])
            .unwrap_or((digits, ""));

        if units.is_empty() || !units.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let fraction = parse_fraction(fraction).ok_or_else(invalid)?;

        units
            .parse::<i64>()
            .ok()
            .and_then(|units| units.checked_mul(100))
            .and_then(|cents| cents.checked_add(fraction))
            .map(|cents| MoneyCents(sign * cents))
            .ok_or_else(invalid)
    }
}
