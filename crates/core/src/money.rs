//! Prices and rupiah display formatting.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Unit price in the smallest currency unit (whole rupiah for this store).
///
/// Minor-unit-agnostic: the store multiplies and sums these values but never
/// assumes a decimal point. Non-negative by construction (`u64`).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn new(minor_units: u64) -> Self {
        Self(minor_units)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Extract a price from marked-up display text (e.g. `"Rp1.299.000"`).
    ///
    /// Every non-digit character is stripped before parsing, so currency
    /// markers and grouping separators are tolerated. Text containing no
    /// digits at all fails validation.
    pub fn parse_display(text: &str) -> DomainResult<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(DomainError::validation(format!(
                "no digits in price text: {text:?}"
            )));
        }
        let value = digits
            .parse::<u64>()
            .map_err(|e| DomainError::validation(format!("price out of range: {e}")))?;
        Ok(Self(value))
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&format_rupiah(self.0))
    }
}

/// Render an amount as a grouped-thousands rupiah string.
///
/// Groups of three digits from the right, `.` separator, `Rp` prefix, no
/// decimal portion: `1234567` → `"Rp1.234.567"`, `999` → `"Rp999"`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(2 + len + len / 3);
    out.push_str("Rp");
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
