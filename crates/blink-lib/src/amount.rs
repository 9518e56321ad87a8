//! Exact conversion between human-entered decimal amounts and base units
//!
//! Amounts are parsed straight from their decimal text into an integer
//! mantissa and a power-of-ten scale. No floating point is involved, so
//! `2.3` with 6 decimals is always `2_300_000`, never `2_299_999`.
//!
//! An amount that carries more significant fractional digits than the asset
//! supports is rejected instead of being truncated.

use crate::error::{Result, TransferError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Exponents beyond this are rejected before any arithmetic
const MAX_EXPONENT_DIGITS: usize = 6;

/// `u64::MAX` has 20 decimal digits
const MAX_BASE_UNIT_DIGITS: i64 = 20;

/// A validated, strictly positive decimal amount in display units.
///
/// The value is `digits * 10^-scale`, with `digits` free of leading and
/// trailing zeros. `scale` can be negative for inputs such as `5e3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanAmount {
    digits: String,
    scale: i64,
    raw: String,
}

impl HumanAmount {
    /// Parse a decimal amount such as `1.5`, `+0.25`, `1e-3` or `2.50`.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(TransferError::amount(input, "amount is empty"));
        }

        let unsigned = match raw.as_bytes()[0] {
            b'-' => return Err(TransferError::amount(raw, "amount must be positive")),
            b'+' => &raw[1..],
            _ => raw,
        };

        if ["nan", "inf", "infinity"]
            .iter()
            .any(|word| unsigned.eq_ignore_ascii_case(word))
        {
            return Err(TransferError::amount(raw, "amount must be a finite number"));
        }

        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(idx) => (&unsigned[..idx], parse_exponent(raw, &unsigned[idx + 1..])?),
            None => (unsigned, 0),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (mantissa, ""),
        };

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part)
        {
            return Err(TransferError::amount(raw, "amount is not a decimal number"));
        }

        let mut digits = format!("{int_part}{frac_part}");
        let mut scale = frac_part.len() as i64 - exponent;

        let leading = digits.len() - digits.trim_start_matches('0').len();
        digits.drain(..leading);
        while digits.ends_with('0') {
            digits.pop();
            scale -= 1;
        }

        if digits.is_empty() {
            return Err(TransferError::amount(raw, "amount must be greater than zero"));
        }

        Ok(Self {
            digits,
            scale,
            raw: raw.to_string(),
        })
    }

    /// Number of significant fractional digits
    pub fn fractional_digits(&self) -> u32 {
        self.scale.max(0) as u32
    }

    /// Scale to base units for an asset with `decimals` places.
    pub fn to_base_units(&self, decimals: u8) -> Result<u64> {
        if self.fractional_digits() > u32::from(decimals) {
            return Err(TransferError::amount(
                &self.raw,
                format!("amount has more than {decimals} decimal places"),
            ));
        }
        let decimals = i64::from(decimals);

        let shift = decimals - self.scale;
        let overflow = || TransferError::amount(&self.raw, "amount exceeds the maximum transferable value");
        if self.digits.len() as i64 + shift > MAX_BASE_UNIT_DIGITS {
            return Err(overflow());
        }

        let mantissa: u128 = self.digits.parse().map_err(|_| overflow())?;
        let scaled = 10u128
            .checked_pow(shift as u32)
            .and_then(|factor| mantissa.checked_mul(factor))
            .ok_or_else(overflow)?;
        u64::try_from(scaled).map_err(|_| overflow())
    }
}

impl FromStr for HumanAmount {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HumanAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale <= 0 {
            let zeros = "0".repeat((-self.scale) as usize);
            write!(f, "{}{zeros}", self.digits)
        } else {
            let scale = self.scale as usize;
            let padded = format!("{:0>width$}", self.digits, width = scale + 1);
            let (int_part, frac_part) = padded.split_at(padded.len() - scale);
            write!(f, "{int_part}.{frac_part}")
        }
    }
}

fn parse_exponent(raw: &str, exponent: &str) -> Result<i64> {
    let (negative, digits) = match exponent.as_bytes().first() {
        Some(b'-') => (true, &exponent[1..]),
        Some(b'+') => (false, &exponent[1..]),
        _ => (false, exponent),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TransferError::amount(raw, "amount is not a decimal number"));
    }
    if digits.trim_start_matches('0').len() > MAX_EXPONENT_DIGITS {
        return Err(TransferError::amount(raw, "amount exponent is out of range"));
    }
    let value: i64 = digits
        .parse()
        .map_err(|_| TransferError::amount(raw, "amount exponent is out of range"))?;
    Ok(if negative { -value } else { value })
}

/// An amount expressed in the asset's smallest unit together with its precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizedAmount {
    pub base_units: u64,
    pub decimals: u8,
}

impl NormalizedAmount {
    pub fn new(base_units: u64, decimals: u8) -> Self {
        Self {
            base_units,
            decimals,
        }
    }

    /// Get the display form, e.g. `2.5`
    pub fn ui_amount(&self) -> String {
        format_base_units(self.base_units, self.decimals)
    }
}

impl fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ui_amount())
    }
}

/// Convert a human-entered amount into base units for `decimals` places.
pub fn normalize(amount: &str, decimals: u8) -> Result<NormalizedAmount> {
    let base_units = HumanAmount::parse(amount)?.to_base_units(decimals)?;
    Ok(NormalizedAmount::new(base_units, decimals))
}

/// Render base units as a decimal string with trailing zeros trimmed.
pub fn format_base_units(base_units: u64, decimals: u8) -> String {
    let decimals = usize::from(decimals);
    if decimals == 0 {
        return base_units.to_string();
    }

    let padded = format!("{:0>width$}", base_units, width = decimals + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    }
}
