use alloy_primitives::{
    U256,
    utils::{ParseUnits, parse_units},
};

/// Most decimal digits a `U256` always holds.
const MAX_DIGITS: usize = 77;

/// Why an input amount can't be submitted. None of these are shown to the
/// user; the submit control just stays disabled.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("`{0}` is not a decimal number")]
    NotNumeric(String),

    #[error("amount must be greater than zero")]
    NotPositive,

    #[error("`{input}` has more than {decimals} fractional digits")]
    TooPrecise { input: String, decimals: u8 },

    #[error("`{0}` does not fit in 256 bits")]
    Overflow(String),
}

/// Validate a user-entered decimal string and convert it to smallest units.
///
/// The conversion is exact: no floating point is involved, and input that
/// would need rounding is rejected instead.
pub fn stage_amount(input: &str, decimals: u8) -> Result<U256, AmountError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(AmountError::Empty);
    }

    if input.starts_with('-') {
        return Err(AmountError::NotPositive);
    }

    let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));

    if (whole.is_empty() && fraction.is_empty())
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AmountError::NotNumeric(input.to_string()));
    }

    if fraction.len() > decimals as usize {
        return Err(AmountError::TooPrecise {
            input: input.to_string(),
            decimals,
        });
    }

    // Scaling up by `10^decimals` wraps silently, so bound the digit count
    // before converting.
    if whole.trim_start_matches('0').len() + decimals as usize > MAX_DIGITS {
        return Err(AmountError::Overflow(input.to_string()));
    }

    let amount = match parse_units(input, decimals) {
        Ok(ParseUnits::U256(amount)) => amount,
        Ok(ParseUnits::I256(_)) => return Err(AmountError::NotPositive),
        Err(_) => return Err(AmountError::Overflow(input.to_string())),
    };

    if amount.is_zero() {
        return Err(AmountError::NotPositive);
    }

    Ok(amount)
}

// ----------------------------------- tests -----------------------------------
