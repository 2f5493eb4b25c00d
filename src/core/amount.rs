//! Bounds for money columns stored as `DECIMAL(10, 2)`.

use rust_decimal::Decimal;

use crate::core::{AppError, Result};

/// Digits after the decimal point a money column keeps
pub const AMOUNT_SCALE: u32 = 2;

/// Largest value a `DECIMAL(10, 2)` column accepts
pub fn max_amount() -> Decimal {
    Decimal::new(9_999_999_999, AMOUNT_SCALE)
}

/// Checks that `amount` is in range for a money column
pub fn check_range(field: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(AppError::validation(format!("{} must not be negative", field)));
    }
    if amount > max_amount() {
        return Err(AppError::validation(format!(
            "{} must not exceed {}",
            field,
            max_amount()
        )));
    }
    Ok(())
}

/// Checks range and precision of a money field in a request body
///
/// Trailing zeros are ignored, so `10.500` is accepted as `10.50`.
pub fn validate_amount(field: &str, amount: Decimal) -> Result<()> {
    check_range(field, amount)?;

    let scale = amount.normalize().scale();
    if scale > AMOUNT_SCALE {
        return Err(AppError::validation(format!(
            "{} must have at most {} decimal places, got {}",
            field, AMOUNT_SCALE, scale
        )));
    }
    Ok(())
}
