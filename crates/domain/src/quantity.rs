//! Line quantities shared by menus and orders.

use crate::error::ValidationError;

/// Largest quantity a menu product or order line accepts.
pub const MAX: u64 = i64::MAX.unsigned_abs();

/// # Errors
///
/// Returns [`ValidationError::QuantityTooLarge`] when `quantity` is above [`MAX`].
pub fn ensure_within_limit(quantity: u64) -> Result<u64, ValidationError> {
    if quantity > MAX {
        return Err(ValidationError::QuantityTooLarge(quantity));
    }
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_largest_quantity() {
        assert_eq!(ensure_within_limit(MAX), Ok(MAX));
    }

    #[test]
    fn should_reject_quantity_above_limit() {
        assert_eq!(
            ensure_within_limit(MAX + 1),
            Err(ValidationError::QuantityTooLarge(MAX + 1))
        );
        assert_eq!(
            ensure_within_limit(u64::MAX),
            Err(ValidationError::QuantityTooLarge(u64::MAX))
        );
    }
}
