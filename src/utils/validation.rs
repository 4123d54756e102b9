use log::{debug, warn};

use crate::utils::errors::InputError;

/// Hard ceiling on the extracted digit count. Configured limits above this
/// are clamped; longer sequences make the candidate space intractable.
pub const DIGIT_CEILING: usize = 12;

/// Check that a digit sequence can be searched at all.
///
/// # Errors
///
/// Returns an error when fewer than 2 digits were extracted (no split has
/// two non-empty sides) or when the count exceeds `max_digits` capped at
/// [`DIGIT_CEILING`].
pub fn validate_digit_sequence(digits: &[u8], max_digits: usize) -> Result<(), InputError> {
    let limit = max_digits.min(DIGIT_CEILING);
    debug!("Validating {} digits against limit {}", digits.len(), limit);

    if digits.len() < 2 {
        warn!("Too few digits to form an equation: {}", digits.len());
        return Err(InputError::TooFewDigits {
            found: digits.len(),
        });
    }

    if digits.len() > limit {
        warn!("Digit count {} exceeds limit {}", digits.len(), limit);
        return Err(InputError::TooManyDigits {
            found: digits.len(),
            limit,
        });
    }

    Ok(())
}
