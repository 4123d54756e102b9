//! Digit extraction, tokenization and input validation helpers

mod digits;
mod errors;
mod partitions;
mod validation;

pub use digits::{extract_digits, token_value};
pub use errors::InputError;
pub use partitions::{cut_into_tokens, cut_pattern_count};
pub use validation::{DIGIT_CEILING, validate_digit_sequence};
