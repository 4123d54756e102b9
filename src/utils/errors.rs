use thiserror::Error;

/// Errors raised while preparing an input for the search
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Input must contain at least 2 digits, found {found}")]
    TooFewDigits { found: usize },
    #[error("Input contains {found} digits, more than the limit of {limit}")]
    TooManyDigits { found: usize, limit: usize },
}
