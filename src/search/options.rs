use crate::search::constants::{DEFAULT_MAX_DIGITS, DEFAULT_MAX_RESULTS, DEFAULT_TOLERANCE};

/// Caller-facing limits and switches for one equation search
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Reject inputs with more extracted digits than this, clamped to
    /// [`crate::utils::DIGIT_CEILING`]
    pub max_digits: usize,
    /// Also enumerate every parenthesization of each candidate; off means
    /// flat, precedence-shaped expressions only
    pub allow_grouping: bool,
    /// Maximum absolute difference for the two sides to count as equal
    pub tolerance: f64,
    /// Stop after this many equations have been yielded
    pub max_results: usize,
    /// Stop after this many expression evaluations, matched or not; `None`
    /// leaves the search bounded only by the digit count
    pub max_candidates: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            allow_grouping: false,
            tolerance: DEFAULT_TOLERANCE,
            max_results: DEFAULT_MAX_RESULTS,
            max_candidates: None,
        }
    }
}
