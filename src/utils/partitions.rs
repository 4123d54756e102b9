use crate::utils::digits::token_value;

/// Number of cut-point patterns for one side of `len` digits.
///
/// Each of the `len - 1` gaps between adjacent digits is either cut or
/// kept, so a side of m digits has 2^(m-1) patterns.
pub fn cut_pattern_count(len: usize) -> u64 {
    debug_assert!(len >= 1);
    1u64 << (len - 1)
}

/// Cut a run of digits into tokens according to a bitmask.
///
/// Bit i of `mask` set means "cut between digit i and digit i+1". Returns
/// `None` when any resulting token would read a multi-digit number with a
/// leading zero; such a pattern is skipped as a whole.
pub fn cut_into_tokens(digits: &[u8], mask: u64) -> Option<Vec<u64>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for gap in 0..digits.len().saturating_sub(1) {
        if mask & (1u64 << gap) != 0 {
            tokens.push(token_value(&digits[start..=gap])?);
            start = gap + 1;
        }
    }
    tokens.push(token_value(&digits[start..])?);
    Some(tokens)
}
