use log::debug;

/// Extract every ASCII decimal digit from a date-like string, in order.
///
/// Everything else (separators, letters, whitespace) is discarded, so
/// "09/05/2005" and "09052005" extract to the same sequence.
pub fn extract_digits(input: &str) -> Vec<u8> {
    let digits: Vec<u8> = input
        .chars()
        .filter(char::is_ascii_digit)
        .map(|c| c as u8 - b'0')
        .collect();
    debug!("Extracted {} digits from {:?}", digits.len(), input);
    digits
}

/// Read a run of digits as one decimal number.
///
/// Returns `None` for an empty run and for multi-digit runs starting with
/// zero ("05" is a rendering of the date, not the number 5).
pub fn token_value(digits: &[u8]) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    if digits.len() > 1 && digits[0] == 0 {
        return None;
    }
    Some(digits.iter().fold(0u64, |acc, &d| acc * 10 + u64::from(d)))
}
