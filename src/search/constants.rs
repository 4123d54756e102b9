// Defaults and limits for the equation search

pub const DEFAULT_MAX_DIGITS: usize = 10;
pub const DEFAULT_TOLERANCE: f64 = 1e-9;
pub const DEFAULT_MAX_RESULTS: usize = 500;

/// Catalan numbers C(0)..=C(11): the number of distinct binary trees over
/// k + 1 leaves, indexed by the operator count k.
pub const CATALAN: [u64; 12] = [
    1, 1, 2, 5, 14, 42, 132, 429, 1430, 4862, 16796, 58786,
];
