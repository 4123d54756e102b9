use std::collections::HashSet;

use log::{debug, info};

use crate::search::builder::ExpressionBuilder;
use crate::search::equation::Equation;
use crate::search::options::SearchOptions;
use crate::search::state::{CandidateCursor, CursorBounds, Step};
use crate::search::types::{CandidateState, SearchState, WorkItem};
use crate::utils::{
    InputError, cut_into_tokens, cut_pattern_count, extract_digits, validate_digit_sequence,
};

/// Find every equation hidden in the digits of a date-like string.
///
/// Digits are extracted in order, validated against `options.max_digits`,
/// and the returned iterator lazily walks splits, cut patterns, operator
/// assignments and (optionally) groupings, yielding each distinct match at
/// most once.
///
/// # Errors
///
/// Returns [`InputError`] when fewer than 2 digits are extracted or when
/// the count exceeds the configured maximum. No search work happens in
/// that case.
///
/// # Examples
///
/// ```
/// use equidate::{SearchOptions, find_equations};
///
/// let equations = find_equations("123", SearchOptions::default())
///     .expect("two or more digits");
/// for equation in equations {
///     println!("{}  (= {})", equation, equation.display_value());
/// }
/// ```
pub fn find_equations(input: &str, options: SearchOptions) -> Result<EquationIter, InputError> {
    let digits = extract_digits(input);
    validate_digit_sequence(&digits, options.max_digits)?;
    Ok(EquationIter::new(digits, options))
}

/// Streaming equation search over one digit sequence.
///
/// Candidates are produced one at a time from a stack of enumeration
/// states and evaluated immediately; nothing is kept beyond the stack, the
/// deduplication set and two counters, so the walk over an exponential
/// candidate space runs in small memory.
#[derive(Debug, Clone)]
pub struct EquationIter {
    digits: Vec<u8>,
    options: SearchOptions,
    work: Vec<WorkItem>,
    seen: HashSet<String>,
    found: usize,
    evaluated: u64,
}

impl EquationIter {
    /// Start a search over an already-validated digit sequence
    pub(crate) fn new(digits: Vec<u8>, options: SearchOptions) -> Self {
        // The deepest stack entry is the last split, so splits are walked
        // in ascending order of their split point.
        let work = (1..digits.len())
            .rev()
            .map(|split_point| WorkItem {
                split_point,
                state: SearchState::Tokenize {
                    left_mask: 0,
                    right_mask: 0,
                },
            })
            .collect();

        info!(
            "Searching {} digits for equations (grouping: {})",
            digits.len(),
            options.allow_grouping
        );

        Self {
            digits,
            options,
            work,
            seen: HashSet::new(),
            found: 0,
            evaluated: 0,
        }
    }

    /// Number of expression evaluations performed so far
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Number of equations yielded so far
    pub fn found(&self) -> usize {
        self.found
    }

    /// Queue the cut-pattern pair following (left_mask, right_mask), if any
    fn queue_next_pattern(&mut self, split_point: usize, left_mask: u64, right_mask: u64) {
        let left_len = split_point;
        let right_len = self.digits.len() - split_point;

        let mut next_left = left_mask;
        let mut next_right = right_mask + 1;
        if next_right == cut_pattern_count(right_len) {
            next_right = 0;
            next_left += 1;
            if next_left == cut_pattern_count(left_len) {
                return;
            }
        }

        self.work.push(WorkItem {
            split_point,
            state: SearchState::Tokenize {
                left_mask: next_left,
                right_mask: next_right,
            },
        });
    }

    /// Tokenize both sides of a split for one cut-pattern pair and queue
    /// its candidate walk; a leading-zero token drops the pair entirely
    fn handle_tokenize(&mut self, split_point: usize, left_mask: u64, right_mask: u64) {
        self.queue_next_pattern(split_point, left_mask, right_mask);

        let (left_digits, right_digits) = self.digits.split_at(split_point);
        let (Some(left_tokens), Some(right_tokens)) = (
            cut_into_tokens(left_digits, left_mask),
            cut_into_tokens(right_digits, right_mask),
        ) else {
            return;
        };

        self.work.push(WorkItem {
            split_point,
            state: SearchState::Candidates(CandidateState {
                left_tokens,
                right_tokens,
                cursor: CandidateCursor::default(),
                left_value: None,
            }),
        });
    }

    /// Evaluate the candidate under the cursor, queue the advanced cursor,
    /// and return the equation when the candidate matches and is new
    fn handle_candidates(&mut self, split_point: usize, mut s: CandidateState) -> Option<Equation> {
        let grouped = self.options.allow_grouping;
        let bounds = CursorBounds::new(s.left_tokens.len(), s.right_tokens.len(), grouped);

        // The left side only changes when an outer cursor dimension moves,
        // so its value is carried from candidate to candidate.
        let left_value = match s.left_value {
            Some(value) => value,
            None => {
                let left = ExpressionBuilder::build(
                    &s.left_tokens,
                    s.cursor.left_op,
                    s.cursor.left_shape,
                    grouped,
                );
                self.evaluated += 1;
                match left.evaluate() {
                    Ok(value) => {
                        s.left_value = Some(value);
                        value
                    }
                    Err(_) => {
                        // No right side can rescue a failing left side.
                        if let Step::Moved { .. } = s.cursor.advance_left(&bounds) {
                            self.work.push(WorkItem {
                                split_point,
                                state: SearchState::Candidates(s),
                            });
                        }
                        return None;
                    }
                }
            }
        };

        let right = ExpressionBuilder::build(
            &s.right_tokens,
            s.cursor.right_op,
            s.cursor.right_shape,
            grouped,
        );
        self.evaluated += 1;
        let Ok(right_value) = right.evaluate() else {
            self.queue_advanced(split_point, s, &bounds);
            return None;
        };

        if (left_value - right_value).abs() > self.options.tolerance {
            self.queue_advanced(split_point, s, &bounds);
            return None;
        }

        let left = ExpressionBuilder::build(
            &s.left_tokens,
            s.cursor.left_op,
            s.cursor.left_shape,
            grouped,
        );
        let equation = Equation {
            left: left.to_string(),
            right: right.to_string(),
            value: left_value,
        };
        let fresh = self.seen.insert(equation.to_string());
        self.queue_advanced(split_point, s, &bounds);

        if fresh {
            self.found += 1;
            debug!("Match {}: {}", self.found, equation);
            return Some(equation);
        }
        None
    }

    /// Queue the same token pair with the cursor advanced one candidate
    fn queue_advanced(&mut self, split_point: usize, mut s: CandidateState, bounds: &CursorBounds) {
        match s.cursor.advance(bounds) {
            Step::Exhausted => {}
            Step::Moved { left_changed } => {
                if left_changed {
                    s.left_value = None;
                }
                self.work.push(WorkItem {
                    split_point,
                    state: SearchState::Candidates(s),
                });
            }
        }
    }
}

impl Iterator for EquationIter {
    type Item = Equation;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.found >= self.options.max_results {
                debug!("Result limit reached, abandoning the search");
                return None;
            }
            if let Some(limit) = self.options.max_candidates
                && self.evaluated >= limit
            {
                debug!("Candidate limit reached, abandoning the search");
                return None;
            }

            let item = self.work.pop()?;
            match item.state {
                SearchState::Tokenize {
                    left_mask,
                    right_mask,
                } => {
                    self.handle_tokenize(item.split_point, left_mask, right_mask);
                }
                SearchState::Candidates(s) => {
                    if let Some(equation) = self.handle_candidates(item.split_point, s) {
                        return Some(equation);
                    }
                }
            }
        }
    }
}
