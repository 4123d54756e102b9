use crate::search::builder::ExpressionBuilder;

/// Sizes of the four cursor dimensions for one tokenized split
#[derive(Debug, Clone, Copy)]
pub(crate) struct CursorBounds {
    pub left_ops: u64,
    pub left_shapes: u64,
    pub right_ops: u64,
    pub right_shapes: u64,
}

impl CursorBounds {
    pub fn new(left_tokens: usize, right_tokens: usize, allow_grouping: bool) -> Self {
        Self {
            left_ops: ExpressionBuilder::op_assignment_count(left_tokens),
            left_shapes: if allow_grouping {
                ExpressionBuilder::shape_count(left_tokens)
            } else {
                1
            },
            right_ops: ExpressionBuilder::op_assignment_count(right_tokens),
            right_shapes: if allow_grouping {
                ExpressionBuilder::shape_count(right_tokens)
            } else {
                1
            },
        }
    }
}

/// Outcome of moving a cursor one candidate forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Moved to the next candidate; `left_changed` flags that the cached
    /// left value is stale
    Moved { left_changed: bool },
    Exhausted,
}

/// Odometer over (left ops, left shape, right ops, right shape).
///
/// The right dimensions spin fastest, so a cached left value stays valid
/// across a whole run of right-side candidates.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CandidateCursor {
    pub left_op: u64,
    pub left_shape: u64,
    pub right_op: u64,
    pub right_shape: u64,
}

impl CandidateCursor {
    pub fn advance(&mut self, bounds: &CursorBounds) -> Step {
        self.right_shape += 1;
        if self.right_shape < bounds.right_shapes {
            return Step::Moved { left_changed: false };
        }
        self.right_shape = 0;
        self.right_op += 1;
        if self.right_op < bounds.right_ops {
            return Step::Moved { left_changed: false };
        }
        self.right_op = 0;
        self.advance_left(bounds)
    }

    /// Skip every remaining right-side candidate for the current left side
    pub fn advance_left(&mut self, bounds: &CursorBounds) -> Step {
        self.right_shape = 0;
        self.right_op = 0;
        self.left_shape += 1;
        if self.left_shape < bounds.left_shapes {
            return Step::Moved { left_changed: true };
        }
        self.left_shape = 0;
        self.left_op += 1;
        if self.left_op < bounds.left_ops {
            return Step::Moved { left_changed: true };
        }
        Step::Exhausted
    }
}
