use crate::expression::{Expression, Op};
use crate::search::constants::CATALAN;

/// Builds one candidate expression at a time from a token sequence.
///
/// A candidate on one side of a split is named by two indices: an operator
/// assignment (base-4 digit per token gap) and, when grouping is enabled, a
/// shape picking one parenthesization of the chain. Trees are built on
/// demand and dropped after evaluation.
pub(crate) struct ExpressionBuilder;

impl ExpressionBuilder {
    /// Number of operator assignments over a token sequence: 4^(tokens - 1)
    pub fn op_assignment_count(token_count: usize) -> u64 {
        debug_assert!(token_count >= 1);
        1u64 << (2 * (token_count - 1))
    }

    /// Number of distinct parenthesizations: the Catalan number C(tokens - 1)
    pub fn shape_count(token_count: usize) -> u64 {
        debug_assert!(token_count >= 1);
        CATALAN[token_count - 1]
    }

    /// Decode a base-4 assignment index into one operator per token gap.
    /// The first gap sits in the low bits.
    pub fn decode_ops(token_count: usize, index: u64) -> Vec<Op> {
        (0..token_count - 1)
            .map(|gap| Op::ALL[((index >> (2 * gap)) & 3) as usize])
            .collect()
    }

    /// Build the candidate named by an operator index and a shape index
    pub fn build(tokens: &[u64], op_index: u64, shape: u64, grouped: bool) -> Expression {
        let ops = Self::decode_ops(tokens.len(), op_index);
        if grouped {
            Self::build_grouped(tokens, &ops, shape)
        } else {
            Self::build_flat(tokens, &ops)
        }
    }

    /// Build the flat expression: standard precedence, left associative.
    ///
    /// Runs of * and / fold into factors as they are read; each + or -
    /// closes the current factor into the additive chain.
    pub fn build_flat(tokens: &[u64], ops: &[Op]) -> Expression {
        debug_assert_eq!(ops.len() + 1, tokens.len());

        let mut sum: Option<(Expression, Op)> = None;
        let mut factor = Expression::Number(tokens[0] as f64);

        for (op, &token) in ops.iter().zip(&tokens[1..]) {
            let operand = Expression::Number(token as f64);
            match op {
                Op::Mul | Op::Div => factor = Expression::binary(*op, factor, operand),
                Op::Add | Op::Sub => {
                    sum = Some(match sum {
                        None => (factor, *op),
                        Some((acc, pending)) => (Expression::binary(pending, acc, factor), *op),
                    });
                    factor = operand;
                }
            }
        }

        match sum {
            None => factor,
            Some((acc, pending)) => Expression::binary(pending, acc, factor),
        }
    }

    /// Build the `shape`-th parenthesization of the token/operator chain.
    ///
    /// A shape index names one binary tree over the chain: pick the root
    /// operator, then recursively a shape for each side. Index arithmetic
    /// follows the Catalan recurrence, so every index below
    /// [`Self::shape_count`] decodes to a distinct tree.
    pub fn build_grouped(tokens: &[u64], ops: &[Op], shape: u64) -> Expression {
        debug_assert_eq!(ops.len() + 1, tokens.len());
        debug_assert!(shape < Self::shape_count(tokens.len()));
        Self::build_range(tokens, ops, 0, tokens.len(), shape)
    }

    /// Tree over tokens[lo..hi], with operator i between tokens i and i + 1
    fn build_range(tokens: &[u64], ops: &[Op], lo: usize, hi: usize, mut shape: u64) -> Expression {
        if hi - lo == 1 {
            return Expression::Number(tokens[lo] as f64);
        }

        for root in lo..hi - 1 {
            let left_shapes = CATALAN[root - lo];
            let right_shapes = CATALAN[hi - root - 2];
            let block = left_shapes * right_shapes;
            if shape < block {
                let left = Self::build_range(tokens, ops, lo, root + 1, shape / right_shapes);
                let right = Self::build_range(tokens, ops, root + 1, hi, shape % right_shapes);
                return Expression::binary(ops[root], left, right);
            }
            shape -= block;
        }
        unreachable!("shape index out of range for this token span")
    }
}
