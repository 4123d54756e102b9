//! Expression trees over the four arithmetic operators

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Expression, Op};
pub use errors::ExpressionError;

#[cfg(test)]
mod tests;
