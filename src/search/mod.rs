//! Lazy enumeration and matching of candidate equations

mod builder;
pub mod constants;
mod core;
mod equation;
mod options;
mod state;
mod types;

pub use self::core::{EquationIter, find_equations};
pub use equation::Equation;
pub use options::SearchOptions;
