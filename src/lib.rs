//! Find arithmetic equations hidden in the digits of a date.
//!
//! Given a date-like string, the digits are extracted in order and split
//! into a left and a right side. Each side is cut into multi-digit tokens
//! joined by `+ - * /`, and every combination is evaluated; whenever both
//! sides agree within a tolerance, the equation is yielded. Grouping mode
//! additionally tries every parenthesization of each side.
//!
//! ```
//! use equidate::{SearchOptions, find_equations};
//!
//! let equations = find_equations("1234", SearchOptions::default())
//!     .expect("two or more digits");
//! let texts: Vec<String> = equations.map(|eq| eq.to_string()).collect();
//! assert!(texts.contains(&"1 = 2 + 3 - 4".to_string()));
//! ```

pub mod expression;
pub mod search;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Op};
pub use search::{Equation, EquationIter, SearchOptions, find_equations};
pub use utils::InputError;
