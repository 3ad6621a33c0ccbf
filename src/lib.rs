//! # Boolsynth
//!
//! This crate turns an example-based, possibly partial truth table of a
//! boolean function into a minimal boolean expression, and can synthesize
//! the source text of a function implementing that expression.
//!
//! ## Overview
//!
//! Instead of hand-writing conditionals, you declare a handful of example
//! rows (explicit, implicit, or guard-predicate rows), and the crate runs a
//! Quine-McCluskey minimization over the declared true points to produce a
//! minimal sum-of-products expression. It's particularly useful for:
//!
//! - Generating a stub function's body from examples
//! - Simplifying decision-table style business rules
//! - Teaching and experimenting with two-level logic minimization
//!
//! ## Declaring conditions
//!
//! Rows are added to a [`Conditions`] value and solved against an ordered
//! list of input names:
//!
//! ```
//! use boolsynth::{render, solve, Conditions, Row, SolverConfig};
//!
//! # fn main() -> Result<(), boolsynth::SolveError> {
//! let mut cond = Conditions::new();
//! cond.add(Row::explicit(&[true, true], true));
//!
//! let solution = solve(&cond, &["a", "b"], &SolverConfig::default())?;
//! let expr = solution.outputs[0].expression.clone();
//!
//! assert_eq!(render::python(&expr), "a and b");
//! # Ok(())
//! # }
//! ```
//!
//! The [`table!`] macro provides literal tuple syntax for the same rows:
//!
//! ```
//! use boolsynth::{render, solve, table, Conditions, Row, SolverConfig};
//!
//! # fn main() -> Result<(), boolsynth::SolveError> {
//! // XOR from one explicit and one implicit row
//! let cond = Conditions::from(table! {
//!     (true, false) => true,
//!     (false, true),
//! });
//!
//! let solution = solve(&cond, &["a", "b"], &SolverConfig::default())?;
//! let expr = &solution.outputs[0].expression;
//!
//! assert_eq!(render::python(expr), "a and not b or not a and b");
//! # Ok(())
//! # }
//! ```
//!
//! ## Guard predicates
//!
//! Rows may mix concrete booleans with guard predicates: free source-text
//! conditions standing in for inputs that are not plain booleans. The guard
//! text flows through to the synthesized expression unchanged:
//!
//! ```
//! use boolsynth::{render, solve, Conditions, Row, Slot, SolverConfig};
//!
//! # fn main() -> Result<(), boolsynth::SolveError> {
//! let mut cond = Conditions::new();
//! cond.add(Row::guarded(
//!     vec![Slot::Bound(true), Slot::guard("count > 3")],
//!     true,
//! ));
//!
//! let solution = solve(&cond, &["alive"], &SolverConfig::default())?;
//! let expr = &solution.outputs[0].expression;
//!
//! assert_eq!(render::python(expr), "alive and count > 3");
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with covers directly
//!
//! The minimizer itself is exposed for callers that already have minterms:
//!
//! ```
//! use boolsynth::{minimize, Cube, SolverConfig};
//! use std::collections::BTreeSet;
//!
//! # fn main() -> Result<(), boolsynth::cover::MinimizeError> {
//! let minterms: BTreeSet<Cube> = ["11", "10", "01"]
//!     .iter()
//!     .map(|s| Cube::from_pattern(s).unwrap())
//!     .collect();
//!
//! let cover = minimize(2, &minterms, &SolverConfig::default())?;
//! assert_eq!(cover.num_terms(), 2); // 1- and -1
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! Identical logical input produces byte-identical output regardless of the
//! order rows were added in: rows are canonicalized during normalization and
//! cover terms are emitted in descending lexicographic order of their
//! encoded pattern.

// Public modules
pub mod codegen;
pub mod cover;
pub mod expression;
pub mod render;
pub mod solver;
pub mod table;

// Re-export high-level public API
pub use boolsynth_macros::table;
pub use cover::{minimize, Cover, Cube, Term};
pub use expression::{BoolExpr, ExpressionParseError};
pub use render::Target;
pub use solver::{solve, OutputSolution, SolveError, Solution};
pub use table::{ConditionTable, Conditions, OutputValue, Row, Slot, TableError};

/// Configuration for a solve run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Fold complementary implicant pairs into XOR terms
    pub use_xor: bool,
    /// Value returned when no condition matches, in place of the implicit
    /// `false` fallback
    pub default_value: Option<OutputValue>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            use_xor: false,
            default_value: None,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable XOR folding of complementary implicant pairs
    pub fn with_xor(mut self) -> Self {
        self.use_xor = true;
        self
    }

    /// Set the default value returned when no condition matches
    pub fn with_default(mut self, value: OutputValue) -> Self {
        self.default_value = Some(value);
        self
    }
}
