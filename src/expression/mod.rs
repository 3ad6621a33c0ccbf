//! Boolean expression values with operator overloading and parsing support
//!
//! This module provides the [`BoolExpr`] type, an immutable expression tree
//! over named variables. Expressions are produced by the cover translator,
//! built programmatically (`a.and(&b).or(&c)` or `&a * &b + &c`), or parsed
//! from strings.
//!
//! # Quick Start
//!
//! ```
//! use boolsynth::BoolExpr;
//!
//! let a = BoolExpr::variable("a");
//! let b = BoolExpr::variable("b");
//!
//! // Method API
//! let expr = a.and(&b).or(&a.not().and(&b.not()));
//!
//! // Operator overloading (requires explicit &)
//! let same = &a * &b + !&a * !&b;
//! assert_eq!(expr, same);
//!
//! // Algebraic notation: * for AND, + for OR, ^ for XOR, ~ for NOT
//! assert_eq!(expr.to_string(), "a * b + ~a * ~b");
//! ```
//!
//! # Parsing
//!
//! ```
//! use boolsynth::BoolExpr;
//!
//! # fn main() -> Result<(), boolsynth::ExpressionParseError> {
//! let expr = BoolExpr::parse("a * b + ~a * ~b")?;
//! let with_xor = BoolExpr::parse("a ^ b")?;
//! let spelled = BoolExpr::parse("(a | b) & !c")?;
//! # Ok(())
//! # }
//! ```

// Submodules
mod display;
pub mod error;
mod eval;
mod operators;
mod parser;

pub use error::ExpressionParseError;

use std::collections::BTreeSet;
use std::sync::Arc;

/// Inner node of a boolean expression tree
///
/// Shared behind `Arc` so cloning expressions is cheap and subtrees are
/// reused across compositions.
#[derive(Debug, PartialEq, Eq, Hash)]
pub(crate) enum BoolExprInner {
    /// A named variable (or guard predicate text)
    Variable(Arc<str>),
    /// Logical AND of two expressions
    And(BoolExpr, BoolExpr),
    /// Logical OR of two expressions
    Or(BoolExpr, BoolExpr),
    /// Logical XOR of two expressions
    Xor(BoolExpr, BoolExpr),
    /// Logical NOT of an expression
    Not(BoolExpr),
    /// A constant value (true or false)
    Constant(bool),
}

/// A boolean expression that can be manipulated programmatically
///
/// Immutable value type; all composition methods return new expressions.
/// Equality is structural.
///
/// # Examples
///
/// ```
/// use boolsynth::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let expr = a.xor(&b);
/// assert_eq!(expr.to_string(), "a ^ b");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoolExpr {
    pub(crate) inner: Arc<BoolExprInner>,
}

impl BoolExpr {
    fn wrap(inner: BoolExprInner) -> Self {
        BoolExpr {
            inner: Arc::new(inner),
        }
    }

    /// Create a variable expression with the given name
    ///
    /// The name may be any non-empty text, including guard predicate source
    /// such as `"count > 3"`; renderers emit it verbatim.
    pub fn variable(name: &str) -> Self {
        Self::wrap(BoolExprInner::Variable(Arc::from(name)))
    }

    /// Create a constant expression (true or false)
    pub fn constant(value: bool) -> Self {
        Self::wrap(BoolExprInner::Constant(value))
    }

    /// Logical AND: the conjunction of this expression and another
    pub fn and(&self, other: &BoolExpr) -> BoolExpr {
        Self::wrap(BoolExprInner::And(self.clone(), other.clone()))
    }

    /// Logical OR: the disjunction of this expression and another
    pub fn or(&self, other: &BoolExpr) -> BoolExpr {
        Self::wrap(BoolExprInner::Or(self.clone(), other.clone()))
    }

    /// Logical XOR: true iff exactly one of the two expressions is true
    pub fn xor(&self, other: &BoolExpr) -> BoolExpr {
        Self::wrap(BoolExprInner::Xor(self.clone(), other.clone()))
    }

    /// Logical NOT: the negation of this expression
    pub fn not(&self) -> BoolExpr {
        Self::wrap(BoolExprInner::Not(self.clone()))
    }

    /// Check if this expression is a constant, returning its value
    pub fn as_constant(&self) -> Option<bool> {
        match self.inner.as_ref() {
            BoolExprInner::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Collect the names of all variables in this expression
    ///
    /// Returns names in sorted order, deduplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolsynth::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("b * a + a").unwrap();
    /// let vars = expr.collect_variables();
    /// let names: Vec<&str> = vars.iter().map(|v| v.as_ref()).collect();
    /// assert_eq!(names, vec!["a", "b"]);
    /// ```
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        let mut vars = BTreeSet::new();
        self.collect_variables_into(&mut vars);
        vars
    }

    fn collect_variables_into(&self, vars: &mut BTreeSet<Arc<str>>) {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => {
                vars.insert(Arc::clone(name));
            }
            BoolExprInner::And(left, right)
            | BoolExprInner::Or(left, right)
            | BoolExprInner::Xor(left, right) => {
                left.collect_variables_into(vars);
                right.collect_variables_into(vars);
            }
            BoolExprInner::Not(inner) => inner.collect_variables_into(vars),
            BoolExprInner::Constant(_) => {}
        }
    }
}
