//! Display and Debug formatting for boolean expressions

use super::{BoolExpr, BoolExprInner};
use std::fmt;

/// Context for formatting expressions with minimal parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None, // Top level or inside parentheses
    And,  // Inside an AND operation
    Or,   // Inside an OR operation
    Xor,  // Inside an XOR operation
    Not,  // Inside a NOT operation
}

impl BoolExpr {
    /// Format with operator precedence context to minimize parentheses
    ///
    /// Precedence from loosest to tightest: OR, XOR, AND, NOT.
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => write!(f, "{}", name),
            BoolExprInner::Constant(val) => write!(f, "{}", if *val { "1" } else { "0" }),

            BoolExprInner::And(left, right) => {
                // AND needs parens only inside a NOT
                let needs_parens = ctx == OpContext::Not;

                if needs_parens {
                    write!(f, "(")?;
                }

                left.fmt_with_context(f, OpContext::And)?;
                write!(f, " * ")?;
                right.fmt_with_context(f, OpContext::And)?;

                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            BoolExprInner::Or(left, right) => {
                // OR needs parens inside any tighter operation
                let needs_parens =
                    ctx == OpContext::And || ctx == OpContext::Xor || ctx == OpContext::Not;

                if needs_parens {
                    write!(f, "(")?;
                }

                left.fmt_with_context(f, OpContext::Or)?;
                write!(f, " + ")?;
                right.fmt_with_context(f, OpContext::Or)?;

                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            BoolExprInner::Xor(left, right) => {
                // XOR needs parens inside AND or NOT
                let needs_parens = ctx == OpContext::And || ctx == OpContext::Not;

                if needs_parens {
                    write!(f, "(")?;
                }

                left.fmt_with_context(f, OpContext::Xor)?;
                write!(f, " ^ ")?;
                right.fmt_with_context(f, OpContext::Xor)?;

                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            BoolExprInner::Not(expr) => {
                write!(f, "~")?;
                // NOT needs parens around compound expressions (AND/OR/XOR)
                // but NOT of NOT, variables, and constants don't
                match expr.inner.as_ref() {
                    BoolExprInner::Variable(_)
                    | BoolExprInner::Constant(_)
                    | BoolExprInner::Not(_) => expr.fmt_with_context(f, OpContext::Not),
                    _ => {
                        write!(f, "(")?;
                        expr.fmt_with_context(f, OpContext::None)?;
                        write!(f, ")")
                    }
                }
            }
        }
    }
}

/// Display formatting for boolean expressions
///
/// Formats expressions with minimal parentheses based on operator
/// precedence, in standard boolean algebra notation: `*` for AND, `+` for
/// OR, `^` for XOR, `~` for NOT.
///
/// # Examples
///
/// ```
/// use boolsynth::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let c = BoolExpr::variable("c");
/// let expr = a.and(&b).or(&c);
///
/// assert_eq!(expr.to_string(), "a * b + c"); // no unnecessary parentheses
/// ```
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}
