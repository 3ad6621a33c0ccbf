//! Flattening expressions into target-language source text
//!
//! The expression tree's own `Display` uses algebraic notation; the
//! functions here emit the same expression in the syntax of a target
//! language, with parentheses only where that language's precedence
//! demands them.

use crate::expression::{BoolExpr, BoolExprInner};

/// Target language for rendered source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Python: `and`, `or`, `not`, `^`, `True`/`False`
    Python,
    /// Rust: `&&`, `||`, `!`, `^`, `true`/`false`
    Rust,
}

/// Operator context of the surrounding expression node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None,
    Or,
    And,
    Xor,
    Not,
}

/// Render an expression as Python source text
///
/// # Examples
///
/// ```
/// use boolsynth::{render, BoolExpr};
///
/// let expr = BoolExpr::parse("a * ~b + ~a * b").unwrap();
/// assert_eq!(render::python(&expr), "a and not b or not a and b");
/// ```
pub fn python(expr: &BoolExpr) -> String {
    render(expr, Target::Python)
}

/// Render an expression as Rust source text
///
/// # Examples
///
/// ```
/// use boolsynth::{render, BoolExpr};
///
/// let expr = BoolExpr::parse("a * ~b + c").unwrap();
/// assert_eq!(render::rust(&expr), "a && !b || c");
/// ```
pub fn rust(expr: &BoolExpr) -> String {
    render(expr, Target::Rust)
}

/// Render an expression in the given target syntax
pub fn render(expr: &BoolExpr, target: Target) -> String {
    let mut out = String::new();
    render_with_context(expr, target, OpContext::None, &mut out);
    out
}

/// Render a bare boolean constant in the given target syntax
pub fn constant(value: bool, target: Target) -> &'static str {
    match (target, value) {
        (Target::Python, true) => "True",
        (Target::Python, false) => "False",
        (Target::Rust, true) => "true",
        (Target::Rust, false) => "false",
    }
}

fn render_with_context(expr: &BoolExpr, target: Target, ctx: OpContext, out: &mut String) {
    match expr.inner.as_ref() {
        BoolExprInner::Variable(name) => out.push_str(name),
        BoolExprInner::Constant(value) => out.push_str(constant(*value, target)),

        BoolExprInner::Or(left, right) => {
            // OR is the loosest operator in both targets
            let needs_parens =
                ctx == OpContext::And || ctx == OpContext::Xor || ctx == OpContext::Not;
            if needs_parens {
                out.push('(');
            }
            render_with_context(left, target, OpContext::Or, out);
            out.push_str(match target {
                Target::Python => " or ",
                Target::Rust => " || ",
            });
            render_with_context(right, target, OpContext::Or, out);
            if needs_parens {
                out.push(')');
            }
        }

        BoolExprInner::And(left, right) => {
            // Python: `^` binds tighter than `and`; Rust: `^` binds tighter
            // than `&&`. AND therefore needs parens inside XOR in both, and
            // inside NOT
            let needs_parens = ctx == OpContext::Xor || ctx == OpContext::Not;
            if needs_parens {
                out.push('(');
            }
            render_with_context(left, target, OpContext::And, out);
            out.push_str(match target {
                Target::Python => " and ",
                Target::Rust => " && ",
            });
            render_with_context(right, target, OpContext::And, out);
            if needs_parens {
                out.push(')');
            }
        }

        BoolExprInner::Xor(left, right) => {
            // Python `not` binds looser than `^`, so XOR under NOT is
            // unambiguous there; Rust unary `!` grabs only its operand, so
            // parens are required
            let needs_parens = ctx == OpContext::Xor
                || (ctx == OpContext::Not && target == Target::Rust);
            if needs_parens {
                out.push('(');
            }
            render_with_context(left, target, OpContext::Xor, out);
            out.push_str(" ^ ");
            render_with_context(right, target, OpContext::Xor, out);
            if needs_parens {
                out.push(')');
            }
        }

        BoolExprInner::Not(inner) => {
            // Python's `not` binds looser than `^`, so a negation used as
            // an XOR operand must itself be parenthesized there; compound
            // operands get their parens from their own arms via the Not
            // context
            let needs_parens = ctx == OpContext::Xor && target == Target::Python;
            if needs_parens {
                out.push('(');
            }
            out.push_str(match target {
                Target::Python => "not ",
                Target::Rust => "!",
            });
            render_with_context(inner, target, OpContext::Not, out);
            if needs_parens {
                out.push(')');
            }
        }
    }
}
