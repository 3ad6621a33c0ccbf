//! Assembling complete function implementations
//!
//! Turns a [`Solution`] into the source lines of a function: definition,
//! one conditional return per literal output, an unconditional return for
//! the boolean-true output, and a trailing default when nothing else
//! returns. The lines are handed back to the caller; where they end up is
//! not this crate's concern.

use crate::render::{self, Target};
use crate::solver::Solution;
use crate::table::OutputValue;

const INDENT: &str = "    ";

/// Render an output value in the target syntax
fn output_text(value: &OutputValue, target: Target) -> String {
    match value {
        OutputValue::Bool(b) => render::constant(*b, target).to_string(),
        OutputValue::Literal(text) => text.to_string(),
    }
}

/// Assemble a function implementing the solved condition table
///
/// Outputs other than boolean-true become `if <expr>: return <value>`
/// lines in deterministic output order; the boolean-true output becomes the
/// unconditional `return <expr>`. When no unconditional return exists, the
/// configured default value (or `False`) is returned at the end.
///
/// # Examples
///
/// ```
/// use boolsynth::{codegen, solve, Conditions, Row, SolverConfig, Target};
///
/// let mut cond = Conditions::new();
/// cond.add(Row::explicit(&[true, true], true));
/// let solution = solve(&cond, &["a", "b"], &SolverConfig::default()).unwrap();
///
/// let lines = codegen::implement_function("and_function", &["a", "b"], &solution, Target::Python);
/// assert_eq!(lines, vec![
///     "def and_function(a, b):".to_string(),
///     "    return a and b".to_string(),
/// ]);
/// ```
pub fn implement_function(
    name: &str,
    params: &[&str],
    solution: &Solution,
    target: Target,
) -> Vec<String> {
    let mut lines = vec![definition(name, params, target)];

    // Conditional returns for every output except boolean-true
    for output in &solution.outputs {
        if output.value == OutputValue::Bool(true) {
            continue;
        }
        let expr = render::render(&output.expression, target);
        let value = output_text(&output.value, target);
        match target {
            Target::Python => {
                lines.push(format!("{}if {}:", INDENT, expr));
                lines.push(format!("{}{}return {}", INDENT, INDENT, value));
            }
            Target::Rust => {
                lines.push(format!("{}if {} {{", INDENT, expr));
                lines.push(format!("{}{}return {};", INDENT, INDENT, value));
                lines.push(format!("{}}}", INDENT));
            }
        }
    }

    // The boolean-true output returns its expression directly
    let unconditional = solution
        .outputs
        .iter()
        .find(|output| output.value == OutputValue::Bool(true));

    match unconditional {
        Some(output) => {
            let expr = render::render(&output.expression, target);
            match target {
                Target::Python => lines.push(format!("{}return {}", INDENT, expr)),
                Target::Rust => lines.push(format!("{}{}", INDENT, expr)),
            }
        }
        None => {
            // Nothing returns unconditionally: close with the declared
            // default, or false
            let value = solution
                .default_value
                .as_ref()
                .map(|v| output_text(v, target))
                .unwrap_or_else(|| render::constant(false, target).to_string());
            match target {
                Target::Python => lines.push(format!("{}return {}", INDENT, value)),
                Target::Rust => lines.push(format!("{}{}", INDENT, value)),
            }
        }
    }

    if target == Target::Rust {
        lines.push("}".to_string());
    }

    lines
}

/// Assemble a single-output predicate function from one expression
///
/// Used for named table-file outputs, where each output column becomes its
/// own boolean function.
pub fn implement_predicate(
    name: &str,
    params: &[&str],
    expression: &crate::BoolExpr,
    target: Target,
) -> Vec<String> {
    let expr = render::render(expression, target);
    match target {
        Target::Python => vec![
            definition(name, params, target),
            format!("{}return {}", INDENT, expr),
        ],
        Target::Rust => vec![
            definition(name, params, target),
            format!("{}{}", INDENT, expr),
            "}".to_string(),
        ],
    }
}

/// The function definition line
fn definition(name: &str, params: &[&str], target: Target) -> String {
    match target {
        Target::Python => format!("def {}({}):", name, params.join(", ")),
        Target::Rust => {
            let typed: Vec<String> = params.iter().map(|p| format!("{}: bool", p)).collect();
            format!("fn {}({}) -> bool {{", name, typed.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Row;
    use crate::{solve, Conditions, SolverConfig};

    fn solved(cond: &Conditions, inputs: &[&str]) -> Solution {
        solve(cond, inputs, &SolverConfig::default()).unwrap()
    }

    #[test]
    fn test_python_boolean_function() {
        let mut cond = Conditions::new();
        cond.add(Row::implicit(&[true, false]));
        cond.add(Row::implicit(&[false, true]));

        let lines = implement_function(
            "xor_function",
            &["a", "b"],
            &solved(&cond, &["a", "b"]),
            Target::Python,
        );
        assert_eq!(
            lines,
            vec![
                "def xor_function(a, b):".to_string(),
                "    return a and not b or not a and b".to_string(),
            ]
        );
    }

    #[test]
    fn test_python_literal_output_gets_conditional() {
        let mut cond = Conditions::new();
        cond.add_for(OutputValue::literal("3"), Row::implicit(&[true, true]));

        let lines = implement_function(
            "classify",
            &["a", "b"],
            &solved(&cond, &["a", "b"]),
            Target::Python,
        );
        assert_eq!(
            lines,
            vec![
                "def classify(a, b):".to_string(),
                "    if a and b:".to_string(),
                "        return 3".to_string(),
                "    return False".to_string(),
            ]
        );
    }

    #[test]
    fn test_python_empty_solution_falls_back() {
        let cond = Conditions::new();
        let lines =
            implement_function("nothing", &["a"], &solved(&cond, &["a"]), Target::Python);
        assert_eq!(
            lines,
            vec!["def nothing(a):".to_string(), "    return False".to_string()]
        );
    }

    #[test]
    fn test_python_declared_default() {
        let cond = Conditions::new();
        let config = SolverConfig::new().with_default(OutputValue::literal("'idle'"));
        let solution = solve(&cond, &["a"], &config).unwrap();

        let lines = implement_function("status", &["a"], &solution, Target::Python);
        assert_eq!(
            lines,
            vec![
                "def status(a):".to_string(),
                "    return 'idle'".to_string(),
            ]
        );
    }

    #[test]
    fn test_rust_boolean_function() {
        let mut cond = Conditions::new();
        cond.add(Row::explicit(&[true, true], true));

        let lines = implement_function(
            "and_function",
            &["a", "b"],
            &solved(&cond, &["a", "b"]),
            Target::Rust,
        );
        assert_eq!(
            lines,
            vec![
                "fn and_function(a: bool, b: bool) -> bool {".to_string(),
                "    a && b".to_string(),
                "}".to_string(),
            ]
        );
    }

    #[test]
    fn test_predicate_function() {
        let expr = crate::BoolExpr::parse("a + b").unwrap();
        let lines = implement_predicate("any_set", &["a", "b"], &expr, Target::Python);
        assert_eq!(
            lines,
            vec![
                "def any_set(a, b):".to_string(),
                "    return a or b".to_string(),
            ]
        );
    }
}
