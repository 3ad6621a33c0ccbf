//! The solve pipeline
//!
//! For each declared output the orchestrator extracts the on-set,
//! minimizes it, and translates the resulting cover into an expression.
//! The aggregated [`Solution`] carries the per-output expressions plus the
//! fallback signal collaborators use to decide whether a default return is
//! needed.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::cover::{minimize, Cover};
use crate::expression::BoolExpr;
use crate::table::{ConditionTable, Conditions, OutputValue, TableError};
use crate::SolverConfig;

/// The synthesized result for one output
#[derive(Clone, Debug)]
pub struct OutputSolution {
    /// The output value this expression selects
    pub value: OutputValue,
    /// The effective identifier per input position (declared names, or
    /// guard predicate text for guarded tables)
    pub identifiers: Vec<Arc<str>>,
    /// The minimized cover
    pub cover: Cover,
    /// The translated expression
    pub expression: BoolExpr,
}

/// The aggregated result of a solve run
///
/// Outputs whose on-set is empty are omitted entirely: an always-false
/// output contributes no expression. When every output is omitted and no
/// default value was configured, [`needs_fallback`](Self::needs_fallback)
/// signals that generated code must fall back to returning false.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Per-output results, in deterministic output order
    pub outputs: Vec<OutputSolution>,
    /// True when no output produced an expression and no default value was
    /// declared
    pub needs_fallback: bool,
    /// The configured default value, carried through for code generation
    pub default_value: Option<OutputValue>,
}

impl Solution {
    /// Look up the expression synthesized for one output
    pub fn expression_for(&self, value: &OutputValue) -> Option<&BoolExpr> {
        self.outputs
            .iter()
            .find(|output| &output.value == value)
            .map(|output| &output.expression)
    }

    /// True when no output produced an expression
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

/// Errors surfaced by [`solve`]
///
/// Validation failures are converted into this explicit result at the
/// pipeline boundary; no partial solution is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The condition specification failed normalization
    Table(TableError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Table(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Table(e) => Some(e),
        }
    }
}

impl From<TableError> for SolveError {
    fn from(err: TableError) -> Self {
        SolveError::Table(err)
    }
}

impl From<SolveError> for io::Error {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::Table(e) => e.into(),
        }
    }
}

/// Synthesize minimal expressions for every output of a condition
/// specification
///
/// `inputs` lists the function's parameter names in declaration order. The
/// whole pipeline is a pure function of its arguments: the same conditions
/// and names produce byte-identical results regardless of row insertion
/// order.
///
/// # Examples
///
/// ```
/// use boolsynth::{render, solve, Conditions, Row, SolverConfig};
///
/// # fn main() -> Result<(), boolsynth::SolveError> {
/// let mut cond = Conditions::new();
/// cond.add(Row::implicit(&[true, true]));
/// cond.add(Row::implicit(&[true, false]));
/// cond.add(Row::implicit(&[false, true]));
///
/// let solution = solve(&cond, &["a", "b"], &SolverConfig::default())?;
/// assert_eq!(render::python(&solution.outputs[0].expression), "a or b");
/// # Ok(())
/// # }
/// ```
///
/// An empty specification yields no expressions and requests a fallback:
///
/// ```
/// use boolsynth::{solve, Conditions, SolverConfig};
///
/// let solution = solve(&Conditions::new(), &["a"], &SolverConfig::default()).unwrap();
/// assert!(solution.is_empty());
/// assert!(solution.needs_fallback);
/// ```
pub fn solve(
    conditions: &Conditions,
    inputs: &[&str],
    config: &SolverConfig,
) -> Result<Solution, SolveError> {
    let table = ConditionTable::from_conditions(conditions)?;

    let mut outputs = Vec::new();
    for value in table.outputs() {
        let identifiers = table.identifiers(value, inputs)?;
        let on_set = table.on_set(value);
        if on_set.is_empty() {
            continue; // always-false output, nothing to synthesize
        }

        let width = identifiers.len();
        let cover = minimize(width, &on_set, config)
            .expect("normalized table produced malformed minterms");
        let expression = cover
            .to_expr(&identifiers)
            .expect("cover width diverged from identifier count");

        outputs.push(OutputSolution {
            value: value.clone(),
            identifiers,
            cover,
            expression,
        });
    }

    let needs_fallback = outputs.is_empty() && config.default_value.is_none();

    Ok(Solution {
        outputs,
        needs_fallback,
        default_value: config.default_value.clone(),
    })
}
