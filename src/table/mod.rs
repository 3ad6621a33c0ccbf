//! Condition tables and normalization
//!
//! This module provides [`Conditions`] (the builder callers feed example
//! rows into) and [`ConditionTable`] (the normalized, validated per-output
//! table the solver consumes). Normalization resolves the three row shapes,
//! canonicalizes row order, rejects malformed specifications, and detects
//! contradictions before any minimization runs.

// Module declarations
pub mod error;
mod row;
pub mod text;

// Public re-exports - core types
pub use error::{ParseTableError, TableError};
pub use row::{Row, Slot};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use crate::cover::Cube;

/// The value an output table returns when its expression is true
///
/// The common single-output case uses `Bool(true)`: the function returns
/// `true` exactly where the synthesized expression holds. Literal outputs
/// carry arbitrary source text (`"3"`, `"'active'"`) returned verbatim by
/// the generated code.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputValue {
    /// A boolean return value
    Bool(bool),
    /// Arbitrary return value source text
    Literal(Arc<str>),
}

impl OutputValue {
    /// Create a literal output value from source text
    pub fn literal(text: &str) -> Self {
        OutputValue::Literal(Arc::from(text))
    }
}

impl fmt::Display for OutputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputValue::Bool(value) => write!(f, "{}", value),
            OutputValue::Literal(text) => write!(f, "{}", text),
        }
    }
}

/// A condition specification under construction
///
/// Rows are added one at a time (or in bulk from the
/// [`table!`](crate::table!) macro) and contribute to one named output
/// each; the default output is `Bool(true)`, matching a plain boolean
/// function. Insertion order is irrelevant: normalization canonicalizes it.
///
/// # Examples
///
/// ```
/// use boolsynth::{Conditions, OutputValue, Row};
///
/// let mut cond = Conditions::new();
/// cond.add(Row::implicit(&[true, true]));
/// cond.add_for(OutputValue::literal("3"), Row::explicit(&[false, true], true));
/// assert_eq!(cond.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conditions {
    rows: Vec<(OutputValue, Row)>,
}

impl Conditions {
    /// Create an empty condition specification
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row for the default `Bool(true)` output
    pub fn add(&mut self, row: Row) {
        self.add_for(OutputValue::Bool(true), row);
    }

    /// Add a row for a named output
    pub fn add_for(&mut self, output: OutputValue, row: Row) {
        self.rows.push((output, row));
    }

    /// Add several rows for the default `Bool(true)` output
    pub fn add_all(&mut self, rows: Vec<Row>) {
        for row in rows {
            self.add(row);
        }
    }

    /// Add several rows for a named output
    pub fn add_all_for(&mut self, output: OutputValue, rows: Vec<Row>) {
        for row in rows {
            self.add_for(output.clone(), row);
        }
    }

    /// Number of rows added so far
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no rows have been added
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn rows(&self) -> &[(OutputValue, Row)] {
        &self.rows
    }
}

/// Rows declared with the `table!` macro feed the default output
impl From<Vec<Row>> for Conditions {
    fn from(rows: Vec<Row>) -> Self {
        let mut cond = Conditions::new();
        cond.add_all(rows);
        cond
    }
}

/// Per-output normalized rows
#[derive(Clone, Debug)]
struct OutputRows {
    /// Input arity shared by every row
    arity: usize,
    /// Which positions carry guard predicates (established by the first
    /// guarded row, `None` for plain tables)
    guard_layout: Option<Vec<bool>>,
    /// Canonically ordered, deduplicated rows
    rows: Vec<Row>,
}

/// A normalized, validated condition table
///
/// Maps each output value to its rows. Built once per solve from a
/// [`Conditions`] value and immutable afterwards.
#[derive(Clone, Debug)]
pub struct ConditionTable {
    outputs: BTreeMap<OutputValue, OutputRows>,
}

impl ConditionTable {
    /// Normalize a condition specification
    ///
    /// Validates row arity and guard layout per output, canonicalizes row
    /// order, and rejects contradictory declarations. No partial table is
    /// produced on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolsynth::{ConditionTable, Conditions, Row};
    ///
    /// let mut cond = Conditions::new();
    /// cond.add(Row::explicit(&[true, true], true));
    /// cond.add(Row::explicit(&[true, true], false));
    ///
    /// let err = ConditionTable::from_conditions(&cond).unwrap_err();
    /// assert!(err.is_contradiction());
    /// ```
    pub fn from_conditions(conditions: &Conditions) -> Result<Self, TableError> {
        let mut outputs: BTreeMap<OutputValue, OutputRows> = BTreeMap::new();

        for (output, row) in conditions.rows() {
            if row.arity() == 0 {
                return Err(TableError::EmptyRow {
                    output: output.clone(),
                });
            }

            let entry = outputs.entry(output.clone()).or_insert_with(|| OutputRows {
                arity: row.arity(),
                guard_layout: None,
                rows: Vec::new(),
            });

            if row.arity() != entry.arity {
                return Err(TableError::ArityMismatch {
                    output: output.clone(),
                    expected: entry.arity,
                    found: row.arity(),
                });
            }

            if row.is_guarded() {
                let layout = row.guard_positions();
                match &entry.guard_layout {
                    None => entry.guard_layout = Some(layout),
                    Some(existing) => {
                        if let Some(position) =
                            existing.iter().zip(layout.iter()).position(|(a, b)| a != b)
                        {
                            return Err(TableError::GuardLayoutMismatch {
                                output: output.clone(),
                                position,
                            });
                        }
                    }
                }
            }

            entry.rows.push(row.clone());
        }

        // Canonicalize: sort rows by their encoded combination then output,
        // drop exact logical duplicates, and reject contradictions
        for (output, entry) in &mut outputs {
            entry
                .rows
                .sort_by(|a, b| a.minterm().cmp(&b.minterm()).then(a.output().cmp(&b.output())));
            entry
                .rows
                .dedup_by(|a, b| a.minterm() == b.minterm() && a.output() == b.output());

            let mut declared: BTreeMap<Cube, bool> = BTreeMap::new();
            for row in &entry.rows {
                let minterm = row.minterm();
                if let Some(&earlier) = declared.get(&minterm) {
                    if earlier != row.output() {
                        return Err(TableError::Contradiction {
                            output: output.clone(),
                            pattern: Arc::from(minterm.pattern().as_str()),
                        });
                    }
                } else {
                    declared.insert(minterm, row.output());
                }
            }
        }

        Ok(ConditionTable { outputs })
    }

    /// The declared output values, in deterministic order
    pub fn outputs(&self) -> impl Iterator<Item = &OutputValue> {
        self.outputs.keys()
    }

    /// Input arity of one output's table
    pub fn arity(&self, output: &OutputValue) -> Option<usize> {
        self.outputs.get(output).map(|entry| entry.arity)
    }

    /// Number of declared outputs
    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// The on-set of one output: minterms of every row declared true
    ///
    /// Rows with a false output were consumed by contradiction checking and
    /// are dropped here; everything not enumerated is implicitly false.
    pub(crate) fn on_set(&self, output: &OutputValue) -> BTreeSet<Cube> {
        self.outputs
            .get(output)
            .map(|entry| {
                entry
                    .rows
                    .iter()
                    .filter(|row| row.output())
                    .map(Row::minterm)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Reconstruct the effective identifier list for one output
    ///
    /// Plain tables use the declared input names directly (and require one
    /// name per position). Guarded tables rebuild the list position by
    /// position from a representative guarded row: bound positions consume
    /// the next declared name, guard positions contribute their predicate
    /// text.
    pub(crate) fn identifiers(
        &self,
        output: &OutputValue,
        declared: &[&str],
    ) -> Result<Vec<Arc<str>>, TableError> {
        let entry = match self.outputs.get(output) {
            Some(entry) => entry,
            None => return Ok(declared.iter().map(|s| Arc::from(*s)).collect()),
        };

        let representative = entry.rows.iter().find(|row| row.is_guarded());
        let slots = match representative {
            Some(Row::Guarded { slots, .. }) => slots,
            _ => {
                // Plain table: declared names map one to one
                if declared.len() != entry.arity {
                    return Err(TableError::IdentifierCountMismatch {
                        output: output.clone(),
                        expected: entry.arity,
                        found: declared.len(),
                    });
                }
                return Ok(declared.iter().map(|s| Arc::from(*s)).collect());
            }
        };

        let bound = slots.iter().filter(|slot| !slot.is_guard()).count();
        if declared.len() < bound {
            return Err(TableError::IdentifierCountMismatch {
                output: output.clone(),
                expected: bound,
                found: declared.len(),
            });
        }

        let mut names = Vec::with_capacity(slots.len());
        let mut next_input = 0;
        for slot in slots {
            match slot {
                Slot::Bound(_) => {
                    names.push(Arc::from(declared[next_input]));
                    next_input += 1;
                }
                Slot::Guard(text) => names.push(Arc::clone(text)),
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests;
