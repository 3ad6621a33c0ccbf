//! Error types for table construction and normalization

use std::fmt;
use std::io;
use std::sync::Arc;

use super::OutputValue;

/// Errors detected while normalizing a condition specification
///
/// Validation runs before any minimization; no partial result is produced
/// when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A row's arity doesn't match the other rows for the same output
    ArityMismatch {
        /// The output the row was destined for
        output: OutputValue,
        /// The arity established by earlier rows
        expected: usize,
        /// The arity of the offending row
        found: usize,
    },
    /// A row with no input positions
    EmptyRow {
        /// The output the row was destined for
        output: OutputValue,
    },
    /// Guarded rows for one output disagree on which positions are guards
    GuardLayoutMismatch {
        /// The output the rows were destined for
        output: OutputValue,
        /// The first position where the layouts disagree
        position: usize,
    },
    /// The declared input names don't fit the table's arity
    IdentifierCountMismatch {
        /// The output being solved
        output: OutputValue,
        /// The number of identifiers the table requires
        expected: usize,
        /// The number of input names supplied
        found: usize,
    },
    /// The same input combination is declared both true and false
    Contradiction {
        /// The output carrying the contradiction
        output: OutputValue,
        /// The encoded pattern of the contradictory combination
        pattern: Arc<str>,
    },
}

impl TableError {
    /// True for contradiction errors
    pub fn is_contradiction(&self) -> bool {
        matches!(self, TableError::Contradiction { .. })
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ArityMismatch {
                output,
                expected,
                found,
            } => write!(
                f,
                "Row for output {} has {} inputs, but earlier rows have {}",
                output, found, expected
            ),
            TableError::EmptyRow { output } => {
                write!(f, "Row for output {} has no input positions", output)
            }
            TableError::GuardLayoutMismatch { output, position } => write!(
                f,
                "Rows for output {} disagree at position {}: guard predicates must occupy \
                 the same positions in every row",
                output, position
            ),
            TableError::IdentifierCountMismatch {
                output,
                expected,
                found,
            } => write!(
                f,
                "Output {} requires {} input names, got {}",
                output, expected, found
            ),
            TableError::Contradiction { output, pattern } => write!(
                f,
                "Input combination {} is declared both true and false for output {}",
                pattern, output
            ),
        }
    }
}

impl std::error::Error for TableError {}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors that can occur when parsing the table text format
///
/// This error type is returned by [`parse_table`](super::text::parse_table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTableError {
    /// A malformed line in the input
    InvalidLine {
        /// 1-indexed line number
        line: usize,
        /// What went wrong
        message: Arc<str>,
    },
    /// The input declared no `.i` header
    MissingInputs,
    /// The input declared no `.o` header
    MissingOutputs,
}

impl fmt::Display for ParseTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTableError::InvalidLine { line, message } => {
                write!(f, "Line {}: {}", line, message)
            }
            ParseTableError::MissingInputs => {
                write!(f, "Table text is missing the '.i' input declaration")
            }
            ParseTableError::MissingOutputs => {
                write!(f, "Table text is missing the '.o' output declaration")
            }
        }
    }
}

impl std::error::Error for ParseTableError {}

impl From<ParseTableError> for io::Error {
    fn from(err: ParseTableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
