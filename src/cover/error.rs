//! Error types for cover operations

use std::fmt;
use std::io;

/// Invalid character encountered while parsing a cube pattern
///
/// Pattern positions must be `1` (high), `0` (low), or `-` (don't care).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPatternError {
    /// The invalid character that was encountered
    pub value: char,
    /// The position in the pattern where it occurred
    pub position: usize,
}

impl fmt::Display for InvalidPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid pattern character {:?} at position {}. Expected '0' (low), '1' (high), or '-' (don't care).",
            self.value, self.position
        )
    }
}

impl std::error::Error for InvalidPatternError {}

impl From<InvalidPatternError> for io::Error {
    fn from(err: InvalidPatternError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur during minimization
///
/// This error type is returned by [`minimize`](crate::minimize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// A minterm's width doesn't match the declared input width
    WidthMismatch {
        /// The declared width
        expected: usize,
        /// The width of the offending minterm
        found: usize,
    },
    /// An input cube has don't-care positions and is not a minterm
    NotAMinterm {
        /// The encoded pattern of the offending cube
        pattern: String,
    },
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::WidthMismatch { expected, found } => write!(
                f,
                "Minterm width {} doesn't match declared input width {}",
                found, expected
            ),
            MinimizeError::NotAMinterm { pattern } => write!(
                f,
                "Cube '{}' has don't-care positions; minimization input must be minterms",
                pattern
            ),
        }
    }
}

impl std::error::Error for MinimizeError {}

impl From<MinimizeError> for io::Error {
    fn from(err: MinimizeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors that can occur when translating a cover to an expression
///
/// This error type is returned by `Cover::to_expr()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// The identifier list length doesn't match the cover width
    IdentifierCountMismatch {
        /// The cover width
        expected: usize,
        /// The number of identifiers supplied
        found: usize,
    },
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::IdentifierCountMismatch { expected, found } => write!(
                f,
                "Cover of width {} requires {} identifiers, got {}",
                expected, expected, found
            ),
        }
    }
}

impl std::error::Error for CoverError {}

impl From<CoverError> for io::Error {
    fn from(err: CoverError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
