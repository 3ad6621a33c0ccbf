//! Cover types and minimization for boolean functions
//!
//! This module provides the [`Cover`] type (a sum-of-products representation
//! of a boolean function over tri-state cubes) and the Quine-McCluskey
//! [`minimize`] function that builds a minimal prime-implicant cover from a
//! set of minterms.

// Module declarations
mod cubes;
pub mod error;
mod expressions;
mod minimize;

// Public re-exports - core types
pub use cubes::Cube;
pub use error::{CoverError, InvalidPatternError, MinimizeError};
pub use minimize::minimize;

/// One term of a cover
///
/// Most terms are plain cubes. When XOR folding is enabled, a pair of
/// complementary cubes (the classic `10`/`01` shape over the same two
/// positions) is carried as a single [`Term::Xor`] so the translator can
/// render it compactly. Folding never changes which minterms are covered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    /// A product term
    Cube(Cube),
    /// A complementary cube pair rendered as XOR of the two determined
    /// positions
    Xor(Cube, Cube),
}

impl Term {
    /// The cubes carried by this term
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> {
        let (first, second) = match self {
            Term::Cube(cube) => (cube, None),
            Term::Xor(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }

    /// Check whether this term matches the given minterm
    pub fn covers(&self, minterm: &Cube) -> bool {
        self.cubes().any(|cube| cube.covers(minterm))
    }
}

/// A minimized sum-of-products cover
///
/// Produced by [`minimize`]; every declared minterm is matched by at least
/// one term, and every term is a prime implicant of the declared on-set.
/// Terms are kept in descending lexicographic order of their encoded
/// pattern, so the same logical input always yields the same cover.
///
/// # Examples
///
/// ```
/// use boolsynth::{minimize, Cube, SolverConfig};
/// use std::collections::BTreeSet;
///
/// let minterms: BTreeSet<Cube> = ["11", "10", "01"]
///     .iter()
///     .map(|s| Cube::from_pattern(s).unwrap())
///     .collect();
///
/// let cover = minimize(2, &minterms, &SolverConfig::default()).unwrap();
/// let patterns: Vec<String> = cover
///     .terms()
///     .iter()
///     .flat_map(|t| t.cubes().map(|c| c.pattern()))
///     .collect();
/// assert_eq!(patterns, vec!["1-", "-1"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cover {
    /// Number of input positions
    width: usize,
    /// Selected terms, in descending lexicographic pattern order
    terms: Vec<Term>,
}

impl Cover {
    /// Create a cover from pre-selected terms
    ///
    /// This is primarily for internal use; covers are normally produced by
    /// [`minimize`].
    pub(crate) fn from_terms(width: usize, terms: Vec<Term>) -> Self {
        Cover { width, terms }
    }

    /// Create an empty cover (represents constant false)
    pub fn empty(width: usize) -> Self {
        Cover {
            width,
            terms: Vec::new(),
        }
    }

    /// Number of input positions
    pub fn width(&self) -> usize {
        self.width
    }

    /// The selected terms
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Check if the cover is empty (represents constant false)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check if the cover collapses to constant true
    ///
    /// A cover containing an all-wildcard cube matches every input
    /// combination.
    pub fn is_constant_true(&self) -> bool {
        self.terms
            .iter()
            .any(|term| term.cubes().any(Cube::is_universe))
    }

    /// Check whether any term matches the given minterm
    pub fn covers(&self, minterm: &Cube) -> bool {
        self.terms.iter().any(|term| term.covers(minterm))
    }

    /// Enumerate every minterm matched by this cover
    ///
    /// Expands each cube's don't-care positions. Exponential in the number
    /// of wildcards; intended for tests and small covers.
    pub fn minterms(&self) -> std::collections::BTreeSet<Cube> {
        let mut result = std::collections::BTreeSet::new();
        for cube in self.terms.iter().flat_map(Term::cubes) {
            expand_cube(cube, &mut result);
        }
        result
    }
}

/// Insert every completion of `cube` into `out`
fn expand_cube(cube: &Cube, out: &mut std::collections::BTreeSet<Cube>) {
    let wildcards: Vec<usize> = cube
        .bits()
        .iter()
        .enumerate()
        .filter_map(|(i, b)| b.is_none().then_some(i))
        .collect();

    let mut bits = cube.bits().to_vec();
    for choice in 0u64..(1u64 << wildcards.len()) {
        for (k, &position) in wildcards.iter().enumerate() {
            bits[position] = Some(choice >> k & 1 == 1);
        }
        out.insert(Cube::new(&bits));
    }
}

#[cfg(test)]
mod tests;
