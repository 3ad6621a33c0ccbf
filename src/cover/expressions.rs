//! Translation from covers to boolean expressions

use super::error::CoverError;
use super::{Cover, Cube, Term};
use crate::expression::BoolExpr;

impl Cover {
    /// Translate this cover into a boolean expression
    ///
    /// `identifiers` supplies one name (or guard predicate text) per input
    /// position. Within a term, positions set to 1 become positive literals
    /// and positions set to 0 become negated literals, combined by AND;
    /// don't-care positions are omitted. Terms combine across the cover by
    /// OR, in the cover's deterministic term order. XOR terms render as a
    /// single XOR node over the pair's two identifiers.
    ///
    /// An empty cover yields constant false; a cover containing an
    /// all-wildcard cube collapses to constant true.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolsynth::{minimize, Cube, SolverConfig};
    /// use std::collections::BTreeSet;
    ///
    /// let minterms: BTreeSet<Cube> =
    ///     [Cube::from_bools(&[true, true])].into_iter().collect();
    /// let cover = minimize(2, &minterms, &SolverConfig::default()).unwrap();
    ///
    /// let expr = cover.to_expr(&["a", "b"]).unwrap();
    /// assert_eq!(expr.to_string(), "a * b");
    /// ```
    pub fn to_expr<S: AsRef<str>>(&self, identifiers: &[S]) -> Result<BoolExpr, CoverError> {
        if identifiers.len() != self.width() {
            return Err(CoverError::IdentifierCountMismatch {
                expected: self.width(),
                found: identifiers.len(),
            });
        }

        if self.is_empty() {
            return Ok(BoolExpr::constant(false));
        }
        if self.is_constant_true() {
            return Ok(BoolExpr::constant(true));
        }

        let terms: Vec<BoolExpr> = self
            .terms()
            .iter()
            .map(|term| match term {
                Term::Cube(cube) => cube_expr(cube, identifiers),
                Term::Xor(a, _) => xor_expr(a, identifiers),
            })
            .collect();

        Ok(terms
            .into_iter()
            .reduce(|acc, t| acc.or(&t))
            .expect("non-empty cover produced no terms"))
    }
}

/// Build the AND of a cube's literals in position order
fn cube_expr<S: AsRef<str>>(cube: &Cube, identifiers: &[S]) -> BoolExpr {
    let literals: Vec<BoolExpr> = cube
        .bits()
        .iter()
        .enumerate()
        .filter_map(|(i, bit)| {
            bit.map(|polarity| {
                let var = BoolExpr::variable(identifiers[i].as_ref());
                if polarity {
                    var
                } else {
                    var.not()
                }
            })
        })
        .collect();

    literals
        .into_iter()
        .reduce(|acc, l| acc.and(&l))
        .expect("all-wildcard cube in a non-constant cover")
}

/// Build the XOR of a folded pair's two determined positions
///
/// Both cubes of the pair determine the same two positions, so either
/// member identifies them.
fn xor_expr<S: AsRef<str>>(cube: &Cube, identifiers: &[S]) -> BoolExpr {
    let mut positions = cube
        .bits()
        .iter()
        .enumerate()
        .filter_map(|(i, bit)| bit.map(|_| i));
    let first = positions.next().expect("XOR pair with no determined position");
    let second = positions.next().expect("XOR pair with one determined position");

    BoolExpr::variable(identifiers[first].as_ref())
        .xor(&BoolExpr::variable(identifiers[second].as_ref()))
}
