//! Cube types for boolean function minimization
//!
//! This module provides the [`Cube`] type, a product term over a fixed
//! number of boolean inputs. Each position is tri-state:
//! - `Some(true)` - input must be 1
//! - `Some(false)` - input must be 0
//! - `None` - don't care (the input does not affect this term)
//!
//! A cube with no don't-care positions is a *minterm*: one concrete input
//! assignment.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::error::InvalidPatternError;

/// A cube (product term) in a cover
///
/// Cubes are immutable; merging produces a new cube. The encoded pattern
/// uses `1`, `0`, and `-` per position, e.g. `"1-0"` for a three-input cube
/// whose middle input is don't-care.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    bits: Arc<[Option<bool>]>,
}

impl Cube {
    /// Create a cube from tri-state values
    pub fn new(bits: &[Option<bool>]) -> Self {
        Cube { bits: bits.into() }
    }

    /// Create a minterm from concrete boolean values
    ///
    /// # Examples
    ///
    /// ```
    /// use boolsynth::Cube;
    ///
    /// let m = Cube::from_bools(&[true, false]);
    /// assert_eq!(m.pattern(), "10");
    /// assert!(m.is_minterm());
    /// ```
    pub fn from_bools(values: &[bool]) -> Self {
        let bits: Vec<Option<bool>> = values.iter().map(|&v| Some(v)).collect();
        Cube { bits: bits.into() }
    }

    /// Parse a cube from its encoded pattern (`1`, `0`, `-` per position)
    ///
    /// # Examples
    ///
    /// ```
    /// use boolsynth::Cube;
    ///
    /// let cube = Cube::from_pattern("1-0").unwrap();
    /// assert_eq!(cube.bits(), &[Some(true), None, Some(false)]);
    ///
    /// assert!(Cube::from_pattern("1x0").is_err());
    /// ```
    pub fn from_pattern(pattern: &str) -> Result<Self, InvalidPatternError> {
        let bits: Vec<Option<bool>> = pattern
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '1' => Ok(Some(true)),
                '0' => Ok(Some(false)),
                '-' => Ok(None),
                value => Err(InvalidPatternError { value, position }),
            })
            .collect::<Result<_, _>>()?;
        Ok(Cube { bits: bits.into() })
    }

    /// Create the all-wildcard cube of the given width (matches everything)
    pub fn universe(width: usize) -> Self {
        Cube {
            bits: vec![None; width].into(),
        }
    }

    /// Number of input positions
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// The tri-state values of this cube
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// Number of positions set to 1 (population count, used for grouping)
    pub fn weight(&self) -> usize {
        self.bits.iter().filter(|b| **b == Some(true)).count()
    }

    /// Number of determined (non-wildcard) positions
    pub fn literal_count(&self) -> usize {
        self.bits.iter().filter(|b| b.is_some()).count()
    }

    /// True if every position is determined
    pub fn is_minterm(&self) -> bool {
        self.bits.iter().all(|b| b.is_some())
    }

    /// True if every position is don't-care
    pub fn is_universe(&self) -> bool {
        self.bits.iter().all(|b| b.is_none())
    }

    /// Attempt to merge with another cube
    ///
    /// Two cubes merge iff they have equal width, identical don't-care
    /// positions, and exactly one differing determined position. The merged
    /// cube wildcards that position.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolsynth::Cube;
    ///
    /// let a = Cube::from_pattern("10").unwrap();
    /// let b = Cube::from_pattern("11").unwrap();
    /// assert_eq!(a.try_merge(&b).unwrap().pattern(), "1-");
    ///
    /// // Differ in two positions: no merge
    /// let c = Cube::from_pattern("01").unwrap();
    /// assert!(a.try_merge(&c).is_none());
    /// ```
    pub fn try_merge(&self, other: &Cube) -> Option<Cube> {
        if self.width() != other.width() {
            return None;
        }

        let mut differing = None;
        for (i, (a, b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            match (a, b) {
                (Some(x), Some(y)) if x != y => {
                    if differing.is_some() {
                        return None; // more than one differing position
                    }
                    differing = Some(i);
                }
                (Some(_), Some(_)) => {}
                (None, None) => {}
                // Wildcard layout must be identical
                _ => return None,
            }
        }

        let position = differing?;
        let mut bits = self.bits.to_vec();
        bits[position] = None;
        Some(Cube { bits: bits.into() })
    }

    /// Check whether this cube matches the given minterm
    ///
    /// Every determined position must agree; wildcards match anything.
    pub fn covers(&self, minterm: &Cube) -> bool {
        self.width() == minterm.width()
            && self
                .bits
                .iter()
                .zip(minterm.bits.iter())
                .all(|(a, b)| a.is_none() || a == b)
    }

    /// Encode this cube as a pattern string
    pub fn pattern(&self) -> String {
        self.bits
            .iter()
            .map(|b| match b {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            })
            .collect()
    }

    /// Ordering rank of one position, matching the byte order of the
    /// encoded pattern characters (`-` < `0` < `1`)
    fn rank(bit: Option<bool>) -> u8 {
        match bit {
            None => 0,
            Some(false) => 1,
            Some(true) => 2,
        }
    }
}

/// Cubes order by width, then lexicographically by their encoded pattern
/// (`-` < `0` < `1`). This is the documented deterministic order used
/// throughout minimization and cover construction.
impl Ord for Cube {
    fn cmp(&self, other: &Self) -> Ordering {
        self.width().cmp(&other.width()).then_with(|| {
            for (a, b) in self.bits.iter().zip(other.bits.iter()) {
                match Cube::rank(*a).cmp(&Cube::rank(*b)) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                }
            }
            Ordering::Equal
        })
    }
}

impl PartialOrd for Cube {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())
    }
}
