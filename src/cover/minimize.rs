//! Quine-McCluskey minimization
//!
//! Computes a minimal prime-implicant cover from a set of minterms. The
//! classic algorithm: merge adjacent minterms round by round until nothing
//! merges, collect the cubes that never combined as prime implicants, then
//! select essential implicants followed by a greedy set cover over the
//! remaining minterms.
//!
//! Cost is exponential in the number of inputs in the worst case. Callers
//! are expected to keep arity small (the practical ceiling is around 16-20
//! inputs); no hard limit is imposed.

use std::collections::{BTreeMap, BTreeSet};

use super::cubes::Cube;
use super::error::MinimizeError;
use super::{Cover, Term};
use crate::SolverConfig;

/// Compute a minimal prime-implicant cover for the given on-set
///
/// `width` is the number of input positions; every member of `minterms`
/// must be a fully determined cube of that width. Everything not listed is
/// treated as false. An empty on-set yields an empty cover (constant
/// false); a complete on-set collapses to the single all-wildcard cube
/// (constant true).
///
/// Selection is deterministic: minterms covered by exactly one prime
/// implicant force that implicant first; remaining minterms are covered
/// greedily by the implicant matching the most uncovered minterms, ties
/// broken by fewer determined positions and then by ascending pattern
/// order. The resulting terms are emitted in descending lexicographic
/// pattern order.
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
/// assert_eq!(cover.num_terms(), 1);
/// ```
pub fn minimize(
    width: usize,
    minterms: &BTreeSet<Cube>,
    config: &SolverConfig,
) -> Result<Cover, MinimizeError> {
    for minterm in minterms {
        if minterm.width() != width {
            return Err(MinimizeError::WidthMismatch {
                expected: width,
                found: minterm.width(),
            });
        }
        if !minterm.is_minterm() {
            return Err(MinimizeError::NotAMinterm {
                pattern: minterm.pattern(),
            });
        }
    }

    if minterms.is_empty() {
        return Ok(Cover::empty(width));
    }

    let primes = prime_implicants(minterms);
    let selected = select_cover(&primes, minterms);

    let terms = if config.use_xor {
        fold_xor_pairs(selected)
    } else {
        selected.into_iter().map(Term::Cube).collect()
    };

    Ok(Cover::from_terms(width, terms))
}

/// Derive all prime implicants by repeated merging
///
/// Cubes are grouped by population count; only adjacent groups can contain
/// mergeable pairs. A cube that takes part in any merge is marked combined;
/// cubes that survive every round uncombined (original minterms included)
/// are the prime implicants.
fn prime_implicants(minterms: &BTreeSet<Cube>) -> BTreeSet<Cube> {
    let mut primes = BTreeSet::new();
    let mut current = minterms.clone();

    while !current.is_empty() {
        let mut groups: BTreeMap<usize, Vec<&Cube>> = BTreeMap::new();
        for cube in &current {
            groups.entry(cube.weight()).or_default().push(cube);
        }

        let mut combined: BTreeSet<Cube> = BTreeSet::new();
        let mut next: BTreeSet<Cube> = BTreeSet::new();

        for (&weight, group) in &groups {
            if let Some(adjacent) = groups.get(&(weight + 1)) {
                for a in group {
                    for b in adjacent {
                        if let Some(merged) = a.try_merge(b) {
                            combined.insert((*a).clone());
                            combined.insert((*b).clone());
                            next.insert(merged);
                        }
                    }
                }
            }
        }

        for cube in current {
            if !combined.contains(&cube) {
                primes.insert(cube);
            }
        }
        current = next;
    }

    primes
}

/// Select a covering subset of the prime implicants
///
/// Essential implicants first, then greedy cover. Returns the selection in
/// descending lexicographic pattern order.
fn select_cover(primes: &BTreeSet<Cube>, minterms: &BTreeSet<Cube>) -> Vec<Cube> {
    let prime_list: Vec<&Cube> = primes.iter().collect();
    let minterm_list: Vec<&Cube> = minterms.iter().collect();

    // Coverage relation: for each minterm, the primes that match it
    let covering: Vec<Vec<usize>> = minterm_list
        .iter()
        .map(|&m| {
            prime_list
                .iter()
                .enumerate()
                .filter_map(|(p, prime)| prime.covers(m).then_some(p))
                .collect()
        })
        .collect();

    let mut selected: BTreeSet<usize> = BTreeSet::new();
    let mut uncovered: BTreeSet<usize> = (0..minterm_list.len()).collect();

    // Essential prime implicants: a minterm with a single matching prime
    // forces that prime into the cover
    for covers in &covering {
        if let [only] = covers.as_slice() {
            selected.insert(*only);
        }
    }
    for &p in &selected {
        uncovered.retain(|&m| !covering[m].contains(&p));
    }

    // Greedy cover for whatever remains: most uncovered minterms matched,
    // ties broken by fewer determined positions, then ascending pattern
    // order (prime_list is already sorted, so the first candidate wins ties)
    while !uncovered.is_empty() {
        let mut best: Option<(usize, usize, usize)> = None; // (index, count, literals)
        for (p, prime) in prime_list.iter().enumerate() {
            if selected.contains(&p) {
                continue;
            }
            let count = uncovered.iter().filter(|&&m| covering[m].contains(&p)).count();
            if count == 0 {
                continue;
            }
            let literals = prime.literal_count();
            let better = match best {
                None => true,
                Some((_, best_count, best_literals)) => {
                    count > best_count || (count == best_count && literals < best_literals)
                }
            };
            if better {
                best = Some((p, count, literals));
            }
        }

        // Every minterm is matched by at least one prime by construction
        let (p, _, _) = best.expect("uncovered minterm with no matching prime implicant");
        selected.insert(p);
        uncovered.retain(|&m| !covering[m].contains(&p));
    }

    let mut result: Vec<Cube> = selected.iter().map(|&p| prime_list[p].clone()).collect();
    result.sort_by(|a, b| b.cmp(a));
    result
}

/// Fold complementary cube pairs into XOR terms
///
/// A pair folds when both cubes determine exactly the same two positions
/// with the complementary `10`/`01` values. Each cube participates in at
/// most one pair; everything else passes through as a plain term. Coverage
/// is unchanged, only the rendering.
fn fold_xor_pairs(cubes: Vec<Cube>) -> Vec<Term> {
    let mut used = vec![false; cubes.len()];
    let mut terms = Vec::with_capacity(cubes.len());

    for i in 0..cubes.len() {
        if used[i] {
            continue;
        }
        let partner = (i + 1..cubes.len())
            .find(|&j| !used[j] && is_xor_pair(&cubes[i], &cubes[j]));
        match partner {
            Some(j) => {
                used[i] = true;
                used[j] = true;
                terms.push(Term::Xor(cubes[i].clone(), cubes[j].clone()));
            }
            None => {
                used[i] = true;
                terms.push(Term::Cube(cubes[i].clone()));
            }
        }
    }

    terms
}

/// Check for the complementary `10`/`01` shape over the same two positions
///
/// The `11`/`00` pair is complementary too, but it is the negated form and
/// does not fold; only the true-XOR shape is recognized.
fn is_xor_pair(a: &Cube, b: &Cube) -> bool {
    if a.width() != b.width() || a.literal_count() != 2 || b.literal_count() != 2 {
        return false;
    }

    let mut values = Vec::with_capacity(2);
    for (x, y) in a.bits().iter().zip(b.bits().iter()) {
        match (x, y) {
            (None, None) => {}
            (Some(p), Some(q)) if p != q => values.push(*p),
            // Same two positions must be determined in both cubes, with
            // opposite values; anything else is not the XOR shape
            _ => return false,
        }
    }
    // One position high, one low in each cube
    values == [true, false] || values == [false, true]
}
