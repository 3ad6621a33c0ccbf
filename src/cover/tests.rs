//! Tests for the cover module

use super::*;
use crate::SolverConfig;
use std::collections::BTreeSet;

fn minterms(patterns: &[&str]) -> BTreeSet<Cube> {
    patterns
        .iter()
        .map(|p| Cube::from_pattern(p).unwrap())
        .collect()
}

fn cover_patterns(cover: &Cover) -> Vec<String> {
    cover
        .terms()
        .iter()
        .flat_map(|t| t.cubes().map(Cube::pattern))
        .collect()
}

#[test]
fn test_cube_weight_and_literals() {
    let cube = Cube::from_pattern("1-0").unwrap();
    assert_eq!(cube.weight(), 1);
    assert_eq!(cube.literal_count(), 2);
    assert!(!cube.is_minterm());
    assert!(!cube.is_universe());
    assert!(Cube::universe(3).is_universe());
}

#[test]
fn test_cube_merge() {
    let a = Cube::from_pattern("110").unwrap();
    let b = Cube::from_pattern("111").unwrap();
    assert_eq!(a.try_merge(&b).unwrap().pattern(), "11-");

    // Merge is symmetric
    assert_eq!(b.try_merge(&a).unwrap().pattern(), "11-");

    // Wildcard layout must match
    let c = Cube::from_pattern("1-0").unwrap();
    let d = Cube::from_pattern("11-").unwrap();
    assert!(c.try_merge(&d).is_none());

    // More than one differing position: no merge
    let e = Cube::from_pattern("100").unwrap();
    assert!(b.try_merge(&e).is_none());

    // Width mismatch: no merge
    let f = Cube::from_pattern("11").unwrap();
    assert!(a.try_merge(&f).is_none());
}

#[test]
fn test_cube_covers() {
    let implicant = Cube::from_pattern("1-").unwrap();
    assert!(implicant.covers(&Cube::from_pattern("10").unwrap()));
    assert!(implicant.covers(&Cube::from_pattern("11").unwrap()));
    assert!(!implicant.covers(&Cube::from_pattern("01").unwrap()));
}

#[test]
fn test_cube_ordering_matches_pattern_bytes() {
    let mut cubes = vec![
        Cube::from_pattern("1-").unwrap(),
        Cube::from_pattern("01").unwrap(),
        Cube::from_pattern("-1").unwrap(),
        Cube::from_pattern("10").unwrap(),
    ];
    cubes.sort();
    let patterns: Vec<String> = cubes.iter().map(Cube::pattern).collect();

    let mut expected: Vec<String> = patterns.clone();
    expected.sort();
    assert_eq!(patterns, expected);
}

#[test]
fn test_minimize_and() {
    let cover = minimize(2, &minterms(&["11"]), &SolverConfig::default()).unwrap();
    assert_eq!(cover_patterns(&cover), vec!["11"]);
}

#[test]
fn test_minimize_or() {
    let cover = minimize(2, &minterms(&["11", "10", "01"]), &SolverConfig::default()).unwrap();
    assert_eq!(cover_patterns(&cover), vec!["1-", "-1"]);
}

#[test]
fn test_minimize_xor() {
    // XOR cannot be merged
    let cover = minimize(2, &minterms(&["10", "01"]), &SolverConfig::default()).unwrap();
    assert_eq!(cover_patterns(&cover), vec!["10", "01"]);
}

#[test]
fn test_minimize_empty() {
    let cover = minimize(2, &BTreeSet::new(), &SolverConfig::default()).unwrap();
    assert!(cover.is_empty());
    assert_eq!(cover.width(), 2);
}

#[test]
fn test_minimize_complete_on_set_collapses() {
    let cover = minimize(
        2,
        &minterms(&["00", "01", "10", "11"]),
        &SolverConfig::default(),
    )
    .unwrap();
    assert_eq!(cover_patterns(&cover), vec!["--"]);
    assert!(cover.is_constant_true());
}

#[test]
fn test_minimize_three_inputs() {
    // Classic textbook set: f(a,b,c) with on-set {0,1,2,5,6,7}
    let cover = minimize(
        3,
        &minterms(&["000", "001", "010", "101", "110", "111"]),
        &SolverConfig::default(),
    )
    .unwrap();

    // Every minterm stays covered and none outside the on-set sneak in
    let expanded = cover.minterms();
    assert_eq!(expanded, minterms(&["000", "001", "010", "101", "110", "111"]));
}

#[test]
fn test_minimize_rejects_bad_input() {
    let err = minimize(3, &minterms(&["11"]), &SolverConfig::default()).unwrap_err();
    assert_eq!(
        err,
        MinimizeError::WidthMismatch {
            expected: 3,
            found: 2
        }
    );

    let err = minimize(2, &minterms(&["1-"]), &SolverConfig::default()).unwrap_err();
    assert!(matches!(err, MinimizeError::NotAMinterm { .. }));
}

#[test]
fn test_essential_implicants_selected() {
    // on-set {4,5,6,7,1,3}: 1-- and --1 are the primes and both essential
    let on_set = minterms(&["100", "101", "110", "111", "001", "011"]);
    let cover = minimize(3, &on_set, &SolverConfig::default()).unwrap();

    let patterns = cover_patterns(&cover);
    assert!(patterns.contains(&"1--".to_string()));
    assert_eq!(cover.minterms(), on_set);
}

#[test]
fn test_minimize_deterministic() {
    let on_set = minterms(&["000", "010", "011", "101", "111"]);
    let first = minimize(3, &on_set, &SolverConfig::default()).unwrap();
    for _ in 0..10 {
        let again = minimize(3, &on_set, &SolverConfig::default()).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_minimize_idempotent() {
    // Re-minimizing the minterms recoverable from a minimized cover yields
    // an equivalent cover
    let on_set = minterms(&["11", "10", "01"]);
    let cover = minimize(2, &on_set, &SolverConfig::default()).unwrap();
    let again = minimize(2, &cover.minterms(), &SolverConfig::default()).unwrap();
    assert_eq!(cover, again);
}

#[test]
fn test_minimize_exhaustive_soundness_and_totality() {
    // Every 2-input boolean function: the cover must match the on-set
    // exactly
    let all: Vec<Cube> = (0u64..4)
        .map(|v| Cube::from_bools(&[v >> 1 & 1 == 1, v & 1 == 1]))
        .collect();

    for selector in 0u64..16 {
        let on_set: BTreeSet<Cube> = all
            .iter()
            .enumerate()
            .filter_map(|(i, m)| (selector >> i & 1 == 1).then(|| m.clone()))
            .collect();

        let cover = minimize(2, &on_set, &SolverConfig::default()).unwrap();
        for minterm in &all {
            assert_eq!(
                cover.covers(minterm),
                on_set.contains(minterm),
                "selector {:04b}, minterm {}",
                selector,
                minterm
            );
        }
    }
}

#[test]
fn test_xor_folding() {
    let config = SolverConfig::new().with_xor();
    let cover = minimize(2, &minterms(&["10", "01"]), &config).unwrap();

    assert_eq!(cover.num_terms(), 1);
    assert!(matches!(cover.terms()[0], Term::Xor(_, _)));

    // Coverage is unchanged by folding
    assert_eq!(cover.minterms(), minterms(&["10", "01"]));
}

#[test]
fn test_xnor_pair_is_not_folded() {
    // 11/00 is the complementary pair of the *negated* XOR; it must stay
    // expanded
    let config = SolverConfig::new().with_xor();
    let cover = minimize(2, &minterms(&["11", "00"]), &config).unwrap();

    assert_eq!(cover.num_terms(), 2);
    assert!(cover
        .terms()
        .iter()
        .all(|t| matches!(t, Term::Cube(_))));
}

#[test]
fn test_xor_folding_with_shared_wildcards() {
    // Three inputs, XOR over the first two, third is don't-care in both
    let config = SolverConfig::new().with_xor();
    let on_set = minterms(&["100", "101", "010", "011"]);
    let cover = minimize(3, &on_set, &config).unwrap();

    assert_eq!(cover.num_terms(), 1);
    assert!(matches!(cover.terms()[0], Term::Xor(_, _)));
    assert_eq!(cover.minterms(), on_set);
}

#[test]
fn test_to_expr_and() {
    let cover = minimize(2, &minterms(&["11"]), &SolverConfig::default()).unwrap();
    let expr = cover.to_expr(&["a", "b"]).unwrap();
    assert_eq!(expr.to_string(), "a * b");
}

#[test]
fn test_to_expr_or() {
    let cover = minimize(2, &minterms(&["11", "10", "01"]), &SolverConfig::default()).unwrap();
    let expr = cover.to_expr(&["a", "b"]).unwrap();
    assert_eq!(expr.to_string(), "a + b");
}

#[test]
fn test_to_expr_xor_expanded() {
    let cover = minimize(2, &minterms(&["10", "01"]), &SolverConfig::default()).unwrap();
    let expr = cover.to_expr(&["a", "b"]).unwrap();
    assert_eq!(expr.to_string(), "a * ~b + ~a * b");
}

#[test]
fn test_to_expr_xor_folded() {
    let config = SolverConfig::new().with_xor();
    let cover = minimize(2, &minterms(&["10", "01"]), &config).unwrap();
    let expr = cover.to_expr(&["a", "b"]).unwrap();
    assert_eq!(expr.to_string(), "a ^ b");
}

#[test]
fn test_to_expr_constants() {
    let empty = Cover::empty(2);
    assert_eq!(
        empty.to_expr(&["a", "b"]).unwrap(),
        crate::BoolExpr::constant(false)
    );

    let full = minimize(
        1,
        &minterms(&["0", "1"]),
        &SolverConfig::default(),
    )
    .unwrap();
    assert_eq!(
        full.to_expr(&["a"]).unwrap(),
        crate::BoolExpr::constant(true)
    );
}

#[test]
fn test_to_expr_identifier_count_checked() {
    let cover = minimize(2, &minterms(&["11"]), &SolverConfig::default()).unwrap();
    let err = cover.to_expr(&["a"]).unwrap_err();
    assert_eq!(
        err,
        CoverError::IdentifierCountMismatch {
            expected: 2,
            found: 1
        }
    );
}
