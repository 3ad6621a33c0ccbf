//! Guard predicates: mixing booleans with free-form conditions
//!
//! The survival rule of Conway's Game of Life, declared as examples. The
//! neighbour-count comparison is not a boolean input of the function, so it
//! rides along as guard predicate text and surfaces verbatim in the
//! synthesized expression.

use boolsynth::{render, solve, Conditions, Row, Slot, SolverConfig};

fn main() -> Result<(), boolsynth::SolveError> {
    let mut cond = Conditions::new();
    // A live cell with two or three live neighbours survives
    cond.add(Row::guarded(
        vec![Slot::Bound(true), Slot::guard("sum(neighbors) in (2, 3)")],
        true,
    ));
    // A dead cell doesn't, even with the right neighbour count
    cond.add(Row::guarded(
        vec![Slot::Bound(false), Slot::guard("sum(neighbors) in (2, 3)")],
        false,
    ));

    let solution = solve(&cond, &["alive"], &SolverConfig::default())?;
    println!(
        "survives = {}",
        render::python(&solution.outputs[0].expression)
    );

    Ok(())
}
