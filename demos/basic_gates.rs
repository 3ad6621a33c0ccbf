//! Synthesize the classic two-input gates from example rows

use boolsynth::{render, solve, table, Conditions, Row, SolverConfig};

fn main() -> Result<(), boolsynth::SolveError> {
    let config = SolverConfig::default();

    // AND: one true row is enough
    let mut and_table = Conditions::new();
    and_table.add(Row::explicit(&[true, true], true));
    let solution = solve(&and_table, &["a", "b"], &config)?;
    println!("and: {}", render::python(&solution.outputs[0].expression));

    // OR: three true rows minimize down to two one-literal terms
    let or_table = Conditions::from(table! {
        (true, true),
        (true, false),
        (false, true),
    });
    let solution = solve(&or_table, &["a", "b"], &config)?;
    println!("or:  {}", render::python(&solution.outputs[0].expression));

    // XOR cannot be merged; with XOR folding enabled it renders compactly
    let xor_table = Conditions::from(table! {
        (true, false),
        (false, true),
    });
    let solution = solve(&xor_table, &["a", "b"], &config)?;
    println!("xor: {}", render::python(&solution.outputs[0].expression));

    let folding = SolverConfig::new().with_xor();
    let solution = solve(&xor_table, &["a", "b"], &folding)?;
    println!("xor (folded): {}", render::python(&solution.outputs[0].expression));

    Ok(())
}
