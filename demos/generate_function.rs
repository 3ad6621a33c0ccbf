//! Generate a complete function body from a truth table

use boolsynth::{codegen, solve, table, Conditions, OutputValue, Row, SolverConfig, Target};

fn main() -> Result<(), boolsynth::SolveError> {
    // A function returning 3 when exactly one input is set, with a
    // declared default for everything else
    let mut cond = Conditions::new();
    cond.add_all_for(
        OutputValue::literal("3"),
        table! {
            (true, false),
            (false, true),
        },
    );

    let config = SolverConfig::new().with_default(OutputValue::literal("0"));
    let solution = solve(&cond, &["a", "b"], &config)?;

    for target in [Target::Python, Target::Rust] {
        for line in codegen::implement_function("classify", &["a", "b"], &solution, target) {
            println!("{}", line);
        }
        println!();
    }

    Ok(())
}
