//! Boolsynth - Command Line Interface
//!
//! Reads a truth table file and prints the minimized expression for every
//! declared output, or a complete generated function per output.

use boolsynth::table::text::read_table_file;
use boolsynth::{codegen, solve, OutputValue, SolverConfig, Target};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum Emit {
    /// Print one minimized expression per output (default)
    Expr,
    /// Print a generated function per output
    Function,
}

#[derive(Debug, Clone, ValueEnum)]
enum Language {
    /// Python syntax (and/or/not)
    Python,
    /// Rust syntax (&&/||/!)
    Rust,
}

impl From<Language> for Target {
    fn from(val: Language) -> Self {
        match val {
            Language::Python => Target::Python,
            Language::Rust => Target::Rust,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "boolsynth")]
#[command(about = "Synthesize minimal boolean expressions from truth tables", long_about = None)]
#[command(version)]
struct Args {
    /// Input table file (required)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// What to emit
    #[arg(short = 'e', long = "emit", value_enum, default_value = "expr")]
    emit: Emit,

    /// Target syntax
    #[arg(short = 't', long = "target", value_enum, default_value = "python")]
    target: Language,

    /// Fold complementary implicant pairs into XOR terms
    #[arg(short = 'x', long = "xor")]
    xor: bool,
}

fn main() {
    let args = Args::parse();
    let target = Target::from(args.target);

    let table = match read_table_file(&args.input) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error reading table file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let mut config = SolverConfig::default();
    config.use_xor = args.xor;

    let solution = match solve(
        &table.conditions,
        &table
            .inputs
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>(),
        &config,
    ) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Error solving table: {}", e);
            process::exit(1);
        }
    };

    let params: Vec<&str> = table.inputs.iter().map(|s| s.as_ref()).collect();

    // Keep the file's output declaration order for printing
    for name in &table.outputs {
        let value = OutputValue::Literal(name.clone());
        let output = solution
            .outputs
            .iter()
            .find(|output| output.value == value);

        match args.emit {
            Emit::Expr => {
                let text = match output {
                    Some(output) => boolsynth::render::render(&output.expression, target),
                    None => boolsynth::render::constant(false, target).to_string(),
                };
                println!("{} = {}", name, text);
            }
            Emit::Function => {
                let lines = match output {
                    Some(output) => codegen::implement_predicate(
                        name,
                        &params,
                        &output.expression,
                        target,
                    ),
                    None => codegen::implement_predicate(
                        name,
                        &params,
                        &boolsynth::BoolExpr::constant(false),
                        target,
                    ),
                };
                for line in lines {
                    println!("{}", line);
                }
                println!();
            }
        }
    }
}
