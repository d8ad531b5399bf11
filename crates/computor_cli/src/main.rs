use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use computor_parser::parse_equation;
use computor_solver::{solve, Reduction};

/// Reduce a polynomial equation of one variable and solve it up to
/// degree 2.
#[derive(Parser, Debug)]
#[command(name = "computor", version, about)]
struct Cli {
    /// Polynomial equation, e.g. "1 * X^0 + 2 * X^1 = -1 * X^0 + 4 * X^1"
    equation: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli.equation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(equation: &str) -> Result<()> {
    println!("Received expression:");
    println!("{equation}");

    let coefficients = parse_equation(equation)?;
    let reduction = Reduction::from_coefficients(&coefficients);

    // The reduced form and degree are reported even when the degree
    // ceiling then refuses to solve.
    println!("\nReduced form: {}", reduction.canonical());
    println!("Polynomial degree: {}", reduction.degree());

    let solution = solve(&reduction)?;
    println!("\n{solution}");
    Ok(())
}
