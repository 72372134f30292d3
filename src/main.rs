use binomial::{identity, Complex, Problem, Rational};
use std::io;
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<(), Problem> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let a = Rational::fraction(-12, 3);
    let b = Rational::fraction(1, 6);
    identity::full(&a, &b, |line| println!("{line}"))?;

    let z_1 = Complex::new(5.0, -6.0);
    let z_2 = Complex::new(-3.0, 2.0);
    identity::light(&z_1, &z_2, |line| println!("{line}"))?;

    let mut input = String::new();
    if let Err(e) = io::stdin().read_line(&mut input) {
        tracing::warn!("could not wait for input: {e}");
    }
    Ok(())
}
