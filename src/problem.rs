// We need to refer to these types in the documentation
#[allow(unused_imports)]
use crate::{Complex, Number, Rational};

/// Problems when attempting Arithmetic through the [`Number`] trait,
/// with either a [`Rational`] or a [`Complex`] value

#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Problem {
    /// Tried to divide by Zero, for a [`Rational`] this means the denominator
    /// the operation would produce is zero, for a [`Complex`] the divisor is zero
    DivideByZero,
}

use std::fmt;

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for Problem {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Problem::DivideByZero.to_string(), "DivideByZero");
    }
}
