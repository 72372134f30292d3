mod problem;
pub use crate::problem::Problem;

mod number;
pub use crate::number::Number;

mod rational;
pub use crate::rational::Rational;

mod complex;
pub use crate::complex::Complex;

pub mod identity;
