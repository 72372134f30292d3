use crate::Problem;
use std::fmt::Display;

/// Arithmetic between two values of the same type
///
/// Every operation leaves both operands untouched and returns a new value,
/// or [`Problem::DivideByZero`] if the result would need a zero denominator.
/// The [`Display`] supertrait is how a value is rendered for people.
///
/// # Example
///
/// Code written against the trait works for any implementation
/// ```
/// use binomial::{Complex, Number, Problem, Rational};
///
/// fn double<T: Number>(n: &T) -> Result<T, Problem> {
///     n.add(n)
/// }
///
/// let third = Rational::fraction(1, 3);
/// assert_eq!(double(&third).unwrap(), Rational::fraction(2, 3));
/// let z = Complex::new(1.5, -2.0);
/// assert_eq!(double(&z).unwrap(), Complex::new(3.0, -4.0));
/// ```
pub trait Number: Sized + Display {
    /// `self + other`
    fn add(&self, other: &Self) -> Result<Self, Problem>;

    /// `self - other`
    fn subtract(&self, other: &Self) -> Result<Self, Problem>;

    /// `self * other`
    fn multiply(&self, other: &Self) -> Result<Self, Problem>;

    /// `self / other`
    fn divide(&self, other: &Self) -> Result<Self, Problem>;

    /// `self * self`
    fn square(&self) -> Result<Self, Problem> {
        self.multiply(self)
    }
}
