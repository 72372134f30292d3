//! Checking (a+b)^2 = a^2 + 2ab + b^2 for any [`Number`]
//!
//! The routines here report each line of their transcript to a caller
//! supplied sink and compare nothing themselves, a person reads both sides.
//! [`Expansion::holds`] does the comparison for callers who want it.

use crate::{Number, Problem};

/// Both sides of the binomial square for a pair of values
#[derive(Clone, Debug)]
pub struct Expansion<T> {
    pub sum: T,
    pub square_of_sum: T,
    pub a_squared: T,
    pub two_ab: T,
    pub b_squared: T,
    pub expanded: T,
}

impl<T: Number> Expansion<T> {
    /// Compute (a+b)^2 directly and as a^2 + 2ab + b^2
    ///
    /// # Example
    ///
    /// ```
    /// use binomial::identity::Expansion;
    /// use binomial::Rational;
    /// let a = Rational::fraction(-12, 3);
    /// let b = Rational::fraction(1, 6);
    /// let expansion = Expansion::new(&a, &b).unwrap();
    /// assert_eq!(expansion.expanded.to_string(), "529/36");
    /// assert!(expansion.holds());
    /// ```
    pub fn new(a: &T, b: &T) -> Result<Self, Problem> {
        let sum = a.add(b)?;
        let square_of_sum = sum.square()?;
        let a_squared = a.square()?;
        let ab = a.multiply(b)?;
        let two_ab = ab.add(&ab)?;
        let b_squared = b.square()?;
        let expanded = a_squared.add(&two_ab)?.add(&b_squared)?;
        Ok(Self {
            sum,
            square_of_sum,
            a_squared,
            two_ab,
            b_squared,
            expanded,
        })
    }
}

impl<T: PartialEq> Expansion<T> {
    pub fn holds(&self) -> bool {
        self.square_of_sum == self.expanded
    }
}

/// Report every step of the identity for `a` and `b`, then a/b and a-b
///
/// # Example
///
/// ```
/// use binomial::identity;
/// use binomial::Complex;
/// let mut lines = Vec::new();
/// let a = Complex::new(1.0, 1.0);
/// let b = Complex::new(1.0, -1.0);
/// identity::full(&a, &b, |line| lines.push(line.to_owned())).unwrap();
/// assert!(lines.contains(&"a^2+2ab+b^2 = 4".to_owned()));
/// ```
pub fn full<T: Number>(a: &T, b: &T, mut report: impl FnMut(&str)) -> Result<(), Problem> {
    report(&format!(
        "=== Starting testing (a+b)^2=a^2+2ab+b^2 with a = {a}, b = {b} ==="
    ));
    let expansion = Expansion::new(a, b)?;
    report(&format!("a = {a}"));
    report(&format!("b = {b}"));
    report(&format!("(a + b) = {}", expansion.sum));
    report(&format!("(a+b)^2 = {}", expansion.square_of_sum));
    report(" = = = ");
    report(&format!("a^2 = {}", expansion.a_squared));
    report(&format!("2*a*b = {}", expansion.two_ab));
    report(&format!("b^2 = {}", expansion.b_squared));
    report(&format!("a^2+2ab+b^2 = {}", expansion.expanded));

    report("a/b: ");
    let quotient = a.divide(b)?;
    report(&format!("a/b = {quotient}"));
    report("a-b: ");
    let difference = a.subtract(b)?;
    report(&format!("a-b = {difference}"));
    report(&format!(
        "=== Finishing testing (a+b)^2=a^2+2ab+b^2 with a = {a}, b = {b} ==="
    ));
    Ok(())
}

/// Report the sum, its square, the difference and the quotient
/// of `z_1` and `z_2`
pub fn light<T: Number>(z_1: &T, z_2: &T, mut report: impl FnMut(&str)) -> Result<(), Problem> {
    let sum = z_1.add(z_2)?;
    report(&format!("z_1 = {z_1}"));
    report(&format!("z_2 = {z_2}"));
    report(&format!("Testing (z_1 + z_2) = {sum}"));
    report(&format!("Testing ( z_1 + z_2)^2 = {}", sum.square()?));
    report(&format!("Testing ( z_1 - z_2) = {}", z_1.subtract(z_2)?));
    report(&format!("Testing ( z_1/z_2) = {}", z_1.divide(z_2)?));
    Ok(())
}
