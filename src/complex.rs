use crate::{Number, Problem};

/// Complex number with [`f64`] parts
///
/// There is no normalization, any pair of floats is a value.
///
/// # Examples
///
/// ```
/// use binomial::{Complex, Number};
/// let a = Complex::new(5.0, -6.0);
/// let b = Complex::new(-3.0, 2.0);
/// let sum = a.add(&b).unwrap();
/// assert_eq!(sum.to_string(), "2-4i");
/// assert_eq!(sum.square().unwrap().to_string(), "-12-16i");
/// ```
///
/// A zero imaginary part is not shown at all
/// ```
/// use binomial::Complex;
/// assert_eq!(Complex::new(5.0, 0.0).to_string(), "5");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn re(&self) -> f64 {
        self.re
    }

    pub fn im(&self) -> f64 {
        self.im
    }
}

// With a+bi for self and c+di for other
impl Number for Complex {
    fn add(&self, other: &Self) -> Result<Self, Problem> {
        Ok(Self::new(self.re + other.re, self.im + other.im))
    }

    fn subtract(&self, other: &Self) -> Result<Self, Problem> {
        Ok(Self::new(self.re - other.re, self.im - other.im))
    }

    fn multiply(&self, other: &Self) -> Result<Self, Problem> {
        let (a, b, c, d) = (self.re, self.im, other.re, other.im);
        let (ac, bd, ad, bc) = (a * c, b * d, a * d, b * c);
        Ok(Self::new(ac - bd, ad + bc))
    }

    fn divide(&self, other: &Self) -> Result<Self, Problem> {
        let (a, b, c, d) = (self.re, self.im, other.re, other.im);
        let (ac, bd, ad, bc) = (a * c, b * d, a * d, b * c);
        let denominator = c * c + d * d;
        if denominator == 0.0 {
            tracing::debug!(%other, "complex division by zero");
            return Err(Problem::DivideByZero);
        }
        Ok(Self::new((ac + bd) / denominator, (bc - ad) / denominator))
    }
}

use core::fmt;

// A negative imaginary part brings its own minus sign
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im > 0.0 {
            write!(f, "{}+{}i", self.re, self.im)
        } else if self.im == 0.0 {
            write!(f, "{}", self.re)
        } else {
            write!(f, "{}{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Complex::new(2.0, 4.0).to_string(), "2+4i");
        assert_eq!(Complex::new(2.0, -4.0).to_string(), "2-4i");
        assert_eq!(Complex::new(-0.5, 1.25).to_string(), "-0.5+1.25i");
        assert_eq!(Complex::new(5.0, 0.0).to_string(), "5");
        assert_eq!(Complex::new(5.0, -0.0).to_string(), "5");
    }

    #[test]
    fn add_subtract() {
        let a = Complex::new(5.0, -6.0);
        let b = Complex::new(-3.0, 2.0);
        assert_eq!(a.add(&b).unwrap(), Complex::new(2.0, -4.0));
        assert_eq!(a.subtract(&b).unwrap(), Complex::new(8.0, -8.0));
    }

    #[test]
    fn i_squared() {
        let i = Complex::new(0.0, 1.0);
        assert_eq!(i.square().unwrap(), Complex::new(-1.0, 0.0));
        assert_eq!(i.square().unwrap().to_string(), "-1");
    }

    #[test]
    fn multiply() {
        let a = Complex::new(5.0, -6.0);
        let b = Complex::new(-3.0, 2.0);
        assert_eq!(a.multiply(&b).unwrap(), Complex::new(-3.0, 28.0));
    }

    #[test]
    fn divide() {
        let a = Complex::new(5.0, -6.0);
        let b = Complex::new(-3.0, 2.0);
        let q = a.divide(&b).unwrap();
        assert_eq!(q, Complex::new(-27.0 / 13.0, 8.0 / 13.0));
        let two = Complex::new(2.0, 0.0);
        let half = Complex::new(4.0, -2.0).divide(&two).unwrap();
        assert_eq!(half, Complex::new(2.0, -1.0));
    }

    #[test]
    fn divide_by_zero() {
        let a = Complex::new(1.0, 1.0);
        let zero = Complex::new(0.0, 0.0);
        assert_eq!(a.divide(&zero), Err(Problem::DivideByZero));
        assert_eq!(zero.divide(&zero), Err(Problem::DivideByZero));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn part() -> impl Strategy<Value = f64> {
            -1.0e6f64..1.0e6
        }

        // Within rounding of the magnitude of the whole value
        fn close(x: f64, y: f64, scale: f64) -> bool {
            (x - y).abs() <= 1e-9 * (1.0 + scale)
        }

        proptest! {
            #[test]
            fn multiply_commutes(a in part(), b in part(), c in part(), d in part()) {
                let x = Complex::new(a, b);
                let y = Complex::new(c, d);
                prop_assert_eq!(x.multiply(&y).unwrap(), y.multiply(&x).unwrap());
            }

            #[test]
            fn divide_undoes_multiply(a in part(), b in part(), c in part(), d in part()) {
                prop_assume!(c.abs() > 1e-3 || d.abs() > 1e-3);
                let x = Complex::new(a, b);
                let y = Complex::new(c, d);
                let back = x.multiply(&y).unwrap().divide(&y).unwrap();
                let scale = a.abs() + b.abs();
                prop_assert!(close(back.re(), a, scale), "{} vs {}", back, x);
                prop_assert!(close(back.im(), b, scale), "{} vs {}", back, x);
            }
        }
    }
}
