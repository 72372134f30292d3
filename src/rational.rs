use crate::{Number, Problem};
use num::{BigInt, BigUint, One, Zero};
use std::sync::LazyLock;

/// Ratio of two integers
///
/// This type is a signed [`BigInt`] numerator over a signed [`BigInt`]
/// denominator, kept in lowest terms. Construction never fails, the pair
/// is divided through by the greatest common divisor of the magnitudes
/// and otherwise left exactly as given, so a negative denominator stays
/// negative.
///
/// A zero denominator can be constructed, but any arithmetic which would
/// then produce a zero denominator is a [`Problem::DivideByZero`].
///
/// # Examples
///
/// Construction reduces the fraction
/// ```
/// use binomial::Rational;
/// let minus_four = Rational::fraction(-12, 3);
/// assert_eq!(minus_four.to_string(), "-4/1");
/// ```
///
/// Arithmetic through the [`Number`] trait
/// ```
/// use binomial::{Number, Rational};
/// let minus_four = Rational::fraction(-12, 3);
/// let sixth = Rational::fraction(1, 6);
/// let sum = minus_four.add(&sixth).unwrap();
/// assert_eq!(sum, Rational::fraction(-23, 6));
/// assert_eq!(sum.square().unwrap().to_string(), "529/36");
/// ```

#[derive(Clone, Debug)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

static ONE: LazyLock<BigUint> = LazyLock::new(BigUint::one);

// Euclid, on magnitudes
fn gcd(mut a: BigUint, mut b: BigUint) -> BigUint {
    while !b.is_zero() {
        let rem = &a % &b;
        a = b;
        b = rem;
    }
    a
}

fn non_zero(denominator: BigInt) -> Result<BigInt, Problem> {
    if denominator.is_zero() {
        tracing::debug!("rational arithmetic needs a zero denominator");
        Err(Problem::DivideByZero)
    } else {
        Ok(denominator)
    }
}

impl Rational {
    /// The Rational corresponding to the provided [`BigInt`]
    /// numerator and denominator as a fraction
    pub fn new(numerator: BigInt, denominator: BigInt) -> Self {
        Self {
            numerator,
            denominator,
        }
        .reduce()
    }

    /// The Rational corresponding to the provided [`i64`]
    /// numerator and denominator as a fraction
    ///
    /// # Example
    ///
    /// ```
    /// use binomial::Rational;
    /// let sixth = Rational::fraction(3, 18);
    /// assert_eq!(sixth.to_string(), "1/6");
    /// ```
    pub fn fraction(numerator: i64, denominator: i64) -> Self {
        Self::new(BigInt::from(numerator), BigInt::from(denominator))
    }

    fn reduce(self) -> Self {
        let divisor = gcd(
            self.numerator.magnitude().clone(),
            self.denominator.magnitude().clone(),
        );
        if divisor > *ONE {
            tracing::trace!(%divisor, "reducing fraction");
            let divisor = BigInt::from(divisor);
            Self {
                numerator: self.numerator / &divisor,
                denominator: self.denominator / &divisor,
            }
        } else {
            self
        }
    }

    /// The numerator, which carries the sign unless it was given to the denominator
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator, which may be zero or negative as constructed
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from(BigInt::from(n))
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self {
            numerator: n,
            denominator: BigInt::one(),
        }
    }
}

// With a/b for self and c/d for other throughout
impl Number for Rational {
    fn add(&self, other: &Self) -> Result<Self, Problem> {
        let (a, b) = (&self.numerator, &self.denominator);
        let (c, d) = (&other.numerator, &other.denominator);
        let denominator = non_zero(b * d)?;
        Ok(Self::new(a * d + b * c, denominator))
    }

    fn subtract(&self, other: &Self) -> Result<Self, Problem> {
        let (a, b) = (&self.numerator, &self.denominator);
        let (c, d) = (&other.numerator, &other.denominator);
        let denominator = non_zero(b * d)?;
        Ok(Self::new(a * d - b * c, denominator))
    }

    fn multiply(&self, other: &Self) -> Result<Self, Problem> {
        let (a, b) = (&self.numerator, &self.denominator);
        let (c, d) = (&other.numerator, &other.denominator);
        let denominator = non_zero(b * d)?;
        Ok(Self::new(a * c, denominator))
    }

    // Only bc becomes the new denominator, so only bc is checked
    fn divide(&self, other: &Self) -> Result<Self, Problem> {
        let (a, b) = (&self.numerator, &self.denominator);
        let (c, d) = (&other.numerator, &other.denominator);
        let denominator = non_zero(b * c)?;
        Ok(Self::new(a * d, denominator))
    }
}

use core::fmt;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// Equal in value, so 4/-1 == -4/1
// A zero denominator has no value, those are only equal to the identical pair
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        if self.denominator.is_zero() || other.denominator.is_zero() {
            return self.numerator == other.numerator && self.denominator == other.denominator;
        }
        &self.numerator * &other.denominator == &self.denominator * &other.numerator
    }
}
