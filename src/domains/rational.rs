use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use super::{integer::Integer, ArithmeticError, Field, Ring};

/// The field of rational numbers.
pub type Q = RationalField;
/// The field of rational numbers.
pub const Q: RationalField = RationalField::new();

/// The field of rational numbers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RationalField;

impl Default for RationalField {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalField {
    pub const fn new() -> RationalField {
        RationalField
    }
}

impl Display for RationalField {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

/// An exact fraction `numerator/denominator`.
///
/// The denominator is never zero and always positive, so that the sign lives on the numerator.
/// Fractions are normally kept in lowest terms, but the reduction can be deferred with
/// [Rational::with_simplify] and the `*_with` operations to save gcd computations in a
/// chain of arithmetic. Equality, hashing and printing do not depend on whether a fraction is
/// reduced: `2/4 == 1/2` and both print as `1/2`.
#[derive(Clone, Debug)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Create the reduced fraction `numerator/denominator`.
    pub fn new<T: Into<Integer>>(numerator: T, denominator: T) -> Result<Rational, ArithmeticError> {
        Self::with_simplify(numerator, denominator, true)
    }

    /// Create the fraction `numerator/denominator`, only dividing out the gcd if `simplify` is set.
    /// The sign is always moved to the numerator.
    pub fn with_simplify<T: Into<Integer>>(
        numerator: T,
        denominator: T,
        simplify: bool,
    ) -> Result<Rational, ArithmeticError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Self::from_parts(numerator.into(), denominator, simplify))
    }

    /// Create the fraction `a/b` from two fractions.
    pub fn from_fractions(a: &Rational, b: &Rational) -> Result<Rational, ArithmeticError> {
        a.checked_div(b)
    }

    /// The denominator must be non-zero.
    fn from_parts(mut numerator: Integer, mut denominator: Integer, simplify: bool) -> Rational {
        if simplify {
            let g = numerator.gcd(&denominator);
            if !g.is_one() {
                numerator = numerator.quot_rem(&g).0;
                denominator = denominator.quot_rem(&g).0;
            }
        }

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        Rational {
            numerator,
            denominator,
        }
    }

    pub fn zero() -> Rational {
        Rational {
            numerator: Integer::zero(),
            denominator: Integer::one(),
        }
    }

    pub fn one() -> Rational {
        Rational {
            numerator: Integer::one(),
            denominator: Integer::one(),
        }
    }

    pub fn numerator(&self) -> Integer {
        self.numerator.clone()
    }

    pub fn denominator(&self) -> Integer {
        self.denominator.clone()
    }

    pub fn numerator_ref(&self) -> &Integer {
        &self.numerator
    }

    pub fn denominator_ref(&self) -> &Integer {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one() || self.numerator.quot_rem(&self.denominator).1.is_zero()
    }

    /// Return `true` iff the fraction is in lowest terms.
    pub fn is_simplified(&self) -> bool {
        self.numerator.gcd(&self.denominator).is_one()
    }

    /// Return the fraction in lowest terms. Simplifying twice is a no-op.
    pub fn simplify(&self) -> Rational {
        if self.denominator.is_one() {
            return self.clone();
        }

        Self::from_parts(self.numerator.clone(), self.denominator.clone(), true)
    }

    pub fn abs(&self) -> Rational {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    pub fn neg(&self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    /// Return `denominator/numerator`.
    pub fn reciprocal(&self) -> Result<Rational, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Self::from_parts(
            self.denominator.clone(),
            self.numerator.clone(),
            false,
        ))
    }

    /// Add `other`, dividing out the gcd of the result only if `simplify` is set.
    pub fn add_with(&self, other: &Rational, simplify: bool) -> Rational {
        if self.denominator == other.denominator {
            return Self::from_parts(
                &self.numerator + &other.numerator,
                self.denominator.clone(),
                simplify,
            );
        }

        // use the lcm of the denominators instead of their product
        let denom_gcd = self.denominator.gcd(&other.denominator);

        let mut a_den_red = Cow::Borrowed(&self.denominator);
        let mut b_den_red = Cow::Borrowed(&other.denominator);

        if !denom_gcd.is_one() {
            a_den_red = Cow::Owned(self.denominator.quot_rem(&denom_gcd).0);
            b_den_red = Cow::Owned(other.denominator.quot_rem(&denom_gcd).0);
        }

        let num = &self.numerator * b_den_red.as_ref() + &other.numerator * a_den_red.as_ref();
        let den = a_den_red.as_ref() * &other.denominator;

        Self::from_parts(num, den, simplify)
    }

    /// Subtract `other`, dividing out the gcd of the result only if `simplify` is set.
    pub fn sub_with(&self, other: &Rational, simplify: bool) -> Rational {
        self.add_with(&other.neg(), simplify)
    }

    /// Multiply by `other`, dividing out the gcd of the result only if `simplify` is set.
    pub fn mul_with(&self, other: &Rational, simplify: bool) -> Rational {
        Self::from_parts(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
            simplify,
        )
    }

    /// Divide by `other`, dividing out the gcd of the result only if `simplify` is set.
    pub fn div_with(&self, other: &Rational, simplify: bool) -> Result<Rational, ArithmeticError> {
        Ok(self.mul_with(&other.reciprocal()?, simplify))
    }

    /// Divide by `other`. Integers can be passed as `&n.into()`.
    pub fn checked_div(&self, other: &Rational) -> Result<Rational, ArithmeticError> {
        self.div_with(other, true)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl<T: Into<Integer>> From<T> for Rational {
    #[inline]
    fn from(value: T) -> Self {
        Rational {
            numerator: value.into(),
            denominator: Integer::one(),
        }
    }
}

impl From<&Integer> for Rational {
    fn from(value: &Integer) -> Self {
        Rational {
            numerator: value.clone(),
            denominator: Integer::one(),
        }
    }
}

impl<T: Into<Integer>> From<(T, T)> for Rational {
    /// Create a reduced fraction from a literal pair.
    ///
    /// Panics when the denominator is zero; use [Rational::new] for a checked construction.
    #[inline]
    fn from((num, den): (T, T)) -> Self {
        match Rational::new(num, den) {
            Ok(r) => r,
            Err(e) => panic!("Invalid fraction literal: {}", e),
        }
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        if self.denominator == other.denominator {
            return self.numerator == other.numerator;
        }

        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Rational {}

macro_rules! eq_with_integer {
    ($base: ty) => {
        impl PartialEq<$base> for Rational {
            /// Compare with `other/1`.
            #[inline]
            fn eq(&self, other: &$base) -> bool {
                self.numerator == &self.denominator * &Integer::from(*other)
            }
        }

        impl PartialEq<Rational> for $base {
            #[inline]
            fn eq(&self, other: &Rational) -> bool {
                other == self
            }
        }
    };
}

eq_with_integer!(i8);
eq_with_integer!(i16);
eq_with_integer!(i32);
eq_with_integer!(i64);
eq_with_integer!(u8);
eq_with_integer!(u16);
eq_with_integer!(u32);

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let r = self.simplify();
        r.numerator.hash(state);
        r.denominator.hash(state);
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        let a = &self.numerator * &other.denominator;
        let b = &self.denominator * &other.numerator;

        a.cmp(&b)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let r = self.simplify();
        if r.denominator.is_one() {
            r.numerator.fmt(f)
        } else {
            write!(f, "{}/{}", r.numerator, r.denominator)
        }
    }
}

impl Ring for RationalField {
    type Element = Rational;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.add_with(b, true)
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.sub_with(b, true)
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.mul_with(b, true)
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, b);
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        // one reduction for the product and the sum together
        *a = a.add_with(&b.mul_with(c, false), true);
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = a.sub_with(&b.mul_with(c, false), true);
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        a.neg()
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        Rational::zero()
    }

    #[inline]
    fn one(&self) -> Self::Element {
        Rational::one()
    }

    #[inline]
    fn nth(&self, n: Integer) -> Self::Element {
        n.into()
    }

    #[inline]
    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        self.div(a, b).ok()
    }
}

impl Field for RationalField {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError> {
        a.checked_div(b)
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<(), ArithmeticError> {
        *a = self.div(a, b)?;
        Ok(())
    }

    fn inv(&self, a: &Self::Element) -> Result<Self::Element, ArithmeticError> {
        a.reciprocal()
    }
}

impl Integer {
    pub fn to_rational(&self) -> Rational {
        self.into()
    }
}

impl<'a, 'b> Add<&'a Rational> for &'b Rational {
    type Output = Rational;

    fn add(self, other: &'a Rational) -> Self::Output {
        Q.add(self, other)
    }
}

impl<'a, 'b> Sub<&'a Rational> for &'b Rational {
    type Output = Rational;

    fn sub(self, other: &'a Rational) -> Self::Output {
        Q.sub(self, other)
    }
}

impl<'a, 'b> Mul<&'a Rational> for &'b Rational {
    type Output = Rational;

    fn mul(self, other: &'a Rational) -> Self::Output {
        Q.mul(self, other)
    }
}

macro_rules! forward_binop {
    ($tr: ident, $method: ident) => {
        impl $tr<Rational> for Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Self::Output {
                (&self).$method(&other)
            }
        }

        impl<'a> $tr<&'a Rational> for Rational {
            type Output = Rational;

            fn $method(self, other: &'a Rational) -> Self::Output {
                (&self).$method(other)
            }
        }

        impl<'a> $tr<Rational> for &'a Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Self::Output {
                self.$method(&other)
            }
        }

        impl $tr<i64> for Rational {
            type Output = Rational;

            fn $method(self, other: i64) -> Self::Output {
                (&self).$method(&Rational::from(other))
            }
        }

        impl<'a> $tr<i64> for &'a Rational {
            type Output = Rational;

            fn $method(self, other: i64) -> Self::Output {
                self.$method(&Rational::from(other))
            }
        }

        impl $tr<Rational> for i64 {
            type Output = Rational;

            fn $method(self, other: Rational) -> Self::Output {
                (&Rational::from(self)).$method(&other)
            }
        }

        impl<'a> $tr<&'a Rational> for i64 {
            type Output = Rational;

            fn $method(self, other: &'a Rational) -> Self::Output {
                (&Rational::from(self)).$method(other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl<'a> AddAssign<&'a Rational> for Rational {
    fn add_assign(&mut self, other: &'a Rational) {
        Q.add_assign(self, other)
    }
}

impl<'a> SubAssign<&'a Rational> for Rational {
    fn sub_assign(&mut self, other: &'a Rational) {
        Q.sub_assign(self, other)
    }
}

impl<'a> MulAssign<&'a Rational> for Rational {
    fn mul_assign(&mut self, other: &'a Rational) {
        Q.mul_assign(self, other)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Q.neg(&self)
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Q.neg(self)
    }
}

impl<'a> std::iter::Sum<&'a Self> for Rational {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |a, b| a + b)
    }
}
