//! Defines the scalar capability traits and the scalar domains.
//!
//! The core trait is [Ring], which has two binary operations, addition and multiplication.
//! Each ring has an associated element type, that should not be confused with the ring type itself.
//! For example:
//! - The ring of integers [Z](type@integer::Z) has elements of type [Integer].
//! - The field of rational numbers [Q](type@rational::Q) has elements of type [Rational](rational::Rational).
//!
//! The ring elements do not need to implement operations such as addition or multiplication,
//! but rather the ring itself does. The matrix algorithms are generic over the ring type,
//! so that the same code computes determinants of integer and fraction matrices.
//!
//! An extension of the ring trait is the [`Field`] trait, which adds the ability to divide and invert elements.
pub mod integer;
pub mod rational;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use thiserror::Error;

use integer::Integer;

/// Errors of scalar arithmetic.
#[derive(Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,
}

/// A ring is a set with two binary operations, addition and multiplication.
/// Examples of rings include the integers and the rational numbers.
///
/// Each ring has an element type, that should not be confused with the ring type itself.
/// For example:
/// - The ring of integers [Z](type@integer::Z) has elements of type [Integer].
/// - The field of rational numbers [Q](type@rational::Q) has elements of type [Rational](rational::Rational).
pub trait Ring: Clone + PartialEq + Eq + Hash + Debug + Display {
    /// The element of a ring. For example, the elements of the ring of integers [Z](type@integer::Z), `Z::Element`, are [Integer].
    type Element: Clone + PartialEq + Eq + Hash + Debug + Display;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Return the nth element by computing `n * 1`.
    fn nth(&self, n: Integer) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;

    /// Return the result of dividing `a` by `b`, if possible and if the result is unique.
    /// For example, in [Z](type@integer::Z), `4/2` is possible but `3/2` and `3/0` are not.
    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element>;
}

/// A field is a ring that supports division and inversion.
///
/// Dividing by zero is reported as [ArithmeticError::DivisionByZero]
/// instead of producing an element with a zero denominator.
pub trait Field: Ring {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError>;
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<(), ArithmeticError>;
    fn inv(&self, a: &Self::Element) -> Result<Self::Element, ArithmeticError>;
}
