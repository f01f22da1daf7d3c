//! Methods for exact linear algebra on small matrices.
//!
//! [matrix] holds the [Matrix](matrix::Matrix) and [Vector](matrix::Vector) containers and the
//! cofactor determinant, [linear_system] builds the adjoint, the inverse and Cramer's rule on top of it.

pub mod linear_system;
pub mod matrix;
