//! Cofactor is a library for exact rational arithmetic and cofactor-based matrix algorithms.
//!
//! Fractions are exact: numerators and denominators are unbounded integers, and dividing
//! by zero is reported instead of stored. Matrices are generic over the scalar ring, so the
//! same determinant, adjoint, inverse and Cramer's rule work for integer and fraction entries.
//!
//! For example:
//!
//! ```
//! use cofactor::{
//!     domains::rational::Q,
//!     tensors::{linear_system::inverse, matrix::Matrix},
//! };
//!
//! let a = Matrix::from_integers(vec![vec![4, 7], vec![2, 6]], Q).unwrap();
//! println!("det = {}", a.det().unwrap());
//! println!("inverse =\n{}", inverse(&a).unwrap());
//! ```
//!
//! All algorithms use cofactor expansion, which takes factorial time in the matrix order.
//! Use [settings::ExpansionSettings] to reject matrices that are too large.

pub mod domains;
pub mod settings;
pub mod tensors;
pub mod utils;
