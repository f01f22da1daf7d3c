//! Limits for the exponential cofactor algorithms.
//!
//! The cofactor expansion of an order `n` determinant takes `O(n!)` ring operations, and the
//! adjoint, inverse and Cramer's rule compute `O(n)` to `O(n^2)` such determinants. An
//! [ExpansionSettings] guards these entry points with a maximal order.
//!
//! ```
//! use cofactor::{domains::integer::Z, settings::ExpansionSettings, tensors::matrix::Matrix};
//!
//! let settings = ExpansionSettings::with_max_order(3);
//! let m = Matrix::identity(4, Z);
//! assert!(settings.det(&m).is_err());
//! ```

use std::env;

use tracing::warn;

use crate::{
    domains::{Field, Ring},
    tensors::{
        linear_system,
        matrix::{Matrix, MatrixError, Vector},
    },
};

/// The environment variable read by [ExpansionSettings::from_env].
pub const MAX_ORDER_VAR: &str = "COFACTOR_MAX_ORDER";

/// Options for the cofactor algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExpansionSettings {
    /// The largest matrix order that may be expanded, or `None` for no limit.
    pub max_order: Option<usize>,
}

impl ExpansionSettings {
    pub fn unbounded() -> ExpansionSettings {
        ExpansionSettings { max_order: None }
    }

    pub fn with_max_order(max_order: usize) -> ExpansionSettings {
        ExpansionSettings {
            max_order: Some(max_order),
        }
    }

    /// Read the maximal order from `COFACTOR_MAX_ORDER`.
    /// A missing or malformed value yields the unbounded default.
    pub fn from_env() -> ExpansionSettings {
        match env::var(MAX_ORDER_VAR) {
            Ok(v) => Self::parse_max_order(&v),
            Err(_) => Self::default(),
        }
    }

    fn parse_max_order(v: &str) -> ExpansionSettings {
        match v.trim().parse::<usize>() {
            Ok(n) => Self::with_max_order(n),
            Err(e) => {
                warn!("Ignoring {}={:?}: {}", MAX_ORDER_VAR, v, e);
                Self::default()
            }
        }
    }

    /// Check that the order of `m` does not exceed the maximal order.
    pub fn check<F: Ring>(&self, m: &Matrix<F>) -> Result<(), MatrixError> {
        if let Some(max_order) = self.max_order {
            let order = m.nrows().max(m.ncols());
            if order > max_order {
                return Err(MatrixError::OrderTooLarge { order, max_order });
            }
        }
        Ok(())
    }

    pub fn det<F: Ring>(&self, m: &Matrix<F>) -> Result<F::Element, MatrixError> {
        self.check(m)?;
        m.det()
    }

    pub fn adjoint<F: Ring>(&self, m: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        self.check(m)?;
        linear_system::adjoint(m)
    }

    pub fn inverse<F: Field>(&self, m: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        self.check(m)?;
        linear_system::inverse(m)
    }

    pub fn cramer<F: Field>(
        &self,
        m: &Matrix<F>,
        b: &Vector<F>,
    ) -> Result<Vec<F::Element>, MatrixError> {
        self.check(m)?;
        linear_system::cramer(m, b)
    }
}
