use std::{
    fmt::{Display, Write},
    ops::{Add, Mul, Neg, Sub},
    slice::Chunks,
};

use smallvec::SmallVec;
use thiserror::Error;
use tracing::instrument;

use crate::domains::{
    integer::{Integer, Z},
    rational::Q,
    ArithmeticError, Ring,
};

/// Errors that can occur when performing matrix operations.
///
/// Row and column indices in the errors are 1-based, like the public accessors.
#[derive(Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MatrixError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("The matrix is singular")]
    Singular,
    #[error("The matrix is not square: ({nrows},{ncols})")]
    NotSquare { nrows: usize, ncols: usize },
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Index {index} is out of range 1..={bound}")]
    IndexOutOfRange { index: usize, bound: usize },
    #[error("Matrix of order {order} exceeds the maximal expansion order {max_order}")]
    OrderTooLarge { order: usize, max_order: usize },
}

impl From<ArithmeticError> for MatrixError {
    fn from(e: ArithmeticError) -> Self {
        match e {
            ArithmeticError::DivisionByZero => MatrixError::DivisionByZero,
        }
    }
}

/// Check a 1-based index against `bound` and return the 0-based index.
#[inline]
fn to_offset(index: usize, bound: usize) -> Result<usize, MatrixError> {
    if index == 0 || index > bound {
        Err(MatrixError::IndexOutOfRange { index, bound })
    } else {
        Ok(index - 1)
    }
}

/// An n-dimensional vector.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Vector<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) field: F,
}

impl<F: Ring> Vector<F> {
    /// Create a new vector from a list of scalars.
    pub fn new(data: Vec<F::Element>, field: F) -> Vector<F> {
        Vector { data, field }
    }

    /// Create a new vector from integers, mapped into the ring with [Ring::nth].
    pub fn from_integers(data: &[i64], field: F) -> Vector<F> {
        Vector {
            data: data.iter().map(|x| field.nth(Integer::from(*x))).collect(),
            field,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn as_slice(&self) -> &[F::Element] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<F::Element> {
        self.data
    }

    /// Get the `i`th entry, counting from 1.
    pub fn read(&self, i: usize) -> Result<&F::Element, MatrixError> {
        Ok(&self.data[to_offset(i, self.data.len())?])
    }

    /// Apply a function `f` to each entry of the vector.
    pub fn map<G: Ring>(&self, f: impl Fn(&F::Element) -> G::Element, field: G) -> Vector<G> {
        Vector {
            data: self.data.iter().map(f).collect(),
            field,
        }
    }
}

impl<F: Ring> Display for Vector<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('[')?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            e.fmt(f)?;
        }
        f.write_char(']')
    }
}

/// A matrix with entries that are elements of a ring `F`.
///
/// The entries are stored row-major and inline for matrices up to order 5.
/// The public accessors use 1-based row and column indices. Square-only operations
/// such as [Matrix::minor] and [Matrix::det] return [MatrixError::NotSquare] on
/// rectangular input.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Matrix<F: Ring> {
    pub(crate) data: SmallVec<[F::Element; 25]>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) field: F,
}

impl<F: Ring> Matrix<F> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: usize, ncols: usize, field: F) -> Matrix<F> {
        Matrix {
            data: (0..nrows * ncols).map(|_| field.zero()).collect(),
            nrows,
            ncols,
            field,
        }
    }

    /// Create a new square matrix with `nrows` rows and ones on the main diagonal and zeroes elsewhere.
    pub fn identity(nrows: usize, field: F) -> Matrix<F> {
        Matrix {
            data: (0..nrows * nrows)
                .map(|i| {
                    if i % nrows == i / nrows {
                        field.one()
                    } else {
                        field.zero()
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
            field,
        }
    }

    /// Convert a linear representation of a matrix to a `Matrix`.
    pub fn from_linear(
        data: Vec<F::Element>,
        nrows: usize,
        ncols: usize,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        if data.len() != nrows * ncols {
            return Err(MatrixError::DimensionMismatch {
                expected: nrows * ncols,
                found: data.len(),
            });
        }

        Ok(Matrix {
            data: data.into(),
            nrows,
            ncols,
            field,
        })
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    ///
    /// The first row fixes the number of columns. A row of any other length is a
    /// [MatrixError::DimensionMismatch] against that width.
    pub fn from_nested_vec(
        matrix: Vec<Vec<F::Element>>,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        let nrows = matrix.len();
        let ncols = matrix.first().map(|r| r.len()).unwrap_or(0);

        let mut data = SmallVec::with_capacity(nrows * ncols);
        for d in matrix {
            if d.len() != ncols {
                return Err(MatrixError::DimensionMismatch {
                    expected: ncols,
                    found: d.len(),
                });
            }

            data.extend(d);
        }

        Ok(Matrix {
            data,
            nrows,
            ncols,
            field,
        })
    }

    /// Create a new matrix from rows of integers, mapped into the ring with [Ring::nth].
    pub fn from_integers(rows: Vec<Vec<i64>>, field: F) -> Result<Matrix<F>, MatrixError> {
        let rows: Vec<Vec<F::Element>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(|x| field.nth(Integer::from(x))).collect())
            .collect();
        Self::from_nested_vec(rows, field)
    }

    /// Return `(rows, columns)`.
    pub fn get_size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return the field of the matrix entries.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, F::Element> {
        // a matrix without columns has no entries, so any chunk size yields no rows
        self.data.chunks(self.ncols.max(1))
    }

    #[inline]
    pub(crate) fn entry(&self, r: usize, c: usize) -> &F::Element {
        &self.data[r * self.ncols + c]
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self, r: usize, c: usize) -> &mut F::Element {
        &mut self.data[r * self.ncols + c]
    }

    pub(crate) fn check_square(&self) -> Result<(), MatrixError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            })
        }
    }

    /// Get the entry in row `i` and column `j`, counting from 1.
    pub fn read(&self, i: usize, j: usize) -> Result<&F::Element, MatrixError> {
        let r = to_offset(i, self.nrows)?;
        let c = to_offset(j, self.ncols)?;
        Ok(self.entry(r, c))
    }

    /// Set the entry in row `i` and column `j`, counting from 1.
    pub fn write(&mut self, i: usize, j: usize, x: F::Element) -> Result<(), MatrixError> {
        let r = to_offset(i, self.nrows)?;
        let c = to_offset(j, self.ncols)?;
        *self.entry_mut(r, c) = x;
        Ok(())
    }

    /// Return a copy of row `i`, counting from 1.
    pub fn read_row(&self, i: usize) -> Result<Vec<F::Element>, MatrixError> {
        let r = to_offset(i, self.nrows)?;
        Ok(self.data[r * self.ncols..(r + 1) * self.ncols].to_vec())
    }

    /// Return a copy of column `j`, counting from 1.
    pub fn read_column(&self, j: usize) -> Result<Vec<F::Element>, MatrixError> {
        let c = to_offset(j, self.ncols)?;
        Ok((0..self.nrows).map(|r| self.entry(r, c).clone()).collect())
    }

    fn remove_row_at(&mut self, r: usize) {
        self.data.drain(r * self.ncols..(r + 1) * self.ncols);
        self.nrows -= 1;
    }

    fn remove_column_at(&mut self, c: usize) {
        let ncols = self.ncols;
        let mut k = 0;
        self.data.retain(|_| {
            let keep = k % ncols != c;
            k += 1;
            keep
        });
        self.ncols -= 1;
    }

    /// Remove row `i`, counting from 1.
    pub fn remove_row(&mut self, i: usize) -> Result<(), MatrixError> {
        let r = to_offset(i, self.nrows)?;
        self.remove_row_at(r);
        Ok(())
    }

    /// Remove column `j`, counting from 1.
    pub fn remove_column(&mut self, j: usize) -> Result<(), MatrixError> {
        let c = to_offset(j, self.ncols)?;
        self.remove_column_at(c);
        Ok(())
    }

    /// Overwrite column `j`, counting from 1, with `values`.
    pub fn replace_column(&mut self, j: usize, values: &[F::Element]) -> Result<(), MatrixError> {
        let c = to_offset(j, self.ncols)?;
        if values.len() != self.nrows {
            return Err(MatrixError::DimensionMismatch {
                expected: self.nrows,
                found: values.len(),
            });
        }

        for (r, v) in values.iter().enumerate() {
            *self.entry_mut(r, c) = v.clone();
        }
        Ok(())
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix<F> {
        let mut m = Matrix::new(self.ncols, self.nrows, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                *m.entry_mut(j, i) = self.entry(i, j).clone();
            }
        }
        m
    }

    /// Multiply each entry of the matrix by `e` in place.
    pub fn scalar_multiply(&mut self, e: &F::Element) {
        for x in &mut self.data {
            self.field.mul_assign(x, e);
        }
    }

    /// Multiply the scalar `e` to each entry of the matrix.
    pub fn mul_scalar(&self, e: &F::Element) -> Matrix<F> {
        Matrix {
            data: self.data.iter().map(|ee| self.field.mul(ee, e)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        }
    }

    /// Apply a function `f` to each entry of the matrix.
    pub fn map<G: Ring>(&self, f: impl Fn(&F::Element) -> G::Element, field: G) -> Matrix<G> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field,
        }
    }

    /// Return true iff every entry in the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(F::is_zero)
    }

    /// Multiply two matrices, failing when the inner dimensions differ.
    pub fn checked_mul(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::DimensionMismatch {
                expected: self.ncols,
                found: rhs.nrows,
            });
        }

        let mut m = Matrix::new(self.nrows, rhs.ncols, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let mut sum = self.field.zero();
                for k in 0..self.ncols {
                    self.field
                        .add_mul_assign(&mut sum, self.entry(i, k), rhs.entry(k, j));
                }
                *m.entry_mut(i, j) = sum;
            }
        }

        Ok(m)
    }

    /// Return the matrix without row `r` and column `c`, both 0-based.
    pub(crate) fn minor_at(&self, r: usize, c: usize) -> Matrix<F> {
        let mut m = self.clone();
        m.remove_column_at(c);
        m.remove_row_at(r);
        m
    }

    /// Return the minor matrix obtained by deleting row `i` and column `j`, counting from 1.
    /// The receiver is left untouched.
    pub fn minor(&self, i: usize, j: usize) -> Result<Matrix<F>, MatrixError> {
        self.check_square()?;
        let r = to_offset(i, self.nrows)?;
        let c = to_offset(j, self.ncols)?;
        Ok(self.minor_at(r, c))
    }

    /// Compute the determinant by cofactor expansion along the first row.
    ///
    /// The expansion takes `O(n!)` ring operations, which is only practical for small matrices.
    /// See [ExpansionSettings](crate::settings::ExpansionSettings) to bound the order.
    /// The determinant of the empty matrix is one.
    pub fn det(&self) -> Result<F::Element, MatrixError> {
        self.check_square()?;
        Ok(self.expand_det())
    }

    #[instrument(level = "trace", skip_all, fields(order = self.nrows))]
    fn expand_det(&self) -> F::Element {
        match self.nrows {
            0 => self.field.one(),
            1 => self.data[0].clone(),
            2 => self.field.sub(
                &self.field.mul(&self.data[0], &self.data[3]),
                &self.field.mul(&self.data[1], &self.data[2]),
            ),
            n => {
                let mut det = self.field.zero();
                for (c, a) in self.data[..n].iter().enumerate() {
                    if F::is_zero(a) {
                        continue;
                    }

                    let sub_det = self.minor_at(0, c).expand_det();
                    if c % 2 == 0 {
                        self.field.add_mul_assign(&mut det, a, &sub_det);
                    } else {
                        self.field.sub_mul_assign(&mut det, a, &sub_det);
                    }
                }
                det
            }
        }
    }
}

impl Matrix<Z> {
    /// Lift an integer matrix into the rational numbers.
    pub fn to_rational(&self) -> Matrix<Q> {
        self.map(|e| e.to_rational(), Q)
    }
}

impl<F: Ring> Display for Matrix<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (ri, r) in self.row_iter().enumerate() {
            if ri > 0 {
                f.write_char('\n')?;
            }

            f.write_char('[')?;
            for (ci, c) in r.iter().enumerate() {
                if ci > 0 {
                    f.write_str(", ")?;
                }
                c.fmt(f)?;
            }
            f.write_char(']')?;
        }
        Ok(())
    }
}

impl<F: Ring> Add<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Add two matrices.
    fn add(self, rhs: &Matrix<F>) -> Self::Output {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot add matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| self.field.add(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        }
    }
}

impl<F: Ring> Sub<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Subtract two matrices.
    fn sub(self, rhs: &Matrix<F>) -> Self::Output {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            panic!(
                "Cannot subtract matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
        }

        Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| self.field.sub(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        }
    }
}

impl<F: Ring> Mul<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    /// Multiply two matrices.
    fn mul(self, rhs: &Matrix<F>) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "Cannot multiply matrices because of a dimension mismatch: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            ),
        }
    }
}

impl<F: Ring> Neg for Matrix<F> {
    type Output = Matrix<F>;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }

        self
    }
}

impl<F: Ring> Neg for &Matrix<F> {
    type Output = Matrix<F>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
