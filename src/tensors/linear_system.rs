use tracing::debug;

use crate::domains::{Field, Ring};

use super::matrix::{Matrix, MatrixError, Vector};

/// Compute the adjoint (adjugate) of a square matrix: the transpose of its cofactor matrix.
///
/// The adjoint of a `1x1` matrix is `[[1]]`, so that `adjoint(A) * A = det(A) * I` holds
/// for every order.
pub fn adjoint<F: Ring>(a: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
    a.check_square()?;

    let field = a.field();
    match a.nrows() {
        0 => Ok(Matrix::new(0, 0, field.clone())),
        1 => Ok(Matrix::identity(1, field.clone())),
        2 => Matrix::from_nested_vec(
            vec![
                vec![a.entry(1, 1).clone(), field.neg(a.entry(0, 1))],
                vec![field.neg(a.entry(1, 0)), a.entry(0, 0).clone()],
            ],
            field.clone(),
        ),
        n => {
            let mut cofactors = Matrix::new(n, n, field.clone());
            for r in 0..n {
                for c in 0..n {
                    let d = a.minor_at(r, c).det()?;
                    *cofactors.entry_mut(r, c) = if (r + c) % 2 == 0 { d } else { field.neg(&d) };
                }
            }
            Ok(cofactors.transpose())
        }
    }
}

/// Compute the inverse `adjoint(A) / det(A)` of a square matrix.
/// If the matrix is singular, this function returns [MatrixError::Singular].
pub fn inverse<F: Field>(a: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
    let det = a.det()?;
    if F::is_zero(&det) {
        debug!("Vanishing determinant: matrix of order {} has no inverse", a.nrows());
        return Err(MatrixError::Singular);
    }

    let inv_det = a.field().inv(&det)?;
    let mut adj = adjoint(a)?;
    adj.scalar_multiply(&inv_det);
    Ok(adj)
}

/// Solve `A * x = b` with Cramer's rule, `x_k = det(A_k) / det(A)`, where `A_k` is `A` with
/// column `k` replaced by `b`.
///
/// The solutions are returned in column order. An empty list is returned when `det(A)` is zero,
/// since the system then has no unique solution.
pub fn cramer<F: Field>(a: &Matrix<F>, b: &Vector<F>) -> Result<Vec<F::Element>, MatrixError> {
    a.check_square()?;
    if b.len() != a.nrows() {
        return Err(MatrixError::DimensionMismatch {
            expected: a.nrows(),
            found: b.len(),
        });
    }

    let det = a.det()?;
    if F::is_zero(&det) {
        debug!("Vanishing determinant: no unique solution for order {}", a.nrows());
        return Ok(vec![]);
    }

    let field = a.field();
    let mut solution = Vec::with_capacity(a.nrows());
    for k in 1..=a.ncols() {
        let mut a_k = a.clone();
        a_k.replace_column(k, b.as_slice())?;
        solution.push(field.div(&a_k.det()?, &det)?);
    }

    Ok(solution)
}

/// Take the Euclidean scalar product of two vectors.
pub fn dot_product<F: Ring>(a: &Vector<F>, b: &Vector<F>) -> Result<F::Element, MatrixError> {
    if a.len() != b.len() {
        return Err(MatrixError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    let mut res = a.field().zero();
    for (e1, e2) in a.as_slice().iter().zip(b.as_slice()) {
        a.field().add_mul_assign(&mut res, e1, e2);
    }

    Ok(res)
}

/// Compute the cross product in three dimensions as the cofactors of the first row of
/// the symbolic matrix `[[i, j, k], a, b]`.
pub fn cross_product<F: Ring>(a: &Vector<F>, b: &Vector<F>) -> Result<Vector<F>, MatrixError> {
    for v in [a, b] {
        if v.len() != 3 {
            return Err(MatrixError::DimensionMismatch {
                expected: 3,
                found: v.len(),
            });
        }
    }

    let field = a.field();
    let rows = Matrix::from_nested_vec(
        vec![a.as_slice().to_vec(), b.as_slice().to_vec()],
        field.clone(),
    )?;

    let mut data = Vec::with_capacity(3);
    for c in 1..=3 {
        let mut m = rows.clone();
        m.remove_column(c)?;
        let d = m.det()?;
        data.push(if c == 2 { field.neg(&d) } else { d });
    }

    Ok(Vector::new(data, field.clone()))
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{
            integer::Z,
            rational::{Rational, Q},
        },
        tensors::matrix::{Matrix, MatrixError, Vector},
    };

    use super::{adjoint, cramer, cross_product, dot_product, inverse};

    #[test]
    fn adjoint_small_orders() {
        assert_eq!(adjoint(&Matrix::new(0, 0, Z)).unwrap().get_size(), (0, 0));

        let one = Matrix::from_integers(vec![vec![5]], Z).unwrap();
        assert_eq!(adjoint(&one).unwrap(), Matrix::identity(1, Z));

        let two = Matrix::from_integers(vec![vec![1, 2], vec![3, 4]], Z).unwrap();
        assert_eq!(adjoint(&two).unwrap().to_string(), "[4, -2]\n[-3, 1]");

        assert_eq!(
            adjoint(&Matrix::new(1, 2, Z)),
            Err(MatrixError::NotSquare { nrows: 1, ncols: 2 })
        );
    }

    #[test]
    fn adjoint_times_matrix() {
        let a = Matrix::from_integers(vec![vec![1, 2, 1], vec![-3, 1, -2], vec![2, 3, -1]], Z)
            .unwrap();
        let adj = adjoint(&a).unwrap();
        assert_eq!(adj.read_row(1).unwrap(), vec![5, 5, -5]);

        let det = a.det().unwrap();
        assert_eq!(&adj * &a, Matrix::identity(3, Z).mul_scalar(&det));
        assert_eq!(&a * &adj, Matrix::identity(3, Z).mul_scalar(&det));
    }

    #[test]
    fn inverse_round_trip() {
        let a = Matrix::from_integers(vec![vec![1, 2, 1], vec![-3, 1, -2], vec![2, 3, -1]], Z)
            .unwrap()
            .to_rational();
        let inv = inverse(&a).unwrap();
        assert_eq!(*inv.read(1, 1).unwrap(), Rational::new(-1, 4).unwrap());
        assert_eq!(&inv * &a, Matrix::identity(3, Q));
        assert_eq!(&a * &inv, Matrix::identity(3, Q));

        let b = Matrix::from_integers(vec![vec![4, 7], vec![2, 6]], Q).unwrap();
        assert_eq!(
            inverse(&b).unwrap().to_string(),
            "[3/5, -7/10]\n[-1/5, 2/5]"
        );

        let c = Matrix::from_integers(vec![vec![4]], Q).unwrap();
        assert_eq!(inverse(&c).unwrap().to_string(), "[1/4]");
    }

    #[test]
    fn inverse_singular() {
        let a = Matrix::from_integers(vec![vec![1, 2], vec![2, 4]], Q).unwrap();
        assert_eq!(inverse(&a), Err(MatrixError::Singular));

        let z = Matrix::new(3, 3, Q);
        assert_eq!(inverse(&z), Err(MatrixError::Singular));
    }

    #[test]
    fn cramer_rule() {
        let id = Matrix::identity(2, Q);
        let b = Vector::from_integers(&[3, 5], Q);
        assert_eq!(cramer(&id, &b).unwrap(), vec![Rational::from(3), Rational::from(5)]);

        // 2x + y = 5, x - y = 1
        let a = Matrix::from_integers(vec![vec![2, 1], vec![1, -1]], Q).unwrap();
        let b = Vector::from_integers(&[5, 1], Q);
        assert_eq!(cramer(&a, &b).unwrap(), vec![Rational::from(2), Rational::from(1)]);

        let a = Matrix::from_integers(vec![vec![1, 1], vec![2, 3]], Q).unwrap();
        let b = Vector::from_integers(&[1, 1], Q);
        assert_eq!(
            cramer(&a, &b).unwrap(),
            vec![Rational::from(2), Rational::from(-1)]
        );

        let s = Matrix::from_integers(vec![vec![1, 2], vec![2, 4]], Q).unwrap();
        assert!(cramer(&s, &b).unwrap().is_empty());

        assert_eq!(
            cramer(&a, &Vector::from_integers(&[1, 2, 3], Q)),
            Err(MatrixError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn cramer_fractions() {
        // x + 2y = 1, 3x + 4y = 0
        let a = Matrix::from_integers(vec![vec![1, 2], vec![3, 4]], Q).unwrap();
        let b = Vector::from_integers(&[1, 0], Q);
        let x = cramer(&a, &b).unwrap();
        assert_eq!(x, vec![Rational::from(-2), Rational::from((3, 2))]);
    }

    #[test]
    fn products() {
        let a = Vector::from_integers(&[1, 2, 3], Z);
        let b = Vector::from_integers(&[4, -5, 6], Z);
        assert_eq!(dot_product(&a, &b).unwrap(), 12);
        assert_eq!(
            dot_product(&a, &Vector::from_integers(&[1], Z)),
            Err(MatrixError::DimensionMismatch {
                expected: 3,
                found: 1
            })
        );

        let x = Vector::from_integers(&[1, 0, 0], Z);
        let y = Vector::from_integers(&[0, 1, 0], Z);
        assert_eq!(cross_product(&x, &y).unwrap(), Vector::from_integers(&[0, 0, 1], Z));
        assert_eq!(cross_product(&y, &x).unwrap(), Vector::from_integers(&[0, 0, -1], Z));
        assert_eq!(
            cross_product(&a, &b).unwrap(),
            Vector::from_integers(&[27, 6, -13], Z)
        );

        let c = cross_product(&a, &b).unwrap();
        assert_eq!(dot_product(&a, &c).unwrap(), 0);

        assert_eq!(
            cross_product(&Vector::from_integers(&[1, 2], Z), &b),
            Err(MatrixError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }
}
