use cofactor::{
    domains::{
        integer::{Integer, Z},
        rational::{Rational, Q},
        ArithmeticError,
    },
    settings::ExpansionSettings,
    tensors::{
        linear_system::{adjoint, cramer, cross_product, dot_product, inverse},
        matrix::{Matrix, MatrixError, Vector},
    },
};

#[test]
fn fraction_matrix() {
    let half: Rational = (1, 2).into();
    let third: Rational = (1, 3).into();

    let a = Matrix::from_nested_vec(
        vec![
            vec![half.clone(), third.clone()],
            vec![third.clone(), half.clone()],
        ],
        Q,
    )
    .unwrap();

    // 1/4 - 1/9
    assert_eq!(a.det().unwrap(), Rational::from((5, 36)));

    let inv = inverse(&a).unwrap();
    assert_eq!(inv.to_string(), "[18/5, -12/5]\n[-12/5, 18/5]");
    assert_eq!(&inv * &a, Matrix::identity(2, Q));

    let x = cramer(&a, &Vector::new(vec![half.clone(), half], Q)).unwrap();
    assert_eq!(x, vec![Rational::from((3, 5)), Rational::from((3, 5))]);
}

#[test]
fn integer_matrix_lifted_to_fractions() {
    let a = Matrix::from_integers(vec![vec![2, -1, 0], vec![-1, 2, -1], vec![0, -1, 2]], Z)
        .unwrap();
    assert_eq!(a.det().unwrap(), 4);

    let adj = adjoint(&a).unwrap();
    assert_eq!(adj.to_string(), "[3, 2, 1]\n[2, 4, 2]\n[1, 2, 3]");

    let q = a.to_rational();
    let inv = inverse(&q).unwrap();
    assert_eq!(inv, adj.to_rational().mul_scalar(&(1, 4).into()));
    assert_eq!(*inv.read(2, 2).unwrap(), Rational::one());
}

#[test]
fn large_entries() {
    let big = Integer::new(i64::MAX);
    let a = Matrix::from_nested_vec(
        vec![vec![big.clone(), 1.into()], vec![1.into(), big.clone()]],
        Z,
    )
    .unwrap();

    let det = a.det().unwrap();
    assert_eq!(det, &(&big * &big) - &Integer::one());

    let inv = inverse(&a.to_rational()).unwrap();
    assert_eq!(&inv * &a.to_rational(), Matrix::identity(2, Q));
}

#[test]
fn errors() {
    let a = Matrix::from_integers(vec![vec![1, 2, 3], vec![4, 5, 6]], Q).unwrap();
    assert_eq!(
        inverse(&a),
        Err(MatrixError::NotSquare { nrows: 2, ncols: 3 })
    );
    assert_eq!(
        MatrixError::from(ArithmeticError::DivisionByZero),
        MatrixError::DivisionByZero
    );
    assert_eq!(
        MatrixError::OrderTooLarge {
            order: 9,
            max_order: 8
        }
        .to_string(),
        "Matrix of order 9 exceeds the maximal expansion order 8"
    );
    assert_eq!(Rational::new(3, 0).unwrap_err().to_string(), "Division by zero");
}

#[test]
fn vectors() {
    let a = Vector::from_integers(&[3, -3, 1], Q);
    let b = Vector::from_integers(&[4, 9, 2], Q);
    let c = cross_product(&a, &b).unwrap();
    assert_eq!(c.to_string(), "[-15, -2, 39]");
    assert_eq!(dot_product(&c, &a).unwrap(), Rational::zero());
    assert_eq!(dot_product(&c, &b).unwrap(), Rational::zero());
}

#[test]
fn bounded_expansion() {
    let settings = ExpansionSettings::with_max_order(2);
    let a = Matrix::from_integers(vec![vec![1, 2, 1], vec![-3, 1, -2], vec![2, 3, -1]], Z)
        .unwrap();
    assert!(matches!(
        settings.det(&a),
        Err(MatrixError::OrderTooLarge { order: 3, .. })
    ));
    assert_eq!(ExpansionSettings::default().det(&a).unwrap(), -20);
}
