//! Property-based tests for fraction arithmetic and the cofactor algorithms.

use proptest::prelude::*;

use cofactor::{
    domains::{
        integer::{Integer, Z},
        rational::{Rational, Q},
    },
    tensors::{
        linear_system::{adjoint, cramer, inverse},
        matrix::{Matrix, Vector},
    },
    utils::gcd_signed,
};

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn fraction() -> impl Strategy<Value = Rational> {
    (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn non_zero_fraction() -> impl Strategy<Value = Rational> {
    (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn square_matrix(max_order: usize) -> impl Strategy<Value = Matrix<Z>> {
    (0..=max_order).prop_flat_map(|n| {
        proptest::collection::vec(-20i64..20i64, n * n).prop_map(move |data| {
            Matrix::from_linear(data.into_iter().map(Integer::from).collect(), n, n, Z).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn gcd_divides(a in any::<i64>(), b in any::<i64>()) {
        let g = gcd_signed(a, b);
        if g != 0 {
            prop_assert_eq!(a.unsigned_abs() % g, 0);
            prop_assert_eq!(b.unsigned_abs() % g, 0);
        } else {
            prop_assert!(a == 0 && b == 0);
        }
    }

    #[test]
    fn construction_is_normalized(n in small_int(), d in non_zero_int()) {
        let r = Rational::new(n, d).unwrap();
        prop_assert!(r.is_simplified());
        prop_assert!(!r.denominator().is_negative());
        prop_assert_eq!(Rational::new(n * 3, d * 3).unwrap(), r.clone());
        prop_assert_eq!(Rational::with_simplify(n * 6, d * 6, false).unwrap(), r);
    }

    #[test]
    fn add_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_associative(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn mul_associative(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn mul_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn distributive(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn additive_inverse(a in fraction()) {
        prop_assert!((&a + &(-&a)).is_zero());
        prop_assert_eq!(&a - &a, Rational::zero());
    }

    #[test]
    fn division_inverts_multiplication(a in fraction(), b in non_zero_fraction()) {
        prop_assert_eq!((&a * &b).checked_div(&b).unwrap(), a.clone());
        prop_assert!(a.checked_div(&Rational::zero()).is_err());
    }

    #[test]
    fn double_reciprocal(a in non_zero_fraction()) {
        prop_assert_eq!(a.reciprocal().unwrap().reciprocal().unwrap(), a);
    }

    #[test]
    fn deferred_simplification_agrees(a in fraction(), b in fraction()) {
        prop_assert_eq!(a.add_with(&b, false), &a + &b);
        prop_assert_eq!(a.mul_with(&b, false).simplify(), &a * &b);
        prop_assert_eq!(a.sub_with(&b, false).to_string(), (&a - &b).to_string());
    }

    #[test]
    fn det_of_transpose(m in square_matrix(4)) {
        prop_assert_eq!(m.det().unwrap(), m.transpose().det().unwrap());
    }

    #[test]
    fn zero_row_has_zero_det(m in square_matrix(4), row in 1usize..5) {
        prop_assume!(m.nrows() > 0);
        let mut m = m;
        let row = (row - 1) % m.nrows() + 1;
        for c in 1..=m.ncols() {
            m.write(row, c, Integer::zero()).unwrap();
        }
        prop_assert!(m.det().unwrap().is_zero());
    }

    #[test]
    fn adjoint_identity(m in square_matrix(4)) {
        let det = m.det().unwrap();
        let expected = Matrix::identity(m.nrows(), Z).mul_scalar(&det);
        prop_assert_eq!(&adjoint(&m).unwrap() * &m, expected);
    }

    #[test]
    fn inverse_round_trip(m in square_matrix(4)) {
        let q = m.to_rational();
        match inverse(&q) {
            Ok(inv) => prop_assert_eq!(&inv * &q, Matrix::identity(q.nrows(), Q)),
            Err(_) => prop_assert!(m.det().unwrap().is_zero()),
        }
    }

    #[test]
    fn cramer_solves_system(m in square_matrix(3), b in proptest::collection::vec(-20i64..20i64, 3)) {
        let q = m.to_rational();
        let b = Vector::from_integers(&b[..q.nrows()], Q);
        let x = cramer(&q, &b).unwrap();

        if x.is_empty() && q.nrows() > 0 {
            prop_assert!(m.det().unwrap().is_zero());
        } else {
            let xm = Matrix::from_linear(x, q.nrows(), 1, Q).unwrap();
            let ax = &q * &xm;
            prop_assert_eq!(ax.read_column(1).unwrap(), b.into_vec());
        }
    }
}
