// =========================================================================
// FALSIFY-MX: Matrix storage contract (matriz primitives)
//
// Each test attempts to falsify one documented guarantee of the storage
// and access layer: index remapping, copy round trips, and the metric
// axioms of the normed difference.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Transposed read equals direct read of swapped coordinates
#[test]
fn falsify_mx_001_transposed_read() {
    let a: Matrix<f64> = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    for r in 0..3 {
        for c in 0..2 {
            assert!(
                (a.get_transposed(r, c) - a.get(c, r)).abs() < 1e-12,
                "FALSIFIED MX-001: At[{r},{c}] != A[{c},{r}]"
            );
        }
    }
}

/// FALSIFY-MX-002: Double transpose-copy is the identity
#[test]
fn falsify_mx_002_double_transpose_identity() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let mut at = Matrix::zeros(3, 2).expect("valid");
    let mut att = Matrix::zeros(2, 3).expect("valid");
    at.copy_transpose(&a).expect("complementary shapes");
    att.copy_transpose(&at).expect("complementary shapes");

    assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-002: shape mismatch");
    for i in 0..2 {
        for j in 0..3 {
            assert!(
                (att.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "FALSIFIED MX-002: (A^T)^T[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-MX-003: Flatten then copy-from-slice reproduces the matrix
#[test]
fn falsify_mx_003_flatten_round_trip() {
    let a = Matrix::from_vec(2, 3, vec![1.0, -2.0, 3.0, 4.0, 5.5, -6.0]).expect("valid");
    let mut buf = [0.0; 6];
    a.flatten(&mut buf).expect("buffer large enough");
    let mut b = Matrix::zeros(2, 3).expect("valid");
    b.copy_from_slice(&buf).expect("buffer large enough");

    assert_eq!(b, a, "FALSIFIED MX-003: round trip changed contents");
}

/// FALSIFY-MX-004: Normed difference is a metric on equal shapes
#[test]
fn falsify_mx_004_normed_difference_metric() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![0.0, -1.0, 5.0, 4.5]).expect("valid");

    assert_eq!(
        a.normed_difference(&a).expect("same shape"),
        0.0,
        "FALSIFIED MX-004: d(A, A) != 0"
    );
    let ab = a.normed_difference(&b).expect("same shape");
    let ba = b.normed_difference(&a).expect("same shape");
    assert!(
        (ab - ba).abs() < 1e-12,
        "FALSIFIED MX-004: d(A,B)={ab} != d(B,A)={ba}"
    );
    assert!(ab >= 0.0, "FALSIFIED MX-004: negative distance");
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-001-prop: Transposed read for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_transposed_read(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..rows * cols)
                .map(|i| ((i as f64 + seed as f64) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");

            for r in 0..cols {
                for c in 0..rows {
                    prop_assert!(
                        (a.get_transposed(r, c) - a.get(c, r)).abs() < 1e-12,
                        "FALSIFIED MX-001-prop: At[{},{}] != A[{},{}]",
                        r, c, c, r
                    );
                }
            }
        }
    }

    /// FALSIFY-MX-002-prop: Double transpose-copy identity for random shapes
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_002_prop_double_transpose_identity(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..rows * cols)
                .map(|i| ((i as f64 + seed as f64) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            let mut at = Matrix::zeros(cols, rows).expect("valid");
            let mut att = Matrix::zeros(rows, cols).expect("valid");
            at.copy_transpose(&a).expect("complementary shapes");
            att.copy_transpose(&at).expect("complementary shapes");

            prop_assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-002-prop: shape mismatch");
            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (att.get(i, j) - a.get(i, j)).abs() < 1e-12,
                        "FALSIFIED MX-002-prop: (A^T)^T[{},{}] != A[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }

    /// FALSIFY-MX-005-prop: Scale by 1 preserves, scale by 0 annihilates
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_005_prop_scale_identity_and_annihilation(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..n * n)
                .map(|i| ((i as f64 + seed as f64) * 0.37).sin() * 10.0)
                .collect();
            let original = Matrix::from_vec(n, n, data).expect("valid");

            let mut scaled = original.clone();
            scaled.scale(1.0);
            prop_assert!(
                scaled.normed_difference(&original).expect("same shape") < 1e-12,
                "FALSIFIED MX-005-prop: scale(1.0) changed contents"
            );

            scaled.scale(0.0);
            prop_assert!(
                scaled.norm() == 0.0,
                "FALSIFIED MX-005-prop: scale(0.0) left nonzero elements"
            );
        }
    }
}
