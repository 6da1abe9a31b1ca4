#![allow(non_snake_case)]

// Random sequences of updates, checked against dense eigenvalue and
// elimination references after every step.

mod common;
use common::*;
use rand_chacha::ChaCha8Rng;
use rand::{Rng, SeedableRng};
use symaddel::addel::*;
use symaddel::algebra::*;

const MAX_SIZE: usize = 8;

// sign of the eigenvalue gained going from `from` to `to`, if there is
// exactly one
fn gained_sign(from: Inertia, to: Inertia) -> Option<EigenSign> {
    if to.zero != 0 || from.zero != 0 {
        return None;
    }
    match (to.neg as isize - from.neg as isize, to.pos as isize - from.pos as isize) {
        (1, 0) => Some(EigenSign::Negative),
        (0, 1) => Some(EigenSign::Positive),
        _ => None,
    }
}

fn check_against(S: &mut MatrixSymAddDelBunchKaufman<f64>, A: &Dense, rng: &mut ChaCha8Rng) {
    let n = A.len();
    assert_eq!(S.rows(), n);
    assert_eq!(S.inertia(), Some(dense_inertia(A, 1e-12)));

    let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let x = solve_with(S, &b);
    let xref = dense_solve(A, &b);
    assert!(
        x.norm_inf_diff(&xref) <= 1e-8 * (1. + xref.norm_inf()),
        "solve mismatch at n = {n}: {x:?} vs {xref:?}"
    );

    let mut y = vec![0.; n];
    S.multiply(&mut y, 1., MatrixShape::N, &b, 0.).unwrap();
    assert!(y.norm_inf_diff(&dense_multiply(A, &b)) < 1e-12);
}

fn run_sequence(seed: u64, steps: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let tol = PivotTolerances::default();

    let mut S = MatrixSymAddDelBunchKaufman::new();
    let E = Matrix::<f64>::zeros((0, 0));
    let outcome = S
        .initialize(
            &E.sym(MatrixTriangle::Tril),
            MAX_SIZE,
            true,
            Some(Inertia::default()),
            tol,
        )
        .unwrap();
    assert!(outcome.is_committed());
    let mut A: Dense = vec![];

    let mut committed = 0;
    for _ in 0..steps {
        let n = A.len();
        let grow = n == 0 || (n < MAX_SIZE && rng.gen_bool(0.6));

        if grow {
            let t: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let alpha = rng.gen_range(-3.0..3.0);
            let B = bordered(&A, &t, alpha);
            if eigenvalue_ratio(&B) < 1e-6 {
                continue;
            }
            let Some(sign) = gained_sign(dense_inertia(&A, 1e-12), dense_inertia(&B, 1e-12))
            else {
                continue;
            };
            let outcome = S.augment_update(Some(&t), alpha, false, sign, tol).unwrap();
            assert!(outcome.is_committed(), "augment to {}: {outcome}", n + 1);
            A = B;
        } else {
            let jd = rng.gen_range(1..=n);
            let C = deleted(&A, jd);
            if eigenvalue_ratio(&C) < 1e-6 {
                continue;
            }
            let Some(sign) = gained_sign(dense_inertia(&C, 1e-12), dense_inertia(&A, 1e-12))
            else {
                continue;
            };
            let outcome = S.delete_update(jd, false, sign, tol).unwrap();
            assert!(outcome.is_committed(), "delete {jd} of {n}: {outcome}");
            A = C;
        }
        committed += 1;
        check_against(&mut S, &A, &mut rng);
    }
    assert!(committed > steps / 2);
}

#[test]
fn test_random_sequences() {
    for seed in 0..8 {
        run_sequence(seed, 150);
    }
}

#[test]
fn test_declared_sign_is_enforced() {
    // declaring the opposite sign is always rejected, and harmless
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let tol = PivotTolerances::default();
    let A = vec![vec![2., 0.5, 0.], vec![0.5, -1., 0.25], vec![0., 0.25, 3.]];
    let mut S = factorization_of(&A, MAX_SIZE, dense_inertia(&A, 1e-12));

    for _ in 0..20 {
        let t: Vec<f64> = (0..3).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let alpha = rng.gen_range(-3.0..3.0);
        let B = bordered(&A, &t, alpha);
        if eigenvalue_ratio(&B) < 1e-6 {
            continue;
        }
        let Some(sign) = gained_sign(dense_inertia(&A, 1e-12), dense_inertia(&B, 1e-12)) else {
            continue;
        };
        let wrong = match sign {
            EigenSign::Positive => EigenSign::Negative,
            _ => EigenSign::Positive,
        };
        let outcome = S.augment_update(Some(&t), alpha, false, wrong, tol).unwrap();
        assert!(outcome.is_skipped(), "{outcome}");
        check_against(&mut S, &A, &mut rng);
    }
}
