#![allow(non_snake_case, dead_code)]

// Independent dense reference computations for the integration tests.

use symaddel::addel::*;
use symaddel::algebra::*;

/// Symmetric matrix as a vector of rows
pub type Dense = Vec<Vec<f64>>;

pub fn to_matrix(A: &Dense) -> Matrix<f64> {
    let n = A.len();
    let mut M = Matrix::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            M[(i, j)] = A[i][j];
        }
    }
    M
}

/// y = A*x
pub fn dense_multiply(A: &Dense, x: &[f64]) -> Vec<f64> {
    A.iter().map(|row| row[..].dot(x)).collect()
}

/// Solves A x = b by Gaussian elimination with partial pivoting
pub fn dense_solve(A: &Dense, b: &[f64]) -> Vec<f64> {
    let n = A.len();
    let mut M = A.clone();
    let mut x = b.to_vec();

    for k in 0..n {
        let p = (k..n)
            .max_by(|&i, &j| M[i][k].abs().total_cmp(&M[j][k].abs()))
            .unwrap();
        M.swap(k, p);
        x.swap(k, p);
        for i in (k + 1)..n {
            let l = M[i][k] / M[k][k];
            for j in k..n {
                M[i][j] -= l * M[k][j];
            }
            x[i] -= l * x[k];
        }
    }
    for k in (0..n).rev() {
        let s: f64 = ((k + 1)..n).map(|j| M[k][j] * x[j]).sum();
        x[k] = (x[k] - s) / M[k][k];
    }
    x
}

/// Eigenvalues of a symmetric matrix by cyclic Jacobi rotations
pub fn symmetric_eigenvalues(A: &Dense) -> Vec<f64> {
    let n = A.len();
    let mut a = A.clone();
    let frob: f64 = a.iter().flatten().map(|v| v * v).sum();

    for _sweep in 0..100 {
        let mut off = 0.;
        for p in 0..n {
            for q in 0..n {
                if p != q {
                    off += a[p][q] * a[p][q];
                }
            }
        }
        if off <= 1e-30 * frob {
            break;
        }
        for p in 0..n {
            for q in (p + 1)..n {
                if a[p][q] == 0. {
                    continue;
                }
                let theta = (a[q][q] - a[p][p]) / (2. * a[p][q]);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.).sqrt());
                let c = 1. / (t * t + 1.).sqrt();
                let s = t * c;
                for k in 0..n {
                    let (akp, akq) = (a[k][p], a[k][q]);
                    a[k][p] = c * akp - s * akq;
                    a[k][q] = s * akp + c * akq;
                }
                for k in 0..n {
                    let (apk, aqk) = (a[p][k], a[q][k]);
                    a[p][k] = c * apk - s * aqk;
                    a[q][k] = s * apk + c * aqk;
                }
            }
        }
    }
    (0..n).map(|i| a[i][i]).collect()
}

/// Inertia from eigenvalues, counting |λ| <= reltol*max|λ| as zero
pub fn dense_inertia(A: &Dense, reltol: f64) -> Inertia {
    let eigs = symmetric_eigenvalues(A);
    let maxabs = eigs.iter().fold(0., |m: f64, λ| m.max(λ.abs()));
    let mut inertia = Inertia::default();
    for λ in eigs {
        if λ.abs() <= reltol * maxabs {
            inertia.zero += 1;
        } else if λ > 0. {
            inertia.pos += 1;
        } else {
            inertia.neg += 1;
        }
    }
    inertia
}

/// min|λ|/max|λ|, or 1 for an empty matrix
pub fn eigenvalue_ratio(A: &Dense) -> f64 {
    let eigs = symmetric_eigenvalues(A);
    if eigs.is_empty() {
        return 1.;
    }
    let minabs = eigs.iter().fold(f64::INFINITY, |m, λ| m.min(λ.abs()));
    let maxabs = eigs.iter().fold(0., |m: f64, λ| m.max(λ.abs()));
    minabs / maxabs
}

/// [A t; t' alpha]
pub fn bordered(A: &Dense, t: &[f64], alpha: f64) -> Dense {
    let mut B: Dense = A
        .iter()
        .zip(t)
        .map(|(row, &ti)| {
            let mut row = row.clone();
            row.push(ti);
            row
        })
        .collect();
    let mut last = t.to_vec();
    last.push(alpha);
    B.push(last);
    B
}

/// A with row and column jd (1-based) removed
pub fn deleted(A: &Dense, jd: usize) -> Dense {
    A.iter()
        .enumerate()
        .filter(|&(i, _)| i != jd - 1)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|&(j, _)| j != jd - 1)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Initializes a factorization of A with room to grow, declaring its inertia
pub fn factorization_of(
    A: &Dense,
    max_size: usize,
    inertia: Inertia,
) -> MatrixSymAddDelBunchKaufman<f64> {
    let mut S = MatrixSymAddDelBunchKaufman::new();
    let M = to_matrix(A);
    let outcome = S
        .initialize(
            &M.sym(MatrixTriangle::Tril),
            max_size,
            true,
            Some(inertia),
            PivotTolerances::default(),
        )
        .unwrap();
    assert!(outcome.is_committed(), "initialize: {outcome}");
    S
}

/// Solves with the factorization and returns the solution
pub fn solve_with(S: &mut MatrixSymAddDelBunchKaufman<f64>, b: &[f64]) -> Vec<f64> {
    let mut x = vec![0.; b.len()];
    S.solve(&mut x, MatrixShape::N, b).unwrap();
    x
}
