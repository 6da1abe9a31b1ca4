#![allow(non_snake_case)]

use crate::algebra::*;

// Bunch-Kaufman growth constant (1 + sqrt(17))/8
fn bk_alpha<T: FloatT>() -> T {
    let seventeen: T = (17.0).as_T();
    (T::one() + seventeen.sqrt()) / (8.0).as_T()
}

impl<S, T> TriangularView<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    // index and magnitude of the largest |A(i,col)| over rows i in `rows`
    fn iamax_col(&self, col: usize, rows: std::ops::Range<usize>) -> (usize, T) {
        let mut imax = rows.start;
        let mut vmax = -T::one();
        for i in rows {
            let v = self[(i, col)].abs();
            if v > vmax {
                imax = i;
                vmax = v;
            }
        }
        (imax, vmax)
    }

    // as iamax_col, but along row `row` over columns `cols`
    fn iamax_row(&self, row: usize, cols: std::ops::Range<usize>) -> (usize, T) {
        let mut jmax = cols.start;
        let mut vmax = -T::one();
        for j in cols {
            let v = self[(row, j)].abs();
            if v > vmax {
                jmax = j;
                vmax = v;
            }
        }
        (jmax, vmax)
    }
}

impl<S, T> FactorBunchKaufman<T> for TriangularView<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: FloatT,
{
    fn factor_bunch_kaufman(&mut self, ipiv: &mut [PivotIndex]) -> Result<(), FactorizationError> {
        let n = self.n;
        assert!(ipiv.len() >= n);
        let alpha = bk_alpha::<T>();

        // follows the unblocked ?sytf2 lower triangular algorithm
        let mut k = 0;
        while k < n {
            let mut kstep = 1;
            let absakk = self[(k, k)].abs();

            let (imax, colmax) = if k + 1 < n {
                self.iamax_col(k, (k + 1)..n)
            } else {
                (k, T::zero())
            };

            if absakk.is_nan() || colmax.is_nan() {
                return Err(FactorizationError::NonFinite { index: k });
            }
            if T::max(absakk, colmax) == T::zero() {
                return Err(FactorizationError::ZeroPivot { index: k });
            }

            let kp = if absakk >= alpha * colmax {
                // no interchange, 1x1 pivot
                k
            } else {
                // largest off diagonal in row/column imax of the trailing block
                let (_, mut rowmax) = self.iamax_row(imax, k..imax);
                if imax + 1 < n {
                    let (_, colmax2) = self.iamax_col(imax, (imax + 1)..n);
                    rowmax = T::max(rowmax, colmax2);
                }

                if absakk >= alpha * colmax * (colmax / rowmax) {
                    k
                } else if self[(imax, imax)].abs() >= alpha * rowmax {
                    imax
                } else {
                    kstep = 2;
                    imax
                }
            };

            let kk = k + kstep - 1;
            if kp != kk {
                // interchange rows and columns kk and kp in the trailing block
                for i in (kp + 1)..n {
                    self.swap((i, kk), (i, kp));
                }
                for j in (kk + 1)..kp {
                    self.swap((j, kk), (kp, j));
                }
                self.swap((kk, kk), (kp, kp));
                if kstep == 2 {
                    self.swap((k + 1, k), (kp, k));
                }
            }

            if kstep == 1 {
                // rank 1 update of the trailing block with the 1x1 pivot
                let r1 = T::recip(self[(k, k)]);
                for j in (k + 1)..n {
                    let t = r1 * self[(j, k)];
                    for i in j..n {
                        self[(i, j)] = self[(i, j)] - self[(i, k)] * t;
                    }
                }
                for i in (k + 1)..n {
                    self[(i, k)] *= r1;
                }
                ipiv[k] = BkPivot::OneByOne(kp).into();
            } else {
                // rank 2 update of the trailing block with the 2x2 pivot
                if k + 2 < n {
                    let d21 = self[(k + 1, k)];
                    let d11 = self[(k + 1, k + 1)] / d21;
                    let d22 = self[(k, k)] / d21;
                    let t = T::recip(d11 * d22 - T::one());
                    let d21 = t / d21;

                    for j in (k + 2)..n {
                        let wk = d21 * (d11 * self[(j, k)] - self[(j, k + 1)]);
                        let wkp1 = d21 * (d22 * self[(j, k + 1)] - self[(j, k)]);
                        for i in j..n {
                            self[(i, j)] = self[(i, j)] - (self[(i, k)] * wk + self[(i, k + 1)] * wkp1);
                        }
                        self[(j, k)] = wk;
                        self[(j, k + 1)] = wkp1;
                    }
                }
                ipiv[k] = BkPivot::TwoByTwo(kp).into();
                ipiv[k + 1] = ipiv[k];
            }

            k += kstep;
        }

        // catches overflow in the trailing updates
        for j in 0..n {
            if !self[(j, j)].is_finite() {
                return Err(FactorizationError::NonFinite { index: j });
            }
        }

        Ok(())
    }
}

impl<S, T> SolveBunchKaufman<T> for TriangularView<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    fn solve_bunch_kaufman(&self, ipiv: &[PivotIndex], b: &mut [T]) {
        let n = self.n;
        assert_eq!(b.len(), n);

        // forward: solve L D y = P b
        let mut k = 0;
        while k < n {
            match ipiv[k].decode() {
                BkPivot::OneByOne(kp) => {
                    b.swap(k, kp);
                    for i in (k + 1)..n {
                        b[i] = b[i] - self[(i, k)] * b[k];
                    }
                    b[k] /= self[(k, k)];
                    k += 1;
                }
                BkPivot::TwoByTwo(kp) => {
                    b.swap(k + 1, kp);
                    for i in (k + 2)..n {
                        b[i] = b[i] - (self[(i, k)] * b[k] + self[(i, k + 1)] * b[k + 1]);
                    }
                    let akm1k = self[(k + 1, k)];
                    let akm1 = self[(k, k)] / akm1k;
                    let ak = self[(k + 1, k + 1)] / akm1k;
                    let denom = akm1 * ak - T::one();
                    let bkm1 = b[k] / akm1k;
                    let bk = b[k + 1] / akm1k;
                    b[k] = (ak * bkm1 - bk) / denom;
                    b[k + 1] = (akm1 * bk - bkm1) / denom;
                    k += 2;
                }
            }
        }

        // backward: solve L^T P^T x = y
        let mut k = n;
        while k > 0 {
            let kl = k - 1;
            match ipiv[kl].decode() {
                BkPivot::OneByOne(kp) => {
                    for i in (kl + 1)..n {
                        b[kl] = b[kl] - self[(i, kl)] * b[i];
                    }
                    b.swap(kl, kp);
                    k -= 1;
                }
                BkPivot::TwoByTwo(kp) => {
                    // block occupies rows kl-1 and kl
                    for i in (kl + 1)..n {
                        b[kl] = b[kl] - self[(i, kl)] * b[i];
                        b[kl - 1] = b[kl - 1] - self[(i, kl - 1)] * b[i];
                    }
                    b.swap(kl, kp);
                    k -= 2;
                }
            }
        }
    }
}
