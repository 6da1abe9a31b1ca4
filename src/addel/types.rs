use crate::algebra::*;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------
// eigenvalue signs and inertia
// ---------------------------------

/// Sign of an eigenvalue added to or removed from the factored matrix.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EigenSign {
    Positive,
    Negative,
    Zero,
}

impl fmt::Display for EigenSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Definiteness of a matrix factored with a Cholesky factorization.
///
/// A negative definite matrix `S` is held as the Cholesky factor of `-S`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Definiteness {
    Positive,
    Negative,
}

impl Definiteness {
    /// the eigenvalue sign shared by every eigenvalue of the matrix
    pub fn sign(&self) -> EigenSign {
        match self {
            Definiteness::Positive => EigenSign::Positive,
            Definiteness::Negative => EigenSign::Negative,
        }
    }
}

/// Inertia of a symmetric matrix, i.e. its count of negative, zero
/// and positive eigenvalues.
///
/// An inertia that has not been computed or validated is represented
/// as `Option<Inertia>::None` throughout the crate.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Inertia {
    /// number of negative eigenvalues
    pub neg: usize,
    /// number of zero eigenvalues
    pub zero: usize,
    /// number of positive eigenvalues
    pub pos: usize,
}

impl Inertia {
    pub fn new(neg: usize, zero: usize, pos: usize) -> Self {
        Self { neg, zero, pos }
    }

    /// Inertia of an `n x n` matrix whose eigenvalues all have the sign `sign`.
    pub fn uniform(sign: EigenSign, n: usize) -> Self {
        Inertia::default().with(sign, n)
    }

    /// dimension of the matrix with this inertia
    pub fn dim(&self) -> usize {
        self.neg + self.zero + self.pos
    }

    /// number of eigenvalues with the given sign
    pub fn count(&self, sign: EigenSign) -> usize {
        match sign {
            EigenSign::Negative => self.neg,
            EigenSign::Zero => self.zero,
            EigenSign::Positive => self.pos,
        }
    }

    fn with(mut self, sign: EigenSign, k: usize) -> Self {
        match sign {
            EigenSign::Negative => self.neg += k,
            EigenSign::Zero => self.zero += k,
            EigenSign::Positive => self.pos += k,
        }
        self
    }

    /// Inertia after adding one eigenvalue of sign `sign`
    pub fn added(&self, sign: EigenSign) -> Self {
        self.with(sign, 1)
    }

    /// Inertia after removing one eigenvalue of sign `sign`, or `None`
    /// if there is no such eigenvalue to remove.
    pub fn removed(&self, sign: EigenSign) -> Option<Self> {
        if self.count(sign) == 0 {
            return None;
        }
        let mut out = *self;
        match sign {
            EigenSign::Negative => out.neg -= 1,
            EigenSign::Zero => out.zero -= 1,
            EigenSign::Positive => out.pos -= 1,
        }
        Some(out)
    }

    /// The definiteness of a nonempty matrix with this inertia, if it
    /// is definite.
    pub fn definiteness(&self) -> Option<Definiteness> {
        match (self.neg, self.zero, self.pos) {
            (0, 0, p) if p > 0 => Some(Definiteness::Positive),
            (n, 0, 0) if n > 0 => Some(Definiteness::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Inertia {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(neg = {}, zero = {}, pos = {})", self.neg, self.zero, self.pos)
    }
}

// ---------------------------------
// factorization kind
// ---------------------------------

/// The factorization currently held by a
/// [`MatrixSymAddDelBunchKaufman`](crate::addel::MatrixSymAddDelBunchKaufman).
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum FactorizationKind {
    /// Not initialized.  Only `initialize*` may be called.
    #[default]
    Uninitialized,
    /// Initialized with a 0x0 matrix.
    Empty,
    /// Original matrix stored and declared definite, but not yet factored.
    /// The factorization is computed on the first solve.
    Deferred(Definiteness),
    /// Cholesky factorization of `S` (positive) or `-S` (negative).
    Cholesky(Definiteness),
    /// Bunch-Kaufman factorization `PSP' = LDL'`.
    Indefinite,
}

impl FactorizationKind {
    pub fn is_initialized(&self) -> bool {
        !matches!(self, FactorizationKind::Uninitialized)
    }
}

impl fmt::Display for FactorizationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FactorizationKind::Uninitialized => write!(f, "uninitialized"),
            FactorizationKind::Empty => write!(f, "empty"),
            FactorizationKind::Deferred(Definiteness::Positive) => {
                write!(f, "positive definite (not yet factored)")
            }
            FactorizationKind::Deferred(Definiteness::Negative) => {
                write!(f, "negative definite (not yet factored)")
            }
            FactorizationKind::Cholesky(Definiteness::Positive) => {
                write!(f, "positive definite (Cholesky)")
            }
            FactorizationKind::Cholesky(Definiteness::Negative) => {
                write!(f, "negative definite (Cholesky)")
            }
            FactorizationKind::Indefinite => write!(f, "indefinite (Bunch-Kaufman)"),
        }
    }
}

// ---------------------------------
// update outcomes
// ---------------------------------

/// Result of an update that did not violate any precondition.
///
/// `Skipped` and `Failed` outcomes leave the factorization exactly as it
/// was before the call.
#[must_use]
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum UpdateOutcome<T> {
    /// The update was accepted.  A warning may still be attached.
    Committed { warning: Option<UpdateWarning<T>> },
    /// The candidate did not have the expected inertia.  The caller
    /// should treat the move as numerically inadmissible.
    Skipped(SkipReason),
    /// The candidate could not be used at all.
    Failed(FailReason<T>),
}

impl<T> UpdateOutcome<T> {
    pub fn is_committed(&self) -> bool {
        matches!(self, UpdateOutcome::Committed { .. })
    }
    pub fn is_skipped(&self) -> bool {
        matches!(self, UpdateOutcome::Skipped(_))
    }
    pub fn is_failed(&self) -> bool {
        matches!(self, UpdateOutcome::Failed(_))
    }
    /// warning attached to a committed update, if any
    pub fn warning(&self) -> Option<&UpdateWarning<T>> {
        match self {
            UpdateOutcome::Committed { warning } => warning.as_ref(),
            _ => None,
        }
    }
}

/// Warning attached to a committed update
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum UpdateWarning<T> {
    /// The inertia differed from the expected one, but the update was forced.
    WrongInertia { expected: Inertia, computed: Inertia },
    /// The pivot ratio `gamma = min|λ|/max|λ|` is below the warning tolerance.
    NearSingular { gamma: T },
}

/// Reason for a skipped update
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SkipReason {
    WrongInertia { expected: Inertia, computed: Inertia },
}

/// Reason for a failed update
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum FailReason<T> {
    /// The pivot ratio `gamma` is below the singular tolerance
    Singular { gamma: T },
    /// The factorization kernel stopped
    Factorization(FactorizationError),
}

impl<T: FloatT> fmt::Display for UpdateWarning<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UpdateWarning::WrongInertia { expected, computed } => write!(
                f,
                "forced update has inertia {computed}, expected {expected}"
            ),
            UpdateWarning::NearSingular { gamma } => {
                write!(f, "update is near singular (gamma = {gamma:e})")
            }
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkipReason::WrongInertia { expected, computed } => {
                write!(f, "update has inertia {computed}, expected {expected}")
            }
        }
    }
}

impl<T: FloatT> fmt::Display for FailReason<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FailReason::Singular { gamma } => write!(f, "update is singular (gamma = {gamma:e})"),
            FailReason::Factorization(e) => write!(f, "{e}"),
        }
    }
}

impl<T: FloatT> fmt::Display for UpdateOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UpdateOutcome::Committed { warning: None } => write!(f, "committed"),
            UpdateOutcome::Committed { warning: Some(w) } => write!(f, "committed ({w})"),
            UpdateOutcome::Skipped(r) => write!(f, "skipped ({r})"),
            UpdateOutcome::Failed(r) => write!(f, "failed ({r})"),
        }
    }
}

#[test]
fn test_inertia_arithmetic() {
    let i = Inertia::new(1, 0, 2);
    assert_eq!(i.dim(), 3);
    assert_eq!(i.added(EigenSign::Zero), Inertia::new(1, 1, 2));
    assert_eq!(i.removed(EigenSign::Negative), Some(Inertia::new(0, 0, 2)));
    assert_eq!(i.removed(EigenSign::Zero), None);
    assert_eq!(i.count(EigenSign::Positive), 2);

    assert_eq!(i.definiteness(), None);
    assert_eq!(Inertia::new(0, 0, 2).definiteness(), Some(Definiteness::Positive));
    assert_eq!(Inertia::new(3, 0, 0).definiteness(), Some(Definiteness::Negative));
    assert_eq!(Inertia::new(0, 1, 2).definiteness(), None);
    assert_eq!(Inertia::default().definiteness(), None);
    assert_eq!(Inertia::uniform(EigenSign::Negative, 2), Inertia::new(2, 0, 0));
}
