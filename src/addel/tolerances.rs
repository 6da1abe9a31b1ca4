use super::UpdateError;
use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Relative pivot tolerances used to validate a trial factorization.
///
/// All tolerances are applied to the pivot eigenvalues `λ` of the
/// factorization, relative to the largest magnitude among them.  With
/// `gamma = min|λ| / max|λ|`:
///
/// - `|λ| <= zero_tol * max|λ|` counts `λ` as a zero eigenvalue,
/// - `gamma <= singular_tol` rejects the factorization as singular,
/// - `gamma <= warning_tol` accepts it with a near singular warning.

#[derive(Builder, Debug, Clone, Copy, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct PivotTolerances<T: FloatT> {
    ///pivot ratio below which a committed update carries a warning
    #[builder(default = "(1e-10).as_T()")]
    pub warning_tol: T,

    ///pivot ratio below which an update fails as singular
    #[builder(default = "(1e-14).as_T()")]
    pub singular_tol: T,

    ///relative magnitude below which a pivot eigenvalue counts as zero
    #[builder(default = "(1e-12).as_T()")]
    pub zero_tol: T,
}

impl<T> Default for PivotTolerances<T>
where
    T: FloatT,
{
    fn default() -> PivotTolerances<T> {
        PivotTolerancesBuilder::<T>::default().build().unwrap()
    }
}

impl<T> PivotTolerances<T>
where
    T: FloatT,
{
    /// Checks that all tolerances are finite and nonnegative, and that
    /// `singular_tol <= warning_tol`.
    pub fn validate(&self) -> Result<(), UpdateError> {
        check_tolerances(self.warning_tol, self.singular_tol, self.zero_tol)
    }
}

fn check_tolerances<T: FloatT>(warning_tol: T, singular_tol: T, zero_tol: T) -> Result<(), UpdateError> {
    let fields = [
        (warning_tol, "warning_tol"),
        (singular_tol, "singular_tol"),
        (zero_tol, "zero_tol"),
    ];
    for (v, name) in fields {
        if !(v.is_finite() && v >= T::zero()) {
            return Err(UpdateError::BadTolerances(name));
        }
    }
    if singular_tol > warning_tol {
        return Err(UpdateError::BadTolerances("singular_tol > warning_tol"));
    }
    Ok(())
}

// pre build checker (for auto-validation when using the builder)

impl From<UpdateError> for PivotTolerancesBuilderError {
    fn from(e: UpdateError) -> Self {
        PivotTolerancesBuilderError::ValidationError(e.to_string())
    }
}

impl<T> PivotTolerancesBuilder<T>
where
    T: FloatT,
{
    fn validate(&self) -> Result<(), UpdateError> {
        let defaults = PivotTolerancesBuilder::<T>::default_values();
        check_tolerances(
            self.warning_tol.unwrap_or(defaults.0),
            self.singular_tol.unwrap_or(defaults.1),
            self.zero_tol.unwrap_or(defaults.2),
        )
    }

    fn default_values() -> (T, T, T) {
        ((1e-10).as_T(), (1e-14).as_T(), (1e-12).as_T())
    }
}

#[test]
fn test_pivot_tolerances_builder() {
    let tol = PivotTolerances::<f64>::default();
    assert_eq!(tol.warning_tol, 1e-10);
    assert_eq!(tol.singular_tol, 1e-14);
    assert_eq!(tol.zero_tol, 1e-12);
    assert!(tol.validate().is_ok());

    let tol = PivotTolerancesBuilder::<f64>::default()
        .warning_tol(1e-6)
        .build()
        .unwrap();
    assert_eq!(tol.warning_tol, 1e-6);
    assert_eq!(tol.singular_tol, 1e-14);

    // singular_tol above the (default) warning_tol
    assert!(PivotTolerancesBuilder::<f64>::default()
        .singular_tol(1e-3)
        .build()
        .is_err());
    assert!(PivotTolerancesBuilder::<f64>::default()
        .zero_tol(-1.0)
        .build()
        .is_err());
    assert!(PivotTolerancesBuilder::<f64>::default()
        .warning_tol(f64::NAN)
        .build()
        .is_err());
}

#[test]
fn test_pivot_tolerances_validate() {
    let mut tol = PivotTolerances::<f32>::default();
    tol.singular_tol = 1.0;
    assert_eq!(
        tol.validate(),
        Err(UpdateError::BadTolerances("singular_tol > warning_tol"))
    );
    tol.singular_tol = 0.0;
    tol.zero_tol = f32::INFINITY;
    assert_eq!(tol.validate(), Err(UpdateError::BadTolerances("zero_tol")));
}

#[cfg(feature = "serde")]
#[test]
fn test_pivot_tolerances_serde() {
    let tol = PivotTolerancesBuilder::<f64>::default()
        .zero_tol(1e-9)
        .build()
        .unwrap();
    let json = serde_json::to_string(&tol).unwrap();
    let back: PivotTolerances<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(tol, back);
}
