//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an array's length differs from the basis size declared at
/// construction.
#[derive(Debug, Error)]
#[error("expected an array of length {expected}; got {got}")]
pub struct DimensionError {
    /// Declared basis size.
    pub expected: usize,
    /// Length actually encountered.
    pub got: usize,
}

impl DimensionError {
    pub(crate) fn check<S, A>(expected: usize, a: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let got = a.len();
        (got == expected).then_some(()).ok_or(Self { expected, got })
    }
}

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct ShapeError(pub usize, pub usize);

impl ShapeError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when an operator basis selector is neither `position` nor
/// `momentum`.
#[derive(Debug, Error)]
#[error("basis type is either 'position' or 'momentum'; got '{0}'")]
pub struct BasisError(pub String);

/// Returned when a construction parameter is out of range.
#[derive(Debug, Error)]
pub enum ParamError {
    /// Returned when a basis size less than 2 is encountered.
    #[error("basis size must be at least 2; got {0}")]
    BasisSize(usize),

    /// Returned when a total evolution time of zero is encountered.
    #[error("total time must be at least 1; got {0}")]
    TotalTime(usize),

    /// Returned when a negative (or NaN) kicking strength is encountered.
    #[error("kicking strength must be non-negative; got {0}")]
    KickStrength(f64),

    /// Returned when a non-positive effective Planck constant is encountered.
    #[error("effective Planck constant must be greater than 0; got {0}")]
    Hbar(f64),

    /// Returned when a non-finite mass scale is encountered.
    #[error("mass scale must be finite; got {0}")]
    MassScale(f64),

    /// Returned when an ensemble of zero realizations is requested.
    #[error("number of initial configurations must be at least 1; got {0}")]
    InitConfigs(usize),

    /// Returned when a supplied initial state has the wrong length.
    #[error("initial state must have length {expected}; got {got}")]
    InitialState { expected: usize, got: usize },
}

impl ParamError {
    pub(crate) fn check_basis_size(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::BasisSize(n))
    }

    pub(crate) fn check_total_time(t: usize) -> Result<(), Self> {
        (t >= 1).then_some(()).ok_or(Self::TotalTime(t))
    }

    pub(crate) fn check_kick(k: f64) -> Result<(), Self> {
        (k >= 0.0).then_some(()).ok_or(Self::KickStrength(k))
    }

    pub(crate) fn check_hbar(hbar: f64) -> Result<(), Self> {
        (hbar > 0.0).then_some(()).ok_or(Self::Hbar(hbar))
    }

    pub(crate) fn check_mass(m: f64) -> Result<(), Self> {
        m.is_finite().then_some(()).ok_or(Self::MassScale(m))
    }

    pub(crate) fn check_initconfigs(m: usize) -> Result<(), Self> {
        (m >= 1).then_some(()).ok_or(Self::InitConfigs(m))
    }
}

/// Returned from state evolution and ensemble averaging.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// [`ParamError`]
    #[error("parameter error: {0}")]
    Param(#[from] ParamError),

    /// [`DimensionError`]
    #[error("dimension error: {0}")]
    Dimension(#[from] DimensionError),

    /// [`ShapeError`]
    #[error("shape mismatch: {0}")]
    Shape(#[from] ShapeError),
}

/// Returned from Heisenberg-picture operator evolution.
#[derive(Debug, Error)]
pub enum OtocError {
    /// [`ParamError`]
    #[error("parameter error: {0}")]
    Param(#[from] ParamError),

    /// [`DimensionError`]
    #[error("dimension error: {0}")]
    Dimension(#[from] DimensionError),

    /// [`ShapeError`]
    #[error("shape mismatch: {0}")]
    Shape(#[from] ShapeError),

    /// [`BasisError`]
    #[error("unsupported basis: {0}")]
    Basis(#[from] BasisError),
}

/// Returned from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a configuration file can't be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when a configuration file is not valid TOML or is missing
    /// fields.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// [`EvolveError`]
    #[error("evolve error: {0}")]
    Evolve(#[from] EvolveError),

    /// [`OtocError`]
    #[error("otoc error: {0}")]
    Otoc(#[from] OtocError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_checks() {
        assert!(ParamError::check_basis_size(2).is_ok());
        assert!(matches!(
            ParamError::check_basis_size(1),
            Err(ParamError::BasisSize(1)),
        ));
        assert!(ParamError::check_total_time(0).is_err());
        assert!(ParamError::check_kick(0.0).is_ok());
        assert!(ParamError::check_kick(-1e-3).is_err());
        assert!(ParamError::check_kick(f64::NAN).is_err());
        assert!(ParamError::check_hbar(0.0).is_err());
        assert!(ParamError::check_mass(f64::INFINITY).is_err());
        assert!(ParamError::check_initconfigs(0).is_err());
    }

    #[test]
    fn length_checks() {
        let a: nd::Array1<f64> = nd::Array1::zeros(4);
        let b: nd::Array1<f64> = nd::Array1::zeros(5);
        assert!(DimensionError::check(4, &a).is_ok());
        let err = DimensionError::check(4, &b).unwrap_err();
        assert_eq!((err.expected, err.got), (4, 5));
        assert!(matches!(ShapeError::check(&a, &b), Err(ShapeError(4, 5))));
    }
}
