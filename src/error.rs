use thiserror::Error;

/// Reasons a propagation call can be rejected.
///
/// The numeric codes match the classic SGP4 `satrec.error` values so callers
/// comparing against other implementations can keep using them.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PropagationError {
    #[error("mean eccentricity {0} not within range -0.001 <= e < 1.0")]
    MeanEccentricity(f64),
    #[error("mean motion {0} is not positive")]
    NegativeMeanMotion(f64),
    #[error("perturbed eccentricity {0} not within range 0.0 <= e <= 1.0")]
    PerturbedEccentricity(f64),
    #[error("semi-latus rectum {0} is less than zero")]
    NegativeSemiLatusRectum(f64),
    /// Defined for compatibility; the propagator relies on the decay check
    /// instead and never raises it.
    #[error("epoch elements are sub-orbital")]
    SubOrbital,
    #[error("radius {0} earth radii is less than 1.0 indicating the satellite has decayed")]
    Decayed(f64),
}

impl PropagationError {
    pub fn code(&self) -> i32 {
        match self {
            PropagationError::MeanEccentricity(_) => 1,
            PropagationError::NegativeMeanMotion(_) => 2,
            PropagationError::PerturbedEccentricity(_) => 3,
            PropagationError::NegativeSemiLatusRectum(_) => 4,
            PropagationError::SubOrbital => 5,
            PropagationError::Decayed(_) => 6,
        }
    }

    /// Map a numeric code back to a variant. The offending value is not
    /// recoverable from a code, so it is reported as NaN.
    pub fn from_code(code: i32) -> Option<PropagationError> {
        match code {
            1 => Some(PropagationError::MeanEccentricity(f64::NAN)),
            2 => Some(PropagationError::NegativeMeanMotion(f64::NAN)),
            3 => Some(PropagationError::PerturbedEccentricity(f64::NAN)),
            4 => Some(PropagationError::NegativeSemiLatusRectum(f64::NAN)),
            5 => Some(PropagationError::SubOrbital),
            6 => Some(PropagationError::Decayed(f64::NAN)),
            _ => None,
        }
    }
}

/// Errors raised while reading configuration values from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown gravity model {0:?} (use wgs72old, wgs72, wgs84)")]
    UnknownGravityModel(String),
    #[error("unknown operation mode {0:?} (use 'a' for afspc or 'i' for improved)")]
    UnknownOpsMode(String),
}
