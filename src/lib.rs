//! SGP4/SDP4 analytical orbit propagation.
//!
//! Given Brouwer mean elements (as published in a TLE or OMM), build a
//! [`SatRec`] once and call [`SatRec::propagate`] with minutes since epoch
//! to get TEME position and velocity. Orbits with a period of 225 minutes
//! or more use the deep-space extensions (lunar-solar perturbations and
//! Earth resonance).
//!
//! ```no_run
//! use sgp4_core::{MeanElements, PropagatorConfig, SatRec};
//!
//! let elements = MeanElements::from_tle_units(
//!     "00005", 2000, 179.78495062, 2.8098e-5, 2.3e-7, 0.0, 0.1859667, 331.7664, 34.2682,
//!     19.3264, 10.82419157, 348.7242,
//! );
//! let mut sat = SatRec::new(&elements, PropagatorConfig::default())?;
//! let state = sat.propagate(360.0)?;
//! println!("{:?}", state.position);
//! # Ok::<(), sgp4_core::PropagationError>(())
//! ```

pub mod config;
pub mod deep_space;
pub mod elements;
pub mod error;
pub mod gravity;
pub mod propagation;
pub mod time;

pub use config::{OpsMode, PropagatorConfig};
pub use elements::{MeanElements, XPDOTP};
pub use error::{ConfigError, PropagationError};
pub use gravity::{GravConst, GravityModel};
pub use propagation::{initl, AveragedElements, Method, SatRec, StateVector};
pub use time::{gstime, invjday, jday, julian_date};
