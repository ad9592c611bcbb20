//! Core acoustics engine for SoundLevel
//!
//! Computes how loud a single point source is at a given distance and where
//! regulatory limits are met, then lays the result out as a 2D diagram.
//!
//! Three pure pieces do the work:
//! - [`propagation`]: sound power level (Lw) to sound pressure level (Lp) and back
//! - [`contours`]: one ring per regulatory threshold, innermost first
//! - [`projection`]: symmetric linear scale plus declarative draw primitives
//!
//! [`scene`] ties them together and memoizes the result by input.
//!
//! ```
//! use soundlevel_core::{
//!     compute_pressure, generate_contours, project,
//!     AcousticParams, Canvas, PropagationModel, ThresholdDefinition,
//! };
//!
//! let params = AcousticParams::new(60.0, 5.0);
//! let model = PropagationModel::Hemispherical;
//!
//! let lp = compute_pressure(&params, model);
//! assert_eq!(lp, 38.0);
//!
//! let limits = [
//!     ThresholdDefinition::new(45.0, "Day"),
//!     ThresholdDefinition::new(35.0, "Night"),
//! ];
//! let contours = generate_contours(params.sound_power, &limits, model);
//! let projection = project(params.distance, lp, &contours, &Canvas::default());
//! assert!(!projection.primitives.is_empty());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Optional logging, compiled out without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod contours;
pub mod errors;
pub mod projection;
pub mod propagation;
pub mod scene;
pub mod traits;

// Public API
pub use contours::{generate_contours, ContourLevel, ThresholdDefinition};
pub use errors::{InputError, InputResult};
pub use projection::{
    derive_domain, project, Canvas, LinearScale, Point, Primitive, Projection, Role, TextAnchor,
};
pub use propagation::{
    compute_distance_for_pressure, compute_pressure, pressure_level_exact, round_to_tenth,
    AcousticParams, PropagationModel,
};
pub use scene::{compute_scene, CacheStats, Scene, SceneCache};
pub use traits::{Renderer, Validatable};

/// Crate version, from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
