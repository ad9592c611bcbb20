//! Error Types for Rejected Acoustic Inputs
//!
//! The propagation, contour and projection functions are total: they accept
//! any number and never fail. Errors only exist at the edge where raw user
//! input becomes an [`AcousticParams`](crate::AcousticParams), so the input
//! layer can refuse a value before it reaches the model.
//!
//! ## Error Categories
//!
//! - `InvalidValue`: the value is NaN or infinite
//! - `NonPositiveDistance`: a distance of zero or less has no physical meaning
//!
//! Errors are `Copy` and carry no heap data, so the same type works on
//! `no_std` targets.
//!
//! ```rust
//! use soundlevel_core::{AcousticParams, InputError};
//!
//! match AcousticParams::validated(60.0, 0.0) {
//!     Ok(params) => {
//!         // Feed params to compute_pressure
//!         let _ = params;
//!     }
//!     Err(InputError::NonPositiveDistance { .. }) => {
//!         // Keep the previous distance, as the input widget does
//!     }
//!     Err(InputError::InvalidValue { field }) => {
//!         // Not a number, ignore the keystroke
//!         let _ = field;
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for input validation
pub type InputResult<T> = Result<T, InputError>;

/// Reasons a raw input cannot become acoustic parameters
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InputError {
    /// Value is NaN or infinite
    #[error("Invalid value for {field}: not a finite number")]
    InvalidValue {
        /// Name of the rejected input
        field: &'static str,
    },

    /// Distance must be strictly positive
    #[error("Distance {distance} m must be greater than zero")]
    NonPositiveDistance {
        /// The rejected distance in meters
        distance: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue { field } => defmt::write!(fmt, "Invalid value for {}", field),
            Self::NonPositiveDistance { distance } => {
                defmt::write!(fmt, "Distance {} m must be > 0", distance)
            }
        }
    }
}
