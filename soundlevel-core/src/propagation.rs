//! Point-Source Propagation Model
//!
//! ## Physics Background
//!
//! A source with sound power level Lw spreads its energy over a growing
//! surface. In free field the intensity falls with the square of the
//! distance, which in decibels is a loss of 20·log10(r):
//!
//! ```text
//! Lp = Lw - 20·log10(r) - C
//!
//! Where:
//! - Lp = sound pressure level at the observer (dB)
//! - Lw = sound power level of the source (dB)
//! - r  = distance source to observer (m)
//! - C  = directivity correction (8 dB hemispherical, 11 dB spherical)
//! ```
//!
//! Solving for r gives the radius at which a target level is reached:
//!
//! ```text
//! r = 10 ^ ((Lw - Lp - C) / 20)
//! ```
//!
//! ## Numerical Policy
//!
//! - The forward model floors the distance at [`MIN_DISTANCE_M`] before the
//!   logarithm, so zero and negative distances give a finite result.
//! - The forward result is rounded to 0.1 dB (half away from zero on the
//!   exact value) because it is displayed. The inverse is never rounded: contour radii keep full
//!   precision for the projection.
//! - Neither direction validates NaN or infinity; they propagate. Any finite
//!   input gives a finite forward result.
//!
//! ## Why libm?
//!
//! `libm::log10`, `libm::pow`, `libm::fma` and `libm::floor` keep this module usable on
//! `no_std` targets without a hardware FPU.

use crate::constants::acoustics::{
    HEMISPHERICAL_CORRECTION_DB, HEMISPHERICAL_DIRECTIVITY_Q, MAX_ROUNDED_LEVEL_DB, MIN_DISTANCE_M,
    PRESSURE_DISPLAY_STEPS_PER_DB, SPHERICAL_CORRECTION_DB, SPHERICAL_DIRECTIVITY_Q,
    SPREADING_DB_PER_DECADE,
};
use crate::errors::{InputError, InputResult};
use crate::traits::Validatable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spreading geometry of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PropagationModel {
    /// Source on a reflecting ground plane (Q = 2)
    #[default]
    Hemispherical,
    /// Source in free space (Q = 1)
    Spherical,
}

impl PropagationModel {
    /// Directivity correction subtracted by the spreading law (dB).
    pub const fn correction_db(self) -> f64 {
        match self {
            Self::Hemispherical => HEMISPHERICAL_CORRECTION_DB,
            Self::Spherical => SPHERICAL_CORRECTION_DB,
        }
    }

    /// Directivity factor Q.
    pub const fn directivity(self) -> f64 {
        match self {
            Self::Hemispherical => HEMISPHERICAL_DIRECTIVITY_Q,
            Self::Spherical => SPHERICAL_DIRECTIVITY_Q,
        }
    }
}

/// The two scalar inputs of the model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcousticParams {
    /// Sound power level Lw of the source (dB)
    pub sound_power: f64,
    /// Distance from the source to the observer (m)
    pub distance: f64,
}

impl Default for AcousticParams {
    fn default() -> Self {
        Self {
            sound_power: 60.0,
            distance: 5.0,
        }
    }
}

impl AcousticParams {
    /// Create parameters without any checks.
    pub const fn new(sound_power: f64, distance: f64) -> Self {
        Self {
            sound_power,
            distance,
        }
    }

    /// Create parameters from raw user input.
    ///
    /// Refuses non-finite numbers and distances of zero or less. The model
    /// itself accepts both; this is for the input layer, which keeps its
    /// previous value when a keystroke does not make sense.
    pub fn validated(sound_power: f64, distance: f64) -> InputResult<Self> {
        if !sound_power.is_valid() {
            return Err(InputError::InvalidValue {
                field: "sound_power",
            });
        }
        if !distance.is_valid() {
            return Err(InputError::InvalidValue { field: "distance" });
        }
        if distance <= 0.0 {
            return Err(InputError::NonPositiveDistance { distance });
        }

        Ok(Self::new(sound_power, distance))
    }

    /// Distance actually fed to the logarithm.
    pub fn effective_distance(&self) -> f64 {
        floor_distance(self.distance)
    }
}

fn floor_distance(distance: f64) -> f64 {
    // f64::max would turn NaN into the floor
    if distance < MIN_DISTANCE_M {
        log_trace!("Distance {} m floored to {} m", distance, MIN_DISTANCE_M);
        MIN_DISTANCE_M
    } else {
        distance
    }
}

/// Round to the display step of 0.1 dB, half away from zero.
///
/// Ties are decided on the exact value of `value`, not on `value × 10`
/// after it has been rounded to a float: 0.15 is stored slightly below
/// 0.15 and gives 0.1, while 0.25 is exact and gives 0.3. Zero is never
/// negative. Magnitudes of [`MAX_ROUNDED_LEVEL_DB`] and above, NaN and
/// infinities are returned unchanged.
pub fn round_to_tenth(value: f64) -> f64 {
    let magnitude = libm::fabs(value);
    if !(magnitude < MAX_ROUNDED_LEVEL_DB) {
        return value;
    }

    // magnitude × 10 == scaled + error, exactly
    let scaled = magnitude * PRESSURE_DISPLAY_STEPS_PER_DB;
    let error = libm::fma(magnitude, PRESSURE_DISPLAY_STEPS_PER_DB, -scaled);

    let lower = libm::floor(scaled);
    let steps = if (scaled - (lower + 0.5)) + error >= 0.0 {
        lower + 1.0
    } else {
        lower
    };

    let rounded = steps / PRESSURE_DISPLAY_STEPS_PER_DB;
    if value < 0.0 && steps > 0.0 {
        -rounded
    } else {
        rounded
    }
}

/// Sound pressure level at the observer, unrounded (dB).
///
/// Same floor policy as [`compute_pressure`]. Strictly decreasing in the
/// distance above the floor.
pub fn pressure_level_exact(params: &AcousticParams, model: PropagationModel) -> f64 {
    let r = floor_distance(params.distance);
    params.sound_power - SPREADING_DB_PER_DECADE * libm::log10(r) - model.correction_db()
}

/// Sound pressure level at the observer, rounded to 0.1 dB.
///
/// ```
/// use soundlevel_core::{compute_pressure, AcousticParams, PropagationModel};
///
/// let lp = compute_pressure(&AcousticParams::new(60.0, 5.0), PropagationModel::Hemispherical);
/// assert_eq!(lp, 38.0);
/// ```
pub fn compute_pressure(params: &AcousticParams, model: PropagationModel) -> f64 {
    round_to_tenth(pressure_level_exact(params, model))
}

/// Distance at which the pressure level drops to `target_lp` (m).
///
/// A target above `sound_power - correction` gives a radius below 1 m; it is
/// returned as computed. The result is not rounded.
pub fn compute_distance_for_pressure(
    target_lp: f64,
    sound_power: f64,
    model: PropagationModel,
) -> f64 {
    let exponent = (sound_power - target_lp - model.correction_db()) / SPREADING_DB_PER_DECADE;
    libm::pow(10.0, exponent)
}
