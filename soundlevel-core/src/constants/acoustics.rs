//! Acoustic Constants for Point-Source Propagation
//!
//! The free-field spreading law for a point source is
//!
//! ```text
//! Lp = Lw - 20·log10(r) - 10·log10(4π/Q)
//! ```
//!
//! The last term depends only on the directivity factor Q and is rounded to
//! a whole decibel in everyday engineering practice.

// ===== DIRECTIVITY CORRECTIONS =====

/// Correction for a source resting on a reflecting ground plane (dB).
///
/// Q = 2, radiation into a half-space: 10·log10(2π) ≈ 7.98 dB.
/// Typical for heat pumps, compressors and other ground-mounted equipment.
///
/// Source: ISO 3744:2010, hemispherical measurement surface
pub const HEMISPHERICAL_CORRECTION_DB: f64 = 8.0;

/// Correction for a source radiating into free space (dB).
///
/// Q = 1, radiation into a full sphere: 10·log10(4π) ≈ 10.99 dB.
///
/// Source: ISO 3745:2012, free-field conditions
pub const SPHERICAL_CORRECTION_DB: f64 = 11.0;

/// Directivity factor for hemispherical radiation.
pub const HEMISPHERICAL_DIRECTIVITY_Q: f64 = 2.0;

/// Directivity factor for spherical radiation.
pub const SPHERICAL_DIRECTIVITY_Q: f64 = 1.0;

// ===== NUMERICAL LIMITS =====

/// Smallest distance fed to the logarithm (m).
///
/// Zero and negative distances are replaced by this floor so the forward
/// model always returns a finite level. 10 cm is well inside the near field
/// of any real source, where the spreading law no longer holds anyway.
pub const MIN_DISTANCE_M: f64 = 0.1;

/// Decibels per decade of distance for spherical spreading (dB).
///
/// The inverse-square law gives 20·log10(r), i.e. 6 dB per doubling.
pub const SPREADING_DB_PER_DECADE: f64 = 20.0;

/// Display steps per decibel of the headline pressure level.
///
/// 10 steps per dB, i.e. one decimal place.
pub const PRESSURE_DISPLAY_STEPS_PER_DB: f64 = 10.0;

/// Magnitude from which levels are no longer rounded to the display step (dB).
///
/// 2^52 / 10: beyond it `level × 10` has no fractional bits left, and the
/// product would overflow long before `f64::MAX`.
pub const MAX_ROUNDED_LEVEL_DB: f64 = 4_503_599_627_370_496.0 / 10.0;
