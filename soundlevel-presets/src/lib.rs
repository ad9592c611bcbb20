//! Regulatory Threshold Presets
//!
//! ## Overview
//!
//! Contour diagrams are only as useful as the limits drawn on them. Noise
//! limits differ per region, per zoning category and per time of day, so they
//! are configuration, not code. This crate keeps them as small JSON files:
//!
//! ```json
//! {
//!   "name": "flanders_residential",
//!   "description": "Indicative day and night limits for residential areas in Flanders",
//!   "model": "HEMISPHERICAL",
//!   "thresholds": [
//!     { "db": 45.0, "label": "Dag (45dB)" },
//!     { "db": 35.0, "label": "Nacht (35dB)" }
//!   ]
//! }
//! ```
//!
//! `model` is optional and defaults to hemispherical propagation, the usual
//! case for equipment standing on the ground.
//!
//! ## Sources of Presets
//!
//! 1. **Embedded**: files under `presets/` are compiled into the binary and
//!    loaded by [`PresetRegistry::load_defaults`]
//! 2. **On disk**: [`ThresholdPreset::from_path`] and
//!    [`PresetRegistry::load_dir`] read user-supplied files
//!
//! Every preset is validated before it is handed out, so a typo in a file
//! shows up as an error at load time rather than as a missing ring.
//!
//! ## Usage Example
//!
//! ```rust
//! use soundlevel_presets::{PresetRegistry, DEFAULT_PRESET};
//!
//! let registry = PresetRegistry::new();
//! registry.load_defaults()?;
//!
//! let preset = registry.get(DEFAULT_PRESET)?;
//! let rings = preset.contours(60.0);
//! assert_eq!(rings.len(), 2);
//! assert!((rings[0].radius - 2.239).abs() < 1e-3);
//! # Ok::<(), soundlevel_presets::PresetError>(())
//! ```

pub mod preset;
pub mod registry;

pub use preset::ThresholdPreset;
pub use registry::{PresetRegistry, GLOBAL_REGISTRY};

/// Name of the embedded preset used when none is configured
pub const DEFAULT_PRESET: &str = "flanders_residential";

/// Preset-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum PresetError {
    #[error("Failed to read preset: {0}")]
    Io(String),

    #[error("Failed to parse preset: {0}")]
    Parse(String),

    #[error("Failed to serialize preset: {0}")]
    Serialize(String),

    #[error("Invalid preset {name}: {reason}")]
    Invalid { name: String, reason: String },

    #[error("Preset not found: {0}")]
    NotFound(String),

    #[error("Preset {0} already registered")]
    Duplicate(String),

    #[error("Preset registry lock poisoned")]
    LockPoisoned,
}
