//! Constants for SoundLevel Core
//!
//! Every numeric value used by the model and the diagram layout lives here,
//! with its unit in the name.
//!
//! ## Organization
//!
//! - **Acoustics**: spreading-law constants and numerical floors
//! - **Layout**: drawing surface, margins and marker geometry in pixels

/// Propagation constants: directivity corrections and the distance floor.
pub mod acoustics;

/// Diagram layout: canvas size, domain margin and primitive offsets.
pub mod layout;

pub use acoustics::{
    HEMISPHERICAL_CORRECTION_DB, MIN_DISTANCE_M, SPHERICAL_CORRECTION_DB,
};

pub use layout::{DEFAULT_CANVAS_SIZE_PX, DOMAIN_MARGIN_FACTOR, MIN_DOMAIN_M};
