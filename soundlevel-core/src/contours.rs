//! Regulatory Contour Generation
//!
//! A contour is the circle around the source on which the sound pressure
//! level equals a regulatory limit. Limits usually come in pairs (day and
//! night), each giving one ring:
//!
//! ```text
//! Lw = 60 dB, hemispherical
//!
//! Limit        Radius
//! -------------------
//! 45 dB (day)    2.24 m
//! 35 dB (night)  7.08 m
//! ```
//!
//! Rings are always returned innermost first. Renderers stack the labels in
//! that order, so the order is part of the contract; it is derived from the
//! computed radii, never from the order the caller listed the limits in.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::propagation::{compute_distance_for_pressure, PropagationModel};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A regulatory limit supplied by configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThresholdDefinition {
    /// Limit on the sound pressure level (dB)
    pub db: f64,
    /// Caption shown next to the ring, e.g. "Night (35dB)"
    pub label: String,
}

impl ThresholdDefinition {
    /// Create a threshold from a level and caption
    pub fn new(db: f64, label: impl Into<String>) -> Self {
        Self {
            db,
            label: label.into(),
        }
    }
}

/// One ring: the distance at which the level decays to `threshold_db`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContourLevel {
    /// Ring radius in meters, full precision
    pub radius: f64,
    /// Limit this ring represents (dB)
    pub threshold_db: f64,
    /// Caption, if the threshold had one
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
}

impl ContourLevel {
    /// Caption to draw: the label, or the level itself when there is none
    pub fn caption(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{} dB", self.threshold_db),
        }
    }
}

/// Build one ring per threshold, sorted by ascending radius.
///
/// No validation is done on the levels: zero or negative limits give a valid
/// radius like any other. An empty list gives no rings.
///
/// ```
/// use soundlevel_core::{generate_contours, PropagationModel, ThresholdDefinition};
///
/// let limits = [
///     ThresholdDefinition::new(35.0, "Night"),
///     ThresholdDefinition::new(45.0, "Day"),
/// ];
/// let rings = generate_contours(60.0, &limits, PropagationModel::Hemispherical);
///
/// assert_eq!(rings[0].threshold_db, 45.0);
/// assert!((rings[0].radius - 2.239).abs() < 1e-3);
/// assert!((rings[1].radius - 7.079).abs() < 1e-3);
/// ```
pub fn generate_contours(
    sound_power: f64,
    thresholds: &[ThresholdDefinition],
    model: PropagationModel,
) -> Vec<ContourLevel> {
    let mut contours: Vec<ContourLevel> = thresholds
        .iter()
        .map(|threshold| ContourLevel {
            radius: compute_distance_for_pressure(threshold.db, sound_power, model),
            threshold_db: threshold.db,
            label: Some(threshold.label.clone()),
        })
        .collect();

    contours.sort_by(|a, b| a.radius.total_cmp(&b.radius));

    log_debug!(
        "Generated {} contours for Lw={} dB ({:?})",
        contours.len(),
        sound_power,
        model
    );

    contours
}
