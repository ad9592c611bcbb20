//! Layout Constants for the Contour Diagram
//!
//! Physical lengths are in meters, everything else in drawing-surface units
//! (pixels of the 600×600 view box).

// ===== SCALE =====

/// Side of the default square drawing surface (px).
pub const DEFAULT_CANVAS_SIZE_PX: f64 = 600.0;

/// Ratio between the visible half-width and the farthest relevant point.
///
/// The source, the observer and the outermost ring all stay visible with a
/// fixed 20 % margin and no more.
pub const DOMAIN_MARGIN_FACTOR: f64 = 1.2;

/// Smallest visible half-width (m).
///
/// Used when the distance and every ring radius are zero, so the scale
/// never divides by zero. Equals the distance floor with the usual margin.
pub const MIN_DOMAIN_M: f64 = 0.12;

// ===== MARKERS =====

/// Radius of the source marker (px).
pub const SOURCE_MARKER_RADIUS_PX: f64 = 8.0;

/// Vertical offset of the source caption below the marker (px).
pub const SOURCE_LABEL_OFFSET_PX: f64 = 20.0;

/// Caption drawn under the source marker.
pub const SOURCE_LABEL: &str = "Source";

/// Radius of the observer marker (px).
pub const OBSERVER_MARKER_RADIUS_PX: f64 = 6.0;

/// Gap between a ring's top and its label baseline (px).
pub const CONTOUR_LABEL_GAP_PX: f64 = 6.0;

// ===== OBSERVER BADGE =====

/// Horizontal gap between observer marker and badge (px).
pub const BADGE_OFFSET_X_PX: f64 = 10.0;

/// Badge top relative to the observer marker (px).
pub const BADGE_OFFSET_Y_PX: f64 = -15.0;

/// Badge width (px).
pub const BADGE_WIDTH_PX: f64 = 60.0;

/// Badge height (px).
pub const BADGE_HEIGHT_PX: f64 = 30.0;

/// Badge corner radius (px).
pub const BADGE_CORNER_RADIUS_PX: f64 = 4.0;

/// Horizontal position of the badge text, centered in the badge (px).
pub const BADGE_TEXT_OFFSET_X_PX: f64 = 40.0;

/// Baseline of the pressure line inside the badge (px).
pub const PRESSURE_TEXT_OFFSET_Y_PX: f64 = -4.0;

/// Baseline of the distance line inside the badge (px).
pub const DISTANCE_TEXT_OFFSET_Y_PX: f64 = 8.0;
