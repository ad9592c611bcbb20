//! Coordinate Projection and Diagram Layout
//!
//! ## Scale
//!
//! The diagram is a top view with the source at the origin and the observer
//! on the positive x axis. The visible area is a symmetric square domain:
//!
//! ```text
//! relevant_max = max(distance, largest ring radius)
//! domain_max   = relevant_max × 1.2
//!
//! [-domain_max, +domain_max]  →  [0, min(width, height)]
//! ```
//!
//! so the observer and every ring stay inside with a fixed 20 % margin. The
//! square span is then centered on the canvas, which only matters when the
//! canvas is not square.
//!
//! ## Primitives
//!
//! The layout is plain data: a list of [`Primitive`]s in paint order. Nothing
//! here draws; a [`Renderer`](crate::traits::Renderer) turns the list into
//! SVG, canvas calls or anything else.
//!
//! ```text
//! 1. rings + ring labels   innermost first
//! 2. source marker + caption
//! 3. link line             origin → observer
//! 4. observer marker
//! 5. badge + two texts     "<Lp> dB" / "<r>m"
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::constants::layout::{
    BADGE_CORNER_RADIUS_PX, BADGE_HEIGHT_PX, BADGE_OFFSET_X_PX, BADGE_OFFSET_Y_PX,
    BADGE_TEXT_OFFSET_X_PX, BADGE_WIDTH_PX, CONTOUR_LABEL_GAP_PX, DEFAULT_CANVAS_SIZE_PX,
    DISTANCE_TEXT_OFFSET_Y_PX, DOMAIN_MARGIN_FACTOR, MIN_DOMAIN_M, OBSERVER_MARKER_RADIUS_PX,
    PRESSURE_TEXT_OFFSET_Y_PX, SOURCE_LABEL, SOURCE_LABEL_OFFSET_PX, SOURCE_MARKER_RADIUS_PX,
};
use crate::contours::ContourLevel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Canvas {
    /// Width (px)
    pub width: f64,
    /// Height (px)
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE_PX,
            height: DEFAULT_CANVAS_SIZE_PX,
        }
    }
}

impl Canvas {
    /// Create a canvas of the given size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Side of the square the domain is mapped onto
    pub fn span(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Center of the canvas
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Position on the drawing surface (px)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Horizontal coordinate, growing right
    pub x: f64,
    /// Vertical coordinate, growing down
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point shifted by `(dx, dy)`
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Linear map from a physical interval (m) to a pixel interval
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Map `domain` onto `range`
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map `[-domain_max, domain_max]` onto `[0, span]`
    pub const fn symmetric(domain_max: f64, span: f64) -> Self {
        Self::new((-domain_max, domain_max), (0.0, span))
    }

    /// Physical interval
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Pixel interval
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Pixels per meter
    pub fn factor(&self) -> f64 {
        (self.range.1 - self.range.0) / (self.domain.1 - self.domain.0)
    }

    /// Pixel coordinate of a physical coordinate
    pub fn apply(&self, meters: f64) -> f64 {
        self.range.0 + (meters - self.domain.0) * self.factor()
    }

    /// Physical coordinate of a pixel coordinate
    pub fn invert(&self, pixels: f64) -> f64 {
        self.domain.0 + (pixels - self.range.0) / self.factor()
    }

    /// Pixel length of a physical length
    pub fn length(&self, meters: f64) -> f64 {
        meters * self.factor()
    }
}

/// What a primitive stands for; backends style by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    /// Regulatory ring
    ContourRing,
    /// Caption at the top of a ring
    ContourLabel,
    /// Dot at the source position
    SourceMarker,
    /// Caption under the source
    SourceLabel,
    /// Segment from source to observer
    ObserverLink,
    /// Dot at the observer position
    ObserverMarker,
    /// Background box of the observer readout
    ObserverBadge,
    /// Pressure level readout
    PressureLabel,
    /// Distance readout
    DistanceLabel,
}

/// Horizontal text alignment relative to the text position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextAnchor {
    /// Text starts at the position
    Start,
    /// Text is centered on the position
    Middle,
    /// Text ends at the position
    End,
}

/// One declarative draw instruction, in drawing-surface units
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Primitive {
    /// Circle outline or dot
    Circle {
        /// Center
        center: Point,
        /// Radius (px)
        radius: f64,
        /// Meaning
        role: Role,
    },
    /// Straight segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Meaning
        role: Role,
    },
    /// Rounded rectangle
    Rect {
        /// Top-left corner
        origin: Point,
        /// Width (px)
        width: f64,
        /// Height (px)
        height: f64,
        /// Corner radius (px)
        corner_radius: f64,
        /// Meaning
        role: Role,
    },
    /// Text run
    Text {
        /// Baseline anchor point
        position: Point,
        /// Content
        text: String,
        /// Alignment around `position`
        anchor: TextAnchor,
        /// Meaning
        role: Role,
    },
}

impl Primitive {
    /// Role of this primitive
    pub fn role(&self) -> Role {
        match self {
            Self::Circle { role, .. }
            | Self::Line { role, .. }
            | Self::Rect { role, .. }
            | Self::Text { role, .. } => *role,
        }
    }
}

/// Scale plus laid-out primitives for one set of inputs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Projection {
    /// Visible half-width (m)
    pub domain_max: f64,
    /// Physical to pixel map along either axis
    pub scale: LinearScale,
    /// Translation centering the square span on the canvas (px)
    pub offset: Point,
    /// Draw instructions in paint order
    pub primitives: Vec<Primitive>,
}

impl Projection {
    /// Canvas position of a physical point `(x, y)` in meters
    pub fn to_canvas(&self, x_m: f64, y_m: f64) -> Point {
        Point::new(
            self.offset.x + self.scale.apply(x_m),
            self.offset.y + self.scale.apply(y_m),
        )
    }

    /// Canvas position of the source
    pub fn origin(&self) -> Point {
        self.to_canvas(0.0, 0.0)
    }

    /// Primitives with the given role, in paint order
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(move |p| p.role() == role)
    }
}

/// Visible half-width for an observer distance and a set of rings (m).
///
/// Falls back to [`MIN_DOMAIN_M`] when everything sits at the origin.
pub fn derive_domain(distance: f64, contours: &[ContourLevel]) -> f64 {
    let max_contour_radius = contours.iter().map(|c| c.radius).fold(0.0, f64::max);
    let relevant_max = distance.max(max_contour_radius);
    let domain_max = relevant_max * DOMAIN_MARGIN_FACTOR;

    if domain_max < MIN_DOMAIN_M {
        log_warn!(
            "Degenerate domain {} m (distance {} m), using {} m",
            domain_max,
            distance,
            MIN_DOMAIN_M
        );
        return MIN_DOMAIN_M;
    }

    domain_max
}

/// Derive the scale and lay out every primitive.
///
/// `pressure_db` is only displayed; pass the rounded headline value.
pub fn project(
    distance: f64,
    pressure_db: f64,
    contours: &[ContourLevel],
    canvas: &Canvas,
) -> Projection {
    let domain_max = derive_domain(distance, contours);
    let scale = LinearScale::symmetric(domain_max, canvas.span());
    let center = canvas.center();
    let mid = scale.apply(0.0);

    let mut projection = Projection {
        domain_max,
        scale,
        offset: Point::new(center.x - mid, center.y - mid),
        primitives: Vec::new(),
    };
    projection.primitives = layout(&projection, distance, pressure_db, contours);

    log_trace!(
        "Projected {} primitives, domain ±{} m, {} px/m",
        projection.primitives.len(),
        domain_max,
        scale.factor()
    );

    projection
}

fn layout(
    projection: &Projection,
    distance: f64,
    pressure_db: f64,
    contours: &[ContourLevel],
) -> Vec<Primitive> {
    let mut primitives = Vec::with_capacity(contours.len() * 2 + 8);
    let origin = projection.origin();

    for contour in contours {
        let radius = projection.scale.length(contour.radius);
        primitives.push(Primitive::Circle {
            center: origin,
            radius,
            role: Role::ContourRing,
        });
        primitives.push(Primitive::Text {
            position: origin.offset(0.0, -radius - CONTOUR_LABEL_GAP_PX),
            text: contour.caption(),
            anchor: TextAnchor::Middle,
            role: Role::ContourLabel,
        });
    }

    primitives.push(Primitive::Circle {
        center: origin,
        radius: SOURCE_MARKER_RADIUS_PX,
        role: Role::SourceMarker,
    });
    primitives.push(Primitive::Text {
        position: origin.offset(0.0, SOURCE_LABEL_OFFSET_PX),
        text: SOURCE_LABEL.to_string(),
        anchor: TextAnchor::Middle,
        role: Role::SourceLabel,
    });

    let observer = projection.to_canvas(distance, 0.0);
    primitives.push(Primitive::Line {
        from: origin,
        to: observer,
        role: Role::ObserverLink,
    });
    primitives.push(Primitive::Circle {
        center: observer,
        radius: OBSERVER_MARKER_RADIUS_PX,
        role: Role::ObserverMarker,
    });
    primitives.push(Primitive::Rect {
        origin: observer.offset(BADGE_OFFSET_X_PX, BADGE_OFFSET_Y_PX),
        width: BADGE_WIDTH_PX,
        height: BADGE_HEIGHT_PX,
        corner_radius: BADGE_CORNER_RADIUS_PX,
        role: Role::ObserverBadge,
    });
    primitives.push(Primitive::Text {
        position: observer.offset(BADGE_TEXT_OFFSET_X_PX, PRESSURE_TEXT_OFFSET_Y_PX),
        text: format!("{} dB", pressure_db),
        anchor: TextAnchor::Middle,
        role: Role::PressureLabel,
    });
    primitives.push(Primitive::Text {
        position: observer.offset(BADGE_TEXT_OFFSET_X_PX, DISTANCE_TEXT_OFFSET_Y_PX),
        text: format!("{}m", distance),
        anchor: TextAnchor::Middle,
        role: Role::DistanceLabel,
    });

    primitives
}
