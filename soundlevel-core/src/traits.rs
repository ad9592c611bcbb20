//! Core traits
//!
//! Two seams: checking raw numbers before they become parameters, and handing
//! draw primitives to whatever backend paints them. Keep them small - the
//! geometry is done by the time a renderer sees it.

use crate::projection::{Primitive, Projection};

/// Raw input that can be checked before it becomes [`AcousticParams`](crate::AcousticParams)
pub trait Validatable {
    /// Usable as a level or a distance (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Output backend for a projected scene (SVG, canvas, terminal, ...)
///
/// Implementors only translate primitives into their own drawing calls and
/// map each [`Role`](crate::projection::Role) to a style. Positions and sizes
/// are already in drawing-surface units.
pub trait Renderer {
    /// Backend failure type
    type Error;

    /// Draw a single primitive
    fn draw(&mut self, primitive: &Primitive) -> Result<(), Self::Error>;

    /// Draw every primitive of a projection, in order
    ///
    /// Order matters: rings come first so markers and badges paint over them.
    fn render(&mut self, projection: &Projection) -> Result<(), Self::Error> {
        for primitive in &projection.primitives {
            self.draw(primitive)?;
        }
        Ok(())
    }
}
