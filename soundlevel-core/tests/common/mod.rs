//! Shared fixtures and assertion helpers for integration tests

#![allow(dead_code)]

use proptest::prelude::*;

use soundlevel_core::{
    ContourLevel, Primitive, PropagationModel, Renderer, Role, ThresholdDefinition,
};

/// Regional day/night limits for residential areas in Flanders
pub fn flanders_limits() -> Vec<ThresholdDefinition> {
    vec![
        ThresholdDefinition::new(45.0, "Dag (45dB)"),
        ThresholdDefinition::new(35.0, "Nacht (35dB)"),
    ]
}

/// Either spreading model
pub fn any_model() -> impl Strategy<Value = PropagationModel> {
    prop_oneof![
        Just(PropagationModel::Hemispherical),
        Just(PropagationModel::Spherical),
    ]
}

/// Sound power levels of ordinary equipment, from a fridge to a chiller
pub fn sound_power() -> impl Strategy<Value = f64> {
    20.0f64..130.0
}

/// A list of up to eight thresholds in arbitrary order
pub fn threshold_list() -> impl Strategy<Value = Vec<ThresholdDefinition>> {
    prop::collection::vec(
        (-20.0f64..120.0).prop_map(|db| ThresholdDefinition::new(db, format!("{db:.1} dB"))),
        0..8,
    )
}

/// Assert rings are ordered innermost first
pub fn assert_sorted(contours: &[ContourLevel]) {
    for pair in contours.windows(2) {
        assert!(
            pair[0].radius <= pair[1].radius,
            "unsorted: {} before {}",
            pair[0].radius,
            pair[1].radius
        );
    }
}

/// Backend that only remembers what it was asked to draw
#[derive(Default)]
pub struct RecordingRenderer {
    pub drawn: Vec<Role>,
}

impl Renderer for RecordingRenderer {
    type Error = std::convert::Infallible;

    fn draw(&mut self, primitive: &Primitive) -> Result<(), Self::Error> {
        self.drawn.push(primitive.role());
        Ok(())
    }
}

/// Backend that refuses text, to exercise error propagation
pub struct NoTextRenderer {
    pub circles: usize,
}

impl Renderer for NoTextRenderer {
    type Error = &'static str;

    fn draw(&mut self, primitive: &Primitive) -> Result<(), Self::Error> {
        match primitive {
            Primitive::Text { .. } => Err("text not supported"),
            Primitive::Circle { .. } => {
                self.circles += 1;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Text backend writing into a fixed budget of bytes, like a bounded buffer
pub struct BoundedTextRenderer {
    pub out: String,
    pub budget: usize,
}

impl std::fmt::Write for BoundedTextRenderer {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        if self.out.len() + s.len() > self.budget {
            return Err(std::fmt::Error);
        }
        self.out.push_str(s);
        Ok(())
    }
}

impl Renderer for BoundedTextRenderer {
    type Error = std::fmt::Error;

    fn draw(&mut self, primitive: &Primitive) -> Result<(), Self::Error> {
        use std::fmt::Write;

        match primitive {
            Primitive::Circle { center, radius, .. } => {
                writeln!(self, "circle {:.1} {:.1} {:.1}", center.x, center.y, radius)
            }
            Primitive::Line { from, to, .. } => {
                writeln!(self, "line {:.1} {:.1} {:.1} {:.1}", from.x, from.y, to.x, to.y)
            }
            Primitive::Rect { origin, width, height, .. } => {
                writeln!(self, "rect {:.1} {:.1} {} {}", origin.x, origin.y, width, height)
            }
            Primitive::Text { text, .. } => writeln!(self, "text {}", text),
        }
    }
}
