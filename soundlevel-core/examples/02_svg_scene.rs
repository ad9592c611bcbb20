//! SVG Scene Example
//!
//! Implements a small [`Renderer`] that writes the projected primitives as an
//! SVG document, styled by role.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_svg_scene -- 60 5 > scene.svg
//! ```

use std::fmt::Write;

use soundlevel_core::{
    AcousticParams, Canvas, Primitive, PropagationModel, Renderer, Role, SceneCache, TextAnchor,
    ThresholdDefinition,
};

struct SvgRenderer {
    out: String,
}

impl SvgRenderer {
    fn new(canvas: &Canvas) -> Result<Self, std::fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            canvas.width, canvas.height
        )?;
        Ok(Self { out })
    }

    fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }
}

fn style(role: Role) -> &'static str {
    match role {
        Role::ContourRing => {
            r##"fill="none" stroke="#ef4444" stroke-width="2" stroke-dasharray="6,4" opacity="0.8""##
        }
        Role::ContourLabel => r##"fill="#dc2626" font-size="11" font-weight="bold""##,
        Role::SourceMarker => r##"fill="#ef4444" stroke="#fff" stroke-width="2""##,
        Role::SourceLabel => r##"fill="#ef4444" font-size="12" font-weight="bold""##,
        Role::ObserverLink => r##"stroke="#3b82f6" stroke-width="2" opacity="0.3""##,
        Role::ObserverMarker => r##"fill="#3b82f6" stroke="#fff" stroke-width="2""##,
        Role::ObserverBadge => r##"fill="rgba(255,255,255,0.9)" stroke="#cbd5e1""##,
        Role::PressureLabel => r##"fill="#1e293b" font-size="12" font-weight="bold""##,
        Role::DistanceLabel => r##"fill="#64748b" font-size="10""##,
    }
}

impl Renderer for SvgRenderer {
    type Error = std::fmt::Error;

    fn draw(&mut self, primitive: &Primitive) -> Result<(), Self::Error> {
        let attrs = style(primitive.role());
        match primitive {
            Primitive::Circle { center, radius, .. } => writeln!(
                self.out,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" {attrs}/>"#,
                center.x, center.y, radius
            ),
            Primitive::Line { from, to, .. } => writeln!(
                self.out,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {attrs}/>"#,
                from.x, from.y, to.x, to.y
            ),
            Primitive::Rect { origin, width, height, corner_radius, .. } => writeln!(
                self.out,
                r#"  <rect x="{:.2}" y="{:.2}" width="{}" height="{}" rx="{}" {attrs}/>"#,
                origin.x, origin.y, width, height, corner_radius
            ),
            Primitive::Text { position, text, anchor, .. } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                writeln!(
                    self.out,
                    r#"  <text x="{:.2}" y="{:.2}" text-anchor="{anchor}" {attrs}>{text}</text>"#,
                    position.x, position.y
                )
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let sound_power: f64 = args.next().as_deref().unwrap_or("60").parse()?;
    let distance: f64 = args.next().as_deref().unwrap_or("5").parse()?;
    let params = AcousticParams::validated(sound_power, distance)?;

    let canvas = Canvas::default();
    let mut cache = SceneCache::new(
        vec![
            ThresholdDefinition::new(45.0, "Dag (45dB)"),
            ThresholdDefinition::new(35.0, "Nacht (35dB)"),
        ],
        canvas,
    );
    let scene = cache.scene(params, PropagationModel::Hemispherical);

    let mut svg = SvgRenderer::new(&canvas)?;
    svg.render(&scene.projection)?;
    print!("{}", svg.finish());

    eprintln!(
        "Lp = {} dB, attenuation {} dB, domain ±{:.3} m, {} primitives",
        scene.pressure_db,
        scene.attenuation_db,
        scene.projection.domain_max,
        scene.projection.primitives.len()
    );
    Ok(())
}
