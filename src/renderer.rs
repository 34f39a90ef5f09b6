// Renderer that paints one frame of the particle network onto a 2D surface.
// Particles go down first, then every proximity pair as a faded line on top.
//
// Drawing goes through the `Surface` trait so frames can be produced against
// a real canvas context in the browser or a recording surface in tests.

use crate::color::Color;
use crate::network::{ParticleNetwork, Viewport};
use crate::proximity::ProximityPair;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&mut self, viewport: Viewport) -> Result<(), JsValue>;
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, style: &str) -> Result<(), JsValue>;
    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        style: &str,
    ) -> Result<(), JsValue>;
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, viewport: Viewport) -> Result<(), JsValue> {
        self.clear_rect(0.0, 0.0, viewport.width, viewport.height);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, style: &str) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.set_fill_style_str(style);
        self.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        style: &str,
    ) -> Result<(), JsValue> {
        self.begin_path();
        self.set_stroke_style_str(style);
        self.set_line_width(width);
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.stroke();
        Ok(())
    }
}

pub struct Renderer {
    pub color: Color,
}

impl Renderer {
    pub const LINE_WIDTH: f64 = 0.5;

    pub fn new() -> Self {
        Renderer {
            color: Color::indigo(),
        }
    }

    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        network: &ParticleNetwork,
        pairs: &[ProximityPair],
    ) -> Result<(), JsValue> {
        surface.clear(network.viewport())?;
        self.render_particles(surface, network)?;
        self.render_connections(surface, pairs)
    }

    pub fn render_particles<S: Surface>(
        &self,
        surface: &mut S,
        network: &ParticleNetwork,
    ) -> Result<(), JsValue> {
        for p in network.particles() {
            surface.fill_circle(p.pos, p.radius, &self.color.to_css_with_alpha(p.alpha))?;
        }
        Ok(())
    }

    pub fn render_connections<S: Surface>(
        &self,
        surface: &mut S,
        pairs: &[ProximityPair],
    ) -> Result<(), JsValue> {
        for pair in pairs {
            surface.stroke_line(
                pair.from_pos,
                pair.to_pos,
                Renderer::LINE_WIDTH,
                &self.color.to_css_with_alpha(pair.opacity),
            )?;
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}
