//! The frame driver.
//!
//! [`Engine`] owns the pixel buffer and all per-frame state, and splits each
//! frame into two passes: `update` consumes the event batch plus the elapsed
//! clock reading, `render` turns the current state into pixels. The caller
//! presents the finished buffer.

use crate::colors;
use crate::mesh::{CUBE_EDGES, CUBE_VERTEX_COLORS, CUBE_VERTICES, CUBE_VERTEX_COUNT};
use crate::projection::{self, ProjectedVertex};
use crate::render::framebuffer::{BufferError, PixelBuffer};
use crate::render::raster;
use crate::window::{Key, WindowEvent};

/// Radians added to the rotation each frame.
///
/// A literal constant per frame, not scaled by elapsed time: the spin speed
/// tracks the achieved frame rate. Kept that way on purpose to reproduce the
/// historical behavior exactly.
pub const ROTATION_STEP: f32 = 0.01;

/// Upper bound on the simulation step, so a long stall does not turn into a
/// visual jump. The raw reading stays available for diagnostics.
pub const MAX_FRAME_STEP: f32 = 1.0 / 60.0;

/// Marker half-size when depth scaling is off.
const FIXED_MARKER_HALF_SIZE: i32 = 3;

/// How vertex markers are sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerMode {
    /// Constant-size markers (key: 1)
    Fixed,
    /// Markers shrink with distance from the camera (key: 2)
    #[default]
    DepthScaled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    Running,
    Stopped,
}

pub struct Engine {
    buffer: PixelBuffer,
    angle: f32,
    state: EngineState,
    marker_mode: MarkerMode,
    real_frame_time: f32,
    frame_step: f32,
}

impl Engine {
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        Ok(Self {
            buffer: PixelBuffer::new(width, height)?,
            angle: 0.0,
            state: EngineState::Running,
            marker_mode: MarkerMode::default(),
            real_frame_time: 0.0,
            frame_step: 0.0,
        })
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn marker_mode(&self) -> MarkerMode {
        self.marker_mode
    }

    pub fn set_marker_mode(&mut self, mode: MarkerMode) {
        self.marker_mode = mode;
    }

    /// The elapsed seconds reported for the last frame, unclamped.
    pub fn last_frame_time(&self) -> f32 {
        self.real_frame_time
    }

    /// The clamped step driving the simulation, at most [`MAX_FRAME_STEP`].
    pub fn frame_step(&self) -> f32 {
        self.frame_step
    }

    /// Advance one frame: record timing, consume the event batch, and step
    /// the rotation. Once stopped, further updates change nothing.
    pub fn update(&mut self, events: &[WindowEvent], elapsed: f32) {
        self.real_frame_time = elapsed;
        self.frame_step = elapsed.min(MAX_FRAME_STEP);

        for event in events {
            match event {
                WindowEvent::Quit | WindowEvent::KeyDown(Key::Escape) => {
                    self.state = EngineState::Stopped;
                }
                WindowEvent::KeyDown(Key::Num1) => self.marker_mode = MarkerMode::Fixed,
                WindowEvent::KeyDown(Key::Num2) => self.marker_mode = MarkerMode::DepthScaled,
                _ => {}
            }
        }

        if self.state == EngineState::Stopped {
            return;
        }

        self.angle += ROTATION_STEP;
    }

    /// Render the current frame: clear, project all cube vertices, draw a
    /// marker per vertex and a line per edge. No-op once stopped.
    pub fn render(&mut self) {
        if self.state == EngineState::Stopped {
            return;
        }

        raster::clear_screen(&mut self.buffer);

        let width = self.buffer.width();
        let height = self.buffer.height();
        let mut projected = [ProjectedVertex { x: 0, y: 0, depth: 0.0 }; CUBE_VERTEX_COUNT];
        for (slot, vertex) in projected.iter_mut().zip(CUBE_VERTICES) {
            *slot = projection::project(vertex, self.angle, width, height);
        }

        for (vertex, color) in projected.iter().zip(CUBE_VERTEX_COLORS) {
            let half = match self.marker_mode {
                MarkerMode::Fixed => FIXED_MARKER_HALF_SIZE,
                MarkerMode::DepthScaled => projection::marker_half_size(vertex.depth),
            };
            raster::fill_rect(
                &mut self.buffer,
                vertex.x - half,
                vertex.y - half,
                vertex.x + half,
                vertex.y + half,
                color,
            );
        }

        for edge in CUBE_EDGES.iter() {
            let a = projected[edge.a];
            let b = projected[edge.b];
            raster::draw_line(&mut self.buffer, a.x, a.y, b.x, b.y, colors::EDGE);
        }
    }

    /// The finished frame as raw bytes for presentation.
    pub fn frame_buffer(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine() -> Engine {
        Engine::new(64, 64).unwrap()
    }

    fn contains_color(engine: &Engine, color: u32) -> bool {
        let buffer = engine.buffer();
        for y in 0..buffer.height() as i32 {
            for x in 0..buffer.width() as i32 {
                if buffer.pixel(x, y) == Some(color) {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn rotation_advances_by_a_constant_step_per_frame() {
        // A slow frame and a fast frame advance the angle by the same
        // amount; only the number of frames differs between frame rates.
        let mut slow = engine();
        let mut fast = engine();
        slow.update(&[], 1.0 / 30.0);
        fast.update(&[], 1.0 / 60.0);
        assert_relative_eq!(slow.angle(), ROTATION_STEP);
        assert_relative_eq!(fast.angle(), ROTATION_STEP);

        slow.update(&[], 1.0 / 30.0);
        assert_relative_eq!(slow.angle(), 2.0 * ROTATION_STEP);
    }

    #[test]
    fn long_stall_is_clamped_but_reported_raw() {
        let mut engine = engine();
        engine.update(&[], 2.5);
        assert_relative_eq!(engine.frame_step(), MAX_FRAME_STEP);
        assert_relative_eq!(engine.last_frame_time(), 2.5);
    }

    #[test]
    fn quit_event_stops_the_engine() {
        let mut engine = engine();
        engine.update(&[WindowEvent::Quit], 0.016);
        assert!(!engine.is_running());
    }

    #[test]
    fn escape_key_stops_the_engine() {
        let mut engine = engine();
        engine.update(&[WindowEvent::KeyDown(Key::Escape)], 0.016);
        assert!(!engine.is_running());
    }

    #[test]
    fn stopping_is_terminal() {
        let mut engine = engine();
        engine.update(&[WindowEvent::Quit], 0.016);
        let angle = engine.angle();
        engine.update(&[], 0.016);
        assert!(!engine.is_running());
        assert_relative_eq!(engine.angle(), angle);
    }

    #[test]
    fn render_draws_markers_and_edges() {
        let mut engine = engine();
        engine.update(&[], 0.016);
        engine.render();
        assert!(contains_color(&engine, crate::colors::EDGE));
        assert!(
            contains_color(&engine, crate::colors::VERTEX_YELLOW)
                || contains_color(&engine, crate::colors::VERTEX_RED)
        );
    }

    #[test]
    fn render_after_stop_produces_no_pixels() {
        let mut engine = engine();
        engine.update(&[WindowEvent::Quit], 0.016);
        engine.render();
        assert!(!contains_color(&engine, crate::colors::EDGE));
    }

    #[test]
    fn number_keys_select_the_marker_mode() {
        let mut engine = engine();
        assert_eq!(engine.marker_mode(), MarkerMode::DepthScaled);
        engine.update(&[WindowEvent::KeyDown(Key::Num1)], 0.016);
        assert_eq!(engine.marker_mode(), MarkerMode::Fixed);
        engine.update(&[WindowEvent::KeyDown(Key::Num2)], 0.016);
        assert_eq!(engine.marker_mode(), MarkerMode::DepthScaled);
    }

    #[test]
    fn key_release_does_not_stop_the_engine() {
        let mut engine = engine();
        engine.update(&[WindowEvent::KeyUp(Key::Escape)], 0.016);
        assert!(engine.is_running());
    }
}
