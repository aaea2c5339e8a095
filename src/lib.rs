//! A CPU-rendered spinning wireframe cube.
//!
//! This crate renders a rotating cube into a software pixel buffer - colored
//! markers at the eight corners, lines along the twelve edges - and presents
//! the buffer through an SDL2 window. SDL is used only for window
//! management, input, and timing; all rendering is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use wirecube::prelude::*;
//!
//! let mut window = Window::new("wirecube", WINDOW_WIDTH, WINDOW_HEIGHT)?;
//! let mut engine = Engine::new(window.width(), window.height())?;
//! ```

pub mod colors;
pub mod engine;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use engine::{Engine, MarkerMode};
pub use projection::{project, ProjectedVertex};
pub use render::framebuffer::{BufferError, PixelBuffer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wirecube::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{Engine, MarkerMode, MAX_FRAME_STEP, ROTATION_STEP};

    // Math
    pub use crate::math::vec3::Vec3;

    // Projection
    pub use crate::projection::{marker_half_size, project, ProjectedVertex};

    // Rendering
    pub use crate::render::framebuffer::{BufferError, PixelBuffer};
    pub use crate::render::raster;

    // Window & Input
    pub use crate::window::{
        FrameClock, Key, Window, WindowEvent, WINDOW_HEIGHT, WINDOW_WIDTH,
    };
}
