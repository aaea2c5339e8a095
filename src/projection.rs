//! Perspective projection of object-space vertices into screen space.
//!
//! The pipeline is deliberately matrix-free: a Y-axis rotation, a fixed
//! translation away from the camera, a perspective divide against the
//! negated depth, and a viewport remap. [`project`] is a pure function of
//! its inputs and is invoked once per vertex per frame.

use crate::math::vec3::Vec3;

/// Distance from the camera to the cube center along the view axis.
pub const CAMERA_DISTANCE: f32 = 3.0;

/// Numerator of the depth-scaled marker half-size.
pub const MARKER_SCALE: f32 = 20.0;

/// A vertex mapped to integer pixel coordinates.
///
/// `depth` is the camera-space z after translation - negative for anything
/// in front of the camera - kept around so markers can scale with distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedVertex {
    pub x: i32,
    pub y: i32,
    pub depth: f32,
}

/// Project one vertex at the given rotation angle onto a `width` x `height`
/// pixel grid.
///
/// No near-plane clipping is performed: a vertex crossing behind the camera
/// would flip sign in the divide and project incorrectly. The cube sits at
/// [`CAMERA_DISTANCE`] and never gets that close, so the case cannot arise
/// here.
pub fn project(vertex: Vec3, angle: f32, width: u32, height: u32) -> ProjectedVertex {
    let rotated = vertex.rotate_y(angle);
    let depth = rotated.z - CAMERA_DISTANCE;

    // Perspective divide onto the plane at distance 1, camera looking down
    // the negative view axis.
    let x_proj = rotated.x / -depth;
    let y_proj = rotated.y / -depth;

    // Remap from [-1, 1] device coordinates to pixels, truncating toward
    // zero rather than rounding.
    let x = ((1.0 + x_proj) / 2.0 * width as f32) as i32;
    let y = ((1.0 + y_proj) / 2.0 * height as f32) as i32;

    ProjectedVertex { x, y, depth }
}

/// Half-size of a vertex marker shrinking with distance from the camera.
pub fn marker_half_size(depth: f32) -> i32 {
    (MARKER_SCALE / depth).abs() as i32
}
