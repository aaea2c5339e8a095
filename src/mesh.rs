use crate::colors;
use crate::math::vec3::Vec3;

pub const CUBE_VERTEX_COUNT: usize = 8;
pub const CUBE_EDGE_COUNT: usize = 12;

/// An undirected wireframe edge; `a` and `b` index into [`CUBE_VERTICES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

// Static data with 'static lifetime - compiled into the binary and shared
// across the whole program; the frame driver only ever reads it.
pub const CUBE_VERTICES: [Vec3; CUBE_VERTEX_COUNT] = [
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

// Each pair connects two vertices that differ in exactly one coordinate.
pub const CUBE_EDGES: [Edge; CUBE_EDGE_COUNT] = [
    // Along Z
    Edge { a: 0, b: 1 },
    Edge { a: 2, b: 3 },
    Edge { a: 4, b: 5 },
    Edge { a: 6, b: 7 },
    // Along Y
    Edge { a: 0, b: 2 },
    Edge { a: 1, b: 3 },
    Edge { a: 4, b: 6 },
    Edge { a: 5, b: 7 },
    // Along X
    Edge { a: 0, b: 4 },
    Edge { a: 1, b: 5 },
    Edge { a: 2, b: 6 },
    Edge { a: 3, b: 7 },
];

// Markers on the z = -1 face are yellow, on the z = +1 face red, so the
// near and far sides stay distinguishable while the cube spins.
pub const CUBE_VERTEX_COLORS: [u32; CUBE_VERTEX_COUNT] = [
    colors::VERTEX_YELLOW,
    colors::VERTEX_RED,
    colors::VERTEX_YELLOW,
    colors::VERTEX_RED,
    colors::VERTEX_YELLOW,
    colors::VERTEX_RED,
    colors::VERTEX_YELLOW,
    colors::VERTEX_RED,
];
