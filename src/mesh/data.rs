//! Vertex arrays for the five tabletop meshes.
//!
//! Each vertex is `position.xyz, normal.xyz, uv` (eight floats).

pub const TABLE_VERTICES: [f32; 288] = [
    -2.0, 0.0, -1.0, -1.0, 0.0, -1.0, 1.0, 0.0,
    -2.0, 0.1, -1.0, -1.0, 1.0, -1.0, 1.0, 0.0,
    -2.0, 0.1, 1.0, -1.0, 1.0, 1.0, 0.0, 0.0,
    -2.0, 0.1, 1.0, -1.0, 1.0, 1.0, 0.0, 0.0,
    -2.0, 0.0, 1.0, -1.0, 0.0, 1.0, 0.0, 0.0,
    -2.0, 0.0, -1.0, -1.0, 0.0, -1.0, 1.0, 0.0,
    2.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, 1.0,
    2.0, 0.1, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
    -2.0, 0.1, -1.0, -1.0, 1.0, -1.0, 1.0, 0.0,
    -2.0, 0.1, -1.0, -1.0, 1.0, -1.0, 1.0, 0.0,
    -2.0, 0.0, -1.0, -1.0, 0.0, -1.0, 1.0, 0.0,
    2.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, 1.0,
    2.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0,
    2.0, 0.1, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0,
    2.0, 0.1, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
    2.0, 0.1, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
    2.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, 1.0,
    2.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0,
    -2.0, 0.0, 1.0, -1.0, 0.0, 1.0, 0.0, 0.0,
    -2.0, 0.1, 1.0, -1.0, 1.0, 1.0, 0.0, 0.0,
    2.0, 0.1, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0,
    2.0, 0.1, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0,
    2.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0,
    -2.0, 0.0, 1.0, -1.0, 0.0, 1.0, 0.0, 0.0,
    -2.0, 0.1, 1.0, -1.0, 1.0, 1.0, 0.0, 0.0,
    -2.0, 0.1, -1.0, -1.0, 1.0, -1.0, 1.0, 0.0,
    2.0, 0.1, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
    2.0, 0.1, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
    2.0, 0.1, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0,
    -2.0, 0.1, 1.0, -1.0, 1.0, 1.0, 0.0, 0.0,
    -2.0, 0.0, -1.0, -1.0, 0.0, -1.0, 1.0, 0.0,
    -2.0, 0.0, 1.0, -1.0, 0.0, 1.0, 0.0, 0.0,
    2.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0,
    2.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0,
    2.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, 1.0,
    -2.0, 0.0, -1.0, -1.0, 0.0, -1.0, 1.0, 0.0,
];

pub const CLOTH_VERTICES: [f32; 48] = [
    -2.0, 0.1001, 0.4, -1.0, 1.0, 1.0, 0.0, 0.0,
    -2.0, 0.1001, -0.4, -1.0, 1.0, -1.0, 1.0, 0.0,
    2.0, 0.1001, -0.4, 1.0, 1.0, -1.0, 1.0, 1.0,
    2.0, 0.1001, -0.4, 1.0, 1.0, -1.0, 1.0, 1.0,
    2.0, 0.1001, 0.4, 1.0, 1.0, 1.0, 0.0, 1.0,
    -2.0, 0.1001, 0.4, -1.0, 1.0, 1.0, 0.0, 0.0,
];

pub const DIE_VERTICES: [f32; 96] = [
    1.6, 0.10001, -0.25, 1.0, 1.0, 0.0, 0.0, 1.0,
    1.65, 0.10001, -0.15, 1.0, 1.0, 0.0, 0.0, 0.0,
    1.55, 0.10001, -0.15, 1.0, 1.0, 0.0, 1.0, 1.0,
    1.65, 0.10001, -0.15, 1.0, 1.0, 0.0, 0.0, 0.0,
    1.55, 0.10001, -0.15, 1.0, 1.0, 0.0, 1.0, 1.0,
    1.6, 0.2, -0.2, 1.0, 1.0, 0.0, 1.0, 0.0,
    1.6, 0.10001, -0.25, 1.0, 1.0, 0.0, 0.0, 1.0,
    1.65, 0.10001, -0.15, 1.0, 1.0, 0.0, 0.0, 0.0,
    1.6, 0.2, -0.2, 1.0, 1.0, 0.0, 0.5, 0.5,
    1.55, 0.10001, -0.15, 1.0, 1.0, 0.0, 1.0, 1.0,
    1.6, 0.10001, -0.25, 1.0, 1.0, 0.0, 0.0, 1.0,
    1.6, 0.2, -0.2, 1.0, 1.0, 0.0, 1.0, 0.0,
];

pub const BOX_VERTICES: [f32; 288] = [
    1.2, 0.10001, -0.5, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.8, 1.0, 1.0, -1.0, 1.0, 0.0,
    1.7, 0.10001, -0.8, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.7, 0.10001, -0.8, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.7, 0.10001, -0.5, 1.0, 1.0, -1.0, 0.0, 1.0,
    1.2, 0.10001, -0.5, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.5, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.8, 1.0, 1.0, -1.0, 1.0, 0.0,
    1.2, 0.60001, -0.8, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.2, 0.60001, -0.8, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.2, 0.60001, -0.5, 1.0, 1.0, -1.0, 0.0, 1.0,
    1.2, 0.10001, -0.5, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.60001, -0.5, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.60001, -0.8, 1.0, 1.0, -1.0, 1.0, 0.0,
    1.7, 0.60001, -0.8, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.7, 0.60001, -0.8, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.7, 0.60001, -0.5, 1.0, 1.0, -1.0, 0.0, 1.0,
    1.2, 0.60001, -0.5, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.7, 0.10001, -0.5, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.7, 0.60001, -0.5, 1.0, 1.0, -1.0, 0.0, 1.0,
    1.7, 0.60001, -0.8, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.7, 0.60001, -0.8, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.7, 0.10001, -0.8, 1.0, 1.0, -1.0, 1.0, 0.0,
    1.7, 0.10001, -0.5, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.5, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.60001, -0.5, 1.0, 1.0, -1.0, 0.0, 1.0,
    1.7, 0.60001, -0.5, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.7, 0.60001, -0.5, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.7, 0.10001, -0.5, 1.0, 1.0, -1.0, 1.0, 0.0,
    1.2, 0.10001, -0.5, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.8, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.60001, -0.8, 1.0, 1.0, -1.0, 0.0, 1.0,
    1.7, 0.60001, -0.8, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.7, 0.60001, -0.8, 1.0, 1.0, -1.0, 1.0, 1.0,
    1.7, 0.10001, -0.8, 1.0, 1.0, -1.0, 1.0, 0.0,
    1.2, 0.10001, -0.8, 1.0, 1.0, -1.0, 0.0, 0.0,
];

pub const CANDLE_VERTICES: [f32; 600] = [
    1.0, 0.10001, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.10001, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.5, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.5, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.5, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.10001, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.10001, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.10001, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.5, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.5, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.5, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.10001, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.10001, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.5, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.5, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.5, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.10001, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.10001, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.5, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.5, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.5, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.10001, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.10001, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.10001, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.5, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.5, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.5, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.10001, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.10001, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.5, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.5, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.5, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.10001, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.5, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.5, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.5, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.10001, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.10001, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.10001, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.5, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.5, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.5, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.10001, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.102, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.102, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.102, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.102, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.102, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.102, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.102, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.102, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.102, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.102, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.3, 0.102, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.102, -0.3, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.102, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.102, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.4, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.1, 0.102, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.0, 0.102, -0.2, 1.0, 1.0, -1.0, 0.0, 0.0,
    1.2, 0.102, -0.1, 1.0, 1.0, -1.0, 0.0, 0.0,
];
