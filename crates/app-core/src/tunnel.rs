//! Fixed target sets: tunnel layout and logo point cloud.

use crate::constants::{ROTATION_JITTER_SPAN, SCALE_JITTER_SPAN};
use glam::Vec3;
use rand::prelude::*;

/// Per-instance tunnel attributes. `base_z` advances and wraps every frame;
/// the jitters are immutable after construction.
#[derive(Clone, Copy, Debug)]
pub struct TunnelSlot {
    pub base_z: f32,
    pub scale_jitter: f32,
    pub rotation_jitter: f32,
}

/// Evenly spaced tunnel depths with per-instance scale and roll jitter.
pub fn tunnel_layout(count: usize, depth: f32, rng: &mut StdRng) -> Vec<TunnelSlot> {
    let spacing = depth / count as f32;
    (0..count)
        .map(|i| TunnelSlot {
            base_z: -(i as f32) * spacing,
            scale_jitter: 1.0 + rng.gen::<f32>() * SCALE_JITTER_SPAN,
            rotation_jitter: (rng.gen::<f32>() - 0.5) * ROTATION_JITTER_SPAN,
        })
        .collect()
}

/// Uniformly sample `count` points inside the equilateral logo triangle.
///
/// Barycentric rejection sampling: draw `r1, r2` in [0, 1); a draw outside
/// the lower-left half-square is reflected back in, which keeps the
/// distribution uniform. Points are recentered vertically so the triangle's
/// centroid sits at the origin, and pinned to the logo display depth.
pub fn logo_targets(count: usize, edge: f32, logo_z: f32, rng: &mut StdRng) -> Vec<Vec3> {
    let h = 3.0_f32.sqrt() * edge / 2.0;
    let a = Vec3::new(0.0, h, 0.0);
    let b = Vec3::new(-edge / 2.0, 0.0, 0.0);
    let c = Vec3::new(edge / 2.0, 0.0, 0.0);

    (0..count)
        .map(|_| {
            let mut r1 = rng.gen::<f32>();
            let mut r2 = rng.gen::<f32>();
            if r1 + r2 > 1.0 {
                r1 = 1.0 - r1;
                r2 = 1.0 - r2;
            }
            let mut p = a * (1.0 - r1 - r2) + b * r1 + c * r2;
            p.y -= h / 3.0;
            p.z = logo_z;
            p
        })
        .collect()
}

/// Unit equilateral triangle (centroid at origin) as a line list of its
/// three edges, for the wireframe instanced draw. WebGPU has no wireframe
/// polygon mode, so the outline is drawn as lines directly.
pub fn triangle_outline_vertices() -> [[f32; 3]; 6] {
    let h = 3.0_f32.sqrt() / 2.0;
    let apex = [0.0, 2.0 * h / 3.0, 0.0];
    let left = [-0.5, -h / 3.0, 0.0];
    let right = [0.5, -h / 3.0, 0.0];
    [apex, left, left, right, right, apex]
}
