use bytemuck::{Pod, Zeroable};

use crate::systems::rng::Rng;

/// One starfield point.
/// Wire format: x, y, z, brightness (4 floats / 16 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StarVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub brightness: f32,
}

impl StarVertex {
    pub const FLOATS: usize = 4;
}

/// A fixed point cloud of stars inside a bounding cube.
///
/// Generated once at startup and never touched again: individual stars
/// are not animated, the whole field only appears to move through
/// camera motion.
pub struct Starfield {
    vertices: Vec<StarVertex>,
    extent: f32,
}

impl Starfield {
    /// An empty field (placeholder until generation runs at init).
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            extent: 0.0,
        }
    }

    /// Generate `count` stars uniformly placed in the cube
    /// [-extent, extent]^3. Deterministic: same seed, same field.
    pub fn generate(count: usize, extent: f32, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let mut vertices = Vec::with_capacity(count);
        for _ in 0..count {
            vertices.push(StarVertex {
                x: rng.next_signed() * extent,
                y: rng.next_signed() * extent,
                z: rng.next_signed() * extent,
                // Dim stars dominate, a few bright outliers.
                brightness: 0.3 + rng.next_f32() * 0.7,
            });
        }
        log::debug!("starfield: {count} stars in a ±{extent} cube (seed {seed})");
        Self { vertices, extent }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn vertices(&self) -> &[StarVertex] {
        &self.vertices
    }

    /// Raw pointer to vertex data for SharedArrayBuffer reads.
    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }
}
