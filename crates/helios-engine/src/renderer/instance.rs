use bytemuck::{Pod, Zeroable};

/// Shape kind discriminant in the instance wire format.
pub const SHAPE_SPHERE: f32 = 0.0;
pub const SHAPE_RING: f32 = 1.0;

/// Per-instance render data written to SharedArrayBuffer for the
/// TypeScript renderer. 16 floats = 64 bytes per instance.
///
/// `param0`/`param1` depend on the shape: sphere radius (param1 unused),
/// or ring inner/outer radii.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation around the vertical axis, radians.
    pub rotation_y: f32,
    /// SHAPE_SPHERE or SHAPE_RING.
    pub shape: f32,
    pub param0: f32,
    pub param1: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub opacity: f32,
    /// HDR glow multiplier; > 0 bypasses the lighting pass.
    pub emissive: f32,
    /// Phong specular exponent.
    pub shininess: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of body instances, rebuilt from the scene each frame.
/// Opaque instances come first; `opaque_split` marks where the
/// translucent tail (atmospheres, rings, guides) begins.
pub struct BodyBuffer {
    instances: Vec<BodyInstance>,
    pub opaque_split: u32,
}

impl BodyBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            opaque_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.opaque_split = 0;
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn set_opaque_split(&mut self, split: u32) {
        self.opaque_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for BodyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_instance_is_16_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 64);
        assert_eq!(BodyInstance::FLOATS, 16);
    }

    #[test]
    fn body_buffer_push_and_count() {
        let mut buf = BodyBuffer::new();
        buf.push(BodyInstance::default());
        buf.push(BodyInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.opaque_split, 0);
    }
}
