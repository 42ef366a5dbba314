use crate::components::entity::Entity;
use crate::components::mesh::Shape;
use crate::renderer::instance::{BodyBuffer, BodyInstance, SHAPE_RING, SHAPE_SPHERE};

/// Build the body instance buffer from a set of entities.
/// Opaque instances first, translucent after; `opaque_split` marks the
/// boundary so the host can draw the translucent tail back-to-front
/// with blending enabled.
pub fn build_body_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut BodyBuffer) {
    buffer.clear();

    let mut opaque: Vec<BodyInstance> = Vec::new();
    let mut translucent: Vec<BodyInstance> = Vec::new();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        // Fully transparent instances are suppressed outright.
        if mesh.opacity <= 0.0 {
            continue;
        }

        let (shape, param0, param1) = match mesh.shape {
            Shape::Sphere { radius } => (SHAPE_SPHERE, radius, 0.0),
            Shape::Ring { inner, outer } => (SHAPE_RING, inner, outer),
        };

        let instance = BodyInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rotation_y: entity.rotation_y,
            shape,
            param0,
            param1,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            opacity: mesh.opacity,
            emissive: mesh.emissive,
            shininess: mesh.shininess,
            ..Default::default()
        };

        if mesh.opacity >= 1.0 {
            opaque.push(instance);
        } else {
            translucent.push(instance);
        }
    }

    let split = opaque.len() as u32;
    for inst in opaque {
        buffer.push(inst);
    }
    buffer.set_opaque_split(split);
    for inst in translucent {
        buffer.push(inst);
    }
}
