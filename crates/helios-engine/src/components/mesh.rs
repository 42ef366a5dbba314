/// RGB color for mesh rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_array(rgb: [f32; 3]) -> Self {
        Self { r: rgb[0], g: rgb[1], b: rgb[2] }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Shape primitive rendered by the host's instanced pipelines.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Flat annulus in the horizontal plane, centered on the entity.
    Ring { inner: f32, outer: f32 },
}

/// Component for rendered meshes (sphere impostors and flat rings).
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub shape: Shape,
    pub color: Color,
    /// Opacity (1.0 = opaque). Translucent instances are sorted after
    /// opaque ones in the render buffer.
    pub opacity: f32,
    /// Phong specular exponent (default: 32.0).
    pub shininess: f32,
    /// HDR glow multiplier (default: 0.0, values > 0 bypass shading).
    pub emissive: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: Shape::Sphere { radius: 1.0 },
            color: Color::default(),
            opacity: 1.0,
            shininess: 32.0,
            emissive: 0.0,
        }
    }
}

impl MeshComponent {
    pub fn sphere(radius: f32, color: Color) -> Self {
        Self {
            shape: Shape::Sphere { radius },
            color,
            ..Default::default()
        }
    }

    pub fn ring(inner: f32, outer: f32, color: Color) -> Self {
        Self {
            shape: Shape::Ring { inner, outer },
            color,
            ..Default::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_constructor_sets_shape() {
        let mesh = MeshComponent::sphere(3.5, Color::new(0.2, 0.4, 0.8));
        match mesh.shape {
            Shape::Sphere { radius } => assert_eq!(radius, 3.5),
            _ => panic!("expected a sphere"),
        }
        assert_eq!(mesh.opacity, 1.0);
    }

    #[test]
    fn ring_constructor_keeps_bounds() {
        let mesh = MeshComponent::ring(4.5, 7.0, Color::WHITE).with_opacity(0.6);
        match mesh.shape {
            Shape::Ring { inner, outer } => {
                assert_eq!(inner, 4.5);
                assert_eq!(outer, 7.0);
            }
            _ => panic!("expected a ring"),
        }
        assert_eq!(mesh.opacity, 0.6);
    }
}
