/// Declarative planet configuration.
///
/// A body is described by a partial `PlanetParams` record (builder calls
/// or manifest JSON); registration resolves it into an immutable
/// `PlanetConfig` with every omitted field filled from the default table.

use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced at registration time. The per-frame path cannot fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a body named \"{0}\" is already registered")]
    DuplicateName(String),
    #[error("ring outer radius {outer} must exceed inner radius {inner}")]
    RingBounds { inner: f32, outer: f32 },
    #[error("invalid system manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Partial parameter set for one body. Every field has a default, so a
/// manifest entry or builder chain only names what it changes.
///
/// Out-of-range values (radius ≤ 0, opacity outside [0, 1]) are accepted
/// silently and render degenerately; only ring bounds are validated.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlanetParams {
    pub radius: f32,
    pub color: [f32; 3],
    /// Falls back to `color` when omitted.
    pub atmosphere_color: Option<[f32; 3]>,
    /// Fractional radius increment of the atmosphere shell.
    pub atmosphere_thickness: f32,
    /// 0 suppresses the atmosphere shell entirely.
    pub atmosphere_opacity: f32,
    /// Distance from the system origin; 0 = stationary at the center.
    pub orbit_radius: f32,
    /// Radians added to the body's spin per update tick.
    pub rotation_speed: f32,
    /// Angular velocity multiplier applied to elapsed simulated time.
    pub orbit_speed: f32,
    pub has_rings: bool,
    pub ring_color: [f32; 3],
    pub ring_inner_radius: f32,
    pub ring_outer_radius: f32,
}

impl Default for PlanetParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            color: [1.0, 1.0, 1.0],
            atmosphere_color: None,
            atmosphere_thickness: 0.1,
            atmosphere_opacity: 0.2,
            orbit_radius: 0.0,
            rotation_speed: 0.005,
            orbit_speed: 0.001,
            has_rings: false,
            ring_color: [1.0, 1.0, 1.0],
            ring_inner_radius: 0.0,
            ring_outer_radius: 0.0,
        }
    }
}

impl PlanetParams {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder pattern --

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_atmosphere_color(mut self, color: [f32; 3]) -> Self {
        self.atmosphere_color = Some(color);
        self
    }

    pub fn with_atmosphere_thickness(mut self, thickness: f32) -> Self {
        self.atmosphere_thickness = thickness;
        self
    }

    pub fn with_atmosphere_opacity(mut self, opacity: f32) -> Self {
        self.atmosphere_opacity = opacity;
        self
    }

    pub fn with_orbit_radius(mut self, orbit_radius: f32) -> Self {
        self.orbit_radius = orbit_radius;
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_orbit_speed(mut self, orbit_speed: f32) -> Self {
        self.orbit_speed = orbit_speed;
        self
    }

    pub fn with_rings(mut self, color: [f32; 3], inner: f32, outer: f32) -> Self {
        self.has_rings = true;
        self.ring_color = color;
        self.ring_inner_radius = inner;
        self.ring_outer_radius = outer;
        self
    }
}

/// Ring geometry parameters, present only when the body is ringed.
#[derive(Debug, Clone, Copy)]
pub struct RingConfig {
    pub color: [f32; 3],
    pub inner: f32,
    pub outer: f32,
}

/// Fully-resolved, immutable configuration of one body.
/// Never mutated after registration.
#[derive(Debug, Clone)]
pub struct PlanetConfig {
    pub radius: f32,
    pub color: [f32; 3],
    pub atmosphere_color: [f32; 3],
    pub atmosphere_thickness: f32,
    pub atmosphere_opacity: f32,
    pub orbit_radius: f32,
    pub rotation_speed: f32,
    pub orbit_speed: f32,
    pub rings: Option<RingConfig>,
}

impl PlanetConfig {
    /// Resolve a partial parameter set against the default table.
    /// Rejects inverted ring bounds; everything else passes through.
    pub fn resolve(params: PlanetParams) -> Result<Self, ConfigError> {
        let rings = if params.has_rings {
            if params.ring_outer_radius <= params.ring_inner_radius {
                return Err(ConfigError::RingBounds {
                    inner: params.ring_inner_radius,
                    outer: params.ring_outer_radius,
                });
            }
            Some(RingConfig {
                color: params.ring_color,
                inner: params.ring_inner_radius,
                outer: params.ring_outer_radius,
            })
        } else {
            None
        };

        Ok(Self {
            radius: params.radius,
            color: params.color,
            atmosphere_color: params.atmosphere_color.unwrap_or(params.color),
            atmosphere_thickness: params.atmosphere_thickness,
            atmosphere_opacity: params.atmosphere_opacity,
            orbit_radius: params.orbit_radius,
            rotation_speed: params.rotation_speed,
            orbit_speed: params.orbit_speed,
            rings,
        })
    }
}
