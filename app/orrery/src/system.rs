/// The solar system registry: a named collection of bodies, each pairing
/// an immutable config with its live transform state, plus the update
/// driver that advances all bodies together.
///
/// Orbital position is recomputed from absolute simulated time each tick
/// (no integration error accumulates); spin is the one quantity that
/// integrates, accumulating `rotation_speed` per update call without bound.

use glam::Vec3;
use helios_engine::{Color, EngineContext, Entity, EntityId, MeshComponent, Scene};

use crate::config::{ConfigError, PlanetConfig, PlanetParams};

/// Fixed spin rate of the sun, radians per update call.
/// Independent of every planet config and of the panel speed multiplier.
pub const SUN_SPIN: f32 = 0.001;

/// Opacity of ring annuli.
const RING_OPACITY: f32 = 0.8;

/// Drawable node handle for one registered body: the sphere itself plus
/// optional atmosphere shell and ring annulus. All writes go through the
/// scene; the registry owns these ids exclusively.
#[derive(Debug, Clone, Copy)]
pub struct BodyNode {
    pub body: EntityId,
    pub atmosphere: Option<EntityId>,
    pub ring: Option<EntityId>,
}

impl BodyNode {
    /// Move every node of the body to `pos`.
    pub fn set_position(&self, scene: &mut Scene, pos: Vec3) {
        for id in self.ids() {
            if let Some(entity) = scene.get_mut(id) {
                entity.pos = pos;
            }
        }
    }

    /// Set the body's spin. The atmosphere shell turns with the surface;
    /// the ring does not inherit spin.
    pub fn set_rotation_y(&self, scene: &mut Scene, angle: f32) {
        if let Some(entity) = scene.get_mut(self.body) {
            entity.rotation_y = angle;
        }
        if let Some(id) = self.atmosphere {
            if let Some(entity) = scene.get_mut(id) {
                entity.rotation_y = angle;
            }
        }
    }

    fn ids(&self) -> impl Iterator<Item = EntityId> {
        [Some(self.body), self.atmosphere, self.ring]
            .into_iter()
            .flatten()
    }

    fn despawn(&self, scene: &mut Scene) {
        for id in self.ids() {
            scene.despawn(id);
        }
    }
}

/// One registry entry: name, read-only config, node ids, accumulated spin.
struct BodyEntry {
    name: String,
    config: PlanetConfig,
    node: BodyNode,
    spin: f32,
}

/// Named collection of bodies plus the sun singleton.
pub struct SolarSystem {
    entries: Vec<BodyEntry>,
    sun: Option<EntityId>,
    sun_spin: f32,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            sun: None,
            sun_spin: 0.0,
        }
    }

    /// Register the sun entity. Its spin advances on every update call.
    pub fn set_sun(&mut self, id: EntityId) {
        self.sun = Some(id);
    }

    /// Register a new named body: resolve the config, spawn its drawable
    /// nodes at the t = 0 orbital position, record the entry.
    /// Duplicate names are rejected; replace via `remove_planet` first.
    pub fn create_planet(
        &mut self,
        ctx: &mut EngineContext,
        name: &str,
        params: PlanetParams,
    ) -> Result<(), ConfigError> {
        let config = PlanetConfig::resolve(params)?;
        if self.entries.iter().any(|e| e.name == name) {
            return Err(ConfigError::DuplicateName(name.to_string()));
        }

        let node = Self::spawn_node(ctx, name, &config);
        self.entries.push(BodyEntry {
            name: name.to_string(),
            config,
            node,
            spin: 0.0,
        });
        Ok(())
    }

    fn spawn_node(ctx: &mut EngineContext, name: &str, config: &PlanetConfig) -> BodyNode {
        let start = Vec3::new(config.orbit_radius, 0.0, 0.0);

        let body = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(body)
                .with_tag(name)
                .with_pos(start)
                .with_mesh(
                    MeshComponent::sphere(config.radius, Color::from_array(config.color))
                        .with_shininess(16.0),
                ),
        );

        let atmosphere = (config.atmosphere_opacity > 0.0).then(|| {
            let id = ctx.next_id();
            let shell_radius = config.radius * (1.0 + config.atmosphere_thickness);
            ctx.scene.spawn(
                Entity::new(id).with_pos(start).with_mesh(
                    MeshComponent::sphere(
                        shell_radius,
                        Color::from_array(config.atmosphere_color),
                    )
                    .with_opacity(config.atmosphere_opacity),
                ),
            );
            id
        });

        let ring = config.rings.as_ref().map(|rings| {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id).with_pos(start).with_mesh(
                    MeshComponent::ring(
                        rings.inner,
                        rings.outer,
                        Color::from_array(rings.color),
                    )
                    .with_opacity(RING_OPACITY),
                ),
            );
            id
        });

        BodyNode { body, atmosphere, ring }
    }

    /// Remove a named body, despawning every node it owns.
    /// Returns false if no such body is registered.
    pub fn remove_planet(&mut self, scene: &mut Scene, name: &str) -> bool {
        if let Some(idx) = self.entries.iter().position(|e| e.name == name) {
            let entry = self.entries.swap_remove(idx);
            entry.node.despawn(scene);
            true
        } else {
            false
        }
    }

    /// Advance every body to `simulated_time` and apply one tick of spin,
    /// then advance the sun's own rotation. Entry order is not observable:
    /// bodies do not interact.
    pub fn update_planets(&mut self, scene: &mut Scene, simulated_time: f64) {
        for entry in &mut self.entries {
            entry.spin += entry.config.rotation_speed;

            let angle = simulated_time * entry.config.orbit_speed as f64;
            let pos = Vec3::new(
                entry.config.orbit_radius * angle.cos() as f32,
                0.0,
                entry.config.orbit_radius * angle.sin() as f32,
            );

            entry.node.set_position(scene, pos);
            entry.node.set_rotation_y(scene, entry.spin);
        }

        if let Some(id) = self.sun {
            self.sun_spin += SUN_SPIN;
            if let Some(entity) = scene.get_mut(id) {
                entity.rotation_y = self.sun_spin;
            }
        }
    }

    /// Number of registered bodies (the sun is not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn node(&self, name: &str) -> Option<&BodyNode> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.node)
    }

    pub fn config(&self, name: &str) -> Option<&PlanetConfig> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.config)
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}
