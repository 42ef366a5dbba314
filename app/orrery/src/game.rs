/// Orrery — the solar system scene and its per-frame driver.
///
/// Scene assembly happens once in `init`; every frame, `update` reads the
/// panel bindings, advances simulated time while auto-rotate is on, and
/// steers the orbit camera from pointer input.

use glam::Vec3;
use helios_engine::*;

use crate::bodies;
use crate::manifest::SystemManifest;
use crate::system::SolarSystem;

// ── Custom event kinds from the panel ───────────────────────────────

pub const CUSTOM_SET_AUTO_ROTATE: u32 = 1;
pub const CUSTOM_SET_ROTATION_SPEED: u32 = 2;
pub const CUSTOM_RESET_VIEW: u32 = 3;
/// Viewport resize (sent by the host as kind=99).
pub const CUSTOM_RESIZE: u32 = 99;

// ── Game event kinds to the panel ───────────────────────────────────

pub const EVENT_TIME_INFO: f32 = 1.0;

// ── Panel bounds ────────────────────────────────────────────────────

pub const ROTATION_SPEED_MIN: f32 = 0.1;
pub const ROTATION_SPEED_MAX: f32 = 5.0;

/// Live panel bindings, observed once per frame. The panel writes them
/// through custom events; changes take effect next frame, no smoothing.
struct PanelState {
    auto_rotate: bool,
    rotation_speed: f32,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            rotation_speed: 1.0,
        }
    }
}

pub struct Orrery {
    system: SolarSystem,
    /// Simulated time in update ticks, advanced only while auto-rotate is on.
    simulated_time: f64,
    panel: PanelState,

    // Drag state
    dragging: bool,
    last_pointer: (f32, f32),
}

impl Orrery {
    pub fn new() -> Self {
        Self {
            system: SolarSystem::new(),
            simulated_time: 0.0,
            panel: PanelState::default(),
            dragging: false,
            last_pointer: (0.0, 0.0),
        }
    }

    /// Spawn the decorative concentric guides at evenly spaced radii.
    fn spawn_orbit_guides(ctx: &mut EngineContext) {
        for i in 0..bodies::ORBIT_GUIDE_COUNT {
            let radius = (i as f32 + 1.0) * bodies::ORBIT_GUIDE_SPACING;
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id).with_mesh(
                    MeshComponent::ring(
                        radius - bodies::ORBIT_GUIDE_WIDTH,
                        radius + bodies::ORBIT_GUIDE_WIDTH,
                        Color::from_array(bodies::ORBIT_GUIDE_COLOR),
                    )
                    .with_opacity(bodies::ORBIT_GUIDE_OPACITY),
                ),
            );
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.last_pointer = (*x, *y);
                }
                InputEvent::PointerMove { x, y } => {
                    if self.dragging {
                        let dx = *x - self.last_pointer.0;
                        let dy = *y - self.last_pointer.1;
                        ctx.camera.orbit(dx, dy);
                        self.last_pointer = (*x, *y);
                    }
                }
                InputEvent::PointerUp { .. } => {
                    self.dragging = false;
                }
                InputEvent::Wheel { delta } => {
                    ctx.camera.zoom(*delta);
                }
                InputEvent::Custom { kind, a, b, .. } => match *kind {
                    CUSTOM_SET_AUTO_ROTATE => {
                        self.panel.auto_rotate = *a != 0.0;
                    }
                    CUSTOM_SET_ROTATION_SPEED => {
                        self.panel.rotation_speed =
                            a.clamp(ROTATION_SPEED_MIN, ROTATION_SPEED_MAX);
                    }
                    CUSTOM_RESET_VIEW => {
                        ctx.camera.reset();
                    }
                    CUSTOM_RESIZE => {
                        ctx.camera.set_aspect(*a, *b);
                    }
                    _ => {}
                },
            }
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 60.0,
            max_bodies: 64,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Sun ──────────────────────────────────────────────────────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id).with_tag("sun").with_mesh(
                MeshComponent::sphere(
                    bodies::SUN_RADIUS,
                    Color::from_array(bodies::SUN_COLOR),
                )
                .with_emissive(bodies::SUN_EMISSIVE),
            ),
        );
        self.system.set_sun(sun_id);

        // ── Planets ──────────────────────────────────────────────────
        for (name, params) in bodies::planet_table() {
            if let Err(err) = self.system.create_planet(ctx, name, params) {
                log::warn!("skipping body {name}: {err}");
            }
        }

        // ── Orbit guides ─────────────────────────────────────────────
        Self::spawn_orbit_guides(ctx);

        // ── Lighting: sunlight from the origin plus dim ambient ──────
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            bodies::SUN_COLOR,
            bodies::SUNLIGHT_INTENSITY,
            bodies::SUNLIGHT_RADIUS,
        ));
        ctx.lights
            .set_ambient(bodies::AMBIENT[0], bodies::AMBIENT[1], bodies::AMBIENT[2]);

        log::info!("orrery: {} bodies registered", self.system.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        // Panel bindings gate the whole simulation step: with auto-rotate
        // off, no update runs and every body freezes where it is.
        if self.panel.auto_rotate {
            self.simulated_time += self.panel.rotation_speed as f64;
            self.system.update_planets(&mut ctx.scene, self.simulated_time);
        }

        ctx.emit_event(GameEvent {
            kind: EVENT_TIME_INFO,
            a: self.simulated_time as f32,
            b: self.panel.rotation_speed,
            c: if self.panel.auto_rotate { 1.0 } else { 0.0 },
        });
    }

    fn load_manifest(&mut self, ctx: &mut EngineContext, json: &str) {
        let manifest = match SystemManifest::from_json(json) {
            Ok(manifest) => manifest,
            Err(err) => {
                log::warn!("ignoring malformed system manifest: {err}");
                return;
            }
        };

        // Replace the registered system wholesale; each removal releases
        // the entry's drawable nodes before the new set spawns.
        for name in self.system.names() {
            self.system.remove_planet(&mut ctx.scene, &name);
        }
        for entry in manifest.planets {
            if let Err(err) = self.system.create_planet(ctx, &entry.name, entry.params) {
                log::warn!("skipping body {}: {err}", entry.name);
            }
        }
        log::info!("orrery: manifest loaded, {} bodies", self.system.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_game() -> (Orrery, EngineContext) {
        let mut game = Orrery::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        (game, ctx)
    }

    fn expected_scene_len() -> usize {
        // sun + guides + one node per body sphere/atmosphere/ring
        let per_body: usize = bodies::planet_table()
            .iter()
            .map(|(_, p)| {
                1 + usize::from(p.atmosphere_opacity > 0.0) + usize::from(p.has_rings)
            })
            .sum();
        1 + bodies::ORBIT_GUIDE_COUNT + per_body
    }

    #[test]
    fn init_assembles_the_full_scene() {
        let (game, ctx) = init_game();
        assert_eq!(ctx.scene.len(), expected_scene_len());
        assert_eq!(game.system.len(), 8);
        assert!(ctx.scene.find_by_tag("sun").is_some());
        assert!(ctx.scene.find_by_tag("earth").is_some());
        assert_eq!(ctx.lights.count(), 1);
        assert_eq!(ctx.lights.ambient(), bodies::AMBIENT);
    }

    #[test]
    fn update_advances_bodies_while_auto_rotate_is_on() {
        let (mut game, mut ctx) = init_game();
        let input = InputQueue::new();

        let before = ctx.scene.find_by_tag("earth").unwrap().pos;
        game.update(&mut ctx, &input);
        game.update(&mut ctx, &input);
        let after = ctx.scene.find_by_tag("earth").unwrap().pos;
        assert_ne!(before, after);
    }

    #[test]
    fn auto_rotate_off_freezes_all_positions() {
        let (mut game, mut ctx) = init_game();

        // A few frames of motion first.
        let input = InputQueue::new();
        game.update(&mut ctx, &input);

        let mut off = InputQueue::new();
        off.push(InputEvent::Custom {
            kind: CUSTOM_SET_AUTO_ROTATE,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        game.update(&mut ctx, &off);
        let frozen_pos = ctx.scene.find_by_tag("earth").unwrap().pos;
        let frozen_spin = ctx.scene.find_by_tag("earth").unwrap().rotation_y;

        for _ in 0..5 {
            game.update(&mut ctx, &InputQueue::new());
        }
        let earth = ctx.scene.find_by_tag("earth").unwrap();
        assert_eq!(earth.pos, frozen_pos);
        assert_eq!(earth.rotation_y, frozen_spin);
    }

    #[test]
    fn rotation_speed_is_clamped_to_panel_range() {
        let (mut game, mut ctx) = init_game();

        let mut input = InputQueue::new();
        input.push(InputEvent::Custom {
            kind: CUSTOM_SET_ROTATION_SPEED,
            a: 99.0,
            b: 0.0,
            c: 0.0,
        });
        game.update(&mut ctx, &input);
        assert_eq!(game.panel.rotation_speed, ROTATION_SPEED_MAX);

        let mut input = InputQueue::new();
        input.push(InputEvent::Custom {
            kind: CUSTOM_SET_ROTATION_SPEED,
            a: -3.0,
            b: 0.0,
            c: 0.0,
        });
        game.update(&mut ctx, &input);
        assert_eq!(game.panel.rotation_speed, ROTATION_SPEED_MIN);
    }

    #[test]
    fn pointer_drag_orbits_the_camera() {
        let (mut game, mut ctx) = init_game();
        let yaw_before = ctx.camera.yaw;

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 100.0, y: 100.0 });
        input.push(InputEvent::PointerMove { x: 160.0, y: 100.0 });
        input.push(InputEvent::PointerUp { x: 160.0, y: 100.0 });
        game.update(&mut ctx, &input);
        assert_ne!(ctx.camera.yaw, yaw_before);

        // A move without a preceding press does not orbit.
        let yaw_after = ctx.camera.yaw;
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 300.0, y: 300.0 });
        game.update(&mut ctx, &input);
        assert_eq!(ctx.camera.yaw, yaw_after);
    }

    #[test]
    fn wheel_zoom_and_reset_view() {
        let (mut game, mut ctx) = init_game();
        let distance_before = ctx.camera.distance;

        let mut input = InputQueue::new();
        input.push(InputEvent::Wheel { delta: -1.0 });
        game.update(&mut ctx, &input);
        assert!(ctx.camera.distance < distance_before);

        let mut input = InputQueue::new();
        input.push(InputEvent::Custom {
            kind: CUSTOM_RESET_VIEW,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        game.update(&mut ctx, &input);
        assert_eq!(ctx.camera.distance, distance_before);
    }

    #[test]
    fn every_update_emits_time_info() {
        let (mut game, mut ctx) = init_game();
        game.update(&mut ctx, &InputQueue::new());

        let event = ctx.events.iter().find(|e| e.kind == EVENT_TIME_INFO).unwrap();
        assert_eq!(event.b, 1.0); // default speed multiplier
        assert_eq!(event.c, 1.0); // auto-rotate on

        // The runner clears events between frames; emission repeats.
        ctx.clear_frame_data();
        game.update(&mut ctx, &InputQueue::new());
        assert_eq!(ctx.events.len(), 1);
    }

    #[test]
    fn load_manifest_replaces_the_system() {
        let (mut game, mut ctx) = init_game();
        let json = r#"{
            "planets": [
                { "name": "earth", "orbit_radius": 45.0, "orbit_speed": 0.006 },
                { "name": "moonless", "orbit_radius": 12.0 }
            ]
        }"#;
        game.load_manifest(&mut ctx, json);

        assert_eq!(game.system.len(), 2);
        assert!(game.system.contains("earth"));
        assert!(game.system.contains("moonless"));
        assert!(!game.system.contains("saturn"));
        // Sun and guides survive the swap.
        assert!(ctx.scene.find_by_tag("sun").is_some());
    }

    #[test]
    fn malformed_manifest_leaves_the_system_untouched() {
        let (mut game, mut ctx) = init_game();
        let before = ctx.scene.len();
        game.load_manifest(&mut ctx, "{ not json");
        assert_eq!(game.system.len(), 8);
        assert_eq!(ctx.scene.len(), before);
    }
}
