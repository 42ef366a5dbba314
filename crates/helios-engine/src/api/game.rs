use crate::api::types::{EntityId, GameEvent};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::OrbitCamera;
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of body instances in the render buffer (default: 64).
    pub max_bodies: usize,
    /// Number of starfield points generated at init (default: 1200).
    pub star_count: usize,
    /// Half-extent of the starfield bounding cube in world units (default: 600).
    pub star_extent: f32,
    /// Seed for the starfield generator. Same seed, same field.
    pub star_seed: u64,
    /// Maximum number of point lights (default: 4).
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 16).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_bodies: 64,
            star_count: 1200,
            star_extent: 600.0,
            star_seed: 42,
            max_lights: 4,
            max_events: 16,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: spawn entities, place lights, aim the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Advance simulation state, handle input.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional: rebuild the scene from a JSON description pushed by the host.
    fn load_manifest(&mut self, _ctx: &mut EngineContext, _json: &str) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
/// Holds everything the simulation touches, so tests can drive a full
/// game without any rendering surface behind it.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: OrbitCamera,
    pub lights: LightState,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            camera: OrbitCamera::new(),
            lights: LightState::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host UI.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_monotonic() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(b.0, a.0 + 1);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent { kind: 1.0, a: 2.0, b: 3.0, c: 4.0 });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
