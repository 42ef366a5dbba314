use helios_engine::{
    build_body_buffer, BodyBuffer, CameraUniform, EngineContext, FixedTimestep, Game,
    GameConfig, InputEvent, InputQueue, ProtocolLayout, Starfield,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot
/// export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    bodies: BodyBuffer,
    stars: Starfield,
    camera: CameraUniform,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let bodies = BodyBuffer::with_capacity(config.max_bodies);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            bodies,
            stars: Starfield::empty(),
            camera: CameraUniform {
                view_proj: [[0.0; 4]; 4],
                eye: [0.0; 3],
                _pad: 0.0,
            },
            timestep,
            config,
            layout,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    /// The starfield is generated here and never again.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.stars = Starfield::generate(
            self.config.star_count,
            self.config.star_extent,
            self.config.star_seed,
        );
        self.game.init(&mut self.ctx);
        self.camera = self.ctx.camera.uniform();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Forward a JSON scene description to the game.
    pub fn load_manifest(&mut self, json: &str) {
        self.game.load_manifest(&mut self.ctx, json);
    }

    /// Run one frame tick: update game, rebuild the wire buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
        }

        // Drain input after update
        self.input.drain();

        // Build the body buffer from entities and snapshot the camera
        build_body_buffer(self.ctx.scene.iter(), &mut self.bodies);
        self.camera = self.ctx.camera.uniform();
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.bodies.instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.bodies.instance_count()
    }

    pub fn opaque_split(&self) -> u32 {
        self.bodies.opaque_split
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.stars.vertices_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.stars.len() as u32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient_r(&self) -> f32 {
        self.ctx.lights.ambient()[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.ctx.lights.ambient()[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.ctx.lights.ambient()[2]
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helios_engine::{Color, Entity, MeshComponent};
    use glam::Vec3;

    /// Minimal game: one spinning sphere, spun only while ticks arrive.
    struct Spinner;

    impl Game for Spinner {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("ball")
                    .with_pos(Vec3::new(5.0, 0.0, 0.0))
                    .with_mesh(MeshComponent::sphere(1.0, Color::WHITE)),
            );
        }

        fn update(&mut self, ctx: &mut EngineContext, _input: &InputQueue) {
            if let Some(e) = ctx.scene.find_by_tag_mut("ball") {
                e.rotation_y += 0.1;
            }
        }
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = GameRunner::new(Spinner);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.body_count(), 0);
    }

    #[test]
    fn init_generates_starfield_once() {
        let mut runner = GameRunner::new(Spinner);
        runner.init();
        assert_eq!(runner.star_count(), GameConfig::default().star_count as u32);
        let ptr_before = runner.stars_ptr();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.stars_ptr(), ptr_before);
    }

    #[test]
    fn tick_runs_fixed_steps_and_rebuilds_bodies() {
        let mut runner = GameRunner::new(Spinner);
        runner.init();

        // Exactly one fixed step
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.body_count(), 1);
        let spin_after_one = runner.ctx.scene.find_by_tag("ball").unwrap().rotation_y;
        assert!((spin_after_one - 0.1).abs() < 1e-6);

        // Two frames worth of time in one tick: two steps
        runner.tick(2.0 / 60.0);
        let spin_after_three = runner.ctx.scene.find_by_tag("ball").unwrap().rotation_y;
        assert!((spin_after_three - 0.3).abs() < 1e-5);
    }
}
