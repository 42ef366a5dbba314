pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{Color, MeshComponent, Shape};
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use renderer::camera::{CameraUniform, OrbitCamera};
pub use renderer::instance::{BodyBuffer, BodyInstance};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::ProtocolLayout;
pub use bridge::protocol::{CAMERA_FLOATS, DEFAULT_MAX_LIGHTS, LIGHT_FLOATS};
pub use systems::lighting::{LightState, PointLight};
pub use systems::render::build_body_buffer;
pub use systems::rng::Rng;
pub use systems::starfield::{StarVertex, Starfield};
