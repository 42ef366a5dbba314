pub mod lighting;
pub mod render;
pub mod rng;
pub mod starfield;
