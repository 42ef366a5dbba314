use wasm_bindgen::prelude::*;
use helios_engine::*;

mod bodies;
mod config;
mod game;
mod manifest;
mod system;

use game::Orrery;

helios_web::export_game!(Orrery, "orrery");
