use wasm_bindgen::prelude::*;
use loopy_engine::*;

mod game;
use game::Platformer;

loopy_web::export_game!(Platformer, "platformer");
