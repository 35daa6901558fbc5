// Engine modules: assets, input, renderer, loop timing

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
