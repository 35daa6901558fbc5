// Game layer: the walking character and the demo's presets

pub mod characters;
pub mod config;

pub use config::DemoConfig;
