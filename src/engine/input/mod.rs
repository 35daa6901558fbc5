// Input handling system
//
// Keyboard events from winit are mapped to actions, and the held movement
// actions are folded into a single direction vector each frame.
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, Action};
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per frame
// character.set_direction(input.direction());
// ```

pub mod action;
pub mod manager;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use manager::InputManager;
