//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s and
//! front-end commands. It knows nothing about the engine's mode: the engine
//! itself ignores moves while selecting and role picks while playing.

pub mod map;

pub use tui_tag_types as types;

pub use map::{handle_key_event, is_game_key, should_abandon, should_quit};
