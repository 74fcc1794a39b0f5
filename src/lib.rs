pub mod ansi;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod models;
pub mod output;
pub mod state;
pub mod world;

// Convenient re-exports (so call sites can do `cavern::Game`, etc.)
pub use commands::process_command;
pub use game::Game;
pub use state::session::Session;
