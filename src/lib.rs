//! Browser client for the question, note, chat and village backend.
//!
//! The binary in `main.rs` only mounts [`App`]; everything else lives here.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod stores;
#[cfg(test)]
mod testing;
pub mod utils;

pub use app::App;
