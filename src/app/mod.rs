// src/app/mod.rs
//! Application module - contains application state and menu dispatch.

pub mod state;

// Re-export the App struct
pub use state::App;
