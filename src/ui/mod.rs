// src/ui/mod.rs
//! UI module - menu texts and console input/output.

pub mod menu;
pub mod prompt;

pub use prompt::Console;
