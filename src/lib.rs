// src/lib.rs
//! dirbrowse - an interactive menu for listing, creating and changing
//! directories.
//!
//! The current directory is held by [`app::App`]; the process working
//! directory is never changed.

pub mod app;
pub mod config;
pub mod fs;
pub mod ui;
