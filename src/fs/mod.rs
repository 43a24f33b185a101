// src/fs/mod.rs
//! Filesystem module - directory listing, creation and navigation.

pub mod browser;
pub mod error;

// Re-export commonly used types
pub use browser::{
    create_directory, filter_by_extension, filter_by_pattern, load_entries, parent_of,
    pattern_prefix, resolve_dir, root_of, tail_path, Entry,
};
pub use error::BrowseError;
