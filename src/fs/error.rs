// src/fs/error.rs
//! Errors returned by the filesystem operations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure of a single browser operation. None of these end the program.
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Something already lives at the requested directory path.
    #[error("Directory \"{0}\" already exists!")]
    AlreadyExists(String),

    /// The OS refused the create call without a more specific error.
    #[error("Failed to create directory '{0}'!")]
    CreateFailed(String),

    #[error("Directory name cannot be empty!")]
    EmptyName,

    /// The current directory has no parent.
    #[error("Already at root or no parent directory exists!")]
    AtRoot,

    /// The current path carries no root component.
    #[error("No root directory for \"{}\"", .0.display())]
    NoRoot(PathBuf),

    /// A custom path could not be entered. The message never echoes the
    /// requested path.
    #[error("Directory \"InvalidPath\" not found!")]
    NotFound(PathBuf),

    /// An OS-level failure, reported with the underlying message.
    #[error("{op}: {source}: \"{}\"", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BrowseError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// True for OS-level failures, which the menu prints as
    /// "Filesystem error: ...".
    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
