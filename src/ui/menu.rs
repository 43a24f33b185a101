// src/ui/menu.rs
//! Menu texts and the mapping from typed numbers to menu choices.

/// Main menu, shown before every selection.
pub const MAIN_MENU: &[&str] = &[
    "[1] List Files",
    "[2] Create Directory",
    "[3] Change Directory",
    "[4] Exit",
];

pub const LIST_MENU: &[&str] = &[
    "[1] List All Files",
    "[2] List Files by Extension (e.g., .txt)",
    "[3] List Files by Pattern (e.g., moha*.*)",
];

pub const CHANGE_MENU: &[&str] = &[
    "[1] Move to Parent Directory",
    "[2] Move to Root Directory",
    "[3] Enter Custom Path (e.g., /home/user/Documents)",
];

pub const OPTION_PROMPT: &str = "Enter option: ";
pub const CHOICE_PROMPT: &str = "Enter choice: ";

/// Actions on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    ListFiles,
    CreateDirectory,
    ChangeDirectory,
    Exit,
}

impl MainChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::ListFiles),
            2 => Some(Self::CreateDirectory),
            3 => Some(Self::ChangeDirectory),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Listing modes offered by the "List Files" sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChoice {
    All,
    ByExtension,
    ByPattern,
}

impl ListChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::All),
            2 => Some(Self::ByExtension),
            3 => Some(Self::ByPattern),
            _ => None,
        }
    }
}

/// Targets offered by the "Change Directory" sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeChoice {
    Parent,
    Root,
    Custom,
}

impl ChangeChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Parent),
            2 => Some(Self::Root),
            3 => Some(Self::Custom),
            _ => None,
        }
    }
}
