// src/app/state.rs
//! Application state and menu dispatch.

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    config::Settings,
    fs::{
        create_directory, filter_by_extension, filter_by_pattern, load_entries, parent_of,
        resolve_dir, root_of, tail_path, BrowseError, Entry,
    },
    ui::{
        menu::{
            ChangeChoice, ListChoice, MainChoice, CHANGE_MENU, CHOICE_PROMPT, LIST_MENU,
            MAIN_MENU, OPTION_PROMPT,
        },
        Console,
    },
};

/// Main application state.
pub struct App {
    /// Directory every operation works against
    current_dir: PathBuf,
    settings: Settings,
}

impl App {
    /// Create the app in the configured start directory, or the process
    /// working directory when none is set or it cannot be entered.
    pub fn new(settings: Settings) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot read the working directory")?;
        let start = match &settings.start_dir {
            Some(dir) => match resolve_dir(&cwd, dir) {
                Ok(dir) => dir,
                Err(_) => {
                    warn!(
                        start_dir = %dir.display(),
                        "start directory unusable, using working directory"
                    );
                    cwd
                }
            },
            None => cwd,
        };
        Ok(Self::with_dir(start, settings))
    }

    /// Create the app rooted at `dir`.
    pub fn with_dir(dir: PathBuf, settings: Settings) -> Self {
        Self {
            current_dir: dir,
            settings,
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Run the menu loop until Exit is chosen or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        loop {
            console.say("")?;
            console.heading(&format!(
                "Current directory: {}",
                tail_path(&self.current_dir, 3)
            ))?;
            console.lines(MAIN_MENU)?;

            let Some(n) = console.read_number(OPTION_PROMPT)? else {
                console.say("")?;
                console.say("Exiting program.")?;
                return Ok(());
            };

            match MainChoice::from_number(n) {
                Some(choice) => {
                    if self.on_choice(choice, console)? {
                        return Ok(());
                    }
                }
                None => console.say("Invalid option. Please try again.")?,
            }
        }
    }

    /// Handle a main-menu choice and return true if the app should quit.
    pub fn on_choice<R: BufRead, W: Write>(
        &mut self,
        choice: MainChoice,
        console: &mut Console<R, W>,
    ) -> io::Result<bool> {
        match choice {
            MainChoice::ListFiles => self.list_files(console)?,
            MainChoice::CreateDirectory => self.create_directory(console)?,
            MainChoice::ChangeDirectory => self.change_directory(console)?,
            MainChoice::Exit => {
                console.say("Exiting program.")?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn list_files<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
        console.lines(LIST_MENU)?;
        let Some(n) = console.read_number(CHOICE_PROMPT)? else {
            return Ok(());
        };
        let Some(choice) = ListChoice::from_number(n) else {
            return console.say("Invalid choice!");
        };

        match choice {
            ListChoice::All => {
                console.say("")?;
                console.heading("Files in current directory:")?;
                let entries = match self.entries() {
                    Ok(entries) => entries,
                    Err(e) => return report(console, &e),
                };
                for entry in &entries {
                    console.say(&format!("- {}", entry.name))?;
                }
            }
            ListChoice::ByExtension => {
                let Some(ext) =
                    console.read_text("Enter file extension (include the dot, e.g., .txt): ")?
                else {
                    return Ok(());
                };
                console.say("")?;
                console.heading(&format!("Listing files with extension {ext}:"))?;
                let entries = match self.entries() {
                    Ok(entries) => entries,
                    Err(e) => return report(console, &e),
                };
                let found = filter_by_extension(&entries, &ext);
                if found.is_empty() {
                    console.say(&format!("No files found with extension {ext}!"))?;
                }
                for entry in found {
                    console.say(&entry.name)?;
                }
            }
            ListChoice::ByPattern => {
                let Some(pattern) = console.read_text("Enter file pattern (e.g., moha*.*): ")?
                else {
                    return Ok(());
                };
                console.say("")?;
                console.heading(&format!("Listing files matching pattern {pattern}:"))?;
                let entries = match self.entries() {
                    Ok(entries) => entries,
                    Err(e) => return report(console, &e),
                };
                let found = filter_by_pattern(&entries, &pattern);
                if found.is_empty() {
                    console.say(&format!("No files found matching pattern {pattern}!"))?;
                }
                for entry in found {
                    console.say(&entry.name)?;
                }
            }
        }
        Ok(())
    }

    fn create_directory<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> io::Result<()> {
        console.say("")?;
        let Some(name) = console.read_text("Enter new directory name: ")? else {
            return Ok(());
        };

        match create_directory(&self.current_dir, &name) {
            Ok(path) => {
                info!(path = %path.display(), "created directory");
                console.say(&format!("Directory \"{name}\" created successfully."))
            }
            Err(e) => report(console, &e),
        }
    }

    fn change_directory<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> io::Result<()> {
        console.say("")?;
        console.heading("Change Directory Menu")?;
        console.lines(CHANGE_MENU)?;
        let Some(n) = console.read_number(CHOICE_PROMPT)? else {
            return Ok(());
        };
        let Some(choice) = ChangeChoice::from_number(n) else {
            return console.say("Invalid choice!");
        };

        match choice {
            ChangeChoice::Parent => match parent_of(&self.current_dir) {
                Ok(parent) => {
                    self.enter(parent);
                    console.say(&format!(
                        "Changed to parent directory: {}",
                        self.current_dir.display()
                    ))
                }
                Err(e) => report(console, &e),
            },
            ChangeChoice::Root => match root_of(&self.current_dir) {
                Ok(root) => {
                    self.enter(root);
                    console.say(&format!(
                        "Changed to root directory: {}",
                        self.current_dir.display()
                    ))
                }
                Err(e) => report(console, &e),
            },
            ChangeChoice::Custom => {
                let Some(input) =
                    console.read_text("Enter new directory path (e.g., /home/user/Documents): ")?
                else {
                    return Ok(());
                };
                match resolve_dir(&self.current_dir, &input) {
                    Ok(dir) => {
                        self.enter(dir);
                        console.say(&format!(
                            "Changed to directory: {}",
                            self.current_dir.display()
                        ))
                    }
                    Err(e) => {
                        debug!(requested = %input, "custom path rejected");
                        report(console, &e)
                    }
                }
            }
        }
    }

    fn entries(&self) -> Result<Vec<Entry>, BrowseError> {
        load_entries(&self.current_dir, self.settings.sort_entries)
    }

    fn enter(&mut self, dir: PathBuf) {
        info!(from = %self.current_dir.display(), to = %dir.display(), "changed directory");
        self.current_dir = dir;
    }
}

/// Print a failed operation; the menu loop carries on afterwards.
fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: &BrowseError) -> io::Result<()> {
    if err.is_filesystem() {
        warn!(error = %err, "filesystem operation failed");
        console.fs_error(&err.to_string())
    } else {
        console.error(&err.to_string())
    }
}
