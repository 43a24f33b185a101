// src/ui/prompt.rs
//! Line-oriented console over any reader/writer pair.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use tracing::debug;

/// Reads answers from `input` and writes menus and messages to `out`.
pub struct Console<R, W> {
    input: R,
    out: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W, color: bool) -> Self {
        Self { input, out, color }
    }

    /// Read one line without its line terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print `prompt` and read an integer, asking again until one is typed.
    /// Blank lines are skipped without complaint. `None` at end of input.
    pub fn read_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.ask(prompt)?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let answer = line.trim();
            if answer.is_empty() {
                continue;
            }
            match answer.parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => {
                    debug!(input = %line, "rejected non-numeric input");
                    self.ask("Invalid input. Enter a number: ")?;
                }
            }
        }
    }

    /// Print `prompt` and read a free-form answer.
    pub fn read_text(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.ask(prompt)?;
        self.read_line()
    }

    /// Prompt text stays on the same line as the answer.
    pub fn ask(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{prompt}")?;
        self.out.flush()
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    pub fn lines(&mut self, lines: &[&str]) -> io::Result<()> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    pub fn heading(&mut self, line: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", line.bold())
        } else {
            self.say(line)
        }
    }

    /// Error lines are prefixed with "Error: ".
    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        let line = format!("Error: {msg}");
        if self.color {
            writeln!(self.out, "{}", line.red())
        } else {
            self.say(&line)
        }
    }

    /// OS-level failures, prefixed with "Filesystem error: ".
    pub fn fs_error(&mut self, msg: &str) -> io::Result<()> {
        let line = format!("Filesystem error: {msg}");
        if self.color {
            writeln!(self.out, "{}", line.red())
        } else {
            self.say(&line)
        }
    }

    /// Hand back the underlying writer, for inspecting captured output.
    pub fn into_output(self) -> W {
        self.out
    }
}
