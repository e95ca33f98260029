//! Line-oriented prompting with validation loops

use std::io::{self, BufRead, Write};

use crate::book::{parse_category, require_non_empty, Category, Field};
use crate::error::{LibrisError, Result};

/// Reads validated answers from a line reader, writing prompts to a writer
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writer for regular output
    pub fn out(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the prompter, returning the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Show `prompt` and read one line, trimmed
    ///
    /// End of input is reported as an `UnexpectedEof` I/O error.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
        }
        Ok(line.trim().to_string())
    }

    /// Read until a non-blank value is entered
    pub fn read_non_empty(&mut self, prompt: &str, field: Field) -> Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            match require_non_empty(field, &line) {
                Ok(_) => return Ok(line),
                Err(e) => {
                    tracing::trace!(%field, "blank input");
                    writeln!(self.writer, "{e} Please enter a valid {field}.")?;
                }
            }
        }
    }

    /// Read until a known category is entered
    pub fn read_category(&mut self, prompt: &str) -> Result<Category> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_category(&line) {
                Ok(category) => return Ok(category),
                Err(_) => writeln!(
                    self.writer,
                    "Category not found! Please enter 'Fiction' or 'Non-Fiction'."
                )?,
            }
        }
    }

    /// Read a Y/N answer (any casing); `true` means yes
    pub fn read_confirmation(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_confirmation(&line) {
                Ok(answer) => return Ok(answer),
                Err(_) => writeln!(self.writer, "Invalid input! Please enter 'Y' or 'N' only.")?,
            }
        }
    }

    /// Wait for Enter
    pub fn pause(&mut self) -> Result<()> {
        self.read_line("Press Enter to continue . . . ")?;
        Ok(())
    }
}

/// Parse a Y/N answer, ignoring case
pub fn parse_confirmation(input: &str) -> Result<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(LibrisError::InvalidConfirmation(input.to_string())),
    }
}
