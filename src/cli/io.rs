use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use crate::errors::CliError;

/// Result of asking the user for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}

/// Source of prompted input lines for the shell.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, CliError>;

    /// Asks whether to leave after an interrupt.
    fn confirm_exit(&mut self) -> Result<bool, CliError> {
        Ok(true)
    }
}

/// Interactive terminal input backed by rustyline.
pub struct EditorReader {
    editor: Editor<(), DefaultHistory>,
    theme: ColorfulTheme,
    confirm_exit: bool,
}

impl EditorReader {
    pub fn new(confirm_exit: bool) -> Result<Self, CliError> {
        Ok(Self {
            editor: Editor::new()?,
            theme: ColorfulTheme::default(),
            confirm_exit,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(err.into()),
        }
    }

    fn confirm_exit(&mut self) -> Result<bool, CliError> {
        if !self.confirm_exit {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit expense ledger?")
            .default(false)
            .interact()?)
    }
}

/// Line-by-line input for script mode and tests. Prompts are echoed to stdout.
pub struct ScriptReader<R> {
    input: R,
    echo_prompts: bool,
}

impl<R: BufRead> ScriptReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            echo_prompts: true,
        }
    }

    pub fn silent(input: R) -> Self {
        Self {
            input,
            echo_prompts: false,
        }
    }
}

impl<R: BufRead> LineReader for ScriptReader<R> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, CliError> {
        if self.echo_prompts {
            let mut stdout = io::stdout();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(ReadOutcome::Eof);
        }
        let line = buffer.trim_end_matches(|c| c == '\n' || c == '\r').to_string();
        if self.echo_prompts {
            println!();
        }
        Ok(ReadOutcome::Line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_reader_yields_lines_then_eof() {
        let mut reader = ScriptReader::silent("first\r\nsecond\n".as_bytes());
        assert_eq!(
            reader.read_line("> ").unwrap(),
            ReadOutcome::Line("first".into())
        );
        assert_eq!(
            reader.read_line("> ").unwrap(),
            ReadOutcome::Line("second".into())
        );
        assert_eq!(reader.read_line("> ").unwrap(), ReadOutcome::Eof);
    }
}
