use log::warn;
use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use super::ShellHelper;
use crate::error::ShellError;

/// Result of asking for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    Eof,
}

/// Source of interactive lines.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;
}

/// Terminal input through `rustyline`.
pub struct EditorReader {
    editor: Editor<ShellHelper, FileHistory>,
}

impl EditorReader {
    pub fn new() -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellHelper, FileHistory>::new()?;
        editor.set_helper(Some(ShellHelper::new()));
        editor.set_auto_add_history(false);
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                // Arrow-key recall only; the `history` built-in keeps its own log.
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        warn!("couldn't add to line editor history: {}", e);
                    }
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Replays canned input, then reports end-of-input.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedReader {
    pending: std::collections::VecDeque<ReadOutcome>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedReader {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            pending: lines
                .iter()
                .map(|l| ReadOutcome::Line(l.to_string()))
                .collect(),
            prompts: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: ReadOutcome) {
        self.pending.push_back(outcome);
    }
}

#[cfg(test)]
impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        self.prompts.push(prompt.to_string());
        Ok(self.pending.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}
