mod completer;
pub mod history;
mod reader;

pub use completer::ShellHelper;
pub use history::History;
pub use reader::{EditorReader, LineReader, ReadOutcome};

#[cfg(test)]
pub use reader::ScriptedReader;
