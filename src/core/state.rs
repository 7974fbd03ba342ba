use std::env;

use crate::input::History;

/// Mutable interpreter state, owned by the loop and lent to handlers.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub current_dir: String,
    pub running: bool,
    pub history: History,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self::with_dir(Self::query_current_dir().unwrap_or_else(|| "/".to_string()))
    }

    pub fn with_dir(current_dir: impl Into<String>) -> Self {
        Self {
            current_dir: current_dir.into(),
            running: true,
            history: History::default(),
        }
    }

    pub fn query_current_dir() -> Option<String> {
        env::current_dir()
            .ok()
            .map(|p| p.to_string_lossy().into_owned())
    }

    /// Last path segment of the cached directory, as shown in the prompt.
    pub fn short_dir(&self) -> &str {
        match self.current_dir.rfind('/') {
            None | Some(0) => &self.current_dir,
            Some(i) => &self.current_dir[i + 1..],
        }
    }

    pub fn prompt(&self) -> String {
        format!("[shell:{}]$ ", self.short_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_dir() {
        assert_eq!(ShellState::with_dir("/home/user/src").short_dir(), "src");
        assert_eq!(ShellState::with_dir("/tmp").short_dir(), "/tmp");
        assert_eq!(ShellState::with_dir("/").short_dir(), "/");
        assert_eq!(ShellState::with_dir("relative").short_dir(), "relative");
    }

    #[test]
    fn test_prompt_format() {
        assert_eq!(ShellState::with_dir("/usr/lib").prompt(), "[shell:lib]$ ");
    }

    #[test]
    fn test_starts_running() {
        let state = ShellState::with_dir("/");
        assert!(state.running);
        assert!(state.history.is_empty());
    }
}
