use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes file and directory names for argument words.
#[derive(Clone, Debug, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_to_search, display_dir, file_prefix) = Self::split_input(incomplete);

        let Ok(entries) = fs::read_dir(&dir_to_search) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                let hidden = file_prefix.is_empty() && name.starts_with('.');
                if hidden || !name.starts_with(file_prefix) {
                    return None;
                }
                let shown = format!("{}{}", display_dir, name);
                Some(if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", shown),
                        replacement: format!("{}/", shown),
                    }
                } else {
                    Pair {
                        display: shown.clone(),
                        replacement: format!("{} ", shown),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }

    /// Returns the directory to read, the text to keep in front of each
    /// candidate, and the file-name prefix to match.
    fn split_input(incomplete: &str) -> (PathBuf, &str, &str) {
        match incomplete.rfind('/') {
            Some(i) => {
                let (dir, prefix) = incomplete.split_at(i + 1);
                (Path::new(dir).to_path_buf(), dir, prefix)
            }
            None => (PathBuf::from("."), "", incomplete),
        }
    }
}
