use std::collections::VecDeque;

use log::debug;

pub const DEFAULT_CAPACITY: usize = 100;

/// In-memory log of entered lines.
///
/// Bounded FIFO: once full, the oldest line is evicted. A line equal to the
/// most recent entry is dropped. Indices shown to the user are 1-based
/// positions within the retained window.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(DEFAULT_CAPACITY)),
            max_entries,
        }
    }

    pub fn add(&mut self, entry: &str) {
        if entry.is_empty() || self.entries.back().is_some_and(|last| last == entry) {
            return;
        }

        self.entries.push_back(entry.to_owned());
        self.trim_entries();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries paired with their 1-based index, oldest first.
    ///
    /// `count` selects only the most recent entries when it is strictly
    /// between zero and the number of entries; any other value selects all.
    pub fn numbered(&self, count: Option<i64>) -> impl Iterator<Item = (usize, &str)> {
        let len = self.entries.len();
        let start = match count {
            Some(n) if n > 0 && (n as u64) < len as u64 => len - n as usize,
            _ => 0,
        };

        self.entries
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, entry)| (i + 1, entry.as_str()))
    }

    fn trim_entries(&mut self) {
        while self.entries.len() > self.max_entries {
            if let Some(evicted) = self.entries.pop_front() {
                debug!("history full, evicting {:?}", evicted);
            }
        }
    }
}
