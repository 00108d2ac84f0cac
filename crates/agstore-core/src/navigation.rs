//! Navigation sinks receive the routes of selected listings.

use agstore_types::agent_path;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

pub trait NavigationSink {
    fn push(&mut self, path: &str);

    /// Navigate to an agent's detail route and return the path pushed.
    fn open_agent(&mut self, creator: &str, slug: &str) -> String {
        let path = agent_path(creator, slug);
        self.push(&path);
        path
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationEntry {
    pub path: String,
    pub visited_at: DateTime<Utc>,
}

/// In-memory sink that remembers every pushed route.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<NavigationEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(|e| e.path.as_str())
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NavigationSink for History {
    fn push(&mut self, path: &str) {
        info!(path, "navigate");
        self.entries.push(NavigationEntry {
            path: path.to_string(),
            visited_at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_agent_pushes_detail_route() {
        let mut history = History::new();
        let path = history.open_agent("WordCraft AI", "seo-optimizer-pro");

        assert_eq!(path, "/store/agent/WordCraft AI/seo-optimizer-pro");
        assert_eq!(history.current(), Some(path.as_str()));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_history_keeps_order() {
        let mut history = History::new();
        history.push("/store");
        history.push("/store/agent/a/b");

        let paths: Vec<&str> = history.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/store", "/store/agent/a/b"]);
        assert!(history.entries()[0].visited_at <= history.entries()[1].visited_at);
    }

    #[test]
    fn test_empty_history_has_no_current_route() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);
    }
}
