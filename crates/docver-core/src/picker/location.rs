//! The page location the picker reads from and navigates.

/// External collaborator standing in for the browser's `window.location`.
pub trait Location {
    /// Current page URL.
    fn href(&self) -> String;

    /// Navigate to `url`.
    fn assign(&mut self, url: &str);
}

/// In-memory location that records every navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    href: String,
    history: Vec<String>,
}

impl MemoryLocation {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            history: Vec::new(),
        }
    }

    /// URLs navigated to, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Location for MemoryLocation {
    fn href(&self) -> String {
        self.href.clone()
    }

    fn assign(&mut self, url: &str) {
        self.href = url.to_string();
        self.history.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_updates_href_and_history() {
        let mut loc = MemoryLocation::new("https://h/a");
        assert!(loc.history().is_empty());
        loc.assign("https://h/b");
        assert_eq!(loc.href(), "https://h/b");
        assert_eq!(loc.history(), ["https://h/b".to_string()]);
    }
}
