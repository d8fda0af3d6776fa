//! Store key builders for every collection the navigator persists.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Key builder bound to a configured prefix.
#[derive(Debug, Clone)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    /// Create a key space; all keys start with `{prefix}:`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Key for the single user profile.
    pub fn profile(&self) -> String {
        format!("{}:profile", self.prefix)
    }

    /// Key for the to-do collection.
    pub fn todos(&self) -> String {
        format!("{}:todos", self.prefix)
    }

    /// Key for the application collection.
    pub fn applications(&self) -> String {
        format!("{}:applications", self.prefix)
    }

    /// Key for the notification collection.
    pub fn notifications(&self) -> String {
        format!("{}:notifications", self.prefix)
    }

    /// Prefix matching every key in this space.
    pub fn all(&self) -> String {
        format!("{}:", self.prefix)
    }
}

impl Default for KeySpace {
    fn default() -> Self {
        Self::new("navigator")
    }
}
