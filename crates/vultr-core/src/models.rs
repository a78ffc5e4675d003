//! Models shared by every v2 list endpoint.

use serde::{Deserialize, Serialize};

/// Pagination block attached to v2 list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
    /// Cursors for neighbouring pages.
    #[serde(default)]
    pub links: Links,
}

/// Opaque cursors for neighbouring pages; empty when there is no such page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Cursor for the next page.
    #[serde(default)]
    pub next: String,
    /// Cursor for the previous page.
    #[serde(default)]
    pub prev: String,
}

impl ListMeta {
    /// Cursor for the next page, if there is one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        Some(self.links.next.as_str()).filter(|cursor| !cursor.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_parsing() {
        let meta: ListMeta = serde_json::from_str(
            r#"{"total":40,"links":{"next":"bmV4dF9fQU1T","prev":""}}"#,
        )
        .unwrap();
        assert_eq!(meta.total, 40);
        assert_eq!(meta.next_cursor(), Some("bmV4dF9fQU1T"));
    }

    #[test]
    fn test_meta_defaults() {
        let meta: ListMeta = serde_json::from_str("{}").unwrap();
        assert_eq!(meta.total, 0);
        assert!(meta.next_cursor().is_none());
    }
}
