//! The page registry: every known page, unique by name.
//!
//! Built once per build from the scanned content tree, then treated as
//! immutable. Navigation references resolve against it by exact name, and
//! the sitemap is derived from it. Page-assembly tasks share it read-only,
//! so building all pages in parallel needs no synchronization.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("duplicate page name in registry: {0}")]
    DuplicateName(String),
}

/// A registered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Name derived from the content path (`posts/hello.md` → `posts/hello`).
    pub name: String,
    /// Canonical path, e.g. `/posts/hello.html`.
    pub url: String,
    /// Display title (front matter title, or derived from the filename).
    pub title: String,
    /// Whether the page is listed in the sitemap.
    pub sitemap: bool,
}

/// Ordered set of all known pages, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRegistry {
    records: Vec<PageRecord>,
}

impl PageRegistry {
    /// Build a registry, rejecting duplicate names.
    pub fn new(records: Vec<PageRecord>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(RegistryError::DuplicateName(record.name.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Look up a page by exact name. Single pass; the registry stays small.
    pub fn get(&self, name: &str) -> Option<&PageRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
