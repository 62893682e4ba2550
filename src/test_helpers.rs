//! Shared builders for the lintel test suite.
//!
//! Composition inputs take a handful of fields each; these constructors keep
//! tests focused on the one field under test.

use crate::config::{NavRef, SiteConfig};
use crate::frontmatter::{Layout, PageContext};
use crate::registry::{PageRecord, PageRegistry};

/// A default site config, ready for field-level tweaks.
pub fn site_config() -> SiteConfig {
    SiteConfig::default()
}

/// A plain page at the given URL, all features off.
pub fn page_at(url: &str) -> PageContext {
    PageContext {
        url: url.to_string(),
        title: None,
        lang: None,
        layout: Layout::Page,
        math: false,
        diagrams: false,
        sitemap: true,
    }
}

/// A post at the given URL, all features off.
pub fn post_at(url: &str) -> PageContext {
    PageContext {
        layout: Layout::Post,
        ..page_at(url)
    }
}

/// A registry from `(name, url, title)` tuples, in order.
pub fn registry_of(entries: &[(&str, &str, &str)]) -> PageRegistry {
    PageRegistry::new(
        entries
            .iter()
            .map(|(name, url, title)| PageRecord {
                name: name.to_string(),
                url: url.to_string(),
                title: title.to_string(),
                sitemap: true,
            })
            .collect(),
    )
    .unwrap()
}

/// A bare navigation reference (no overrides).
pub fn nav_ref(page: &str) -> NavRef {
    NavRef {
        page: page.to_string(),
        url: None,
        title: None,
    }
}
