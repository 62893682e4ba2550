//! Navigation resolution: configured references → concrete entries.
//!
//! Each `[[nav]]` entry names a page; url and title come from the registry
//! record unless overridden in the config. A reference that needs the
//! registry but names a page that is not in it fails the whole resolution;
//! a dangling nav entry is a build defect, not something to render around.

use std::collections::HashMap;

use crate::compose::ComposeError;
use crate::config::NavRef;
use crate::registry::{PageRecord, PageRegistry};

/// A resolved navigation entry, in configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub url: String,
    pub title: String,
}

/// Resolve navigation references against the page registry.
///
/// Output preserves the configured order. Fails fast on the first reference
/// that needs a registry record that does not exist; no partial list is
/// returned.
pub fn resolve(
    refs: &[NavRef],
    registry: &PageRegistry,
) -> Result<Vec<NavEntry>, ComposeError> {
    // One index per resolution call; the registry itself is never mutated.
    let index: HashMap<&str, &PageRecord> =
        registry.iter().map(|r| (r.name.as_str(), r)).collect();

    refs.iter()
        .map(|nav| {
            if let (Some(url), Some(title)) = (&nav.url, &nav.title) {
                // Fully overridden: the external-link form, registry not consulted.
                return Ok(NavEntry {
                    url: url.clone(),
                    title: title.clone(),
                });
            }
            let record = index.get(nav.page.as_str()).ok_or_else(|| {
                ComposeError::UnresolvedNavReference {
                    name: nav.page.clone(),
                }
            })?;
            Ok(NavEntry {
                url: nav.url.clone().unwrap_or_else(|| record.url.clone()),
                title: nav.title.clone().unwrap_or_else(|| record.title.clone()),
            })
        })
        .collect()
}
