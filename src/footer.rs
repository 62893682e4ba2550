//! Footer link resolution: configured links → entries with selection state.
//!
//! Pure and total: every input maps 1:1 to an output, in order, and an
//! entry is selected iff its URL is exactly the current page's URL. URL
//! validation is not this module's business; malformed values pass through
//! verbatim.

use crate::config::ExternalLink;

/// A resolved footer link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterEntry {
    pub url: String,
    pub icon: String,
    /// Whether this link points at the page being rendered.
    pub selected: bool,
}

/// Resolve footer links against the current page URL.
///
/// Selection is computed independently per entry; duplicate URLs all
/// reflect their own match.
pub fn resolve(links: &[ExternalLink], current_url: &str) -> Vec<FooterEntry> {
    links
        .iter()
        .map(|link| FooterEntry {
            url: link.url.clone(),
            icon: link.icon.clone(),
            selected: link.url == current_url,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str, icon: &str) -> ExternalLink {
        ExternalLink {
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }

    #[test]
    fn marks_the_matching_entry() {
        let links = [link("/a", "alpha"), link("/b", "beta")];
        let entries = resolve(&links, "/b");
        assert_eq!(
            entries,
            vec![
                FooterEntry {
                    url: "/a".to_string(),
                    icon: "alpha".to_string(),
                    selected: false,
                },
                FooterEntry {
                    url: "/b".to_string(),
                    icon: "beta".to_string(),
                    selected: true,
                },
            ]
        );
    }

    #[test]
    fn duplicate_urls_all_select() {
        let links = [link("/x", "one"), link("/x", "two")];
        let entries = resolve(&links, "/x");
        assert!(entries.iter().all(|e| e.selected));
    }

    #[test]
    fn match_is_exact() {
        let links = [link("/a", "alpha")];
        assert!(!resolve(&links, "/a/")[0].selected);
        assert!(!resolve(&links, "/A")[0].selected);
    }

    #[test]
    fn preserves_configured_order() {
        let links = [link("/c", "c"), link("/a", "a"), link("/b", "b")];
        let icons: Vec<String> = resolve(&links, "/none")
            .into_iter()
            .map(|e| e.icon)
            .collect();
        assert_eq!(icons, vec!["c", "a", "b"]);
    }

    #[test]
    fn malformed_urls_pass_through() {
        let links = [link("not a url", "odd"), link("", "empty")];
        let entries = resolve(&links, "");
        assert_eq!(entries[0].url, "not a url");
        assert!(!entries[0].selected);
        // An empty URL matching an empty current URL is still an exact match.
        assert!(entries[1].selected);
    }

    #[test]
    fn no_links_no_entries() {
        assert!(resolve(&[], "/p").is_empty());
    }
}
