//! Page front matter parsing.
//!
//! Pages are markdown files with an optional TOML block between `+++` fences
//! at the top:
//!
//! ```text
//! +++
//! title = "Hello"
//! layout = "post"
//! math = true
//! +++
//!
//! Body markdown...
//! ```
//!
//! The block carries per-page metadata only; everything after the closing
//! fence is body content. A file without a fence is all body and gets the
//! default metadata. Unknown keys are rejected, same as `config.toml`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const FENCE: &str = "+++\n";

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("unterminated front matter block (missing closing '+++')")]
    Unterminated,
    #[error("front matter TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Page kind, selecting the body chrome and comment eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// A plain page.
    #[default]
    Page,
    /// A dated post. Comment widgets are only embedded on posts.
    Post,
}

/// Raw per-page metadata as written in the front matter block.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrontMatter {
    /// Page title. Falls back to a title derived from the filename.
    pub title: Option<String>,
    /// Document language, overriding the site default.
    pub lang: Option<String>,
    /// Page kind.
    pub layout: Layout,
    /// Enable math rendering for this page. Site config can also enable it;
    /// either switch turns it on.
    pub math: bool,
    /// Enable diagram rendering for this page. Page-only; there is no
    /// site-wide switch.
    pub diagrams: bool,
    /// Whether the page is listed in the sitemap.
    pub sitemap: bool,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            lang: None,
            layout: Layout::default(),
            math: false,
            diagrams: false,
            sitemap: true,
        }
    }
}

impl FrontMatter {
    /// Attach the page's canonical URL, producing the context the composer
    /// consumes.
    pub fn into_context(self, url: String) -> PageContext {
        PageContext {
            url,
            title: self.title,
            lang: self.lang,
            layout: self.layout,
            math: self.math,
            diagrams: self.diagrams,
            sitemap: self.sitemap,
        }
    }
}

/// Per-page input to composition: front matter plus the page's canonical URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    /// The page's own canonical path, e.g. `/posts/hello.html`.
    pub url: String,
    pub title: Option<String>,
    pub lang: Option<String>,
    pub layout: Layout,
    pub math: bool,
    pub diagrams: bool,
    pub sitemap: bool,
}

/// Split a page source into its raw front matter block and body.
///
/// Returns `(None, source)` when the file does not start with a fence.
/// A fence that is opened but never closed is an error: silently treating
/// the rest of the file as body would swallow the metadata.
pub fn split(source: &str) -> Result<(Option<&str>, &str), FrontMatterError> {
    let Some(rest) = source.strip_prefix(FENCE) else {
        return Ok((None, source));
    };
    // The closing fence is either the very next line (empty block) or the
    // first line after the block starting with `+++`.
    let (block, after) = if let Some(after) = rest.strip_prefix("+++") {
        ("", after)
    } else if let Some(end) = rest.find("\n+++") {
        (&rest[..end], &rest[end + 4..])
    } else {
        return Err(FrontMatterError::Unterminated);
    };
    let body = after.strip_prefix('\n').unwrap_or(after);
    Ok((Some(block), body))
}

/// Parse a page source into front matter and body.
pub fn parse(source: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let (block, body) = split(source)?;
    let front = match block {
        Some(block) => toml::from_str(block)?,
        None => FrontMatter::default(),
    };
    Ok((front, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_front_matter_is_all_body() {
        let (front, body) = parse("# Hello\n\nJust markdown.\n").unwrap();
        assert_eq!(front.title, None);
        assert_eq!(front.layout, Layout::Page);
        assert!(front.sitemap);
        assert!(body.starts_with("# Hello"));
    }

    #[test]
    fn parse_full_front_matter() {
        let source = "+++\ntitle = \"Hello\"\nlayout = \"post\"\nmath = true\ndiagrams = true\nsitemap = false\nlang = \"de\"\n+++\n\nBody.\n";
        let (front, body) = parse(source).unwrap();
        assert_eq!(front.title.as_deref(), Some("Hello"));
        assert_eq!(front.layout, Layout::Post);
        assert!(front.math);
        assert!(front.diagrams);
        assert!(!front.sitemap);
        assert_eq!(front.lang.as_deref(), Some("de"));
        assert_eq!(body, "\nBody.\n");
    }

    #[test]
    fn empty_block_is_defaults() {
        let (front, body) = parse("+++\n+++\nBody.\n").unwrap();
        assert_eq!(front.title, None);
        assert!(!front.math);
        assert_eq!(body, "Body.\n");
    }

    #[test]
    fn unterminated_block_is_error() {
        let result = parse("+++\ntitle = \"Hello\"\n\nNo closing fence.\n");
        assert!(matches!(result, Err(FrontMatterError::Unterminated)));
    }

    #[test]
    fn invalid_toml_is_error() {
        let result = parse("+++\ntitle = = nope\n+++\nBody.\n");
        assert!(matches!(result, Err(FrontMatterError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let result = parse("+++\ntite = \"typo\"\n+++\nBody.\n");
        assert!(matches!(result, Err(FrontMatterError::Toml(_))));
    }

    #[test]
    fn unknown_layout_rejected() {
        let result = parse("+++\nlayout = \"landing\"\n+++\nBody.\n");
        assert!(matches!(result, Err(FrontMatterError::Toml(_))));
    }

    #[test]
    fn into_context_carries_url() {
        let (front, _) = parse("+++\nlayout = \"post\"\n+++\nBody.\n").unwrap();
        let ctx = front.into_context("/posts/hello.html".to_string());
        assert_eq!(ctx.url, "/posts/hello.html");
        assert_eq!(ctx.layout, Layout::Post);
        assert!(ctx.sitemap);
    }

    #[test]
    fn fence_must_open_the_file() {
        // A fence later in the file is plain content.
        let (front, body) = parse("intro\n+++\ntitle = \"x\"\n+++\n").unwrap();
        assert_eq!(front.title, None);
        assert!(body.starts_with("intro"));
    }
}
