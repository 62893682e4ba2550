//! Feature resolution: which optional fragments a page gets.
//!
//! A pure decision function over `(SiteConfig, PageContext)`. Each rule is
//! independent, so evaluation order is irrelevant and identical input yields
//! an identical `FeatureSet`. What a feature looks like in HTML is the
//! renderer's business; this module only decides inclusion and parameters.

use crate::compose::ComposeError;
use crate::config::{CommentsProvider, SiteConfig};
use crate::frontmatter::{Layout, PageContext};

/// Fallback feed location when `feed.path` is configured empty.
pub const DEFAULT_FEED_PATH: &str = "/feed.xml";

/// Top-level page chrome the body is embedded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutWrapper {
    /// Full-width page.
    #[default]
    Default,
    /// Content wrapped in the frame container.
    Framed,
}

/// A resolved comments widget with its provider-specific identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentsWidget {
    Disqus { shortname: String },
    Isso { domain: String },
}

/// The resolved feature decisions for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    pub layout: LayoutWrapper,
    /// Feed location to advertise, when the feed link is enabled.
    pub feed: Option<String>,
    pub math: bool,
    pub diagrams: bool,
    /// Widget to embed, when a provider is configured and the page is a post.
    pub comments: Option<CommentsWidget>,
    pub sidebar: bool,
}

/// Resolve the feature set for one page.
///
/// Decision rules:
/// - layout is framed iff `features.show_frame`
/// - feed link iff `feed.enable`; empty path falls back to [`DEFAULT_FEED_PATH`]
/// - math iff the page OR the site enables it (either switch turns it on;
///   a page-level `false` does not suppress a site-level `true`)
/// - diagrams iff the page enables them (page-only, no site fallback)
/// - comments iff a provider is configured AND the page is a post; a
///   configured provider with an empty identifier is a configuration error
///   regardless of the page's layout
/// - sidebar iff `features.show_sidebar`
pub fn resolve(site: &SiteConfig, page: &PageContext) -> Result<FeatureSet, ComposeError> {
    Ok(FeatureSet {
        layout: if site.features.show_frame {
            LayoutWrapper::Framed
        } else {
            LayoutWrapper::Default
        },
        feed: site.feed.enable.then(|| {
            if site.feed.path.is_empty() {
                DEFAULT_FEED_PATH.to_string()
            } else {
                site.feed.path.clone()
            }
        }),
        math: page.math || site.features.math,
        diagrams: page.diagrams,
        comments: resolve_comments(site, page)?,
        sidebar: site.features.show_sidebar,
    })
}

fn resolve_comments(
    site: &SiteConfig,
    page: &PageContext,
) -> Result<Option<CommentsWidget>, ComposeError> {
    let widget = match site.comments.provider {
        CommentsProvider::None => return Ok(None),
        CommentsProvider::Disqus => {
            let shortname = site.comments.shortname.trim();
            if shortname.is_empty() {
                return Err(ComposeError::MissingCommentsId {
                    provider: CommentsProvider::Disqus,
                });
            }
            CommentsWidget::Disqus {
                shortname: shortname.to_string(),
            }
        }
        CommentsProvider::Isso => {
            let domain = site.comments.domain.trim();
            if domain.is_empty() {
                return Err(ComposeError::MissingCommentsId {
                    provider: CommentsProvider::Isso,
                });
            }
            CommentsWidget::Isso {
                domain: domain.to_string(),
            }
        }
    };
    Ok((page.layout == Layout::Post).then_some(widget))
}
