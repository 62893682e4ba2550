//! Page assembly: resolvers + rendered body → one document model.
//!
//! `assemble` is the single entry point for composing a page. It runs the
//! feature, navigation, and footer resolvers, then lays out head fragments
//! in a fixed canonical order and attaches the body verbatim. Assembly is
//! all-or-nothing: any resolver error aborts the page with no partial model,
//! so broken navigation or comment widgets never reach output.
//!
//! The model is structure only; textual emission lives in [`crate::render`],
//! which must honor the model's ordering verbatim.

use thiserror::Error;

use crate::config::{CommentsProvider, SiteConfig};
use crate::features::{self, CommentsWidget, FeatureSet, LayoutWrapper};
use crate::footer::{self, FooterEntry};
use crate::frontmatter::{Layout, PageContext};
use crate::nav::{self, NavEntry};
use crate::registry::PageRegistry;

/// Composition failures. Both are static-data defects detected synchronously
/// during assembly; each names the offending configuration value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComposeError {
    #[error("comments provider '{provider}' requires an identifier but none is configured")]
    MissingCommentsId { provider: CommentsProvider },
    #[error("navigation references unknown page '{name}'")]
    UnresolvedNavReference { name: String },
}

/// Path of the built-in stylesheet within the generated site.
pub const STYLESHEET_HREF: &str = "/assets/style.css";

/// One `<head>` element, as a tagged variant so the renderer stays a dumb
/// serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadFragment {
    Charset { encoding: String },
    Viewport,
    Title { text: String },
    Icon { href: String },
    Stylesheet { href: String },
    Meta { name: String, content: String },
    OpenGraph { property: String, content: String },
    Canonical { href: String },
    FeedLink { href: String, title: String },
    MathScripts,
    DiagramScript,
    CommentsScript { widget: CommentsWidget },
}

/// The fully assembled document, ready for textual emission.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentModel {
    /// Document language (page override, else the site default).
    pub lang: String,
    /// Site identity, consumed by the sidebar and footer chrome.
    pub site_title: String,
    pub site_description: String,
    /// Head elements in emission order.
    pub head: Vec<HeadFragment>,
    pub layout: LayoutWrapper,
    pub nav: Vec<NavEntry>,
    pub footer: Vec<FooterEntry>,
    pub sidebar: bool,
    /// Rendered body markup, embedded verbatim.
    pub body: String,
}

impl DocumentModel {
    /// The comments widget scheduled for this document, if any.
    pub fn comments(&self) -> Option<&CommentsWidget> {
        self.head.iter().find_map(|fragment| match fragment {
            HeadFragment::CommentsScript { widget } => Some(widget),
            _ => None,
        })
    }
}

/// Resolve a page-relative path against the configured site root.
///
/// Already-absolute URLs pass through; with no root configured, paths stay
/// relative.
pub fn resolve_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if base.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Assemble one page into a document model.
///
/// Head fragments are laid out in canonical order: charset, viewport, title,
/// icon, stylesheets, meta tags, OpenGraph, canonical URL, then the
/// conditional feed/math/diagram/comments fragments. Inputs are never
/// mutated; the body is embedded verbatim.
pub fn assemble(
    site: &SiteConfig,
    page: &PageContext,
    registry: &PageRegistry,
    rendered_body: &str,
) -> Result<DocumentModel, ComposeError> {
    let features = features::resolve(site, page)?;
    let nav = nav::resolve(&site.nav, registry)?;
    let footer = footer::resolve(&site.links, &page.url);

    let title = page.title.clone().unwrap_or_else(|| site.title.clone());
    let canonical = resolve_url(&site.base_url, &page.url);

    let mut head = vec![
        HeadFragment::Charset {
            encoding: site.encoding.clone(),
        },
        HeadFragment::Viewport,
        HeadFragment::Title {
            text: title.clone(),
        },
        HeadFragment::Icon {
            href: site.icon.clone(),
        },
        HeadFragment::Stylesheet {
            href: STYLESHEET_HREF.to_string(),
        },
    ];
    for href in &site.styles {
        head.push(HeadFragment::Stylesheet { href: href.clone() });
    }
    if !site.description.is_empty() {
        head.push(HeadFragment::Meta {
            name: "description".to_string(),
            content: site.description.clone(),
        });
    }
    if !site.author.is_empty() {
        head.push(HeadFragment::Meta {
            name: "author".to_string(),
            content: site.author.clone(),
        });
    }
    head.push(HeadFragment::OpenGraph {
        property: "og:title".to_string(),
        content: title,
    });
    head.push(HeadFragment::OpenGraph {
        property: "og:type".to_string(),
        content: match page.layout {
            Layout::Post => "article".to_string(),
            Layout::Page => "website".to_string(),
        },
    });
    head.push(HeadFragment::OpenGraph {
        property: "og:url".to_string(),
        content: canonical.clone(),
    });
    head.push(HeadFragment::Canonical { href: canonical });
    append_conditional(&mut head, &features, site);

    Ok(DocumentModel {
        lang: page.lang.clone().unwrap_or_else(|| site.lang.clone()),
        site_title: site.title.clone(),
        site_description: site.description.clone(),
        head,
        layout: features.layout,
        nav,
        footer,
        sidebar: features.sidebar,
        body: rendered_body.to_string(),
    })
}

fn append_conditional(head: &mut Vec<HeadFragment>, features: &FeatureSet, site: &SiteConfig) {
    if let Some(path) = &features.feed {
        head.push(HeadFragment::FeedLink {
            href: path.clone(),
            title: site.title.clone(),
        });
    }
    if features.math {
        head.push(HeadFragment::MathScripts);
    }
    if features.diagrams {
        head.push(HeadFragment::DiagramScript);
    }
    if let Some(widget) = &features.comments {
        head.push(HeadFragment::CommentsScript {
            widget: widget.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{nav_ref, page_at, post_at, registry_of, site_config};

    fn position(model: &DocumentModel, matcher: impl Fn(&HeadFragment) -> bool) -> usize {
        model
            .head
            .iter()
            .position(matcher)
            .expect("fragment not present")
    }

    #[test]
    fn feed_and_math_without_frame_or_diagrams() {
        // SiteConfig { show_frame: false, feed on at /feed.xml } with a math
        // post yields feed + math fragments, the default layout, no diagrams.
        let mut site = site_config();
        site.feed.enable = true;
        site.feed.path = "/feed.xml".to_string();
        let mut page = post_at("/posts/hello.html");
        page.math = true;

        let model = assemble(&site, &page, &registry_of(&[]), "<p>hi</p>").unwrap();

        assert!(model.head.iter().any(|f| matches!(
            f,
            HeadFragment::FeedLink { href, .. } if href == "/feed.xml"
        )));
        assert!(model.head.contains(&HeadFragment::MathScripts));
        assert!(!model.head.contains(&HeadFragment::DiagramScript));
        assert_eq!(model.layout, LayoutWrapper::Default);
    }

    #[test]
    fn head_fragments_in_canonical_order() {
        let mut site = site_config();
        site.title = "Site".to_string();
        site.description = "About the site".to_string();
        site.author = "Someone".to_string();
        site.styles = vec!["/extra.css".to_string()];
        site.feed.enable = true;
        site.features.math = true;
        site.comments.provider = CommentsProvider::Disqus;
        site.comments.shortname = "blog".to_string();
        let mut page = post_at("/p.html");
        page.diagrams = true;

        let model = assemble(&site, &page, &registry_of(&[]), "").unwrap();

        let charset = position(&model, |f| matches!(f, HeadFragment::Charset { .. }));
        let title = position(&model, |f| matches!(f, HeadFragment::Title { .. }));
        let icon = position(&model, |f| matches!(f, HeadFragment::Icon { .. }));
        let stylesheet = position(&model, |f| matches!(f, HeadFragment::Stylesheet { .. }));
        let meta = position(&model, |f| matches!(f, HeadFragment::Meta { .. }));
        let canonical = position(&model, |f| matches!(f, HeadFragment::Canonical { .. }));
        let feed = position(&model, |f| matches!(f, HeadFragment::FeedLink { .. }));
        let math = position(&model, |f| matches!(f, HeadFragment::MathScripts));
        let diagram = position(&model, |f| matches!(f, HeadFragment::DiagramScript));
        let comments = position(&model, |f| matches!(f, HeadFragment::CommentsScript { .. }));

        assert_eq!(charset, 0);
        assert!(title < icon);
        assert!(icon < stylesheet);
        assert!(stylesheet < meta);
        assert!(meta < canonical);
        assert!(canonical < feed);
        assert!(feed < math);
        assert!(math < diagram);
        assert!(diagram < comments);
    }

    #[test]
    fn extra_stylesheets_follow_the_builtin_one() {
        let mut site = site_config();
        site.styles = vec!["/a.css".to_string(), "/b.css".to_string()];

        let model = assemble(&site, &page_at("/p.html"), &registry_of(&[]), "").unwrap();
        let hrefs: Vec<&str> = model
            .head
            .iter()
            .filter_map(|f| match f {
                HeadFragment::Stylesheet { href } => Some(href.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(hrefs, vec![STYLESHEET_HREF, "/a.css", "/b.css"]);
    }

    #[test]
    fn body_embedded_verbatim() {
        let body = "<p>already &amp; rendered</p>";
        let model = assemble(&site_config(), &page_at("/p.html"), &registry_of(&[]), body).unwrap();
        assert_eq!(model.body, body);
    }

    #[test]
    fn page_title_falls_back_to_site_title() {
        let mut site = site_config();
        site.title = "Fallback".to_string();

        let model = assemble(&site, &page_at("/p.html"), &registry_of(&[]), "").unwrap();
        assert!(model
            .head
            .contains(&HeadFragment::Title {
                text: "Fallback".to_string()
            }));

        let mut page = page_at("/p.html");
        page.title = Some("Own".to_string());
        let model = assemble(&site, &page, &registry_of(&[]), "").unwrap();
        assert!(model.head.contains(&HeadFragment::Title {
            text: "Own".to_string()
        }));
    }

    #[test]
    fn lang_prefers_the_page() {
        let mut site = site_config();
        site.lang = "en".to_string();
        let mut page = page_at("/p.html");
        page.lang = Some("de".to_string());

        let model = assemble(&site, &page, &registry_of(&[]), "").unwrap();
        assert_eq!(model.lang, "de");
    }

    #[test]
    fn canonical_joins_base_url() {
        let mut site = site_config();
        site.base_url = "https://example.com/".to_string();

        let model = assemble(&site, &page_at("/posts/x.html"), &registry_of(&[]), "").unwrap();
        assert!(model.head.contains(&HeadFragment::Canonical {
            href: "https://example.com/posts/x.html".to_string()
        }));
    }

    #[test]
    fn og_type_tracks_layout() {
        let site = site_config();
        let article = assemble(&site, &post_at("/p.html"), &registry_of(&[]), "").unwrap();
        assert!(article.head.contains(&HeadFragment::OpenGraph {
            property: "og:type".to_string(),
            content: "article".to_string()
        }));

        let website = assemble(&site, &page_at("/p.html"), &registry_of(&[]), "").unwrap();
        assert!(website.head.contains(&HeadFragment::OpenGraph {
            property: "og:type".to_string(),
            content: "website".to_string()
        }));
    }

    #[test]
    fn nav_and_footer_attached_in_order() {
        let mut site = site_config();
        site.nav = vec![nav_ref("b"), nav_ref("a")];
        site.links = vec![
            crate::config::ExternalLink {
                url: "/x".to_string(),
                icon: "one".to_string(),
            },
            crate::config::ExternalLink {
                url: "/p.html".to_string(),
                icon: "two".to_string(),
            },
        ];
        let registry = registry_of(&[("a", "/a.html", "A"), ("b", "/b.html", "B")]);

        let model = assemble(&site, &page_at("/p.html"), &registry, "").unwrap();
        let nav_titles: Vec<&str> = model.nav.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(nav_titles, vec!["B", "A"]);
        assert!(!model.footer[0].selected);
        assert!(model.footer[1].selected);
    }

    #[test]
    fn configuration_error_aborts_assembly() {
        let mut site = site_config();
        site.comments.provider = CommentsProvider::Disqus;

        let err = assemble(&site, &post_at("/p.html"), &registry_of(&[]), "").unwrap_err();
        assert!(matches!(err, ComposeError::MissingCommentsId { .. }));
    }

    #[test]
    fn unresolved_nav_aborts_assembly() {
        let mut site = site_config();
        site.nav = vec![nav_ref("ghost")];

        let err = assemble(&site, &page_at("/p.html"), &registry_of(&[]), "").unwrap_err();
        assert_eq!(
            err,
            ComposeError::UnresolvedNavReference {
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn assembly_is_deterministic() {
        let mut site = site_config();
        site.feed.enable = true;
        site.features.show_sidebar = true;
        let page = post_at("/p.html");
        let registry = registry_of(&[("a", "/a.html", "A")]);

        let first = assemble(&site, &page, &registry, "<p>x</p>").unwrap();
        let second = assemble(&site, &page, &registry, "<p>x</p>").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn comments_accessor_finds_the_widget() {
        let mut site = site_config();
        site.comments.provider = CommentsProvider::Isso;
        site.comments.domain = "c.example.com".to_string();

        let model = assemble(&site, &post_at("/p.html"), &registry_of(&[]), "").unwrap();
        assert!(matches!(
            model.comments(),
            Some(CommentsWidget::Isso { domain }) if domain == "c.example.com"
        ));

        let model = assemble(&site, &page_at("/p.html"), &registry_of(&[]), "").unwrap();
        assert!(model.comments().is_none());
    }

    // =========================================================================
    // resolve_url tests
    // =========================================================================

    #[test]
    fn resolve_url_joins_base_and_path() {
        assert_eq!(
            resolve_url("https://example.com", "/p.html"),
            "https://example.com/p.html"
        );
        assert_eq!(
            resolve_url("https://example.com/", "p.html"),
            "https://example.com/p.html"
        );
    }

    #[test]
    fn resolve_url_passes_absolute_through() {
        assert_eq!(
            resolve_url("https://example.com", "https://other.org/x"),
            "https://other.org/x"
        );
    }

    #[test]
    fn resolve_url_without_base_keeps_path() {
        assert_eq!(resolve_url("", "/p.html"), "/p.html");
    }
}
