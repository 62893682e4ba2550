//! HTML emission for assembled documents.
//!
//! Serializes a [`DocumentModel`](crate::compose::DocumentModel) with
//! [maud](https://maud.lambda.xyz/), honoring the model's ordering verbatim:
//! head fragments, navigation, and footer links are emitted exactly in model
//! order. All inclusion decisions were made during composition, so this module
//! never consults the config.
//!
//! Third-party widgets are embedded as single script tags: KaTeX and mermaid
//! from their CDNs, Disqus via its shortname-scoped `embed.js`, Isso via the
//! configured server's `embed.min.js`.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::compose::{DocumentModel, HeadFragment};
use crate::features::{CommentsWidget, LayoutWrapper};
use crate::footer::FooterEntry;

/// Built-in stylesheet, written to `assets/style.css` in the output.
pub const STYLESHEET: &str = include_str!("../static/style.css");

const KATEX_CDN: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.21/dist";
const MERMAID_CDN: &str = "https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.esm.min.mjs";

/// Render a complete HTML document.
pub fn render_document(model: &DocumentModel) -> Markup {
    let chrome = html! {
        (site_header(model))
        @if model.sidebar { (sidebar(model)) }
        main.content {
            (PreEscaped(model.body.as_str()))
        }
        @if let Some(widget) = model.comments() { (comments_section(widget)) }
        (site_footer(&model.footer))
    };

    html! {
        (DOCTYPE)
        html lang=(model.lang) {
            head {
                @for fragment in &model.head { (head_fragment(fragment)) }
            }
            body {
                @match model.layout {
                    LayoutWrapper::Framed => { div.frame { (chrome) } }
                    LayoutWrapper::Default => { (chrome) }
                }
            }
        }
    }
}

fn head_fragment(fragment: &HeadFragment) -> Markup {
    match fragment {
        HeadFragment::Charset { encoding } => html! {
            meta charset=(encoding);
        },
        HeadFragment::Viewport => html! {
            meta name="viewport" content="width=device-width, initial-scale=1.0";
        },
        HeadFragment::Title { text } => html! {
            title { (text) }
        },
        HeadFragment::Icon { href } => html! {
            link rel="icon" href=(href);
        },
        HeadFragment::Stylesheet { href } => html! {
            link rel="stylesheet" href=(href);
        },
        HeadFragment::Meta { name, content } => html! {
            meta name=(name) content=(content);
        },
        HeadFragment::OpenGraph { property, content } => html! {
            meta property=(property) content=(content);
        },
        HeadFragment::Canonical { href } => html! {
            link rel="canonical" href=(href);
        },
        HeadFragment::FeedLink { href, title } => html! {
            link rel="alternate" type="application/rss+xml" title=(title) href=(href);
        },
        HeadFragment::MathScripts => math_scripts(),
        HeadFragment::DiagramScript => diagram_script(),
        HeadFragment::CommentsScript { widget } => comments_script(widget),
    }
}

fn math_scripts() -> Markup {
    html! {
        link rel="stylesheet" href={ (KATEX_CDN) "/katex.min.css" };
        script defer src={ (KATEX_CDN) "/katex.min.js" } {}
        script defer src={ (KATEX_CDN) "/contrib/auto-render.min.js" }
            onload="renderMathInElement(document.body);" {}
    }
}

fn diagram_script() -> Markup {
    html! {
        script type="module" {
            (PreEscaped(format!(
                "import mermaid from '{MERMAID_CDN}'; mermaid.initialize({{ startOnLoad: true }});"
            )))
        }
    }
}

/// Head half of a comments widget. The body anchor is emitted by
/// [`comments_section`].
fn comments_script(widget: &CommentsWidget) -> Markup {
    match widget {
        CommentsWidget::Disqus { shortname } => html! {
            script { (PreEscaped(format!("var disqus_shortname = '{shortname}';"))) }
        },
        CommentsWidget::Isso { domain } => html! {
            script data-isso={ "https://" (domain) "/" }
                src={ "https://" (domain) "/js/embed.min.js" } {}
        },
    }
}

fn comments_section(widget: &CommentsWidget) -> Markup {
    match widget {
        CommentsWidget::Disqus { shortname } => html! {
            div #disqus_thread {}
            script {
                (PreEscaped(format!(
                    "(function() {{ var d = document, s = d.createElement('script'); \
                     s.src = 'https://{shortname}.disqus.com/embed.js'; \
                     (d.head || d.body).appendChild(s); }})();"
                )))
            }
        },
        CommentsWidget::Isso { .. } => html! {
            section #isso-thread {}
        },
    }
}

fn site_header(model: &DocumentModel) -> Markup {
    html! {
        header.site-header {
            @if !model.site_title.is_empty() {
                a.site-title href="/" { (model.site_title) }
            }
            nav.site-nav {
                ul {
                    @for entry in &model.nav {
                        li { a href=(entry.url) { (entry.title) } }
                    }
                }
            }
        }
    }
}

fn sidebar(model: &DocumentModel) -> Markup {
    html! {
        aside.sidebar {
            span.site-title { (model.site_title) }
            @if !model.site_description.is_empty() {
                p.site-description { (model.site_description) }
            }
        }
    }
}

fn site_footer(entries: &[FooterEntry]) -> Markup {
    html! {
        footer.site-footer {
            ul.footer-links {
                @for entry in entries {
                    li class=[entry.selected.then_some("selected")] {
                        a href=(entry.url) aria-label=(entry.icon) {
                            span class={ "icon icon-" (entry.icon) } {}
                        }
                    }
                }
            }
        }
    }
}
