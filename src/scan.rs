//! Content discovery and the scan manifest.
//!
//! Stage 1 of the build. Walks the content directory for markdown pages,
//! splits front matter from body, renders bodies to HTML, and builds the
//! page registry. The result is everything composition needs, as plain
//! values; later stages never touch the filesystem again.
//!
//! ## Content Structure
//!
//! ```text
//! content/
//! ├── config.toml          # Site configuration (optional)
//! ├── index.md             # Page → /index.html, name "index"
//! ├── about.md             # Page → /about.html, name "about"
//! └── posts/
//!     └── hello.md         # Page → /posts/hello.html, name "posts/hello"
//! ```
//!
//! Page names mirror the relative path without extension; nav entries in
//! `config.toml` reference pages by that name. Files and directories whose
//! name starts with a dot are skipped. Traversal is sorted by file name so
//! the registry order is stable across platforms and runs.

use pulldown_cmark::{Parser, html as md_html};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::{self, SiteConfig};
use crate::frontmatter::{self, FrontMatterError, PageContext};
use crate::registry::{PageRecord, PageRegistry, RegistryError};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{}: {source}", path.display())]
    FrontMatter {
        path: PathBuf,
        source: FrontMatterError,
    },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// A discovered page: metadata plus its body rendered to HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePage {
    /// Name derived from the content path, the registry key.
    pub name: String,
    /// Display title: front matter title, or the filename with dashes
    /// converted to spaces.
    pub title: String,
    pub context: PageContext,
    /// Body markdown rendered to HTML.
    pub body_html: String,
}

/// Everything a build needs: the scan manifest.
#[derive(Debug, Serialize, Deserialize)]
pub struct Site {
    pub config: SiteConfig,
    pub registry: PageRegistry,
    pub pages: Vec<SourcePage>,
}

/// Scan a content directory into a [`Site`].
pub fn scan(root: &Path) -> Result<Site, ScanError> {
    let config = config::load_config(root)?;

    let mut pages = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();
    for entry in walker.filter_entry(|e| !is_hidden(e)) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        let name = rel.with_extension("").to_string_lossy().replace('\\', "/");
        let url = format!("/{name}.html");

        let source = fs::read_to_string(path)?;
        let (front, body) =
            frontmatter::parse(&source).map_err(|source| ScanError::FrontMatter {
                path: path.to_path_buf(),
                source,
            })?;
        let title = front.title.clone().unwrap_or_else(|| display_title(&name));
        pages.push(SourcePage {
            name,
            title,
            context: front.into_context(url),
            body_html: markdown_to_html(body),
        });
    }

    let records = pages
        .iter()
        .map(|page| PageRecord {
            name: page.name.clone(),
            url: page.context.url.clone(),
            title: page.title.clone(),
            sitemap: page.context.sitemap,
        })
        .collect();
    let registry = PageRegistry::new(records)?;

    Ok(Site {
        config,
        registry,
        pages,
    })
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Render markdown to HTML. The composer treats the result as opaque.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    html
}

/// Title derived from a page name: last path segment, dashes to spaces.
pub fn display_title(name: &str) -> String {
    let stem = name.rsplit('/').next().unwrap_or(name);
    stem.replace('-', " ")
}
