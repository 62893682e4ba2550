//! Build orchestration: scan → compose → write.
//!
//! Pages are composed in parallel with rayon; each page's assembly only
//! reads the shared config and registry, so no synchronization is needed.
//! Composition failures carry the page name so a defect in one page is
//! immediately traceable.

use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::compose::{self, ComposeError};
use crate::render;
use crate::scan::{self, ScanError, Site};
use crate::sitemap;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("failed to compose '{page}': {source}")]
    Compose { page: String, source: ComposeError },
}

/// A page composed and rendered to its final HTML.
#[derive(Debug)]
pub struct ComposedPage {
    pub name: String,
    /// Output path relative to the output directory.
    pub path: String,
    pub html: String,
}

/// One written output document.
#[derive(Debug, Serialize)]
pub struct BuiltPage {
    pub name: String,
    pub path: String,
}

/// Result of a full build.
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub pages: Vec<BuiltPage>,
}

/// Compose and render every page of a scanned site.
///
/// Fails on the first defective page; no partial site is returned.
pub fn compose_site(site: &Site) -> Result<Vec<ComposedPage>, BuildError> {
    site.pages
        .par_iter()
        .map(|page| {
            let model =
                compose::assemble(&site.config, &page.context, &site.registry, &page.body_html)
                    .map_err(|source| BuildError::Compose {
                        page: page.name.clone(),
                        source,
                    })?;
            Ok(ComposedPage {
                name: page.name.clone(),
                path: page.context.url.trim_start_matches('/').to_string(),
                html: render::render_document(&model).into_string(),
            })
        })
        .collect()
}

/// Run the full pipeline: scan `source`, compose every page, write the site
/// (documents, built-in stylesheet, sitemap) into `output`.
pub fn build(source: &Path, output: &Path) -> Result<BuildSummary, BuildError> {
    let site = scan::scan(source)?;
    let documents = compose_site(&site)?;

    fs::create_dir_all(output)?;
    let assets = output.join("assets");
    fs::create_dir_all(&assets)?;
    fs::write(assets.join("style.css"), render::STYLESHEET)?;

    let mut pages = Vec::with_capacity(documents.len());
    for doc in documents {
        let dest = output.join(&doc.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, &doc.html)?;
        pages.push(BuiltPage {
            name: doc.name,
            path: doc.path,
        });
    }

    fs::write(
        output.join("sitemap.xml"),
        sitemap::generate(&site.registry, &site.config.base_url),
    )?;

    Ok(BuildSummary { pages })
}

/// Validate a content directory: scan and compose everything, write nothing.
pub fn check(source: &Path) -> Result<Site, BuildError> {
    let site = scan::scan(source)?;
    compose_site(&site)?;
    Ok(site)
}
