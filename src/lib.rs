//! # Lintel
//!
//! A minimal static page composer for markdown sites. Content is markdown
//! with TOML front matter, and `config.toml` declares the site chrome:
//! navigation, footer links, and optional features (feed link, math,
//! diagrams, comments, sidebar, framed layout). Lintel resolves those
//! declarations per page and assembles complete HTML documents.
//!
//! # Architecture: Scan → Compose → Render
//!
//! ```text
//! 1. Scan     content/       →  Site           (filesystem → plain values)
//! 2. Compose  Site × page    →  DocumentModel  (all decisions, no I/O)
//! 3. Render   DocumentModel  →  HTML           (serialization, no decisions)
//! ```
//!
//! The middle stage is the heart of the crate and is deliberately pure:
//! feature gating, navigation lookup, and footer selection are value
//! transformations over immutable inputs. Identical input produces a
//! byte-identical document, and any number of pages can be composed in
//! parallel over the shared registry.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content directory, parses front matter, builds the registry |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`frontmatter`] | Per-page TOML front matter and `PageContext` |
//! | [`registry`] | All known pages, unique by name |
//! | [`features`] | Decides which optional fragments a page gets |
//! | [`nav`] | Navigation references → resolved entries |
//! | [`footer`] | Footer links with selection state |
//! | [`compose`] | Assembles the per-page `DocumentModel` |
//! | [`render`] | Maud serialization of the model |
//! | [`sitemap`] | `sitemap.xml` from the registry |
//! | [`build`] | Pipeline orchestration and output writing |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Decisions Separated From Markup
//!
//! Conditional inclusion lives in [`features`] as a pure function returning
//! a `FeatureSet`; [`compose`] turns decisions into a tagged fragment list;
//! [`render`] serializes that list without ever consulting the config. No
//! branch hides inside markup, so every inclusion rule is unit-testable as
//! plain data.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system:
//!
//! - **Compile-time checking**: malformed markup is a build error.
//! - **Type-safe**: template variables are Rust expressions.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or drift.
//!
//! ## Fail-Fast Reference Resolution
//!
//! A navigation entry naming an unknown page, or a comments provider missing
//! its identifier, aborts that page's assembly with an error naming the
//! offending value. A silently empty link ships a broken site; a build
//! error gets fixed.
//!
//! ## Explicit Inputs
//!
//! Every resolver takes the site config, page context, and registry as
//! immutable parameters. There is no ambient template context and no
//! mutable global state, which is what lets [`build`] fan pages out across
//! rayon workers with no synchronization.

pub mod build;
pub mod compose;
pub mod config;
pub mod features;
pub mod footer;
pub mod frontmatter;
pub mod nav;
pub mod output;
pub mod registry;
pub mod render;
pub mod scan;
pub mod sitemap;

#[cfg(test)]
pub(crate) mod test_helpers;
