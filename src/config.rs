//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Configuration is
//! layered: stock defaults are overridden by the user's `config.toml` in the
//! content root.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = ""                # Site title (used in <title>, feed link, sidebar)
//! description = ""          # Site description (meta tag, sidebar)
//! author = ""               # Author meta tag
//! lang = "en"               # Default document language
//! encoding = "utf-8"        # Document charset
//! base_url = ""             # Absolute site root for canonical/sitemap URLs
//! icon = "/favicon.ico"     # Favicon path
//! styles = []               # Extra stylesheets, after the built-in one
//!
//! [features]
//! show_frame = false        # Wrap pages in the framed layout
//! show_sidebar = false      # Emit the sidebar with site title/description
//! math = false              # Enable math rendering site-wide
//!
//! [feed]
//! enable = false            # Emit the feed <link> in every page head
//! path = "/feed.xml"        # Feed location (empty falls back to /feed.xml)
//!
//! [comments]
//! provider = "none"         # "none", "disqus" or "isso"
//! shortname = ""            # Disqus shortname (required for disqus)
//! domain = ""               # Isso server domain (required for isso)
//!
//! [[nav]]                   # Ordered navigation entries
//! page = "about"            # Page name; url/title resolved from the registry
//!
//! [[nav]]
//! page = "github"           # Overrides skip the registry lookup
//! url = "https://github.com/someone"
//! title = "GitHub"
//!
//! [[links]]                 # Ordered footer links
//! url = "https://github.com/someone"
//! icon = "github"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, used in `<title>`, the feed link, and the sidebar.
    pub title: String,
    /// Site description, emitted as a meta tag and in the sidebar.
    pub description: String,
    /// Author name, emitted as a meta tag when non-empty.
    pub author: String,
    /// Default document language (per-page front matter overrides it).
    pub lang: String,
    /// Document charset.
    pub encoding: String,
    /// Absolute site root, e.g. `https://example.com`. Canonical and sitemap
    /// URLs are joined against it; empty leaves page URLs relative.
    pub base_url: String,
    /// Favicon path.
    pub icon: String,
    /// Extra stylesheet paths, included after the built-in stylesheet.
    pub styles: Vec<String>,
    /// Optional page feature switches.
    pub features: FeaturesConfig,
    /// Feed link settings.
    pub feed: FeedConfig,
    /// Comments widget settings.
    pub comments: CommentsConfig,
    /// Ordered navigation entries, resolved against the page registry.
    pub nav: Vec<NavRef>,
    /// Ordered footer links.
    pub links: Vec<ExternalLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: String::new(),
            lang: "en".to_string(),
            encoding: "utf-8".to_string(),
            base_url: String::new(),
            icon: "/favicon.ico".to_string(),
            styles: Vec::new(),
            features: FeaturesConfig::default(),
            feed: FeedConfig::default(),
            comments: CommentsConfig::default(),
            nav: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    ///
    /// Presence of the comments provider id is deliberately NOT checked here:
    /// it is resolved during composition so the error carries the provider
    /// name alongside the page being composed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.encoding.is_empty() {
            return Err(ConfigError::Validation("encoding must not be empty".into()));
        }
        if self.lang.is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        for nav in &self.nav {
            if nav.page.is_empty() {
                return Err(ConfigError::Validation(
                    "nav entries must name a page".into(),
                ));
            }
        }
        for link in &self.links {
            if link.icon.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "footer link '{}' must name an icon",
                    link.url
                )));
            }
        }
        Ok(())
    }
}

/// Optional page feature switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturesConfig {
    /// Wrap every page in the framed layout instead of the default one.
    pub show_frame: bool,
    /// Emit the sidebar on every page.
    pub show_sidebar: bool,
    /// Enable math rendering site-wide. Pages can also enable it
    /// individually; either switch turns it on.
    pub math: bool,
}

/// Feed link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// Emit the feed `<link>` in every page head.
    pub enable: bool,
    /// Feed location. An empty value falls back to `/feed.xml` at
    /// resolution time.
    pub path: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "/feed.xml".to_string(),
        }
    }
}

/// Comments widget settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommentsConfig {
    /// Which provider to embed, if any.
    pub provider: CommentsProvider,
    /// Disqus shortname. Required when `provider = "disqus"`.
    pub shortname: String,
    /// Isso server domain. Required when `provider = "isso"`.
    pub domain: String,
}

/// Supported comment widget providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentsProvider {
    /// No comments widget.
    #[default]
    None,
    /// Disqus, identified by a shortname.
    Disqus,
    /// Self-hosted Isso, identified by its server domain.
    Isso,
}

impl CommentsProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            CommentsProvider::None => "none",
            CommentsProvider::Disqus => "disqus",
            CommentsProvider::Isso => "isso",
        }
    }
}

impl fmt::Display for CommentsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured navigation entry pointing at a page by name.
///
/// Without overrides, `page` is looked up in the page registry and the
/// entry takes the registry's url and title. Each override replaces the
/// corresponding field; with both present the registry is never consulted,
/// which is how external links are configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavRef {
    /// Page name, as derived from the content path (`posts/hello.md` →
    /// `posts/hello`).
    pub page: String,
    /// Explicit URL, replacing the registry lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Explicit title, replacing the registry lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A configured footer link (outbound, icon-labelled).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExternalLink {
    pub url: String,
    pub icon: String,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely. This
///   includes arrays, so a configured `nav` list replaces the default
///   rather than appending to it.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Lintel Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Site identity. Title and description also feed the sidebar when enabled.
title = ""
description = ""
author = ""

# Default document language; per-page front matter can override it.
lang = "en"

# Document charset.
encoding = "utf-8"

# Absolute site root, e.g. "https://example.com". Canonical and sitemap
# URLs are joined against it. Leave empty to keep page URLs relative.
base_url = ""

# Favicon path.
icon = "/favicon.ico"

# Extra stylesheets, emitted after the built-in one.
styles = []

# ---------------------------------------------------------------------------
# Page features
# ---------------------------------------------------------------------------
[features]
# Wrap pages in the framed layout instead of the default full-width one.
show_frame = false

# Emit the sidebar (site title + description) on every page.
show_sidebar = false

# Enable math rendering site-wide. Pages can also opt in individually
# via front matter; either switch turns it on.
math = false

# ---------------------------------------------------------------------------
# Feed
# ---------------------------------------------------------------------------
[feed]
# Emit a feed <link> in every page head.
enable = false

# Feed location. An empty value falls back to "/feed.xml".
path = "/feed.xml"

# ---------------------------------------------------------------------------
# Comments
# ---------------------------------------------------------------------------
[comments]
# "none", "disqus" or "isso". Widgets are only embedded on post pages.
provider = "none"

# Disqus shortname, required when provider = "disqus".
shortname = ""

# Isso server domain, required when provider = "isso".
domain = ""

# ---------------------------------------------------------------------------
# Navigation: ordered, resolved against the page registry by name.
# ---------------------------------------------------------------------------
# [[nav]]
# page = "about"
#
# Overrides skip the registry lookup (external link form):
# [[nav]]
# page = "github"
# url = "https://github.com/someone"
# title = "GitHub"

# ---------------------------------------------------------------------------
# Footer links: ordered, icon-labelled outbound links.
# ---------------------------------------------------------------------------
# [[links]]
# url = "https://github.com/someone"
# icon = "github"
"##
}
