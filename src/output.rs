//! CLI output formatting.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! ```text
//! Pages
//! 001 Home → /index.html
//! 002 Hello → /posts/hello.html (post)
//!
//! Nav: 2 entries    Links: 1
//! ```

use crate::build::BuildSummary;
use crate::frontmatter::Layout;
use crate::scan::Site;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Scan summary: every discovered page with its URL, then config counts.
pub fn format_scan(site: &Site) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (idx, page) in site.pages.iter().enumerate() {
        let kind = match page.context.layout {
            Layout::Post => " (post)",
            Layout::Page => "",
        };
        lines.push(format!(
            "{} {} → {}{kind}",
            format_index(idx + 1),
            page.title,
            page.context.url
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Nav: {} entries    Links: {}",
        site.config.nav.len(),
        site.config.links.len()
    ));
    lines
}

pub fn print_scan(site: &Site) {
    for line in format_scan(site) {
        println!("{line}");
    }
}

/// Build summary: every written document, then totals.
pub fn format_build(summary: &BuildSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for (idx, page) in summary.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(idx + 1),
            page.name,
            page.path
        ));
    }
    lines.push(format!(
        "Built {} pages + sitemap.xml",
        summary.pages.len()
    ));
    lines
}

pub fn print_build(summary: &BuildSummary) {
    for line in format_build(summary) {
        println!("{line}");
    }
}
