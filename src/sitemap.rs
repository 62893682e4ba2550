//! Sitemap generation from the page registry.
//!
//! Emits a plain `sitemap.xml` with one `<url>` per eligible page, in
//! registry order. Pages opt out with `sitemap = false` in front matter.

use crate::compose::resolve_url;
use crate::registry::PageRegistry;

/// Render the sitemap XML for all eligible pages.
pub fn generate(registry: &PageRegistry, base_url: &str) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for record in registry.iter().filter(|r| r.sitemap) {
        xml.push_str("  <url><loc>");
        xml.push_str(&escape_xml(&resolve_url(base_url, &record.url)));
        xml.push_str("</loc></url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
