//! HTML minification for build output.
//!
//! Applies only when writing the static output tree. The preview server
//! serves the composed document unmodified, so minification never alters
//! what the renderer guarantees.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify rendered HTML based on config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(html: &'a [u8], config: &SiteConfig) -> Cow<'a, [u8]> {
    if !config.build.minify {
        return Cow::Borrowed(html);
    }
    Cow::Owned(minify_inner(html))
}

/// Minify HTML content using `minify_html` crate.
fn minify_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(html, &cfg)
}

// ============================================================================
// Tests
// ============================================================================
