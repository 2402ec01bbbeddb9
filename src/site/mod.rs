//! Static page registry and composition.
//!
//! Every document on the site is the concatenation of a shared header
//! fragment, a page-specific body, and a shared footer fragment. All three
//! are embedded at compile time, so rendering is pure string composition
//! with no I/O and no per-request state.
//!
//! ```text
//! render(slug)
//!     │
//!     ├── find(slug) ──► &'static Page      (NotFound if unknown)
//!     │
//!     └── HEADER ++ page.body ++ FOOTER
//! ```

mod error;

pub use error::RenderError;

// ============================================================================
// Fragments - embedded at compile time
// ============================================================================

/// Shared header fragment. Every rendered document starts with these exact bytes.
pub const HEADER: &str = include_str!("../embed/header.html");

/// Shared footer fragment. Every rendered document ends with these exact bytes.
pub const FOOTER: &str = include_str!("../embed/footer.html");

// ============================================================================
// Page Registry
// ============================================================================

/// One static document with a unique slug and body content.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// Canonical identifier, also the request path without slashes.
    pub slug: &'static str,

    /// Human-readable name, used in build logs.
    pub title: &'static str,

    /// Static markup placed between the shared fragments.
    pub body: &'static str,
}

/// All pages known to the site.
pub const PAGES: &[Page] = &[
    Page {
        slug: "index",
        title: "Home",
        body: include_str!("../embed/pages/index.html"),
    },
    Page {
        slug: "docs",
        title: "Documentation",
        body: include_str!("../embed/pages/docs.html"),
    },
    Page {
        slug: "bugs",
        title: "Bugs",
        body: include_str!("../embed/pages/bugs.html"),
    },
    Page {
        slug: "svn",
        title: "Subversion",
        body: include_str!("../embed/pages/svn.html"),
    },
];

/// Look up a page by its slug.
pub fn find(slug: &str) -> Option<&'static Page> {
    PAGES.iter().find(|p| p.slug == slug)
}

/// Render the page with the given slug.
///
/// The only failure mode is an unknown slug.
pub fn render(slug: &str) -> Result<String, RenderError> {
    find(slug)
        .map(render_page)
        .ok_or_else(|| RenderError::NotFound(slug.to_owned()))
}

/// Compose a full document: header, body, footer, nothing else.
pub fn render_page(page: &Page) -> String {
    let mut out = String::with_capacity(HEADER.len() + page.body.len() + FOOTER.len());
    out.push_str(HEADER);
    out.push_str(page.body);
    out.push_str(FOOTER);
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn render_wraps_body_with_shared_fragments() {
        for page in PAGES {
            let html = render(page.slug).unwrap();
            assert!(
                html.starts_with(HEADER),
                "`{}` must start with the header bytes",
                page.slug
            );
            assert!(
                html.ends_with(FOOTER),
                "`{}` must end with the footer bytes",
                page.slug
            );
            assert_eq!(html, format!("{HEADER}{}{FOOTER}", page.body));
        }
    }

    #[test]
    fn render_is_byte_stable() {
        for page in PAGES {
            assert_eq!(render(page.slug).unwrap(), render(page.slug).unwrap());
        }
    }

    #[test]
    fn unknown_slug_is_not_found() {
        assert_eq!(
            render("lists"),
            Err(RenderError::NotFound("lists".to_owned()))
        );
        assert!(find("download.php").is_none());
    }

    #[test]
    fn index_describes_the_language() {
        let html = render("index").unwrap();
        let body = &html[HEADER.len()..html.len() - FOOTER.len()];
        assert!(body.contains("Natural C is a variant of the standard C programming language"));
    }

    #[test]
    fn svn_shows_the_checkout_command() {
        let html = render("svn").unwrap();
        assert!(html.contains("svn checkout http://naturalc.googlecode.com/svn/trunk/ ncc"));
    }

    #[test]
    fn docs_links_both_manual_formats() {
        let html = render("docs").unwrap();
        assert!(html.contains("docbook/naturalc.html"));
        assert!(html.contains("doxygen/html/index.html"));
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = PAGES.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), PAGES.len());
    }

    #[test]
    fn bodies_are_nonempty() {
        for page in PAGES {
            assert!(!page.body.trim().is_empty(), "`{}` has no body", page.slug);
            assert!(!page.title.is_empty());
        }
    }
}
