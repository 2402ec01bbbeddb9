//! Static output generation.
//!
//! Renders every registered page and writes the result under
//! `config.build.output`, the same tree a plain static host would serve:
//!
//! ```text
//! public/
//! ├── index.html
//! ├── bugs/index.html
//! ├── docs/index.html
//! └── svn/index.html
//! ```
//!
//! The directory layout means `/docs`-style paths resolve without any
//! server-side rewriting.

use crate::{
    config::SiteConfig,
    log,
    site::{self, Page},
    utils::minify::minify,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Render all pages into the output directory.
///
/// Pages are independent, so they are rendered and written in parallel.
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    site::PAGES
        .par_iter()
        .try_for_each(|page| write_page(page, config))?;

    log!("build"; "{}: {} pages rendered", config.base.title, site::PAGES.len());
    if let Some(url) = &config.base.url {
        log!("build"; "site url: {url}");
    }

    Ok(())
}

/// Output path for a page, relative to the output directory.
///
/// The index page lands at `index.html`; every other page at
/// `<slug>/index.html`.
pub fn output_rel_path(page: &Page) -> PathBuf {
    match page.slug {
        "index" => PathBuf::from("index.html"),
        slug => Path::new(slug).join("index.html"),
    }
}

/// Render one page and write it below the output directory.
fn write_page(page: &Page, config: &SiteConfig) -> Result<()> {
    let html = site::render_page(page);
    let bytes = minify(html.as_bytes(), config);

    let path = config.build.output.join(output_rel_path(page));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("build"; "{} -> {}", page.title, path.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
