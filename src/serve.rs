//! Preview server for the site.
//!
//! A lightweight HTTP loop on `tiny_http`: every request is resolved to a
//! page slug and answered from the in-memory registry. Rendering is pure
//! composition of embedded fragments, so no build step is needed, nothing
//! is read from disk, and no state is shared between requests.
//!
//! Request resolution order:
//! 1. Known slug → render and serve `text/html`
//! 2. Anything else → 404

use crate::{
    config::SiteConfig,
    log,
    site::{self, RenderError},
};
use anyhow::{Context, Result};
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the preview server.
///
/// Binds to the configured interface and port (with auto-retry on port
/// conflict), sets up a Ctrl+C handler for graceful shutdown, and enters the
/// request loop. Blocks until Ctrl+C is received.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let interface: IpAddr = config
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid [serve.interface]: {}", config.serve.interface))?;

    let (server, addr) = try_bind_port(interface, config.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    // Ctrl+C unblocks the accept loop below
    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "{} at http://{}", config.base.title, addr);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < max_retries => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    max_retries,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

// ============================================================================
// Request Handling
// ============================================================================

/// Handle a single HTTP request: resolve the slug, render, respond.
fn handle_request(request: Request) -> Result<()> {
    let slug = resolve_slug(request.url());

    match site::render(&slug) {
        Ok(html) => serve_html(request, html),
        Err(RenderError::NotFound(_)) => serve_not_found(request),
    }
}

/// Map a raw request URL to a page slug.
///
/// Decodes percent-escapes, drops the query string, trims slashes, and
/// accepts the `index.html` spellings that `build` writes out, so the same
/// URLs work against the preview server and a static host.
fn resolve_slug(url: &str) -> String {
    let decoded = urlencoding::decode(url)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| url.to_owned());

    // Strip query string (e.g. ?t=123456) before resolving
    let path = decoded.split('?').next().unwrap_or(&decoded);
    let path = path.trim_matches('/');

    let path = if path == "index.html" {
        ""
    } else {
        path.strip_suffix("/index.html").unwrap_or(path)
    };
    let path = path.strip_suffix(".html").unwrap_or(path);

    if path.is_empty() {
        "index".to_owned()
    } else {
        path.to_owned()
    }
}

// ============================================================================
// Response Helpers
// ============================================================================

/// Serve a rendered page.
fn serve_html(request: Request, content: String) -> Result<()> {
    let response = Response::from_string(content)
        .with_header(Header::from_bytes("Content-Type", "text/html; charset=utf-8").unwrap());
    request.respond(response)?;
    Ok(())
}

/// Serve 404 Not Found response.
fn serve_not_found(request: Request) -> Result<()> {
    let body = "404 Not Found";
    let response = Response::new(
        StatusCode(404),
        vec![Header::from_bytes("Content-Type", "text/plain").unwrap()],
        std::io::Cursor::new(body),
        Some(body.len()),
        None,
    );
    request.respond(response)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
