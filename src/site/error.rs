//! Rendering error types.

use thiserror::Error;

/// The only failure rendering can produce: an unknown page identifier.
///
/// Rendering itself is pure composition of embedded fragments, so there is
/// no fallible computation beyond the registry lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("no page registered for `{0}`")]
    NotFound(String),
}
