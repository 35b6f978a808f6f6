// src/render/mod.rs
// =============================================================================
// This module renders README markdown into HTML markup.
//
// Submodules:
// - markdown: the ordered substitution rules
// - escape: sanitization of untrusted text and URLs
//
// Everything here is a pure function: text in, markup out, no I/O.
// =============================================================================

mod escape;
mod markdown;

pub use escape::{escape_text, safe_url};
pub use markdown::render_markdown;

use tracing::warn;

use crate::github::ReadmeFile;

/// Shown instead of the README when its content can't be decoded
pub const DECODE_FAILURE_PLACEHOLDER: &str = "Error: Could not decode README content";

/// Decodes a README and renders it.
///
/// If the base64 content is broken, the placeholder text is rendered
/// instead, so the caller always gets markup back.
pub fn render_readme(readme: &ReadmeFile) -> String {
    let text = match readme.decoded() {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %readme.path, error = %e, "could not decode README");
            DECODE_FAILURE_PLACEHOLDER.to_string()
        }
    };
    render_markdown(&text)
}
