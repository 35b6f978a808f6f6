// src/lib.rs
// =============================================================================
// repo-glance: look up a GitHub user, list their repositories, and render a
// repository's README as HTML.
//
// Modules:
// - github:   API access layer (three GET endpoints + base64 decoding)
// - render:   markdown -> HTML via ordered regex substitutions
// - explorer: front-end state with explicit transitions
// - format:   display helpers (sizes, relative dates, paging)
// - error:    GlanceError, the one error type of the library
// =============================================================================

pub mod error;
pub mod explorer;
pub mod format;
pub mod github;
pub mod render;

pub use error::{GlanceError, Result};
pub use explorer::{Explorer, ExplorerState, ReadmeRequest, ReadmeStatus};
pub use github::{
    decode_content, ClientConfig, GithubApi, GithubClient, License, ReadmeFile,
    RepositoryRecord, UserProfile, DEFAULT_API_BASE,
};
pub use render::{render_markdown, render_readme};
