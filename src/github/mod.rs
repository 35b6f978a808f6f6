// src/github/mod.rs
// =============================================================================
// This module is the API access layer.
//
// It knows how to:
// - Look up a user profile
// - List a user's repositories (one page of 100, most recently updated first)
// - Fetch a repository's README and decode its base64 content
//
// Nothing here keeps state between calls; every operation is either one
// HTTP GET or a pure function.
// =============================================================================

mod client;
mod decode;
mod models;

pub use client::{
    error_for_status, ClientConfig, GithubApi, GithubClient, ACCEPT_GITHUB_V3, DEFAULT_API_BASE,
    DEFAULT_USER_AGENT, REPOS_PER_PAGE,
};
pub use decode::decode_content;
pub use models::{License, ReadmeFile, RepositoryRecord, UserProfile};

#[cfg(test)]
pub(crate) use models::fixtures;
