// src/github/client.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Three endpoints are used, all plain GETs:
// - /users/{username}                                  -> UserProfile
// - /users/{username}/repos?sort=updated&per_page=100  -> Vec<RepositoryRecord>
// - /repos/{owner}/{repo}/readme                       -> ReadmeFile
//
// Every request carries the versioned Accept header and a fixed User-Agent
// (GitHub rejects requests without one). There are no retries: one failed
// attempt is handed straight back to the caller as a GlanceError.
//
// Rust concepts:
// - Traits: GithubApi is the seam between "fetch data" and "use data",
//   so tests can plug in a fake implementation
// - Generics: get_json works for any type serde can deserialize
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{GlanceError, Result};
use crate::github::models::{ReadmeFile, RepositoryRecord, UserProfile};

/// Public GitHub API host
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Client identifier sent with every request
pub const DEFAULT_USER_AGENT: &str = "repo-glance";

/// Versioned JSON representation we ask for
pub const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";

/// Repositories fetched per user (one page, no pagination)
pub const REPOS_PER_PAGE: u32 = 100;

/// Where to send requests and how to identify ourselves
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// The three read operations the rest of the crate needs.
///
/// `GithubClient` implements this over HTTP; tests use an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait GithubApi {
    /// Looks up one account. 404 becomes `GlanceError::NotFound`.
    async fn fetch_user(&self, username: &str) -> Result<UserProfile>;

    /// Up to 100 repositories, most recently updated first.
    /// A user without public repositories yields an empty Vec.
    async fn fetch_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>>;

    /// The repository's README. 404 becomes `GlanceError::ReadmeNotFound`.
    async fn fetch_readme(&self, owner: &str, repo: &str) -> Result<ReadmeFile>;
}

/// HTTP implementation of [`GithubApi`]
#[derive(Debug, Clone)]
pub struct GithubClient {
    // reqwest::Client is cheap to clone (it's reference counted inside)
    client: Client,
    base: Url,
}

impl GithubClient {
    /// Builds a client with the GitHub headers installed as defaults
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            GlanceError::InvalidInput(format!("invalid API base URL '{}': {}", config.base_url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(GlanceError::InvalidInput(format!(
                "API base URL cannot have paths appended: {}",
                config.base_url
            )));
        }

        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            GlanceError::InvalidInput(format!("invalid User-Agent: {}", config.user_agent))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_V3));
        headers.insert(USER_AGENT, user_agent);

        // No timeout is set, transport defaults apply
        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, base })
    }

    /// Appends path segments (percent-encoded) and query pairs to the base URL.
    ///
    /// Example:
    ///   ["users", "octocat", "repos"] -> https://api.github.com/users/octocat/repos
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base() was rejected in new(), so this is always Ok
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    /// Sends one GET and turns the answer into `T` or a GlanceError
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            // The body is only used for GitHub's "message" field
            let body = response.text().await.unwrap_or_default();
            debug!(%url, status = status.as_u16(), "request failed");
            return Err(error_for_status(status, &body));
        }

        // Read first, parse second: a schema mismatch is not a transport error
        let body = response.text().await?;
        Ok(serde_json::from_str::<T>(&body)?)
    }
}

impl GithubApi for GithubClient {
    async fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        let username = required("username", username)?;
        self.get_json(self.endpoint(&["users", username], &[])).await
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>> {
        let username = required("username", username)?;
        let per_page = REPOS_PER_PAGE.to_string();
        let url = self.endpoint(
            &["users", username, "repos"],
            &[("sort", "updated"), ("per_page", per_page.as_str())],
        );
        self.get_json(url).await
    }

    async fn fetch_readme(&self, owner: &str, repo: &str) -> Result<ReadmeFile> {
        let owner = required("owner", owner)?;
        let repo = required("repository name", repo)?;
        let url = self.endpoint(&["repos", owner, repo, "readme"], &[]);

        match self.get_json::<ReadmeFile>(url).await {
            Err(GlanceError::NotFound { .. }) => Err(GlanceError::ReadmeNotFound),
            other => other,
        }
    }
}

// Shape of GitHub's error documents: {"message": "...", "documentation_url": "..."}
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Maps a non-2xx response to a GlanceError.
///
/// 404 becomes NotFound, everything else Api with the same status.
/// GitHub's own message is used when the body has one.
pub fn error_for_status(status: StatusCode, body: &str) -> GlanceError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("GitHub API error: {}", status.as_u16()));

    if status == StatusCode::NOT_FOUND {
        GlanceError::NotFound { message }
    } else {
        GlanceError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

// Trims user input and rejects empty values before any request is made
fn required<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(GlanceError::InvalidInput(format!("{} must not be empty", what)))
    } else {
        Ok(value)
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why path_segments_mut() instead of format!()?
//    - A username like "a/b" or "x?y" would otherwise change the path or
//      start a query string
//    - extend() percent-encodes each segment for us
//
// 2. Why is the error body read with unwrap_or_default()?
//    - We already know the request failed; if the body can't be read we
//      still want the status-based error, not a second transport error
// -----------------------------------------------------------------------------
