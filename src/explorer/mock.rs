// src/explorer/mock.rs
// =============================================================================
// In-memory GithubApi for tests. No network, answers come from maps.
// =============================================================================

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{GlanceError, Result};
use crate::github::{GithubApi, ReadmeFile, RepositoryRecord, UserProfile};

#[derive(Debug, Default)]
pub struct MockGithubApi {
    pub users: HashMap<String, UserProfile>,
    pub repositories: HashMap<String, Vec<RepositoryRecord>>,
    pub readmes: HashMap<(String, String), ReadmeFile>,
    /// When set, the repository listing fails with this status
    pub repositories_status: Option<u16>,
    /// Every call, e.g. "user:octocat", "readme:octocat/a"
    pub calls: Mutex<Vec<String>>,
}

impl MockGithubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: UserProfile, repositories: Vec<RepositoryRecord>) -> Self {
        self.repositories.insert(user.login.clone(), repositories);
        self.users.insert(user.login.clone(), user);
        self
    }

    pub fn with_readme(mut self, owner: &str, repo: &str, readme: ReadmeFile) -> Self {
        self.readmes.insert((owner.to_string(), repo.to_string()), readme);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found() -> GlanceError {
    GlanceError::NotFound {
        message: "Not Found".to_string(),
    }
}

impl GithubApi for MockGithubApi {
    async fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        self.record(format!("user:{}", username));
        self.users.get(username).cloned().ok_or_else(not_found)
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>> {
        self.record(format!("repos:{}", username));
        if let Some(status) = self.repositories_status {
            return Err(GlanceError::Api {
                status,
                message: format!("GitHub API error: {}", status),
            });
        }
        self.repositories.get(username).cloned().ok_or_else(not_found)
    }

    async fn fetch_readme(&self, owner: &str, repo: &str) -> Result<ReadmeFile> {
        self.record(format!("readme:{}/{}", owner, repo));
        self.readmes
            .get(&(owner.to_string(), repo.to_string()))
            .cloned()
            .ok_or(GlanceError::ReadmeNotFound)
    }
}
