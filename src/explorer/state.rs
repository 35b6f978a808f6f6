// src/explorer/state.rs
// =============================================================================
// What the front end currently shows, and the transitions between states.
//
// The state is a plain struct; every change goes through one method:
//
//   begin_search -> search_succeeded | search_failed
//   select_repository -> apply_readme
//   clear_selection
//
// README results arrive asynchronously. Each selection gets a generation
// number, and a README result is only applied if its request still carries
// the current generation. A slow response for repository A can therefore
// never show up under repository B's heading.
// =============================================================================

use tracing::{debug, info, warn};

use crate::error::GlanceError;
use crate::github::{ReadmeFile, RepositoryRecord, UserProfile};

/// Where the README of the selected repository stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReadmeStatus {
    /// Nothing selected
    #[default]
    Idle,
    /// Request in flight
    Loading,
    Loaded(ReadmeFile),
    /// The repository has no README (expected, not an error)
    Missing,
    /// Fetch failed for another reason, message is user-facing
    Failed(String),
}

/// Ticket for one README fetch.
///
/// Hand it back to [`ExplorerState::apply_readme`] together with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeRequest {
    pub generation: u64,
    pub owner: String,
    pub repo: String,
}

#[derive(Debug, Default)]
pub struct ExplorerState {
    search_query: String,
    user: Option<UserProfile>,
    repositories: Vec<RepositoryRecord>,
    selected: Option<RepositoryRecord>,
    readme: ReadmeStatus,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn repositories(&self) -> &[RepositoryRecord] {
        &self.repositories
    }

    pub fn selected(&self) -> Option<&RepositoryRecord> {
        self.selected.as_ref()
    }

    pub fn readme(&self) -> &ReadmeStatus {
        &self.readme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a search. Returns the trimmed query, or None for blank input
    /// (blank searches are ignored and leave the state untouched).
    pub fn begin_search(&mut self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.loading = true;
        self.error = None;
        self.search_query = query.to_string();
        Some(self.search_query.clone())
    }

    /// Both lookups succeeded: replace user and list wholesale
    pub fn search_succeeded(&mut self, user: UserProfile, repositories: Vec<RepositoryRecord>) {
        info!(
            login = %user.login,
            repositories = repositories.len(),
            "search finished"
        );
        self.user = Some(user);
        self.repositories = repositories;
        self.loading = false;
        self.error = None;
        self.drop_selection();
    }

    /// Either lookup failed: the whole search counts as failed
    pub fn search_failed(&mut self, error: &GlanceError) {
        warn!(query = %self.search_query, %error, "search failed");
        self.user = None;
        self.repositories.clear();
        self.loading = false;
        self.error = Some(search_error_message(error));
        self.drop_selection();
    }

    /// Selects a repository and returns the ticket for its README fetch.
    /// Any README shown so far is dropped right away.
    pub fn select_repository(&mut self, repository: RepositoryRecord) -> ReadmeRequest {
        self.generation += 1;
        let request = ReadmeRequest {
            generation: self.generation,
            owner: repository.owner().to_string(),
            repo: repository.name.clone(),
        };
        debug!(owner = %request.owner, repo = %request.repo, generation = request.generation, "repository selected");

        self.selected = Some(repository);
        self.readme = ReadmeStatus::Loading;
        request
    }

    /// Selects a repository of the current list by name.
    /// Exact matches win over case-insensitive ones.
    pub fn select_by_name(&mut self, name: &str) -> Option<ReadmeRequest> {
        let name = name.trim();
        let found = self
            .repositories
            .iter()
            .find(|r| r.name == name)
            .or_else(|| {
                self.repositories
                    .iter()
                    .find(|r| r.name.eq_ignore_ascii_case(name))
            })
            .cloned()?;
        Some(self.select_repository(found))
    }

    /// Applies the result of a README fetch.
    ///
    /// Returns false (and changes nothing) if the selection has moved on
    /// since the request was made.
    pub fn apply_readme(
        &mut self,
        request: &ReadmeRequest,
        result: Result<ReadmeFile, GlanceError>,
    ) -> bool {
        if request.generation != self.generation || self.selected.is_none() {
            debug!(
                repo = %request.repo,
                generation = request.generation,
                current = self.generation,
                "discarding stale README result"
            );
            return false;
        }

        self.readme = match result {
            Ok(readme) => ReadmeStatus::Loaded(readme),
            Err(GlanceError::ReadmeNotFound) => {
                info!(owner = %request.owner, repo = %request.repo, "README not available");
                ReadmeStatus::Missing
            }
            Err(e) => {
                warn!(owner = %request.owner, repo = %request.repo, error = %e, "failed to load README");
                ReadmeStatus::Failed("Failed to load README".to_string())
            }
        };
        true
    }

    /// Back to the repository list
    pub fn clear_selection(&mut self) {
        self.drop_selection();
    }

    // Bumping the generation invalidates every outstanding README request
    fn drop_selection(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.readme = ReadmeStatus::Idle;
    }
}

// API-reported failures carry a message worth showing as-is;
// transport trouble gets a generic one
fn search_error_message(error: &GlanceError) -> String {
    match error {
        GlanceError::Transport(_) | GlanceError::Decode(_) => {
            "Failed to fetch user data".to_string()
        }
        other => other.to_string(),
    }
}
