// src/explorer/session.rs
// =============================================================================
// Drives ExplorerState with real (or mock) API calls.
//
// How a search works:
// 1. The query is trimmed; blank queries are refused
// 2. User lookup and repository listing run at the same time
// 3. If either fails, the whole search fails (no partial results)
// 4. On success the state gets the new user + list, selection is cleared
//
// How opening a repository works:
// 1. The state hands out a ReadmeRequest for the selection
// 2. The README is fetched
// 3. The result goes back to the state, which ignores it if the
//    selection changed in the meantime
//
// Rust concepts:
// - Generics with trait bounds: Explorer<A: GithubApi> works with any API
// - futures::try_join!: run two futures, stop at the first error
// =============================================================================

use tracing::debug;

use crate::error::{GlanceError, Result};
use crate::explorer::state::{ExplorerState, ReadmeRequest};
use crate::github::{GithubApi, ReadmeFile};

#[derive(Debug)]
pub struct Explorer<A> {
    api: A,
    state: ExplorerState,
}

impl<A: GithubApi> Explorer<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ExplorerState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ExplorerState {
        &mut self.state
    }

    /// Looks up a user and their repositories together.
    ///
    /// The error is also recorded in the state (`state().error()`).
    pub async fn search(&mut self, username: &str) -> Result<()> {
        let query = self
            .state
            .begin_search(username)
            .ok_or_else(|| GlanceError::InvalidInput("username must not be empty".to_string()))?;

        debug!(%query, "searching");
        let joined = futures::try_join!(
            self.api.fetch_user(&query),
            self.api.fetch_repositories(&query)
        );

        match joined {
            Ok((user, repositories)) => {
                self.state.search_succeeded(user, repositories);
                Ok(())
            }
            Err(e) => {
                self.state.search_failed(&e);
                Err(e)
            }
        }
    }

    /// Selects a repository from the current list and loads its README.
    ///
    /// Returns an error only if no repository with that name is listed;
    /// README problems end up in `state().readme()`.
    pub async fn open_repository(&mut self, name: &str) -> Result<()> {
        let request = self.state.select_by_name(name).ok_or_else(|| {
            GlanceError::InvalidInput(format!("no repository named '{}' in the list", name.trim()))
        })?;

        let result = self.fetch_readme_for(&request).await;
        self.state.apply_readme(&request, result);
        Ok(())
    }

    /// Fetches the README a request refers to, without touching the state.
    ///
    /// For callers that keep several fetches in flight and apply the
    /// results themselves via `state_mut().apply_readme(..)`.
    pub async fn fetch_readme_for(&self, request: &ReadmeRequest) -> Result<ReadmeFile> {
        self.api.fetch_readme(&request.owner, &request.repo).await
    }
}
