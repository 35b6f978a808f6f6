// src/explorer/mod.rs
// =============================================================================
// This module holds the "what is on screen" state for a front end:
// the searched user, their repositories, the selected repository and its
// README, plus the async driver that fills it in.
//
// Submodules:
// - state: ExplorerState and its transitions (no I/O)
// - session: Explorer, which runs the API calls and applies results
// =============================================================================

mod session;
mod state;

#[cfg(test)]
mod mock;

pub use session::Explorer;
pub use state::{ExplorerState, ReadmeRequest, ReadmeStatus};
