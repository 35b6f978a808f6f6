// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Subcommands:
// - user:   show a GitHub user's profile and a page of their repositories
// - repo:   show one repository of a user, with its rendered README
// - render: render a local markdown file the same way READMEs are rendered
// =============================================================================

use clap::{Parser, Subcommand};

use repo_glance::DEFAULT_API_BASE;

#[derive(Parser, Debug)]
#[command(
    name = "repo-glance",
    version,
    about = "Look up a GitHub user, list their repositories and read a README",
    long_about = "repo-glance queries the public GitHub REST API (no token needed) to show a \
                  user's profile, their most recently updated repositories, and the README of \
                  one repository rendered as HTML."
)]
pub struct Cli {
    /// Base URL of the GitHub REST API
    ///
    /// Useful for GitHub Enterprise (e.g. https://ghe.example.com/api/v3)
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a user's profile and repositories
    ///
    /// Example: repo-glance user octocat --page 2
    User {
        /// GitHub username (e.g., octocat)
        username: String,

        /// Which page of the repository list to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Repositories per page
        #[arg(long, default_value_t = 5)]
        per_page: usize,

        /// Output the profile and the full list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one repository and its README
    ///
    /// Example: repo-glance repo octocat Hello-World
    Repo {
        /// GitHub username that owns the repository
        username: String,

        /// Repository name, as listed for that user
        repo: String,

        /// Output repository, README and rendered markup as JSON
        #[arg(long)]
        json: bool,

        /// Print the decoded markdown instead of rendered HTML
        #[arg(long, conflicts_with = "json")]
        raw: bool,
    },

    /// Render a local markdown file (use "-" for stdin)
    ///
    /// Example: repo-glance render README.md
    Render {
        /// Path to a markdown file, or "-" to read stdin
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults() {
        let cli = Cli::parse_from(["repo-glance", "user", "octocat"]);
        assert_eq!(cli.api_base, DEFAULT_API_BASE);
        match cli.command {
            Commands::User {
                username,
                page,
                per_page,
                json,
            } => {
                assert_eq!(username, "octocat");
                assert_eq!(page, 1);
                assert_eq!(per_page, 5);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_api_base() {
        let cli = Cli::parse_from([
            "repo-glance",
            "repo",
            "octocat",
            "Hello-World",
            "--api-base",
            "http://localhost:8080",
        ]);
        assert_eq!(cli.api_base, "http://localhost:8080");
        assert!(matches!(cli.command, Commands::Repo { .. }));
    }

    #[test]
    fn test_raw_conflicts_with_json() {
        let result =
            Cli::try_parse_from(["repo-glance", "repo", "octocat", "x", "--raw", "--json"]);
        assert!(result.is_err());
    }
}
