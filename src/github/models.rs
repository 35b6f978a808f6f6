// src/github/models.rs
// =============================================================================
// Shapes of the JSON documents returned by the GitHub REST API.
//
// Only the fields we display are modelled; serde ignores the rest.
// Anything GitHub may send as `null` is an Option.
//
// Rust concepts:
// - Derive macros: Deserialize/Serialize generate the JSON glue for us
// - Option<T>: For nullable fields
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::decode::decode_content;

/// A GitHub account, from `/users/{username}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    /// Personal website, GitHub sends "" when unset
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Display name, falling back to the login
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.login)
    }

    /// Blog link, if it is set to something non-empty
    pub fn website(&self) -> Option<&str> {
        self.blog.as_deref().filter(|b| !b.trim().is_empty())
    }
}

/// License descriptor attached to a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
}

/// One entry of `/users/{username}/repos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    /// "owner/name"
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub clone_url: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub watchers_count: u32,
    pub forks_count: u32,
    pub open_issues_count: u32,
    /// Size in kilobytes, as reported by GitHub
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub default_branch: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default = "default_visibility")]
    pub visibility: String,
    pub private: bool,
    pub fork: bool,
    pub archived: bool,
    pub disabled: bool,
    pub license: Option<License>,
}

fn default_visibility() -> String {
    "public".to_string()
}

impl RepositoryRecord {
    /// The owner part of `full_name`
    pub fn owner(&self) -> &str {
        self.full_name
            .split_once('/')
            .map_or(self.full_name.as_str(), |(owner, _)| owner)
    }
}

/// Response of `/repos/{owner}/{repo}/readme`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadmeFile {
    /// base64 text, usually wrapped every 60 characters
    pub content: String,
    pub encoding: String,
    pub name: String,
    pub path: String,
    pub sha: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl ReadmeFile {
    /// Decoded markdown text of this README
    pub fn decoded(&self) -> Result<String> {
        decode_content(&self.content)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    // Small JSON documents shaped like real API answers, shared by tests

    use super::*;

    pub fn user(login: &str) -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "login": login,
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": format!("https://github.com/{login}"),
            "bio": null,
            "location": "San Francisco",
            "blog": "https://github.blog",
            "twitter_username": null,
            "public_repos": 8,
            "followers": 100,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "updated_at": "2024-06-22T11:23:39Z"
        }))
        .unwrap()
    }

    pub fn repository(owner: &str, name: &str) -> RepositoryRecord {
        serde_json::from_value(serde_json::json!({
            "id": 1296269,
            "name": name,
            "full_name": format!("{owner}/{name}"),
            "description": "My first repository on GitHub!",
            "html_url": format!("https://github.com/{owner}/{name}"),
            "clone_url": format!("https://github.com/{owner}/{name}.git"),
            "language": "Rust",
            "stargazers_count": 80,
            "watchers_count": 80,
            "forks_count": 9,
            "open_issues_count": 0,
            "size": 108,
            "created_at": "2011-01-26T19:01:12Z",
            "updated_at": "2011-01-26T19:14:43Z",
            "pushed_at": "2011-01-26T19:06:43Z",
            "default_branch": "main",
            "topics": ["octocat", "api"],
            "visibility": "public",
            "private": false,
            "fork": false,
            "archived": false,
            "disabled": false,
            "license": {
                "key": "mit",
                "name": "MIT License",
                "spdx_id": "MIT",
                "url": "https://api.github.com/licenses/mit"
            }
        }))
        .unwrap()
    }

    pub fn readme(markdown: &str) -> ReadmeFile {
        use base64::Engine;
        let content = base64::engine::general_purpose::STANDARD.encode(markdown);
        ReadmeFile {
            content,
            encoding: "base64".to_string(),
            name: "README.md".to_string(),
            path: "README.md".to_string(),
            sha: "3d21ec53a331a6f037a91c368710b99387d012c1".to_string(),
            size: markdown.len() as u64,
            kind: "file".to_string(),
            url: "https://api.github.com/repos/octocat/hello/contents/README.md".to_string(),
        }
    }
}
