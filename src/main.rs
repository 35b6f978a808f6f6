// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG controls it, default is warnings only)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Print results as text or JSON
// 5. Exit with proper code (0 = success, 1 = lookup failed, 2 = error)
//
// All GitHub logic lives in the library (src/lib.rs); this file is only
// the front end that feeds it usernames and prints what comes back.
// =============================================================================

mod cli;

use std::io::Read;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use repo_glance::format::{format_file_size, format_relative, paginate};
use repo_glance::{
    render_markdown, render_readme, ClientConfig, Explorer, GithubClient, ReadmeFile,
    ReadmeStatus, RepositoryRecord, UserProfile,
};

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with --json output on stdout
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Returns:
//   Ok(0) = everything shown
//   Ok(1) = the lookup failed (unknown user, API error, ...), already reported
//   Err   = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = ClientConfig {
        base_url: cli.api_base.clone(),
        ..ClientConfig::default()
    };

    match cli.command {
        Commands::User {
            username,
            page,
            per_page,
            json,
        } => handle_user(&config, &username, page, per_page, json).await,
        Commands::Repo {
            username,
            repo,
            json,
            raw,
        } => handle_repo(&config, &username, &repo, json, raw).await,
        Commands::Render { path } => handle_render(&path),
    }
}

// What `user --json` prints
#[derive(Serialize)]
struct UserReport<'a> {
    user: &'a UserProfile,
    repositories: &'a [RepositoryRecord],
}

// What `repo --json` prints
#[derive(Serialize)]
struct RepositoryReport<'a> {
    repository: &'a RepositoryRecord,
    readme: Option<&'a ReadmeFile>,
    readme_html: Option<String>,
}

// Handles the 'user' subcommand
async fn handle_user(
    config: &ClientConfig,
    username: &str,
    page: usize,
    per_page: usize,
    json: bool,
) -> Result<i32> {
    let client = GithubClient::new(config).context("Failed to create GitHub client")?;
    let mut explorer = Explorer::new(client);

    if !json {
        println!("🔍 Looking up GitHub user: {}", username.trim());
    }

    if let Err(e) = explorer.search(username).await {
        report_search_failure(explorer.state().error(), &e);
        return Ok(1);
    }

    let state = explorer.state();
    let Some(user) = state.user() else {
        // search() only returns Ok after storing the user
        anyhow::bail!("search finished without a user");
    };

    if json {
        let report = UserReport {
            user,
            repositories: state.repositories(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    println!();
    print_profile(user);
    println!();
    print_repository_page(state.repositories(), page, per_page);

    Ok(0)
}

// Handles the 'repo' subcommand
async fn handle_repo(
    config: &ClientConfig,
    username: &str,
    repo: &str,
    json: bool,
    raw: bool,
) -> Result<i32> {
    let client = GithubClient::new(config).context("Failed to create GitHub client")?;
    let mut explorer = Explorer::new(client);

    if let Err(e) = explorer.search(username).await {
        report_search_failure(explorer.state().error(), &e);
        return Ok(1);
    }

    if let Err(e) = explorer.open_repository(repo).await {
        eprintln!("❌ {}", e);
        return Ok(1);
    }

    let state = explorer.state();
    let Some(repository) = state.selected() else {
        anyhow::bail!("repository was not selected");
    };

    if json {
        let readme = match state.readme() {
            ReadmeStatus::Loaded(readme) => Some(readme),
            _ => None,
        };
        let report = RepositoryReport {
            repository,
            readme,
            readme_html: readme.map(render_readme),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    print_repository_detail(repository);
    println!();
    println!("📖 README");
    println!("{}", "=".repeat(80));

    match state.readme() {
        ReadmeStatus::Loaded(readme) if raw => match readme.decoded() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ {}", e);
                return Ok(1);
            }
        },
        ReadmeStatus::Loaded(readme) => println!("{}", render_readme(readme)),
        ReadmeStatus::Missing => {
            println!("No README available");
            println!("This repository doesn't have a README file.");
        }
        ReadmeStatus::Failed(message) => {
            eprintln!("❌ {}", message);
            return Ok(1);
        }
        ReadmeStatus::Idle | ReadmeStatus::Loading => {
            anyhow::bail!("README request did not complete");
        }
    }

    Ok(0)
}

// Handles the 'render' subcommand
fn handle_render(path: &str) -> Result<i32> {
    let markdown = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read markdown from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };

    println!("{}", render_markdown(&markdown));
    Ok(0)
}

fn report_search_failure(message: Option<&str>, error: &repo_glance::GlanceError) {
    let message = message.map(str::to_string).unwrap_or_else(|| error.to_string());
    match error.status() {
        Some(status) => eprintln!("❌ {} (HTTP {})", message, status),
        None => eprintln!("❌ {}", message),
    }
}

fn print_profile(user: &UserProfile) {
    println!("👤 {} (@{})", user.display_name(), user.login);
    if let Some(bio) = user.bio.as_deref().filter(|b| !b.is_empty()) {
        println!("   {}", bio);
    }
    if let Some(location) = user.location.as_deref().filter(|l| !l.is_empty()) {
        println!("   📍 {}", location);
    }
    if let Some(website) = user.website() {
        println!("   🔗 {}", website);
    }
    if let Some(twitter) = user.twitter_username.as_deref().filter(|t| !t.is_empty()) {
        println!("   🐦 @{}", twitter);
    }
    println!(
        "   📦 {} repos   👥 {} followers   ➡️  {} following",
        user.public_repos, user.followers, user.following
    );
    println!(
        "   📅 Joined {}",
        format_relative(user.created_at, Utc::now())
    );
    println!("   {}", user.html_url);
}

// Prints one page of the repository list as a table
fn print_repository_page(repositories: &[RepositoryRecord], page: usize, per_page: usize) {
    if repositories.is_empty() {
        println!("📭 No repositories found");
        println!("   This user doesn't have any public repositories.");
        return;
    }

    let (rows, total_pages) = paginate(repositories, page, per_page);

    println!("📚 Repositories ({})", repositories.len());
    println!(
        "{:<40} {:<14} {:>7} {:>7} {:<24}",
        "NAME", "LANGUAGE", "STARS", "FORKS", "UPDATED"
    );
    println!("{}", "=".repeat(96));

    let now = Utc::now();
    for repo in rows {
        let mut name = truncate(&repo.name, 32);
        if repo.private {
            name.push_str(" 🔒");
        }
        if repo.fork {
            name.push_str(" ⑂");
        }
        if repo.archived {
            name.push_str(" 🗄");
        }

        println!(
            "{:<40} {:<14} {:>7} {:>7} {:<24}",
            name,
            truncate(repo.language.as_deref().unwrap_or("-"), 14),
            repo.stargazers_count,
            repo.forks_count,
            format_relative(repo.updated_at, now)
        );
        if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
            println!("   {}", truncate(description, 90));
        }
    }

    println!();
    if rows.is_empty() {
        println!("Page {} is empty ({} page(s) in total)", page, total_pages);
    } else {
        println!("Page {} of {}", page.max(1), total_pages);
    }
}

fn print_repository_detail(repo: &RepositoryRecord) {
    let mut badges = vec![repo.visibility.clone()];
    if repo.fork {
        badges.push("forked".to_string());
    }
    if repo.archived {
        badges.push("archived".to_string());
    }

    println!("📦 {} [{}]", repo.full_name, badges.join(", "));
    if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        println!("   {}", description);
    }
    println!();

    if let Some(language) = &repo.language {
        println!("   💻 {}", language);
    }
    println!("   📅 Updated {}", format_relative(repo.updated_at, Utc::now()));
    // GitHub reports size in KB
    println!("   💾 {}", format_file_size(repo.size.saturating_mul(1024)));
    if let Some(license) = &repo.license {
        println!("   📜 {}", license.name);
    }
    if !repo.topics.is_empty() {
        println!("   🏷️  {}", repo.topics.join(", "));
    }
    println!();

    print!(
        "   ⭐ {} stars   ⑂ {} forks   👀 {} watchers",
        repo.stargazers_count, repo.forks_count, repo.watchers_count
    );
    if repo.open_issues_count > 0 {
        print!("   ⚠️  {} issues", repo.open_issues_count);
    }
    println!();

    println!("   🌐 {}", repo.html_url);
    println!("   📥 {}", repo.clone_url);
}

// Shortens text to at most `max` characters, adding "..." when cut
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-repository-name", 10), "a-very-...");
        // counts characters, not bytes
        assert_eq!(truncate("ünïcödé", 7), "ünïcödé");
    }
}
