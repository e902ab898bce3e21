pub mod github;

use crate::config::Config;
use crate::data::{build_board, Board};
use crate::tui::Message;
use crate::util::send_or_log;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Non-empty value makes every load fail; for exercising the failure path by hand
pub const FORCE_ERROR_ENV: &str = "FORCE_BOARD_ERROR";

/// Shared HTTP client for all API requests to enable connection pooling
pub static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(5)
        .build()
        .expect("Failed to create HTTP client")
});

fn forced_error() -> Option<anyhow::Error> {
    std::env::var(FORCE_ERROR_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .map(|_| anyhow::anyhow!("forced error"))
}

/// Fetch the project's items and group them into a board.
pub async fn load_board(config: &Config, owner: &str, project_number: u32) -> Result<Board> {
    if let Some(e) = forced_error() {
        return Err(e);
    }

    let client = github::GithubClient::new(config).context("failed to create API client")?;
    let resolved = resolve_owner(&client, owner).await?;
    let result =
        fetch_project(&client, &resolved, project_number, config.github.page_limit).await?;

    Ok(build_board(&result.items))
}

/// Look up `login`, failing with `invalid owner: {login}`.
pub async fn resolve_owner(client: &github::GithubClient, login: &str) -> Result<github::Owner> {
    client
        .owner(login)
        .await
        .with_context(|| format!("invalid owner: {}", login))
}

/// Fetch the items of an already resolved owner's project, failing with
/// `invalid project number: {number}`.
pub async fn fetch_project(
    client: &github::GithubClient,
    owner: &github::Owner,
    project_number: u32,
    limit: u32,
) -> Result<github::ProjectItemsResult> {
    client
        .project_items(owner, project_number, limit)
        .await
        .with_context(|| format!("invalid project number: {}", project_number))
}

/// Run `load_board` in the background and deliver exactly one
/// `Message::BoardLoaded` on `tx`.
pub fn spawn_load(
    config: Arc<Config>,
    owner: String,
    project_number: u32,
    tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        let result = load_board(&config, &owner, project_number).await;
        match &result {
            Ok(board) if board.is_empty() => {
                tracing::warn!(owner = %owner, project = project_number, "No items have a Status")
            }
            Ok(board) => tracing::info!(
                columns = ?board.column_names(),
                items = board.item_count(),
                "Board loaded"
            ),
            Err(e) => tracing::error!("Failed to load board: {:#}", e),
        }

        let message = Message::BoardLoaded(result.map_err(|e| format!("{:#}", e)));
        send_or_log(&tx, message, "board load result").await;
    });
}
