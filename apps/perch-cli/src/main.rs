//! # Perch
//!
//! Terminal client for a home timeline: refresh, endless scroll, compose.

use std::io::Stdout;

use tokio::io::{AsyncBufReadExt, BufReader};

use perch_core::{FetchOutcome, ScrollTracker, TimelinePager};

mod command;
mod config;
mod display;
mod state;
mod telemetry;

use command::{Command, HELP};
use config::AppConfig;
use display::TerminalDisplay;
use state::AppState;
use telemetry::TelemetryConfig;

const SNAPSHOT_KEY: &str = "home";

type Pager = TimelinePager<TerminalDisplay<Stdout>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    let state = AppState::new(&config)?;

    tracing::info!(
        online = state.online,
        page_size = config.page_size,
        "Starting perch"
    );

    let mut pager = open_timeline(&state, &config).await?;
    pager.display_mut().notice(HELP);
    if let Err(e) = pager.show_timeline().await {
        tracing::debug!(error = %e, "Initial load failed");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                pager.display_mut().notice(&e.to_string());
                continue;
            }
        };

        match command {
            Command::Refresh => {
                if let Err(e) = pager.refresh().await {
                    tracing::debug!(error = %e, "Refresh failed");
                }
            }
            Command::More => match pager.load_more().await {
                Ok(FetchOutcome::Skipped) => {
                    pager.display_mut().notice("need at least two posts to page from")
                }
                Ok(FetchOutcome::Appended(0)) => pager.display_mut().notice("no older posts"),
                Ok(_) => {}
                Err(e) => tracing::debug!(error = %e, "Load more failed"),
            },
            Command::Scroll(last_visible) => {
                let total = pager.posts().len();
                if let Err(e) = pager.on_scrolled(last_visible, total).await {
                    tracing::debug!(error = %e, "Scroll-triggered load failed");
                }
            }
            Command::Post(body) => match pager.compose(&body).await {
                Ok(post) => pager
                    .display_mut()
                    .notice(&format!("posted #{}", post.uuid)),
                Err(e) => pager.display_mut().notice(&format!("! {e}")),
            },
            Command::Reopen => {
                state.snapshots.save(SNAPSHOT_KEY, &pager.snapshot()).await?;
                drop(pager);

                pager = open_timeline(&state, &config).await?;
                if let Err(e) = pager.show_timeline().await {
                    tracing::debug!(error = %e, "Reload failed");
                }
            }
            Command::Help => pager.display_mut().notice(HELP),
            Command::Quit => break,
        }
    }

    tracing::info!(posts = pager.posts().len(), "Bye");
    Ok(())
}

/// Build a pager for a freshly shown timeline view, restoring the snapshot
/// left by the previous view if there is one.
async fn open_timeline(state: &AppState, config: &AppConfig) -> anyhow::Result<Pager> {
    let display = TerminalDisplay::new(std::io::stdout());

    let pager = match state.snapshots.load(SNAPSHOT_KEY).await? {
        Some(snapshot) => {
            state.snapshots.clear(SNAPSHOT_KEY).await?;
            TimelinePager::with_snapshot(state.client.clone(), display, snapshot)
        }
        None => TimelinePager::new(state.client.clone(), display),
    };

    Ok(pager.with_scroll_tracker(ScrollTracker::new(config.visible_threshold)))
}
