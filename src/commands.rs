//! CLI command handlers
//!
//! Each handler takes its parsed args and an Output, calls the directory
//! client, and returns a semantic exit code. Network failures map to
//! `ExitCode::NetworkError`; the CLI is the one surface where a failure
//! message is printed.

use crate::api::TvMazeClient;
use crate::cli::{EpisodesCmd, ExitCode, Output, SearchCmd};

pub async fn search_cmd(cmd: SearchCmd, output: &Output) -> ExitCode {
    let client = TvMazeClient::new();

    output.info(format!("Searching for: {}", cmd.query));

    match client.search_shows(&cmd.query).await {
        Ok(mut shows) => {
            if let Some(limit) = cmd.limit {
                shows.truncate(limit);
            }

            if output.json {
                if let Err(e) = output.print(&shows) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                for show in &shows {
                    println!("{}", show);
                    println!("    {}", show.image);
                }
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Search failed: {}", e), ExitCode::NetworkError),
    }
}

pub async fn episodes_cmd(cmd: EpisodesCmd, output: &Output) -> ExitCode {
    let client = TvMazeClient::new();

    output.info(format!("Fetching episodes for show {}", cmd.show_id));

    match client.episodes(cmd.show_id).await {
        Ok(episodes) => {
            if output.json {
                if let Err(e) = output.print(&episodes) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                for episode in &episodes {
                    println!("{}", episode);
                }
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Episode lookup failed: {}", e), ExitCode::NetworkError),
    }
}
