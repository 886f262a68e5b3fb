//! Data structures and types for showtui
//!
//! Contains the shared models used across the application:
//! - **Show**: a TVMaze directory entry returned by show search
//! - **Episode**: a single episode from an episode lookup

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used when the directory has no image for a show.
pub const DEFAULT_SHOW_IMAGE: &str =
    "https://static.tvmaze.com/uploads/images/medium_portrait/147/369403.jpg";

/// A show returned by TVMaze show search.
///
/// `summary` is carried verbatim from the API and may contain HTML markup.
/// `image` always holds a URL: the medium image if the API provided one,
/// otherwise [`DEFAULT_SHOW_IMAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
    pub summary: String,
    pub image: String,
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}  {}", self.id, self.name)
    }
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub name: String,
    pub season: u32,
    pub number: u32,
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (season {}, number {})",
            self.name, self.season, self.number
        )
    }
}
