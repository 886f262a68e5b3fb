//! API clients for external services
//!
//! - TVMaze: show search and episode lists

pub mod tvmaze;

pub use tvmaze::TvMazeClient;
