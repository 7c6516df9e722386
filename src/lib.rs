//! Test-support helpers for the lobbyists importer: fixture paths, SQL script
//! loading and list flattening.

pub mod config;
pub mod db;
pub mod error;
pub mod fixtures;
pub mod nested;
pub mod utils;

pub use error::{LobbyistsError, LobbyistsResult};
pub use fixtures::{sqlscript, testpath, Layout};
pub use nested::{flatten, Nested};
