//! `pharmasync-dashboard`
//!
//! Terminal rendition of the pharmacy, customer and overview dashboards.
//! All data comes from the backend through [`pharmasync_client::Session`];
//! this crate only parses user input and renders text.

pub mod cli;
pub mod commands;
pub mod render;

pub use cli::{Cli, Command};
pub use commands::{Outcome, execute};
