// Public API
pub mod cli;
pub mod commands;
pub mod ui;

// Core domain types
mod config;
mod error;
mod fileops;
mod layout;
mod target;

// Re-export main types
pub use config::{Config, Sources};
pub use error::Error;
pub use layout::{BashPaths, Layout, NeovimPaths, TmuxPaths};
pub use target::{Target, TargetManager};
