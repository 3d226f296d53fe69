//! CLI commands

pub mod date;
pub mod export;
pub mod list;
pub mod sections;
pub mod show;
