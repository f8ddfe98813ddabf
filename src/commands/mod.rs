//! Subcommand handlers

pub mod config;
