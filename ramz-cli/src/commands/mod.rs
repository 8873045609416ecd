//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`contact`] - Contact lead submission
//! - [`plan`] - Gallery block layout
//! - [`prefetch`] - Single speculative prefetch

pub mod config;
pub mod contact;
pub mod plan;
pub mod prefetch;
