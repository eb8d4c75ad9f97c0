//! Rove CLI - generate router modules from file conventions.
//!
//! Library surface for the `rove` binary: argument definitions, config
//! discovery, logging setup, and the command implementations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logger;
