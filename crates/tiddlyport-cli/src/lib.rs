//! tiddlyport CLI library
//!
//! Argument parsing, config merging and the command handlers behind the
//! `tiddlyport` binary.

pub mod cli;
pub mod commands;
pub mod config;
