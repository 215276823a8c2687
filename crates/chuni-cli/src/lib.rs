//! Command-line front end for the chuni-core rating engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod top_list;
