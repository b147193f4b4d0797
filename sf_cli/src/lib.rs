//! Command-line front end for the Swiss tournament and forum stores.

pub mod app;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
