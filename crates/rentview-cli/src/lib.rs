mod args;
mod commands;
pub mod config;
mod handlers;
mod loader;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
