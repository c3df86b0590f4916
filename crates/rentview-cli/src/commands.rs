use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::presentation::renderers::ConsoleMarketView;
use crate::presentation::renderers::traits::MarketView;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = expand_tilde(&cli.data_dir);
    let config = Config::load_from(&data_dir.join("config.toml"))?;
    let format = cli
        .format
        .or_else(|| config.default_format())
        .unwrap_or(OutputFormat::Plain);

    let view = ConsoleMarketView::new();

    let Some(command) = cli.command else {
        return view.render_guidance();
    };

    match command {
        Commands::Cards { file, context, now } => {
            handlers::cards::handle(&view, &file, context, now.as_deref(), format)
        }
        Commands::Methods { flips } => handlers::methods::handle(&view, flips, format),
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
