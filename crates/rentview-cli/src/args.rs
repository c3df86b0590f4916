use crate::types::{ContextArg, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rentview")]
#[command(about = "Resolve and render NFT rental marketplace display state", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.rentview", global = true)]
    pub data_dir: String,

    /// Output format; falls back to the config file's [display] format, then plain
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render cards for a collection of NFT records
    Cards {
        /// JSON file holding an array of NFT records
        #[arg(long)]
        file: PathBuf,

        /// Viewing context the records were fetched into
        #[arg(long)]
        context: ContextArg,

        /// Clock override (RFC 3339). Sampled once per invocation so every
        /// card agrees on whether a term has lapsed
        #[arg(long)]
        now: Option<String>,
    },

    /// Render the "How It Works" rental-method page
    Methods {
        /// Carousel navigation events to replay before rendering
        #[arg(long, default_value = "0")]
        flips: usize,
    },
}
