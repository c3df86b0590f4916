use clap::ValueEnum;
use rentview_types::CollectionContext;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI name for a viewing context, matching the marketplace's collection tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ContextArg {
    Owned,
    Lented,
    Rented,
    Marketplace,
}

impl ContextArg {
    pub fn context(self) -> CollectionContext {
        match self {
            ContextArg::Owned => CollectionContext::OwnedByCaller,
            ContextArg::Lented => CollectionContext::LentByCaller,
            ContextArg::Rented => CollectionContext::RentedByCaller,
            ContextArg::Marketplace => CollectionContext::MarketplaceListing,
        }
    }
}

impl fmt::Display for ContextArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextArg::Owned => write!(f, "owned"),
            ContextArg::Lented => write!(f, "lented"),
            ContextArg::Rented => write!(f, "rented"),
            ContextArg::Marketplace => write!(f, "marketplace"),
        }
    }
}
