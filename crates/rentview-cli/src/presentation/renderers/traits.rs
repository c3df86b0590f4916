use crate::presentation::view_models::{CardListViewModel, MethodPageViewModel};
use crate::types::OutputFormat;
use anyhow::Result;

/// Rendering surface for marketplace views.
///
/// The console implementation is the in-tree renderer; a GUI shell
/// supplies its own and reuses the same view models.
pub trait MarketView {
    fn render_guidance(&self) -> Result<()>;
    fn render_cards(&self, list: &CardListViewModel, format: OutputFormat) -> Result<()>;
    fn render_methods(&self, page: &MethodPageViewModel, format: OutputFormat) -> Result<()>;
}
