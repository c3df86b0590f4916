use crate::presentation::presenters::present_methods;
use crate::presentation::renderers::traits::MarketView;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(view: &impl MarketView, flips: usize, format: OutputFormat) -> Result<()> {
    let page = present_methods(flips);
    view.render_methods(&page, format)
}
