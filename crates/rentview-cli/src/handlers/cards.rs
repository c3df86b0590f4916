use crate::loader;
use crate::presentation::presenters::present_cards;
use crate::presentation::renderers::traits::MarketView;
use crate::types::{ContextArg, OutputFormat};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

pub fn handle(
    view: &impl MarketView,
    file: &Path,
    context: ContextArg,
    now: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let records = loader::load_records(file)?;

    // One clock snapshot per invocation. Re-sampling per card could let a
    // card and its action label disagree about whether the term lapsed.
    let now = match now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("invalid --now value: {}", raw))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let list = present_cards(&records, context.context(), now);
    view.render_cards(&list, format)
}
