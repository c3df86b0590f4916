use super::traits::MarketView;
use crate::presentation::formatters::value::format_amount;
use crate::presentation::view_models::{CardListViewModel, CardViewModel, MethodPageViewModel};
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use rentview_engine::BorderTone;

pub struct ConsoleMarketView;

impl Default for ConsoleMarketView {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleMarketView {
    pub fn new() -> Self {
        Self
    }

    fn action_cell(card: &CardViewModel, color: bool) -> String {
        let label = card.action_label.to_string();
        if !color {
            return label;
        }
        match card.border_tone {
            BorderTone::Blue => label.blue().bold().to_string(),
            BorderTone::Pink => label.magenta().bold().to_string(),
        }
    }
}

impl MarketView for ConsoleMarketView {
    fn render_guidance(&self) -> Result<()> {
        println!("rentview - NFT rental marketplace display state\n");
        println!("Quick commands:");
        println!("  rentview cards --file <nfts.json> --context <owned|lented|rented|marketplace>");
        println!("  rentview methods                  # How It Works pages");
        println!("  rentview methods --flips 1        # after one carousel navigation\n");
        println!("For more commands:");
        println!("  rentview --help");
        Ok(())
    }

    fn render_cards(&self, list: &CardListViewModel, format: OutputFormat) -> Result<()> {
        if format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(list)?);
            return Ok(());
        }

        let color = std::io::stdout().is_terminal();

        println!(
            "{} card(s), context {}, now {}",
            list.cards.len(),
            list.context,
            list.now
        );
        println!(
            "{:<24} {:<20} {:<14} {:<10} {:<20} {:<10} DIALOG",
            "TITLE", "COLLECTION", "RATE", "COLLATERAL", "EXPIRES ON", "ACTION"
        );
        println!("{}", "-".repeat(110));

        for card in &list.cards {
            println!(
                "{:<24} {:<20} {:<14} {:<10} {:<20} {:<10} {}",
                card.title,
                card.collection_name,
                format_amount(card.rent_rate, "ETH/HOUR"),
                format_amount(card.collateral, "ETH"),
                card.expires_on.as_deref().unwrap_or("-"),
                Self::action_cell(card, color),
                card.dialog,
            );
        }

        Ok(())
    }

    fn render_methods(&self, page: &MethodPageViewModel, format: OutputFormat) -> Result<()> {
        if format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(page)?);
            return Ok(());
        }

        println!("How It Works\n");
        println!("{}\n", page.title);
        println!("{}\n", page.description);

        for (index, step) in page.steps.iter().enumerate() {
            println!("Step {}", index + 1);
            println!("{}\n", step);
        }

        println!("Advantages");
        for item in page.advantages {
            println!("  - {}", item);
        }

        println!("\nDisadvantages");
        for item in page.disadvantages {
            println!("  - {}", item);
        }

        Ok(())
    }
}
