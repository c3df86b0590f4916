use chrono::{DateTime, Utc};
use rentview_engine::{MethodCarousel, SlideControls, resolve_card, resolve_dialog};
use rentview_types::{CollectionContext, NftRecord};

use super::formatters::time::format_expiration;
use super::view_models::{CardListViewModel, CardViewModel, MethodPageViewModel};

pub fn present_cards(
    records: &[NftRecord],
    context: CollectionContext,
    now: DateTime<Utc>,
) -> CardListViewModel {
    let cards = records
        .iter()
        .map(|nft| {
            let presentation = resolve_card(nft, context, now);
            let expires_on = if presentation.show_expiration {
                nft.expiration_date.map(format_expiration)
            } else {
                None
            };

            CardViewModel {
                title: nft.title.clone(),
                collection_name: nft.collection_name.clone(),
                image: nft.image_uri().to_string(),
                rent_rate: nft.rent_rate,
                collateral: nft.collateral,
                border_tone: presentation.border_tone,
                action_label: presentation.action_label,
                dialog: resolve_dialog(presentation.dialog_context),
                expires_on,
            }
        })
        .collect();

    CardListViewModel {
        context,
        now: now.to_rfc3339(),
        cards,
    }
}

/// Two-slide pager standing in for the carousel widget: the widget owns the
/// slide index, rentview only owns the title companion state.
#[derive(Debug, Default)]
struct SlidePager {
    index: usize,
}

impl SlideControls for SlidePager {
    fn previous_slide(&mut self) {
        self.index = (self.index + 1) % 2;
    }

    fn next_slide(&mut self) {
        self.index = (self.index + 1) % 2;
    }
}

pub fn present_methods(flips: usize) -> MethodPageViewModel {
    let mut carousel = MethodCarousel::new(SlidePager::default());
    for _ in 0..flips {
        carousel.next();
    }

    let title = carousel.title();
    let method = title.method();

    MethodPageViewModel {
        title: title.to_string(),
        flips,
        description: method.description,
        steps: method.steps,
        advantages: method.advantages,
        disadvantages: method.disadvantages,
    }
}
