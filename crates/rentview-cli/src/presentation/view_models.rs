use rentview_engine::{ActionLabel, BorderTone, DialogKind};
use rentview_types::CollectionContext;
use serde::Serialize;

/// One resolved card, ready for any renderer.
#[derive(Debug, Clone, Serialize)]
pub struct CardViewModel {
    pub title: String,
    pub collection_name: String,
    /// `""` when the record has no image; the asset loader treats that as
    /// "render the placeholder".
    pub image: String,
    pub rent_rate: Option<f64>,
    pub collateral: Option<f64>,
    pub border_tone: BorderTone,
    pub action_label: ActionLabel,
    /// Dialog the action button mounts on click.
    pub dialog: DialogKind,
    /// Present only while an unexpired term is pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardListViewModel {
    pub context: CollectionContext,
    /// The single clock snapshot every card in this list was resolved with.
    pub now: String,
    pub cards: Vec<CardViewModel>,
}

/// The rental-method page selected by the carousel title state.
#[derive(Debug, Clone, Serialize)]
pub struct MethodPageViewModel {
    pub title: String,
    pub flips: usize,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
}
