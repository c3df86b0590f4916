use chrono::{DateTime, Utc};
use rentview_types::{CollectionContext, NftRecord};
use serde::Serialize;
use std::fmt;

use crate::expiration::is_withdrawable;

/// Border tone of a card. Owner-side contexts render blue, renter-side
/// contexts render pink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderTone {
    Pink,
    Blue,
}

/// Label on a card's action button, exactly as the marketplace prints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionLabel {
    Lent,
    Withdraw,
    Info,
    Return,
    Rent,
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionLabel::Lent => write!(f, "LENT"),
            ActionLabel::Withdraw => write!(f, "WITHDRAW"),
            ActionLabel::Info => write!(f, "INFO"),
            ActionLabel::Return => write!(f, "RETURN"),
            ActionLabel::Rent => write!(f, "RENT"),
        }
    }
}

/// Resolved presentation for one card: which border it gets, which action
/// its button exposes, which context a click forwards to dialog resolution,
/// and whether the term's end date is shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardPresentation {
    pub border_tone: BorderTone,
    pub action_label: ActionLabel,
    /// Forwarded unchanged to `resolve_dialog` when the button is clicked.
    pub dialog_context: CollectionContext,
    /// True while an unexpired term is pending; a lapsed or absent term has
    /// nothing left to communicate.
    pub show_expiration: bool,
}

/// Map one record and its viewing context to a card presentation.
///
/// Pure and total over the four contexts. The match has no fallback arm on
/// purpose: an unrecognized context must be a compile error, not a card
/// that silently renders nothing.
pub fn resolve_card(
    nft: &NftRecord,
    context: CollectionContext,
    now: DateTime<Utc>,
) -> CardPresentation {
    let withdrawable = is_withdrawable(nft.expiration_date, now);

    let (border_tone, action_label) = match context {
        // Product copy prints LENT here regardless of whether the NFT is
        // actually lent out.
        CollectionContext::OwnedByCaller => (BorderTone::Blue, ActionLabel::Lent),
        CollectionContext::LentByCaller => (
            BorderTone::Blue,
            if withdrawable {
                ActionLabel::Withdraw
            } else {
                ActionLabel::Info
            },
        ),
        CollectionContext::RentedByCaller => (
            BorderTone::Pink,
            if nft.collateral.is_some() {
                ActionLabel::Return
            } else {
                ActionLabel::Info
            },
        ),
        CollectionContext::MarketplaceListing => (BorderTone::Pink, ActionLabel::Rent),
    };

    CardPresentation {
        border_tone,
        action_label,
        dialog_context: context,
        show_expiration: !withdrawable,
    }
}
