// Engine module - display-state resolution logic (expiration, card, dialog, catalog)
// This layer sits between the NFT data model (types) and CLI presentation

pub mod card;
pub mod catalog;
pub mod dialog;
mod expiration;

pub use card::{ActionLabel, BorderTone, CardPresentation, resolve_card};
pub use catalog::{
    COLLATERALIZED, MethodCarousel, MethodTitle, NON_COLLATERALIZED, SlideControls,
};
pub use dialog::{DialogKind, resolve_dialog};
pub use expiration::is_withdrawable;
