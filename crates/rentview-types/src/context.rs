use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the four relationships the viewer has to a given NFT.
///
/// Supplied by the caller from whichever collection list the record was
/// fetched into, never computed here. The enum is closed on purpose: every
/// resolver matches it exhaustively with no fallback arm, so adding a fifth
/// context is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionContext {
    /// The caller owns the NFT and is browsing their own collection.
    OwnedByCaller,
    /// The caller owns the NFT and has lent it out.
    LentByCaller,
    /// The caller is renting the NFT from someone else.
    RentedByCaller,
    /// The NFT is a marketplace listing the caller may rent.
    MarketplaceListing,
}

impl CollectionContext {
    /// All four contexts, in display order.
    pub const ALL: [CollectionContext; 4] = [
        CollectionContext::OwnedByCaller,
        CollectionContext::LentByCaller,
        CollectionContext::RentedByCaller,
        CollectionContext::MarketplaceListing,
    ];
}

impl fmt::Display for CollectionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionContext::OwnedByCaller => write!(f, "owned_by_caller"),
            CollectionContext::LentByCaller => write!(f, "lent_by_caller"),
            CollectionContext::RentedByCaller => write!(f, "rented_by_caller"),
            CollectionContext::MarketplaceListing => write!(f, "marketplace_listing"),
        }
    }
}
