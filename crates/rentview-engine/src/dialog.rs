use rentview_types::CollectionContext;
use serde::Serialize;
use std::fmt;

/// Which detail dialog a card's action mounts.
///
/// One kind per context. The dialog's internal fields and contract actions
/// belong to the dialog primitive, not this engine; a kind only names the
/// surface to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    /// Lending overview and withdraw-all entry point for an owned NFT.
    Owned,
    /// Withdraw flow for an NFT the caller has lent out.
    Lented,
    /// Return flow for an NFT the caller is renting.
    Rented,
    /// Rent flow for a marketplace listing.
    Marketplace,
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogKind::Owned => write!(f, "owned"),
            DialogKind::Lented => write!(f, "lented"),
            DialogKind::Rented => write!(f, "rented"),
            DialogKind::Marketplace => write!(f, "marketplace"),
        }
    }
}

/// Strict one-to-one mapping from viewing context to dialog kind.
///
/// Never inspects the record: state-dependent behavior inside a dialog is
/// that dialog's own responsibility.
pub fn resolve_dialog(context: CollectionContext) -> DialogKind {
    match context {
        CollectionContext::OwnedByCaller => DialogKind::Owned,
        CollectionContext::LentByCaller => DialogKind::Lented,
        CollectionContext::RentedByCaller => DialogKind::Rented,
        CollectionContext::MarketplaceListing => DialogKind::Marketplace,
    }
}
