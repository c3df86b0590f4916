use chrono::{DateTime, Utc};

/// Whether the lender can reclaim the NFT (or the renter hand it back).
///
/// No expiration means no active term is holding the NFT, so it is already
/// withdrawable. Otherwise the term must have lapsed; the threshold at the
/// expiration instant itself is exclusive.
///
/// `now` is caller-supplied so one render decision uses one clock snapshot.
/// Resolvers never sample the wall clock themselves.
pub fn is_withdrawable(expiration: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match expiration {
        Some(ends) => now > ends,
        None => true,
    }
}
