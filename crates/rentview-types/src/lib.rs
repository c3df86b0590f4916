pub mod context;
pub mod error;
pub mod method;
pub mod nft;

pub use context::CollectionContext;
pub use error::{Error, Result, parse_expiration};
pub use method::RentalMethod;
pub use nft::NftRecord;
