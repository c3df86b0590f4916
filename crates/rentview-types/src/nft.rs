use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One NFT's rental-relevant attributes as seen by the display layer.
///
/// Records are produced by the upstream data-fetch layer and passed down as
/// read-only values for the duration of a render; nothing in this workspace
/// mutates them. `rent_rate` and `collateral` are independently optional: a
/// record with both absent is an NFT not currently involved in any rental
/// economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftRecord {
    pub title: String,
    pub collection_name: String,

    /// Asset URI, if the marketplace has one for this token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Price per hour while rented, in ETH.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent_rate: Option<f64>,

    /// Value locked by the renter, in ETH. Absent means the listing uses
    /// the non-collateralized method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collateral: Option<f64>,

    /// End of the active rental term. Absent means no active term, or a
    /// term with no end. Normalized to UTC at the load boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl NftRecord {
    /// URI handed to the image loader.
    ///
    /// `""` is the defined no-image sentinel: the loader must render its
    /// placeholder instead of attempting a fetch.
    pub fn image_uri(&self) -> &str {
        self.image.as_deref().unwrap_or("")
    }
}
