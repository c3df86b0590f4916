use anyhow::{Context, Result};
use rentview_types::{NftRecord, parse_expiration};
use serde::Deserialize;
use std::path::Path;

/// Wire shape of one record as the marketplace data layer emits it.
///
/// The expiration arrives as a string and is normalized here at the
/// boundary, so a malformed timestamp fails the load instead of corrupting
/// comparisons downstream.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNftRecord {
    title: String,
    collection_name: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    rent_rate: Option<f64>,
    #[serde(default)]
    collateral: Option<f64>,
    #[serde(default)]
    expiration_date: Option<String>,
}

fn normalize(raw: RawNftRecord) -> rentview_types::Result<NftRecord> {
    let expiration_date = raw
        .expiration_date
        .as_deref()
        .map(parse_expiration)
        .transpose()?;

    Ok(NftRecord {
        title: raw.title,
        collection_name: raw.collection_name,
        image: raw.image,
        rent_rate: raw.rent_rate,
        collateral: raw.collateral,
        expiration_date,
    })
}

/// Read a JSON array of NFT records from `path` and normalize every entry.
pub fn load_records(path: &Path) -> Result<Vec<NftRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raw: Vec<RawNftRecord> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            normalize(record).with_context(|| format!("invalid record {} in {}", index, path.display()))
        })
        .collect()
}
