use chrono::{DateTime, Utc};
use rentview_engine::{
    ActionLabel, BorderTone, CardPresentation, DialogKind, resolve_card, resolve_dialog,
};
use rentview_types::{CollectionContext, NftRecord};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("test timestamp")
}

fn record(collateral: Option<f64>, expiration: Option<&str>) -> NftRecord {
    NftRecord {
        title: "X".to_string(),
        collection_name: "Y".to_string(),
        image: None,
        rent_rate: Some(0.5),
        collateral,
        expiration_date: expiration.map(ts),
    }
}

#[test]
fn test_border_tone_follows_context_for_any_record() {
    let now = ts("2024-06-01T00:00:00Z");
    let records = [
        record(None, None),
        record(Some(1.0), None),
        record(Some(1.0), Some("2024-01-01T00:00:00Z")),
        record(None, Some("2025-01-01T00:00:00Z")),
    ];

    for nft in &records {
        for context in CollectionContext::ALL {
            let expected = match context {
                CollectionContext::OwnedByCaller | CollectionContext::LentByCaller => {
                    BorderTone::Blue
                }
                CollectionContext::RentedByCaller | CollectionContext::MarketplaceListing => {
                    BorderTone::Pink
                }
            };
            let card = resolve_card(nft, context, now);
            assert_eq!(card.border_tone, expected, "context {}", context);
            assert_eq!(card.dialog_context, context);
        }
    }
}

#[test]
fn test_owned_and_marketplace_labels_are_fixed() {
    let now = ts("2024-06-01T00:00:00Z");
    for nft in [record(None, None), record(Some(1.0), Some("2099-01-01T00:00:00Z"))] {
        let owned = resolve_card(&nft, CollectionContext::OwnedByCaller, now);
        assert_eq!(owned.action_label, ActionLabel::Lent);

        let listing = resolve_card(&nft, CollectionContext::MarketplaceListing, now);
        assert_eq!(listing.action_label, ActionLabel::Rent);
    }
}

#[test]
fn test_lent_label_tracks_withdrawability() {
    let nft = record(Some(1.0), Some("2024-01-01T00:00:00Z"));

    let lapsed = resolve_card(&nft, CollectionContext::LentByCaller, ts("2024-06-01T00:00:00Z"));
    assert_eq!(lapsed.action_label, ActionLabel::Withdraw);

    let pending = resolve_card(&nft, CollectionContext::LentByCaller, ts("2023-06-01T00:00:00Z"));
    assert_eq!(pending.action_label, ActionLabel::Info);

    // No term at all counts as withdrawable.
    let idle = record(Some(1.0), None);
    let card = resolve_card(&idle, CollectionContext::LentByCaller, ts("2023-06-01T00:00:00Z"));
    assert_eq!(card.action_label, ActionLabel::Withdraw);
}

#[test]
fn test_rented_label_tracks_collateral() {
    let now = ts("2024-06-01T00:00:00Z");

    let collateralized = record(Some(1.0), None);
    let card = resolve_card(&collateralized, CollectionContext::RentedByCaller, now);
    assert_eq!(card.action_label, ActionLabel::Return);

    let wrapped = record(None, None);
    let card = resolve_card(&wrapped, CollectionContext::RentedByCaller, now);
    assert_eq!(card.action_label, ActionLabel::Info);
}

#[test]
fn test_dialog_mapping_is_a_bijection() {
    let kinds: Vec<DialogKind> = CollectionContext::ALL
        .into_iter()
        .map(resolve_dialog)
        .collect();

    assert_eq!(kinds.len(), 4);
    for (i, a) in kinds.iter().enumerate() {
        for b in kinds.iter().skip(i + 1) {
            assert_ne!(a, b, "two contexts share a dialog kind");
        }
    }

    assert_eq!(
        resolve_dialog(CollectionContext::LentByCaller),
        DialogKind::Lented
    );
}

#[test]
fn test_lapsed_term_enables_withdraw() {
    let nft = record(Some(1.0), Some("2024-01-01T00:00:00Z"));
    let card = resolve_card(&nft, CollectionContext::LentByCaller, ts("2024-06-01T00:00:00Z"));

    assert_eq!(
        card,
        CardPresentation {
            border_tone: BorderTone::Blue,
            action_label: ActionLabel::Withdraw,
            dialog_context: CollectionContext::LentByCaller,
            show_expiration: false,
        }
    );
}

#[test]
fn test_pending_term_shows_expiration() {
    let nft = record(Some(1.0), Some("2024-01-01T00:00:00Z"));
    let card = resolve_card(&nft, CollectionContext::LentByCaller, ts("2023-06-01T00:00:00Z"));

    assert_eq!(card.action_label, ActionLabel::Info);
    assert!(card.show_expiration);
}
