use rentview_types::*;

#[test]
fn test_record_parses_camel_case_wire_shape() {
    let json = r#"{
        "title": "Cool Cat #1",
        "collectionName": "Cool Cats",
        "image": "ipfs://abc",
        "rentRate": 0.5,
        "collateral": 1.0,
        "expirationDate": "2024-01-01T00:00:00Z"
    }"#;

    let record: NftRecord = serde_json::from_str(json).expect("record should parse");
    assert_eq!(record.title, "Cool Cat #1");
    assert_eq!(record.collection_name, "Cool Cats");
    assert_eq!(record.rent_rate, Some(0.5));
    assert_eq!(record.collateral, Some(1.0));
    assert_eq!(
        record.expiration_date,
        Some("2024-01-01T00:00:00Z".parse().unwrap())
    );
}

#[test]
fn test_record_optional_fields_default_to_absent() {
    let json = r#"{"title": "Idle", "collectionName": "Nowhere"}"#;

    let record: NftRecord = serde_json::from_str(json).expect("record should parse");
    assert_eq!(record.image, None);
    assert_eq!(record.rent_rate, None);
    assert_eq!(record.collateral, None);
    assert_eq!(record.expiration_date, None);
}

#[test]
fn test_image_uri_sentinel_is_empty_string() {
    let json = r#"{"title": "Idle", "collectionName": "Nowhere"}"#;
    let record: NftRecord = serde_json::from_str(json).expect("record should parse");

    assert_eq!(record.image_uri(), "");

    let mut with_image = record.clone();
    with_image.image = Some("ipfs://abc".to_string());
    assert_eq!(with_image.image_uri(), "ipfs://abc");
}

#[test]
fn test_parse_expiration_normalizes_offsets_to_utc() {
    let offset = parse_expiration("2024-01-01T02:00:00+02:00").expect("offset form parses");
    let utc = parse_expiration("2024-01-01T00:00:00Z").expect("utc form parses");
    assert_eq!(offset, utc);
}

#[test]
fn test_parse_expiration_rejects_garbage() {
    let err = parse_expiration("next week").expect_err("garbage must not parse");
    assert!(err.to_string().contains("invalid expiration timestamp"));
    match err {
        Error::InvalidTimestamp { value, .. } => assert_eq!(value, "next week"),
    }
}
