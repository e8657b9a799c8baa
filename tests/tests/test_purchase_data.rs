// Tests for the opaque call data attached to inbound streams
use canvas_stream::state::{TilePurchase, MAX_TILE_URI_LEN};

#[test]
fn test_case_1_call_data_round_trips() {
    println!("🧪 Testing Case #1 Call Data");

    let purchase = TilePurchase {
        tile_id: 1,
        uri: "ipfs://canvas-tiles/1/metadata.json".to_string(),
        price: 5,
    };

    let encoded = purchase.encode().unwrap();
    let decoded = TilePurchase::decode(&encoded).unwrap();

    assert_eq!(decoded, purchase);
    println!("✅ Call data validated ({} bytes)", encoded.len());
}

#[test]
fn test_garbage_call_data_is_rejected() {
    assert!(TilePurchase::decode(&[]).is_err());
    assert!(TilePurchase::decode(&[0x13, 0x37]).is_err());
}

#[test]
fn test_trailing_bytes_are_rejected() {
    let purchase = TilePurchase { tile_id: 7, uri: "ipfs://x".to_string(), price: 1 };
    let mut encoded = purchase.encode().unwrap();
    encoded.push(0);

    assert!(TilePurchase::decode(&encoded).is_err(), "call data with trailing bytes must not decode");
}

#[test]
fn test_oversized_uri_is_rejected() {
    let purchase = TilePurchase { tile_id: 1, uri: "x".repeat(MAX_TILE_URI_LEN + 1), price: 5 };
    let encoded = purchase.encode().unwrap();

    assert!(TilePurchase::decode(&encoded).is_err(), "oversized URI must not decode");
}
