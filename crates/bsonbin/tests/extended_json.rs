#![cfg(feature = "serde")]

use bsonbin::{Binary, Result, Subtype};
use serde_json::json;

#[test]
fn test_serialize_canonical_form() -> Result<(), Box<dyn std::error::Error>> {
    let mut bin = Binary::with_subtype(Subtype::BYTE_ARRAY);
    bin.write(&[1u8, 2, 3], None)?;

    let value = serde_json::to_value(&bin)?;

    assert_eq!(
        value,
        json!({ "$binary": { "base64": "AQID", "subType": "02" } })
    );

    Ok(())
}

#[test]
fn test_round_trip_drops_spare_capacity() -> Result<(), Box<dyn std::error::Error>> {
    let mut bin = Binary::with_subtype(Subtype::USER_DEFINED);
    bin.write("payload", None)?;

    let text = serde_json::to_string(&bin)?;
    let back: Binary = serde_json::from_str(&text)?;

    assert_eq!(back, bin);
    assert_eq!(back.capacity(), back.len());

    Ok(())
}

#[test]
fn test_deserialize_legacy_form() -> Result<(), Box<dyn std::error::Error>> {
    let value = json!({ "$binary": "3q2+7w==", "$type": "05" });

    let bin: Binary = serde_json::from_value(value)?;

    assert_eq!(bin.subtype(), Subtype::MD5);
    assert_eq!(bin.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);

    Ok(())
}

#[test]
fn test_deserialize_rejects_bad_input() {
    let bad_subtype = json!({ "$binary": { "base64": "AQID", "subType": "xyz" } });
    assert!(serde_json::from_value::<Binary>(bad_subtype).is_err());

    let bad_base64 = json!({ "$binary": { "base64": "@@", "subType": "00" } });
    assert!(serde_json::from_value::<Binary>(bad_base64).is_err());

    let not_binary = json!({ "$oid": "0011" });
    assert!(serde_json::from_value::<Binary>(not_binary).is_err());
}

#[test]
fn test_uuid_serializes_with_subtype() -> Result<(), Box<dyn std::error::Error>> {
    let bin = Binary::from_uuid_str("00112233-4455-6677-8899-aabbccddeeff")?;

    let value = serde_json::to_value(&bin)?;
    assert_eq!(value["$binary"]["subType"], "04");
    assert_eq!(value["$binary"]["base64"], "ABEiM0RVZneImaq7zN3u/w==");

    Ok(())
}
