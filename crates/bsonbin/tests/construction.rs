use bsonbin::{BUFFER_SIZE, Binary, Error, Result, Subtype, TextFormat};

#[test]
fn test_new_is_empty_with_default_capacity() {
    let bin = Binary::new();

    assert_eq!(bin.subtype(), Subtype::DEFAULT);
    assert_eq!(bin.len(), 0);
    assert!(bin.is_empty());
    assert_eq!(bin.capacity(), BUFFER_SIZE);
    assert_eq!(Binary::default(), bin);
}

#[test]
fn test_with_subtype() {
    let bin = Binary::with_subtype(Subtype::MD5);

    assert_eq!(bin.subtype(), Subtype::MD5);
    assert_eq!(bin.len(), 0);
    assert_eq!(bin.capacity(), BUFFER_SIZE);
}

#[test]
fn test_with_capacity() -> Result<()> {
    let mut bin = Binary::with_capacity(Subtype::USER_DEFINED, 0);
    assert_eq!(bin.capacity(), 0);

    bin.put(7)?;
    assert_eq!(bin.as_bytes(), &[7]);
    assert_eq!(bin.capacity(), BUFFER_SIZE);

    Ok(())
}

#[test]
fn test_from_bytes_has_no_spare_capacity() {
    let bin = Binary::from_bytes(vec![1, 2, 3], Subtype::BYTE_ARRAY);

    assert_eq!(bin.subtype(), Subtype::BYTE_ARRAY);
    assert_eq!(bin.len(), 3);
    assert_eq!(bin.capacity(), 3);
    assert_eq!(bin.as_bytes(), &[1, 2, 3]);
}

#[test]
fn test_raw_round_trip() {
    let bytes: Vec<u8> = (0..=255).collect();
    let bin = Binary::from(bytes.as_slice());

    assert_eq!(bin.value_raw(), bytes);
    assert_eq!(bin.into_vec(), bytes);
}

#[test]
fn test_from_text_uses_one_byte_per_char() {
    let bin = Binary::from_text("h\u{e9}llo", Subtype::DEFAULT);

    assert_eq!(bin.len(), 5);
    assert_eq!(bin.as_bytes(), &[b'h', 0xe9, b'l', b'l', b'o']);
}

#[test]
fn test_from_text_wraps_code_points_modulo_256() {
    // U+0141 is 321, 321 % 256 = 65
    let bin = Binary::from("\u{141}");

    assert_eq!(bin.as_bytes(), b"A");
}

#[test]
fn test_legacy_string_round_trip() {
    let text: String = (0..=255u8).map(char::from).collect();
    let bin = Binary::from(text.as_str());

    assert_eq!(bin.len(), 256);
    assert_eq!(bin.value_text(), text);
}

#[test]
fn test_from_input() -> Result<()> {
    let bin = Binary::from_input("abc", Subtype::FUNCTION)?;
    assert_eq!(bin.as_bytes(), b"abc");
    assert_eq!(bin.subtype(), Subtype::FUNCTION);

    let bin = Binary::from_input(200, Subtype::DEFAULT)?;
    assert_eq!(bin.as_bytes(), &[200]);

    assert!(matches!(
        Binary::from_input(256, Subtype::DEFAULT),
        Err(Error::InvalidByte { value: 256 })
    ));

    Ok(())
}

#[test]
fn test_from_formatted() -> Result<()> {
    let bin = Binary::from_formatted("deadbeef", TextFormat::Hex, Subtype::DEFAULT)?;
    assert_eq!(bin.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);

    let bin = Binary::from_formatted("AQID", TextFormat::Base64, Subtype::BYTE_ARRAY)?;
    assert_eq!(bin.as_bytes(), &[1, 2, 3]);

    assert!(matches!(
        Binary::from_formatted("xyz", TextFormat::Hex, Subtype::DEFAULT),
        Err(Error::Hex(_))
    ));

    Ok(())
}

#[test]
fn test_uuid_round_trip() -> Result<()> {
    let text = "00112233-4455-6677-8899-aabbccddeeff";
    let bin = Binary::from_uuid_str(text)?;

    assert_eq!(bin.subtype(), Subtype::UUID);
    assert_eq!(bin.len(), 16);
    assert_eq!(bin.to_uuid_string()?, text);

    let compact = Binary::from_uuid_str("00112233445566778899AABBCCDDEEFF")?;
    assert_eq!(compact, bin);

    Ok(())
}

#[test]
fn test_uuid_errors() {
    assert!(matches!(
        Binary::from_uuid_str("0011"),
        Err(Error::InvalidUuid(2))
    ));
    assert!(matches!(
        Binary::from_uuid_str("not-a-uuid"),
        Err(Error::Hex(_))
    ));

    let wrong_subtype = Binary::from_bytes([0u8; 16], Subtype::DEFAULT);
    assert!(matches!(
        wrong_subtype.to_uuid_string(),
        Err(Error::NotUuid { len: 16, .. })
    ));

    let legacy = Binary::from_bytes([0u8; 16], Subtype::UUID_OLD);
    assert!(legacy.to_uuid_string().is_ok());
}

#[test]
fn test_single_char_encoding_matches_text_encoding() -> Result<()> {
    for c in ['A', '\u{e9}', '\u{141}', '\u{1f600}'] {
        let mut bin = Binary::new();
        bin.put(c)?;

        assert_eq!(bin.as_bytes(), &[bsonbin::legacy::encode_char(c)]);
        let text = Binary::from_text(&c.to_string(), Subtype::DEFAULT);
        assert_eq!(bin.as_bytes(), text.as_bytes());
    }

    Ok(())
}
