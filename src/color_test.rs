use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn from_u32_drops_alpha() {
    assert_eq!(Rgb::from_u32(0xFF12_3456), Rgb::from_u32(0x12_3456));
    assert_eq!(Rgb::from_u32(0xFF12_3456).to_u32(), 0x12_3456);
}

#[test]
fn from_rgb_packs_channels() {
    let c = Rgb::from_rgb(0x12, 0x34, 0x56);
    assert_eq!(c.to_u32(), 0x12_3456);
    assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
}

#[test]
fn named_constants_match_channels() {
    assert_eq!((Rgb::BLUE.r(), Rgb::BLUE.g(), Rgb::BLUE.b()), (0, 0, 255));
    assert_eq!((Rgb::GRAY.r(), Rgb::GRAY.g(), Rgb::GRAY.b()), (0x88, 0x88, 0x88));
    assert_eq!(Rgb::WHITE.to_u32(), 0xFF_FFFF);
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn css_is_lowercase_zero_padded() {
    assert_eq!(Rgb::BLUE.to_css(), "#0000ff");
    assert_eq!(Rgb::BLACK.to_css(), "#000000");
    assert_eq!(Rgb::from_u32(0xAB_CDEF).to_css(), "#abcdef");
}

#[test]
fn display_matches_css() {
    assert_eq!(format!("{}", Rgb::MAGENTA), Rgb::MAGENTA.to_css());
}

#[test]
fn serializes_as_css_string() {
    let json = serde_json::to_string(&Rgb::CYAN).unwrap_or_default();
    assert_eq!(json, "\"#00ffff\"");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_hash_six_digits() {
    assert_eq!(Rgb::parse("#ff8800"), Ok(Rgb::from_u32(0xFF_8800)));
}

#[test]
fn parse_hash_shorthand() {
    assert_eq!(Rgb::parse("#f80"), Ok(Rgb::from_u32(0xFF_8800)));
}

#[test]
fn parse_hash_argb_drops_alpha() {
    assert_eq!(Rgb::parse("#80ff0000"), Ok(Rgb::from_u32(0xFF_0000)));
}

#[test]
fn parse_0x_prefix() {
    assert_eq!(Rgb::parse("0xffffff"), Ok(Rgb::WHITE));
    assert_eq!(Rgb::parse("0X00FF00"), Ok(Rgb::GREEN));
}

#[test]
fn parse_decimal() {
    assert_eq!(Rgb::parse("16777215"), Ok(Rgb::WHITE));
    assert_eq!(Rgb::parse("255"), Ok(Rgb::BLUE));
}

#[test]
fn parse_bare_hex() {
    assert_eq!(Rgb::parse("00ffff"), Ok(Rgb::CYAN));
}

#[test]
fn parse_all_digit_string_is_decimal() {
    assert_eq!(Rgb::parse("123456"), Ok(Rgb::from_u32(123_456)));
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(Rgb::parse("  #000000\n"), Ok(Rgb::BLACK));
}

#[test]
fn parse_empty_rejected() {
    assert_eq!(Rgb::parse(""), Err(ColorError::Empty));
    assert_eq!(Rgb::parse("   "), Err(ColorError::Empty));
}

#[test]
fn parse_bad_digits_rejected() {
    assert_eq!(Rgb::parse("#gggggg"), Err(ColorError::InvalidDigits("#gggggg".into())));
}

#[test]
fn parse_bad_length_rejected() {
    assert_eq!(
        Rgb::parse("#12345"),
        Err(ColorError::BadLength { value: "#12345".into(), len: 5 })
    );
}

#[test]
fn parse_words_rejected() {
    assert_eq!(Rgb::parse("white"), Err(ColorError::Unrecognized("white".into())));
}

#[test]
fn parse_decimal_overflow_rejected() {
    assert!(matches!(Rgb::parse("99999999999"), Err(ColorError::Unrecognized(_))));
}

#[test]
fn error_messages_name_the_value() {
    let err = Rgb::parse("#12345").unwrap_err();
    assert!(err.to_string().contains("#12345"));
}
