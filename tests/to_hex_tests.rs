use graphs::{ColorValue, GraphError, Rgb, parse_color, to_hex};

#[test]
fn triples_and_rgb_strings_agree() {
    assert_eq!(to_hex((255, 255, 255)).expect("white"), "#ffffff");
    assert_eq!(to_hex("rgb(255, 255, 255)").expect("white"), "#ffffff");
    assert_eq!(to_hex((0, 0, 0)).expect("black"), "#000000");
    assert_eq!(to_hex("rgb(0, 0, 0)").expect("black"), "#000000");
    assert_eq!(to_hex((134, 235, 135)).expect("green"), "#86eb87");
    assert_eq!(to_hex("rgb(134, 235, 135)").expect("green"), "#86eb87");
}

#[test]
fn rgb_strings_tolerate_whitespace_and_bare_tuples() {
    assert_eq!(to_hex("  rgb( 12 ,34,  56 )  ").expect("spaced"), "#0c2238");
    assert_eq!(to_hex("rgb(1,2,3)").expect("compact"), "#010203");
    assert_eq!(to_hex("(1, 2, 3)").expect("bare tuple"), "#010203");
    assert_eq!(to_hex("RGB(1, 2, 3)").expect("upper case"), "#010203");
}

#[test]
fn rgb_strings_need_exactly_three_integers() {
    for input in ["rgb(1, 2)", "rgb(1, 2, 3, 4)", "rgb()", "rgb(1, x, 3)", "rgb(1.5, 2, 3)"] {
        let err = to_hex(input).expect_err("malformed rgb must fail");
        assert!(matches!(err, GraphError::InvalidInput(_)), "{input}");
    }
}

#[test]
fn non_numeric_channel_is_named_in_error() {
    let err = to_hex("rgb(1, x, 3)").expect_err("non-numeric must fail");
    assert!(format!("{err}").contains("green"));
}

#[test]
fn out_of_range_channels_are_clamped() {
    assert_eq!(to_hex("rgb(256, -1, 0)").expect("clamped"), "#ff0000");
}

#[test]
fn channels_beyond_i64_are_clamped_not_rejected() {
    assert_eq!(
        to_hex("rgb(99999999999999999999, 0, 0)").expect("huge red"),
        "#ff0000"
    );
    assert_eq!(
        to_hex("rgb(255, -99999999999999999999, 255)").expect("huge negative green"),
        "#ff00ff"
    );
}

#[test]
fn css_forms_are_accepted() {
    assert_eq!(to_hex("#FFAA00").expect("hex"), "#ffaa00");
    assert_eq!(to_hex("#fa0").expect("short hex"), "#ffaa00");
    assert_eq!(to_hex("red").expect("named"), "#ff0000");
    assert_eq!(to_hex("rgba(10, 20, 30, 0.5)").expect("rgba"), "#0a141e");
}

#[test]
fn unknown_or_empty_strings_fail() {
    assert!(to_hex("notacolor").is_err());
    assert!(to_hex("").is_err());
    assert!(to_hex("   ").is_err());
}

#[test]
fn rgb_display_and_parse_agree() {
    let color = Rgb::new(1, 2, 3);
    assert_eq!(color.to_string(), "rgb(1, 2, 3)");
    assert_eq!(color.to_string().parse::<Rgb>().expect("parse display"), color);
    assert_eq!(parse_color("rgb(1, 2, 3)").expect("parse"), color);
}

#[test]
fn color_value_accepts_owned_strings() {
    let owned = String::from("rgb(134, 235, 135)");
    assert_eq!(to_hex(&owned).expect("owned"), "#86eb87");
    assert_eq!(
        ColorValue::from([134, 235, 135]).resolve().expect("array"),
        Rgb::new(134, 235, 135)
    );
}
