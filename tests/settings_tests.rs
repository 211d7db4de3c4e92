use graphs::settings::{DEFAULT_COLOR_MAP, DEFAULT_CONTENT_COLOR, DEFAULT_EMPHASIS_COLOR};
use graphs::{PaletteSettings, Rgb, named_colorscale};

#[test]
fn defaults_resolve() {
    let settings = PaletteSettings::default();
    assert_eq!(settings.color_map, DEFAULT_COLOR_MAP);
    assert_eq!(settings.content_color, DEFAULT_CONTENT_COLOR);
    assert_eq!(settings.emphasis_color, DEFAULT_EMPHASIS_COLOR);

    settings.validate().expect("defaults are valid");
    assert_eq!(
        settings.colorscale().expect("scale"),
        named_colorscale("Greens").expect("greens")
    );
    assert_eq!(settings.content_rgb().expect("content"), Rgb::new(27, 158, 49));
    assert_eq!(settings.emphasis_rgb().expect("emphasis"), Rgb::new(18, 107, 33));
}

#[test]
fn builders_override_fields() {
    let settings = PaletteSettings::new()
        .with_color_map("Hot_r")
        .with_content_color("rgb(1, 2, 3)")
        .with_emphasis_color("red");

    settings.validate().expect("valid overrides");
    assert_eq!(settings.content_rgb().expect("content"), Rgb::new(1, 2, 3));
    assert_eq!(settings.emphasis_rgb().expect("emphasis"), Rgb::new(255, 0, 0));
    assert_eq!(
        settings.colorscale().expect("scale").interpolate(0.0).expect("start"),
        Rgb::WHITE
    );
}

#[test]
fn partial_json_fills_defaults() {
    assert_eq!(
        PaletteSettings::from_json_str("{}").expect("empty object"),
        PaletteSettings::default()
    );

    let settings =
        PaletteSettings::from_json_str(r#"{"color_map": "Viridis"}"#).expect("partial");
    assert_eq!(settings.color_map, "Viridis");
    assert_eq!(settings.content_color, DEFAULT_CONTENT_COLOR);
}

#[test]
fn json_round_trip() {
    let settings = PaletteSettings::new().with_color_map("Blues");
    let json = settings.to_json_pretty().expect("serialize");
    assert_eq!(PaletteSettings::from_json_str(&json).expect("parse"), settings);
}

#[test]
fn invalid_documents_are_rejected() {
    assert!(PaletteSettings::from_json_str("not json").is_err());
    assert!(PaletteSettings::from_json_str(r#"{"color_map": "Nope"}"#).is_err());
    assert!(PaletteSettings::from_json_str(r#"{"content_color": "rgb(1, 2)"}"#).is_err());
}

#[test]
fn reference_colors_sample_configured_scale() {
    let settings = PaletteSettings::new().with_color_map("Greys");
    let colors = settings
        .reference_colors(["category_1", "category_2", "category_1"])
        .expect("reference colors");

    assert_eq!(colors.len(), 2);
    assert_eq!(colors["category_1"], Rgb::BLACK);
    assert_eq!(colors["category_2"], Rgb::WHITE);
}
