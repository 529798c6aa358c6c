use kundali_layout::core::{Ascendant, Body, DisplayConvention, DisplayMode, ZodiacSign};
use kundali_layout::placement::{
    LabelConfig, PlacementAssembler, PlacementEntry, PlacementRequest, body_abbreviation,
    format_body_label,
};

fn place(natal: &[Body], transits: &[Body]) -> Vec<PlacementEntry> {
    PlacementAssembler::new(PlacementRequest::new(
        Ascendant::new(ZodiacSign::Aries),
        DisplayConvention::NorthIndian,
        DisplayMode::Rashi,
        None,
    ))
    .assemble(natal, transits)
    .expect("placement")
    .into_entries()
}

#[test]
fn well_known_bodies_are_abbreviated() {
    assert_eq!(body_abbreviation("Sun"), "Su");
    assert_eq!(body_abbreviation("rahu"), "Ra");
    assert_eq!(body_abbreviation("Shani"), "Sa");
    assert_eq!(body_abbreviation(" Moon "), "Mo");
    assert_eq!(body_abbreviation("Gulika"), "Gulika");
}

#[test]
fn default_labels_mark_retrograde_bodies() {
    let entries = place(
        &[
            Body::natal("Saturn", 300.0).with_retrograde(true),
            Body::natal("Jupiter", 100.0),
        ],
        &[],
    );
    let config = LabelConfig::default();
    assert_eq!(format_body_label(&entries[0], &config), "Sa(R)");
    assert_eq!(format_body_label(&entries[1], &config), "Ju");
}

#[test]
fn degrees_and_transit_marker_are_optional() {
    let entries = place(
        &[Body::natal("Sun", 14.7)],
        &[Body::transit("Sun", 44.2).with_retrograde(true)],
    );
    let config = LabelConfig {
        show_degrees: true,
        retrograde_marker: Some("*".to_owned()),
        transit_marker: Some(" (T)".to_owned()),
    };
    assert_eq!(format_body_label(&entries[0], &config), "Su 14°");
    assert_eq!(format_body_label(&entries[1], &config), "Su 14°* (T)");

    let plain = LabelConfig {
        show_degrees: false,
        retrograde_marker: None,
        transit_marker: None,
    };
    assert_eq!(format_body_label(&entries[1], &plain), "Su");
}
