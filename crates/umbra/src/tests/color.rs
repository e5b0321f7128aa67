use crate::*;

#[test]
fn named_colors_invert_both_ways() {
    let names = NamedColorMap::default();
    assert_eq!(invert_color("black", &names), "white");
    assert_eq!(invert_color("white", &names), "black");
}

#[test]
fn named_lookup_is_case_insensitive() {
    let names = NamedColorMap::default();
    assert_eq!(invert_color("Black", &names), "white");
    assert_eq!(invert_color("WHITE", &names), "black");
}

#[test]
fn named_inversion_is_an_involution() {
    let names = NamedColorMap::default();
    for name in ["black", "white"] {
        assert_eq!(invert_color(&invert_color(name, &names), &names), name);
    }
}

#[test]
fn hex_colors_invert_per_channel() {
    let names = NamedColorMap::default();
    assert_eq!(invert_color("#000000", &names), "#ffffff");
    assert_eq!(invert_color("#FFFFFF", &names), "#000000");
    assert_eq!(invert_color("#102030", &names), "#efdfcf");
}

#[test]
fn hex_inversion_is_an_involution() {
    let names = NamedColorMap::default();
    for hex in ["#000000", "#ffffff", "#123abc", "#8080ff"] {
        assert_eq!(invert_color(&invert_color(hex, &names), &names), hex);
    }
}

#[test]
fn unknown_named_color_passes_through() {
    let names = NamedColorMap::default();
    assert_eq!(invert_color("red", &names), "red");
    assert_eq!(invert_color("", &names), "");
}

#[test]
fn malformed_hex_passes_through() {
    let names = NamedColorMap::default();
    assert_eq!(invert_color("#FFF", &names), "#FFF");
    assert_eq!(invert_color("#GGGGGG", &names), "#GGGGGG");
    assert_eq!(invert_color("#12345", &names), "#12345");
    assert_eq!(invert_color("#1234567", &names), "#1234567");
    assert_eq!(invert_color("#", &names), "#");
}

#[test]
fn extended_table_covers_new_pairs() {
    let names = NamedColorMap::default().with_pair("navy", "ivory");
    assert_eq!(invert_color("navy", &names), "ivory");
    assert_eq!(invert_color("Ivory", &names), "navy");
    // The built-in pair is untouched.
    assert_eq!(invert_color("black", &names), "white");
}
