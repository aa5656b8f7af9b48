use approx::assert_relative_eq;
use potioncolorizer::color::{
    BLACK, Color, WHITE, clamp, color_to_hex, hex_to_color, hsb_to_rgb, rgb_to_hsb,
};

fn channel_values() -> impl Iterator<Item = u8> {
    (0..=255u8).step_by(15).chain([1, 127, 128, 254, 255])
}

#[test]
fn test_hsb_round_trip_within_one_step() {
    for r in channel_values() {
        for g in channel_values() {
            for b in channel_values() {
                let hsb = rgb_to_hsb(r, g, b);
                let (r2, g2, b2) = hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness);
                assert!(
                    r.abs_diff(r2) <= 1 && g.abs_diff(g2) <= 1 && b.abs_diff(b2) <= 1,
                    "({r}, {g}, {b}) came back as ({r2}, {g2}, {b2})"
                );
            }
        }
    }
}

fn assert_round_trip(r: u8, g: u8, b: u8) {
    let hsb = rgb_to_hsb(r, g, b);
    let (r2, g2, b2) = hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness);
    assert!(
        r.abs_diff(r2) <= 1 && g.abs_diff(g2) <= 1 && b.abs_diff(b2) <= 1,
        "({r}, {g}, {b}) came back as ({r2}, {g2}, {b2})"
    );
}

#[test]
fn test_hsb_round_trip_every_red_green_plane() {
    // Blue pinned at its edges and midpoint; red and green exhaustive
    for b in [0u8, 1, 127, 128, 254, 255] {
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                assert_round_trip(r, g, b);
            }
        }
    }
}

#[test]
#[ignore = "walks all 16.7M colors"]
fn test_hsb_round_trip_full_cube() {
    for r in 0..=255u8 {
        for g in 0..=255u8 {
            for b in 0..=255u8 {
                assert_round_trip(r, g, b);
            }
        }
    }
}

#[test]
fn test_hsb_components_stay_normalized() {
    for r in channel_values() {
        for g in channel_values() {
            let hsb = rgb_to_hsb(r, g, 200);
            assert!((0.0..1.0).contains(&hsb.hue), "hue {}", hsb.hue);
            assert!((0.0..=1.0).contains(&hsb.saturation));
            assert!((0.0..=1.0).contains(&hsb.brightness));
        }
    }
}

#[test]
fn test_primaries_convert_to_expected_hsb() {
    let red = rgb_to_hsb(255, 0, 0);
    assert_relative_eq!(red.hue, 0.0, epsilon = 1e-4);
    assert_relative_eq!(red.saturation, 1.0, epsilon = 1e-4);
    assert_relative_eq!(red.brightness, 1.0, epsilon = 1e-4);

    let green = rgb_to_hsb(0, 255, 0);
    assert_relative_eq!(green.hue, 1.0 / 3.0, epsilon = 1e-4);

    let grey = rgb_to_hsb(128, 128, 128);
    assert_relative_eq!(grey.saturation, 0.0, epsilon = 1e-4);
    assert_relative_eq!(grey.brightness, 128.0 / 255.0, epsilon = 1e-4);
}

#[test]
fn test_hsb_inputs_are_clamped() {
    assert_eq!(hsb_to_rgb(-0.5, 2.0, 1.5), (255, 0, 0));
    assert_eq!(hsb_to_rgb(0.3, 0.7, -1.0), (0, 0, 0));
    assert_eq!(hsb_to_rgb(0.0, -3.0, 1.0), (255, 255, 255));
}

#[test]
fn test_hex_round_trip_floors_negatives() {
    let samples = [
        i32::MIN,
        -1_234_567,
        -1,
        0,
        1,
        0xAB,
        0x00FF00,
        0x112233,
        0xABCDEF,
        0xFFFFFF,
        0x1000000,
        i32::MAX,
    ];
    for c in samples {
        let text = color_to_hex(c);
        assert_eq!(
            hex_to_color(&text).raw(),
            c.max(0) as u32,
            "{c} formatted as {text:?}"
        );
    }
}

#[test]
fn test_hex_text_is_lowercase_without_padding() {
    assert_eq!(color_to_hex(0x00FF00), "ff00");
    assert_eq!(color_to_hex(0), "0");
    assert_eq!(color_to_hex(-42), "0");
    assert_eq!(color_to_hex(0xABCDEF), "abcdef");
}

#[test]
fn test_hex_parse_fallbacks() {
    assert_eq!(hex_to_color(""), BLACK);
    assert_eq!(hex_to_color("zz"), WHITE);
    assert_eq!(hex_to_color("12g4"), WHITE);
    assert_eq!(hex_to_color("ABCDEF"), Color::from_rgb(0xAB, 0xCD, 0xEF));
}

#[test]
fn test_clamp_is_total() {
    assert_eq!(clamp(-5, 0, 255), 0);
    assert_eq!(clamp(300, 0, 255), 255);
    assert_eq!(clamp(42, 0, 255), 42);
    assert_eq!(clamp(7, 7, 7), 7);
    assert_relative_eq!(clamp(1.5f32, 0.0, 1.0), 1.0);
    assert_relative_eq!(clamp(-0.1f32, 0.0, 1.0), 0.0);
    assert_relative_eq!(clamp(f32::NAN, 0.0, 1.0), 0.0);
}

#[test]
fn test_color_display_and_opaque() {
    let color = Color::from_rgb(0x12, 0x34, 0x56);
    assert_eq!(color.to_string(), "#123456");
    assert_eq!(color.opaque(), 0xFF12_3456);
    assert_eq!(Color::from_int(-7), BLACK);
}
