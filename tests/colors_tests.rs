//! Integration tests for colors module

use ws2811_strip::colors::{self, HsvColor, Rgb24};

#[test]
fn hsv_creates_primary_colors() {
    assert_eq!(colors::hsv_to_rgb24(HsvColor::RED), Rgb24::new(255, 0, 0));
    assert_eq!(colors::hsv_to_rgb24(HsvColor::GREEN), Rgb24::new(0, 255, 0));
    assert_eq!(colors::hsv_to_rgb24(HsvColor::BLUE), Rgb24::new(0, 0, 255));
}

#[test]
fn hsv_creates_secondary_colors() {
    assert_eq!(colors::hsv_to_rgb24(HsvColor::YELLOW), Rgb24::new(255, 255, 0));
    assert_eq!(colors::hsv_to_rgb24(HsvColor::CYAN), Rgb24::new(0, 255, 255));
    assert_eq!(colors::hsv_to_rgb24(HsvColor::MAGENTA), Rgb24::new(255, 0, 255));
}

#[test]
fn hsv_handles_saturation() {
    // Zero saturation is gray regardless of hue
    let gray = colors::hsv_to_rgb24(HsvColor::new(200, 0, 128));
    assert_eq!(gray, Rgb24::new(128, 128, 128));

    assert_eq!(colors::hsv_to_rgb24(HsvColor::WHITE), Rgb24::new(255, 255, 255));
}

#[test]
fn hsv_handles_value() {
    let dim = colors::hsv_to_rgb24(HsvColor::new(0, 255, 128));
    assert_eq!(dim, Rgb24::new(128, 0, 0));

    // Zero value is black regardless of hue and saturation
    let black = colors::hsv_to_rgb24(HsvColor::new(77, 255, 0));
    assert_eq!(black, Rgb24::new(0, 0, 0));
}

#[test]
fn hue_wraps_around_360() {
    let red1 = colors::hsv_to_rgb24(HsvColor::new(0, 255, 255));
    let red2 = colors::hsv_to_rgb24(HsvColor::new(360, 255, 255));
    assert_eq!(red1, red2);
}

#[test]
fn conversion_is_total() {
    for h in (0..=720).step_by(15) {
        for s in [0u8, 1, 127, 254, 255] {
            for v in [0u8, 1, 127, 254, 255] {
                let rgb = colors::hsv_to_rgb24(HsvColor::new(h, s, v));
                // No channel can exceed the value channel
                assert!(rgb.r <= v && rgb.g <= v && rgb.b <= v);
            }
        }
    }
}
