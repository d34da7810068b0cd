//! Color types and HSV to RGB conversion.
//!
//! LEDs are stored as HSV so brightness can be adjusted by touching the value
//! channel alone. Conversion to 8-bit RGB happens per update, right before
//! encoding, and the result is never stored.

use palette::{FromColor, Hsv, Srgb};

/// Hue/saturation/value color of one LED.
///
/// Hue is in degrees (values of 360 and above wrap). Saturation and value
/// span the full 8-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HsvColor {
    /// Hue in degrees.
    pub h: u16,
    /// Saturation, 0 is gray.
    pub s: u8,
    /// Value (brightness).
    pub v: u8,
}

impl HsvColor {
    /// Off.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Full-brightness white (zero saturation).
    pub const WHITE: Self = Self::new(0, 0, 255);
    /// Pure red, hue 0.
    pub const RED: Self = Self::new(0, 255, 255);
    /// Red plus green, hue 60.
    pub const YELLOW: Self = Self::new(60, 255, 255);
    /// Pure green, hue 120.
    pub const GREEN: Self = Self::new(120, 255, 255);
    /// Green plus blue, hue 180.
    pub const CYAN: Self = Self::new(180, 255, 255);
    /// Pure blue, hue 240.
    pub const BLUE: Self = Self::new(240, 255, 255);
    /// Red plus blue, hue 300.
    pub const MAGENTA: Self = Self::new(300, 255, 255);

    /// Creates a color from its components.
    #[inline]
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// 24-bit RGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb24 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb24 {
    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb<u8>> for Rgb24 {
    fn from(rgb: Srgb<u8>) -> Self {
        Self::new(rgb.red, rgb.green, rgb.blue)
    }
}

/// Converts an LED color to 8-bit RGB.
///
/// Total over the whole HSV domain and deterministic; channels are rounded
/// to the nearest 8-bit value.
pub fn hsv_to_rgb24(color: HsvColor) -> Rgb24 {
    let hsv = Hsv::new(
        f32::from(color.h),
        f32::from(color.s) / 255.0,
        f32::from(color.v) / 255.0,
    );
    let rgb: Srgb<f32> = Srgb::from_color(hsv);
    let rgb: Srgb<u8> = rgb.into_format();
    rgb.into()
}
