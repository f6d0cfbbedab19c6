//! Geometry values and drawing enums.
//!
//! Everything here is a plain value: small structs passed by value and
//! strongly typed enums standing in for the library's integer options.

use std::os::raw::c_ulong;

/// A point or vector in user space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2F {
    pub x: f64,
    pub y: f64,
}

/// A point or size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vec2I {
    pub x: i32,
    pub y: i32,
}

/// An axis-aligned rectangle in user space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// An axis-aligned rectangle in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectI {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// An RGBA color with unpremultiplied components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// A single glyph and its position (`cairo_glyph_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// Glyph index in the font, not a Unicode code point.
    pub index: c_ulong,
    pub x: f64,
    pub y: f64,
}

/// Maps a run of UTF-8 bytes to a run of glyphs (`cairo_text_cluster_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCluster {
    pub num_bytes: i32,
    pub num_glyphs: i32,
}

/// Extents of a text run (`cairo_text_extents_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtents {
    pub x_bearing: f64,
    pub y_bearing: f64,
    pub width: f64,
    pub height: f64,
    pub x_advance: f64,
    pub y_advance: f64,
}

/// Metrics of a font (`cairo_font_extents_t`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontExtents {
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
    pub max_x_advance: f64,
    pub max_y_advance: f64,
}

/// Declare an enum mirroring a C option set, with raw conversions.
/// Unknown raw values collapse to the named fallback variant.
macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
        fallback = $fallback:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            pub(crate) fn from_raw(raw: i32) -> Self {
                match raw {
                    $( $value => Self::$variant, )+
                    _ => Self::$fallback,
                }
            }

            pub(crate) fn to_raw(self) -> i32 {
                self as i32
            }
        }
    };
}

pub(crate) use raw_enum;

raw_enum! {
    /// The kind of content a surface holds (`cairo_content_t`).
    pub enum Content {
        Color = 0x1000,
        Alpha = 0x2000,
        ColorAlpha = 0x3000,
    }
    fallback = ColorAlpha;
}

raw_enum! {
    /// Pixel layout of an image surface (`cairo_format_t`).
    pub enum Format {
        Invalid = -1,
        Argb32 = 0,
        Rgb24 = 1,
        A8 = 2,
        A1 = 3,
        Rgb16_565 = 4,
        Rgb30 = 5,
    }
    fallback = Invalid;
}

raw_enum! {
    /// Compositing operator (`cairo_operator_t`).
    pub enum Operator {
        Clear = 0,
        Source = 1,
        Over = 2,
        In = 3,
        Out = 4,
        Atop = 5,
        Dest = 6,
        DestOver = 7,
        DestIn = 8,
        DestOut = 9,
        DestAtop = 10,
        Xor = 11,
        Add = 12,
        Saturate = 13,
        Multiply = 14,
        Screen = 15,
        Overlay = 16,
        Darken = 17,
        Lighten = 18,
        ColorDodge = 19,
        ColorBurn = 20,
        HardLight = 21,
        SoftLight = 22,
        Difference = 23,
        Exclusion = 24,
        HslHue = 25,
        HslSaturation = 26,
        HslColor = 27,
        HslLuminosity = 28,
    }
    fallback = Over;
}

raw_enum! {
    /// Antialiasing mode (`cairo_antialias_t`).
    pub enum Antialias {
        Default = 0,
        None = 1,
        Gray = 2,
        Subpixel = 3,
        Fast = 4,
        Good = 5,
        Best = 6,
    }
    fallback = Default;
}

raw_enum! {
    /// How self-intersecting paths are filled (`cairo_fill_rule_t`).
    pub enum FillRule {
        Winding = 0,
        EvenOdd = 1,
    }
    fallback = Winding;
}

raw_enum! {
    /// Shape of stroke endpoints (`cairo_line_cap_t`).
    pub enum LineCap {
        Butt = 0,
        Round = 1,
        Square = 2,
    }
    fallback = Butt;
}

raw_enum! {
    /// Shape of stroke joints (`cairo_line_join_t`).
    pub enum LineJoin {
        Miter = 0,
        Round = 1,
        Bevel = 2,
    }
    fallback = Miter;
}

raw_enum! {
    /// How a pattern extends beyond its natural area (`cairo_extend_t`).
    pub enum Extend {
        None = 0,
        Repeat = 1,
        Reflect = 2,
        Pad = 3,
    }
    fallback = None;
}

raw_enum! {
    /// Pattern resampling filter (`cairo_filter_t`).
    pub enum Filter {
        Fast = 0,
        Good = 1,
        Best = 2,
        Nearest = 3,
        Bilinear = 4,
        Gaussian = 5,
    }
    fallback = Good;
}

raw_enum! {
    /// Concrete kind of a pattern (`cairo_pattern_type_t`).
    pub enum PatternType {
        Solid = 0,
        Surface = 1,
        Linear = 2,
        Radial = 3,
        Mesh = 4,
        RasterSource = 5,
    }
    fallback = Solid;
}

raw_enum! {
    /// Backend of a surface (`cairo_surface_type_t`).
    pub enum SurfaceType {
        Image = 0,
        Pdf = 1,
        Ps = 2,
        Xlib = 3,
        Xcb = 4,
        Glitz = 5,
        Quartz = 6,
        Win32 = 7,
        Beos = 8,
        Directfb = 9,
        Svg = 10,
        Os2 = 11,
        Win32Printing = 12,
        QuartzImage = 13,
        Script = 14,
        Qt = 15,
        Recording = 16,
        Vg = 17,
        Gl = 18,
        Drm = 19,
        Tee = 20,
        Xml = 21,
        Skia = 22,
        Subsurface = 23,
        Cogl = 24,
    }
    fallback = Image;
}

raw_enum! {
    /// Backend of a device (`cairo_device_type_t`).
    pub enum DeviceType {
        Invalid = -1,
        Drm = 0,
        Gl = 1,
        Script = 2,
        Xcb = 3,
        Xlib = 4,
        Xml = 5,
        Cogl = 6,
        Win32 = 7,
    }
    fallback = Invalid;
}

raw_enum! {
    /// Cluster ordering for `show_text_glyphs`
    /// (`cairo_text_cluster_flags_t`).
    pub enum TextClusterFlags {
        None = 0,
        Backward = 1,
    }
    fallback = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_raw_round_trips() {
        assert_eq!(Content::from_raw(Content::Alpha.to_raw()), Content::Alpha);
        assert_eq!(Format::from_raw(Format::Rgb30.to_raw()), Format::Rgb30);
        assert_eq!(
            Operator::from_raw(Operator::HslLuminosity.to_raw()),
            Operator::HslLuminosity
        );
        assert_eq!(
            SurfaceType::from_raw(SurfaceType::Recording.to_raw()),
            SurfaceType::Recording
        );
        assert_eq!(
            DeviceType::from_raw(DeviceType::Invalid.to_raw()),
            DeviceType::Invalid
        );
    }

    #[test]
    fn unknown_raw_values_fall_back() {
        assert_eq!(Format::from_raw(77), Format::Invalid);
        assert_eq!(Extend::from_raw(-3), Extend::None);
        assert_eq!(Operator::from_raw(1000), Operator::Over);
    }

    #[test]
    fn color_defaults_opaque_black() {
        let c = Color::default();
        assert_eq!(c, Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(c.a, 1.0);
    }
}
