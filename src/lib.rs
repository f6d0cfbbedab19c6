//! Rust bindings for the cairo 2D vector graphics library.
//!
//! This crate provides a safe Rust interface to libcairo: surfaces to
//! draw on, patterns to paint with, and a drawing context tying them
//! together. Every wrapper owns its underlying cairo object and
//! releases it on drop; shared objects (surfaces, patterns, contexts,
//! font faces) are cloned by bumping the library's reference count,
//! while value-like objects (font options) are cloned by deep copy.
//!
//! # Example
//!
//! ```no_run
//! use cairo::{Color, Context, Format, ImageSurface, Vec2F};
//!
//! fn main() -> cairo::Result<()> {
//!     let surface = ImageSurface::new(Format::Argb32, 256, 256);
//!     let mut cr = Context::new(&surface);
//!
//!     cr.set_source_color(Color::rgb(1.0, 1.0, 1.0));
//!     cr.paint();
//!
//!     cr.set_source_color(Color::rgb(0.8, 0.1, 0.1));
//!     cr.arc(Vec2F { x: 128.0, y: 128.0 }, 100.0, 0.0, std::f64::consts::TAU);
//!     cr.fill();
//!
//!     surface.write_to_png("circle.png")?;
//!     Ok(())
//! }
//! ```
//!
//! # Error handling
//!
//! Cairo keeps an inert error state on each object rather than failing
//! individual calls; drawing on a broken context is a no-op. The
//! wrappers follow that model: drawing methods return `()`, and
//! [`Context::status`], [`Surface::status`] and friends report the
//! sticky [`Status`]. Operations that can fail for a specific call
//! (file I/O, indexed accessors, strings with interior NUL bytes)
//! return a [`Result`].

pub mod context;
pub mod device;
pub mod error;
pub mod ffi;
pub mod font;
pub mod matrix;
pub mod path;
pub mod pattern;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod surface;
pub mod types;

// Re-export main types at the crate root
pub use context::{Context, SaveScope, TAG_DEST, TAG_LINK};
pub use device::Device;
pub use error::{Error, Result, Status};
pub use font::{
    FontFace, FontOptions, FontSlant, FontType, FontWeight, HintMetrics, HintStyle, ScaledFont,
    SubpixelOrder, TextGlyphs, ToyFontFace,
};
pub use matrix::Matrix;
pub use path::{Path, PathSegment};
pub use pattern::{
    Gradient, LinearGradient, Mesh, Pattern, RadialGradient, SolidPattern, SurfacePattern,
};
#[cfg(feature = "pdf")]
pub use pdf::{
    PdfMetadata, PdfOutlineFlags, PdfOutlineId, PdfSurface, PdfVersion, OUTLINE_ROOT,
};
pub use surface::{ImageSurface, RecordingSurface, Surface};
pub use types::{
    Antialias, Color, Content, DeviceType, Extend, FillRule, Filter, FontExtents, Format, Glyph,
    LineCap, LineJoin, Operator, PatternType, RectF, RectI, SurfaceType, TextCluster,
    TextClusterFlags, TextExtents, Vec2F, Vec2I,
};

use std::ffi::CStr;

/// The version of the linked libcairo as `(major, minor, micro)`.
pub fn version() -> (i32, i32, i32) {
    let v = unsafe { ffi::cairo_version() };
    (v / 10_000, (v / 100) % 100, v % 100)
}

/// The version of the linked libcairo, e.g. `"1.18.0"`.
pub fn version_string() -> &'static str {
    unsafe { CStr::from_ptr(ffi::cairo_version_string()) }
        .to_str()
        .unwrap_or("")
}

/// The stride, in bytes, an image surface row takes for `format` at
/// `width` pixels, or `None` if the width is too large for the format.
pub fn format_stride_for_width(format: Format, width: i32) -> Option<i32> {
    let stride = unsafe { ffi::cairo_format_stride_for_width(format.to_raw(), width) };
    (stride >= 0).then_some(stride)
}

/// Release internal static caches, for use with memory checkers.
///
/// # Safety
///
/// No cairo object may be alive when this is called.
pub unsafe fn debug_reset_static_data() {
    ffi::cairo_debug_reset_static_data();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_sane() {
        let (major, minor, _) = version();
        assert_eq!(major, 1);
        assert!(minor >= 2);
        assert!(version_string().starts_with("1."));
    }

    #[test]
    fn stride_rejects_oversized_width() {
        assert_eq!(format_stride_for_width(Format::Argb32, 4), Some(16));
        assert_eq!(format_stride_for_width(Format::Argb32, i32::MAX), None);
    }
}
