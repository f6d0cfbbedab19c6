//! Font selection and text shaping: rendering options, font faces and
//! scaled fonts.

use std::ffi::{CStr, CString};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use crate::error::Result;
use crate::ffi::{
    self, CairoFontFace, CairoFontOptions, CairoScaledFont, Counted, Duplicated, FontFaceKind,
    FontOptionsKind, ScaledFontKind,
};
use crate::matrix::Matrix;
use crate::types::{raw_enum, Antialias, FontExtents, Glyph, TextCluster, TextClusterFlags,
    TextExtents};
use crate::Status;

raw_enum! {
    /// `cairo_font_slant_t`
    pub enum FontSlant {
        Normal = 0,
        Italic = 1,
        Oblique = 2,
    }
    fallback = Normal;
}

raw_enum! {
    /// `cairo_font_weight_t`
    pub enum FontWeight {
        Normal = 0,
        Bold = 1,
    }
    fallback = Normal;
}

raw_enum! {
    /// `cairo_subpixel_order_t`
    pub enum SubpixelOrder {
        Default = 0,
        Rgb = 1,
        Bgr = 2,
        Vrgb = 3,
        Vbgr = 4,
    }
    fallback = Default;
}

raw_enum! {
    /// `cairo_hint_style_t`
    pub enum HintStyle {
        Default = 0,
        None = 1,
        Slight = 2,
        Medium = 3,
        Full = 4,
    }
    fallback = Default;
}

raw_enum! {
    /// `cairo_hint_metrics_t`
    pub enum HintMetrics {
        Default = 0,
        Off = 1,
        On = 2,
    }
    fallback = Default;
}

raw_enum! {
    /// `cairo_font_type_t`
    pub enum FontType {
        Toy = 0,
        FreeType = 1,
        Win32 = 2,
        Quartz = 3,
        User = 4,
        DirectWrite = 5,
    }
    fallback = Toy;
}

/// How fonts should be rendered (`cairo_font_options_t`).
///
/// Cloning produces an independent copy of the options.
#[derive(Debug)]
pub struct FontOptions {
    handle: Duplicated<FontOptionsKind>,
}

impl FontOptions {
    pub fn new() -> Self {
        Self {
            handle: unsafe { Duplicated::from_raw(ffi::cairo_font_options_create()) },
        }
    }

    pub fn as_ptr(&self) -> *mut CairoFontOptions {
        self.handle.as_ptr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_font_options_status(self.as_ptr()) })
    }

    /// Overlay the non-default values of `other` onto these options.
    pub fn merge(&mut self, other: &FontOptions) {
        unsafe { ffi::cairo_font_options_merge(self.as_ptr(), other.as_ptr()) };
    }

    pub fn set_antialias(&mut self, antialias: Antialias) {
        unsafe { ffi::cairo_font_options_set_antialias(self.as_ptr(), antialias.to_raw()) };
    }

    pub fn antialias(&self) -> Antialias {
        Antialias::from_raw(unsafe { ffi::cairo_font_options_get_antialias(self.as_ptr()) })
    }

    pub fn set_subpixel_order(&mut self, order: SubpixelOrder) {
        unsafe { ffi::cairo_font_options_set_subpixel_order(self.as_ptr(), order.to_raw()) };
    }

    pub fn subpixel_order(&self) -> SubpixelOrder {
        SubpixelOrder::from_raw(unsafe {
            ffi::cairo_font_options_get_subpixel_order(self.as_ptr())
        })
    }

    pub fn set_hint_style(&mut self, style: HintStyle) {
        unsafe { ffi::cairo_font_options_set_hint_style(self.as_ptr(), style.to_raw()) };
    }

    pub fn hint_style(&self) -> HintStyle {
        HintStyle::from_raw(unsafe { ffi::cairo_font_options_get_hint_style(self.as_ptr()) })
    }

    pub fn set_hint_metrics(&mut self, metrics: HintMetrics) {
        unsafe { ffi::cairo_font_options_set_hint_metrics(self.as_ptr(), metrics.to_raw()) };
    }

    pub fn hint_metrics(&self) -> HintMetrics {
        HintMetrics::from_raw(unsafe { ffi::cairo_font_options_get_hint_metrics(self.as_ptr()) })
    }

    /// Set OpenType font variations, e.g. `"wght=200,wdth=140.5"`.
    pub fn set_variations(&mut self, variations: Option<&str>) -> Result<()> {
        match variations {
            Some(variations) => {
                let variations = CString::new(variations)?;
                unsafe {
                    ffi::cairo_font_options_set_variations(self.as_ptr(), variations.as_ptr())
                };
            }
            None => unsafe {
                ffi::cairo_font_options_set_variations(self.as_ptr(), std::ptr::null())
            },
        }
        Ok(())
    }

    pub fn variations(&self) -> Option<String> {
        let raw = unsafe { ffi::cairo_font_options_get_variations(self.as_ptr()) };
        if raw.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned())
        }
    }
}

impl Clone for FontOptions {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

impl Default for FontOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for FontOptions {
    fn eq(&self, other: &Self) -> bool {
        unsafe { ffi::cairo_font_options_equal(self.as_ptr(), other.as_ptr()) != 0 }
    }
}

impl Eq for FontOptions {}

impl Hash for FontOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unsafe { ffi::cairo_font_options_hash(self.as_ptr()) }.hash(state);
    }
}

/// A font face (`cairo_font_face_t`), unscaled and untransformed.
///
/// Cloning shares the underlying face through its reference count.
#[derive(Clone, Debug)]
pub struct FontFace {
    handle: Counted<FontFaceKind>,
}

impl FontFace {
    pub(crate) unsafe fn from_raw(raw: *mut CairoFontFace) -> Self {
        Self {
            handle: Counted::from_raw(raw),
        }
    }

    pub(crate) unsafe fn from_raw_borrowed(raw: *mut CairoFontFace) -> Self {
        Self {
            handle: Counted::from_raw_borrowed(raw),
        }
    }

    pub fn as_ptr(&self) -> *mut CairoFontFace {
        self.handle.as_ptr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_font_face_status(self.as_ptr()) })
    }

    pub fn font_type(&self) -> FontType {
        FontType::from_raw(unsafe { ffi::cairo_font_face_get_type(self.as_ptr()) })
    }

    /// Downcast to a toy font face, if that is what this is.
    pub fn into_toy(self) -> std::result::Result<ToyFontFace, FontFace> {
        if self.font_type() == FontType::Toy {
            Ok(ToyFontFace { inner: self })
        } else {
            Err(self)
        }
    }
}

/// A font face selected by family name, slant and weight through the
/// simple "toy" text API.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct ToyFontFace {
    inner: FontFace,
}

impl Deref for ToyFontFace {
    type Target = FontFace;

    fn deref(&self) -> &FontFace {
        &self.inner
    }
}

impl DerefMut for ToyFontFace {
    fn deref_mut(&mut self) -> &mut FontFace {
        &mut self.inner
    }
}

impl ToyFontFace {
    pub fn new(family: &str, slant: FontSlant, weight: FontWeight) -> Result<Self> {
        let family = CString::new(family)?;
        Ok(Self {
            inner: unsafe {
                FontFace::from_raw(ffi::cairo_toy_font_face_create(
                    family.as_ptr(),
                    slant.to_raw(),
                    weight.to_raw(),
                ))
            },
        })
    }

    pub fn family(&self) -> String {
        let raw = unsafe { ffi::cairo_toy_font_face_get_family(self.as_ptr()) };
        unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
    }

    pub fn slant(&self) -> FontSlant {
        FontSlant::from_raw(unsafe { ffi::cairo_toy_font_face_get_slant(self.as_ptr()) })
    }

    pub fn weight(&self) -> FontWeight {
        FontWeight::from_raw(unsafe { ffi::cairo_toy_font_face_get_weight(self.as_ptr()) })
    }
}

/// The result of shaping text into glyphs with
/// [`ScaledFont::text_to_glyphs`].
#[derive(Clone, Debug)]
pub struct TextGlyphs {
    pub glyphs: Vec<Glyph>,
    pub clusters: Vec<TextCluster>,
    pub cluster_flags: TextClusterFlags,
}

/// A font face at a particular size and transformation
/// (`cairo_scaled_font_t`).
///
/// Cloning shares the underlying font through its reference count.
#[derive(Clone, Debug)]
pub struct ScaledFont {
    handle: Counted<ScaledFontKind>,
}

impl ScaledFont {
    pub fn new(
        font_face: &FontFace,
        font_matrix: &Matrix,
        ctm: &Matrix,
        options: &FontOptions,
    ) -> Self {
        Self {
            handle: unsafe {
                Counted::from_raw(ffi::cairo_scaled_font_create(
                    font_face.as_ptr(),
                    font_matrix,
                    ctm,
                    options.as_ptr(),
                ))
            },
        }
    }

    pub(crate) unsafe fn from_raw_borrowed(raw: *mut CairoScaledFont) -> Self {
        Self {
            handle: Counted::from_raw_borrowed(raw),
        }
    }

    pub fn as_ptr(&self) -> *mut CairoScaledFont {
        self.handle.as_ptr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_scaled_font_status(self.as_ptr()) })
    }

    pub fn font_type(&self) -> FontType {
        FontType::from_raw(unsafe { ffi::cairo_scaled_font_get_type(self.as_ptr()) })
    }

    pub fn extents(&self) -> FontExtents {
        let mut extents = FontExtents::default();
        unsafe { ffi::cairo_scaled_font_extents(self.as_ptr(), &mut extents) };
        extents
    }

    pub fn text_extents(&self, text: &str) -> Result<TextExtents> {
        let text = CString::new(text)?;
        let mut extents = TextExtents::default();
        unsafe { ffi::cairo_scaled_font_text_extents(self.as_ptr(), text.as_ptr(), &mut extents) };
        Ok(extents)
    }

    pub fn glyph_extents(&self, glyphs: &[Glyph]) -> TextExtents {
        let mut extents = TextExtents::default();
        unsafe {
            ffi::cairo_scaled_font_glyph_extents(
                self.as_ptr(),
                glyphs.as_ptr(),
                glyphs.len() as i32,
                &mut extents,
            )
        };
        extents
    }

    /// Shape `text` into glyphs placed from `(x, y)`, with cluster
    /// mapping back to the input bytes.
    pub fn text_to_glyphs(&self, x: f64, y: f64, text: &str) -> Result<TextGlyphs> {
        let mut glyphs = std::ptr::null_mut();
        let mut num_glyphs = 0;
        let mut clusters = std::ptr::null_mut();
        let mut num_clusters = 0;
        let mut cluster_flags = 0;
        let status = unsafe {
            ffi::cairo_scaled_font_text_to_glyphs(
                self.as_ptr(),
                x,
                y,
                text.as_ptr() as *const _,
                text.len() as i32,
                &mut glyphs,
                &mut num_glyphs,
                &mut clusters,
                &mut num_clusters,
                &mut cluster_flags,
            )
        };
        Status::from_raw(status).to_result()?;

        // Copy out of the library-allocated buffers, then hand them back.
        // Empty input leaves the out-pointers null with zero counts.
        let shaped = TextGlyphs {
            glyphs: if glyphs.is_null() || num_glyphs <= 0 {
                Vec::new()
            } else {
                unsafe { std::slice::from_raw_parts(glyphs, num_glyphs as usize) }.to_vec()
            },
            clusters: if clusters.is_null() || num_clusters <= 0 {
                Vec::new()
            } else {
                unsafe { std::slice::from_raw_parts(clusters, num_clusters as usize) }.to_vec()
            },
            cluster_flags: TextClusterFlags::from_raw(cluster_flags),
        };
        unsafe {
            ffi::cairo_glyph_free(glyphs);
            ffi::cairo_text_cluster_free(clusters);
        }
        Ok(shaped)
    }

    /// The face this font was created from.
    pub fn font_face(&self) -> FontFace {
        unsafe { FontFace::from_raw_borrowed(ffi::cairo_scaled_font_get_font_face(self.as_ptr())) }
    }

    pub fn font_matrix(&self) -> Matrix {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_scaled_font_get_font_matrix(self.as_ptr(), &mut m) };
        m
    }

    pub fn ctm(&self) -> Matrix {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_scaled_font_get_ctm(self.as_ptr(), &mut m) };
        m
    }

    pub fn scale_matrix(&self) -> Matrix {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_scaled_font_get_scale_matrix(self.as_ptr(), &mut m) };
        m
    }

    pub fn font_options(&self) -> FontOptions {
        let options = FontOptions::new();
        unsafe { ffi::cairo_scaled_font_get_font_options(self.as_ptr(), options.as_ptr()) };
        options
    }
}
