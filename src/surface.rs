//! Render targets: the generic surface plus the image and recording
//! backends.

use std::ops::{Deref, DerefMut};

use crate::device::Device;
#[cfg(any(feature = "png", feature = "pdf"))]
use crate::error::Result;
use crate::ffi::{self, CairoRectangle, CairoSurface, Counted, SurfaceKind};
use crate::font::FontOptions;
use crate::types::{Content, Format, RectF, SurfaceType, Vec2F};
use crate::Status;

#[cfg(any(feature = "png", feature = "pdf"))]
use std::ffi::CString;
#[cfg(any(feature = "png", feature = "pdf"))]
use std::path::Path;

/// A render target (`cairo_surface_t`).
///
/// Cloning shares the underlying surface through its reference count.
/// Backend-specific constructors live on [`ImageSurface`],
/// [`RecordingSurface`] and, with the `pdf` feature, `PdfSurface`.
#[derive(Clone, Debug)]
pub struct Surface {
    handle: Counted<SurfaceKind>,
}

impl Surface {
    pub(crate) unsafe fn from_raw(raw: *mut CairoSurface) -> Self {
        Self {
            handle: Counted::from_raw(raw),
        }
    }

    pub(crate) unsafe fn from_raw_borrowed(raw: *mut CairoSurface) -> Self {
        Self {
            handle: Counted::from_raw_borrowed(raw),
        }
    }

    pub fn as_ptr(&self) -> *mut CairoSurface {
        self.handle.as_ptr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_surface_status(self.as_ptr()) })
    }

    pub fn surface_type(&self) -> SurfaceType {
        SurfaceType::from_raw(unsafe { ffi::cairo_surface_get_type(self.as_ptr()) })
    }

    pub fn content(&self) -> Content {
        Content::from_raw(unsafe { ffi::cairo_surface_get_content(self.as_ptr()) })
    }

    /// Create a new surface with the same backend as this one.
    pub fn create_similar(&self, content: Content, width: i32, height: i32) -> Surface {
        unsafe {
            Surface::from_raw(ffi::cairo_surface_create_similar(
                self.as_ptr(),
                content.to_raw(),
                width,
                height,
            ))
        }
    }

    /// Create an image surface suited for fast uploads to this one.
    pub fn create_similar_image(&self, format: Format, width: i32, height: i32) -> ImageSurface {
        ImageSurface {
            inner: unsafe {
                Surface::from_raw(ffi::cairo_surface_create_similar_image(
                    self.as_ptr(),
                    format.to_raw(),
                    width,
                    height,
                ))
            },
        }
    }

    /// Create a surface mapping a rectangular region of this one.
    pub fn create_for_rectangle(&self, rect: RectF) -> Surface {
        unsafe {
            Surface::from_raw(ffi::cairo_surface_create_for_rectangle(
                self.as_ptr(),
                rect.x,
                rect.y,
                rect.w,
                rect.h,
            ))
        }
    }

    /// Finish the surface, dropping its backend resources. Further
    /// drawing puts the surface in the [`Status::SurfaceFinished`]
    /// error state.
    pub fn finish(&mut self) {
        unsafe { ffi::cairo_surface_finish(self.as_ptr()) };
    }

    /// The device backing this surface, if any.
    pub fn device(&self) -> Option<Device> {
        let raw = unsafe { ffi::cairo_surface_get_device(self.as_ptr()) };
        if raw.is_null() {
            None
        } else {
            Some(unsafe { Device::from_raw_borrowed(raw) })
        }
    }

    /// Write the surface contents to a PNG file.
    #[cfg(feature = "png")]
    pub fn write_to_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path_cstring(path.as_ref())?;
        let status = unsafe { ffi::cairo_surface_write_to_png(self.as_ptr(), path.as_ptr()) };
        Status::from_raw(status).to_result()
    }

    /// The default font rendering options for this surface.
    pub fn font_options(&self) -> FontOptions {
        let options = FontOptions::new();
        unsafe { ffi::cairo_surface_get_font_options(self.as_ptr(), options.as_ptr()) };
        options
    }

    pub fn flush(&mut self) {
        unsafe { ffi::cairo_surface_flush(self.as_ptr()) };
    }

    pub fn mark_dirty(&mut self) {
        unsafe { ffi::cairo_surface_mark_dirty(self.as_ptr()) };
    }

    pub fn mark_dirty_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { ffi::cairo_surface_mark_dirty_rectangle(self.as_ptr(), x, y, width, height) };
    }

    pub fn set_device_scale(&mut self, x_scale: f64, y_scale: f64) {
        unsafe { ffi::cairo_surface_set_device_scale(self.as_ptr(), x_scale, y_scale) };
    }

    pub fn device_scale(&self) -> Vec2F {
        let mut scale = Vec2F::default();
        unsafe { ffi::cairo_surface_get_device_scale(self.as_ptr(), &mut scale.x, &mut scale.y) };
        scale
    }

    pub fn set_device_offset(&mut self, x_offset: f64, y_offset: f64) {
        unsafe { ffi::cairo_surface_set_device_offset(self.as_ptr(), x_offset, y_offset) };
    }

    pub fn device_offset(&self) -> Vec2F {
        let mut offset = Vec2F::default();
        unsafe {
            ffi::cairo_surface_get_device_offset(self.as_ptr(), &mut offset.x, &mut offset.y)
        };
        offset
    }

    pub fn set_fallback_resolution(&mut self, x_pixels_per_inch: f64, y_pixels_per_inch: f64) {
        unsafe {
            ffi::cairo_surface_set_fallback_resolution(
                self.as_ptr(),
                x_pixels_per_inch,
                y_pixels_per_inch,
            )
        };
    }

    pub fn fallback_resolution(&self) -> Vec2F {
        let mut ppi = Vec2F::default();
        unsafe {
            ffi::cairo_surface_get_fallback_resolution(self.as_ptr(), &mut ppi.x, &mut ppi.y)
        };
        ppi
    }

    /// Emit the current page on paginated backends. No-op elsewhere.
    pub fn copy_page(&mut self) {
        unsafe { ffi::cairo_surface_copy_page(self.as_ptr()) };
    }

    pub fn show_page(&mut self) {
        unsafe { ffi::cairo_surface_show_page(self.as_ptr()) };
    }

    pub fn has_show_text_glyphs(&self) -> bool {
        unsafe { ffi::cairo_surface_has_show_text_glyphs(self.as_ptr()) != 0 }
    }
}

macro_rules! surface_subtype {
    ($name:ident) => {
        impl Deref for $name {
            type Target = Surface;

            fn deref(&self) -> &Surface {
                &self.inner
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Surface {
                &mut self.inner
            }
        }
    };
}

pub(crate) use surface_subtype;

/// A raster surface held in client memory.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct ImageSurface {
    inner: Surface,
}

surface_subtype!(ImageSurface);

impl ImageSurface {
    pub fn new(format: Format, width: i32, height: i32) -> Self {
        Self {
            inner: unsafe {
                Surface::from_raw(ffi::cairo_image_surface_create(
                    format.to_raw(),
                    width,
                    height,
                ))
            },
        }
    }

    /// Wrap a caller-provided pixel buffer.
    ///
    /// # Safety
    ///
    /// `data` must point to at least `stride * height` bytes laid out
    /// for `format`, and must stay valid and unmoved for the lifetime
    /// of the surface and every clone of it.
    pub unsafe fn for_data(
        data: *mut u8,
        format: Format,
        width: i32,
        height: i32,
        stride: i32,
    ) -> Self {
        Self {
            inner: Surface::from_raw(ffi::cairo_image_surface_create_for_data(
                data,
                format.to_raw(),
                width,
                height,
                stride,
            )),
        }
    }

    /// Load a PNG file into a new image surface. Failures are reported
    /// through the surface status, matching the underlying library.
    #[cfg(feature = "png")]
    pub fn from_png(path: impl AsRef<Path>) -> Result<Self> {
        let path = path_cstring(path.as_ref())?;
        Ok(Self {
            inner: unsafe {
                Surface::from_raw(ffi::cairo_image_surface_create_from_png(path.as_ptr()))
            },
        })
    }

    /// Direct access to the pixel data. Flushes pending drawing first.
    /// Empty for finished surfaces and surfaces in an error state.
    pub fn data(&mut self) -> &mut [u8] {
        self.flush();
        let ptr = unsafe { ffi::cairo_image_surface_get_data(self.as_ptr()) };
        if ptr.is_null() {
            return &mut [];
        }
        let len = self.stride() as usize * self.height() as usize;
        unsafe { std::slice::from_raw_parts_mut(ptr, len) }
    }

    pub fn format(&self) -> Format {
        Format::from_raw(unsafe { ffi::cairo_image_surface_get_format(self.as_ptr()) })
    }

    pub fn width(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_width(self.as_ptr()) }
    }

    pub fn height(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_height(self.as_ptr()) }
    }

    pub fn stride(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_stride(self.as_ptr()) }
    }
}

/// A surface that records drawing commands for later replay.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct RecordingSurface {
    inner: Surface,
}

surface_subtype!(RecordingSurface);

impl RecordingSurface {
    /// Create a recording surface. With `extents` of `None` the
    /// recording is unbounded.
    pub fn new(content: Content, extents: Option<RectF>) -> Self {
        let extents = extents.map(CairoRectangle::from);
        let extents_ptr = extents
            .as_ref()
            .map_or(std::ptr::null(), |r| r as *const CairoRectangle);
        Self {
            inner: unsafe {
                Surface::from_raw(ffi::cairo_recording_surface_create(
                    content.to_raw(),
                    extents_ptr,
                ))
            },
        }
    }

    /// The bounding box of everything drawn so far.
    pub fn ink_extents(&self) -> RectF {
        let mut r = RectF::default();
        unsafe {
            ffi::cairo_recording_surface_ink_extents(
                self.as_ptr(),
                &mut r.x,
                &mut r.y,
                &mut r.w,
                &mut r.h,
            )
        };
        r
    }

    /// The extents the surface was created with, or `None` for an
    /// unbounded recording.
    pub fn extents(&self) -> Option<RectF> {
        let mut r = CairoRectangle::default();
        let bounded = unsafe { ffi::cairo_recording_surface_get_extents(self.as_ptr(), &mut r) };
        (bounded != 0).then(|| RectF::from(r))
    }
}

impl From<RectF> for CairoRectangle {
    fn from(r: RectF) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl From<CairoRectangle> for RectF {
    fn from(r: CairoRectangle) -> Self {
        Self {
            x: r.x,
            y: r.y,
            w: r.width,
            h: r.height,
        }
    }
}

/// A filesystem path as the NUL-terminated byte string the C API takes.
#[cfg(any(feature = "png", feature = "pdf"))]
pub(crate) fn path_cstring(path: &Path) -> Result<CString> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Ok(CString::new(path.as_os_str().as_bytes())?)
    }
    #[cfg(not(unix))]
    {
        Ok(CString::new(path.to_string_lossy().into_owned())?)
    }
}
