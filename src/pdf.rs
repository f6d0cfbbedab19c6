//! The PDF surface backend.

use std::ffi::{CStr, CString};
use std::fmt;

use std::path::Path;

use crate::error::Result;
use crate::ffi;
use crate::surface::{path_cstring, surface_subtype, Surface};
use crate::types::raw_enum;

use std::ops::{Deref, DerefMut};

raw_enum! {
    /// PDF versions a [`PdfSurface`] can be restricted to
    /// (`cairo_pdf_version_t`).
    pub enum PdfVersion {
        V1_4 = 0,
        V1_5 = 1,
    }
    fallback = V1_4;
}

impl PdfVersion {
    /// All versions supported by the linked library.
    pub fn versions() -> Vec<PdfVersion> {
        let mut raw = std::ptr::null();
        let mut count = 0;
        unsafe { ffi::cairo_pdf_get_versions(&mut raw, &mut count) };
        let raw = unsafe { std::slice::from_raw_parts(raw, count as usize) };
        raw.iter().copied().map(PdfVersion::from_raw).collect()
    }
}

impl fmt::Display for PdfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = unsafe { ffi::cairo_pdf_version_to_string(self.to_raw()) };
        if raw.is_null() {
            return f.write_str("unknown");
        }
        f.write_str(&unsafe { CStr::from_ptr(raw) }.to_string_lossy())
    }
}

raw_enum! {
    /// Document metadata fields (`cairo_pdf_metadata_t`).
    pub enum PdfMetadata {
        Title = 0,
        Author = 1,
        Subject = 2,
        Keywords = 3,
        Creator = 4,
        CreateDate = 5,
        ModDate = 6,
    }
    fallback = Title;
}

bitflags::bitflags! {
    /// Display flags for document outline items
    /// (`cairo_pdf_outline_flags_t`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PdfOutlineFlags: i32 {
        const OPEN = 1;
        const BOLD = 2;
        const ITALIC = 4;
    }
}

/// Identifies an outline item, for building the outline hierarchy.
pub type PdfOutlineId = i32;

/// The root of the document outline, parent of top-level items.
pub const OUTLINE_ROOT: PdfOutlineId = 0;

/// A paginated surface writing a PDF document.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct PdfSurface {
    inner: Surface,
}

surface_subtype!(PdfSurface);

impl PdfSurface {
    /// Create a PDF surface writing to `path`, with the page size
    /// given in points (1 point == 1/72 inch).
    pub fn new(
        path: impl AsRef<Path>,
        width_in_points: f64,
        height_in_points: f64,
    ) -> Result<Self> {
        let path = path_cstring(path.as_ref())?;
        Ok(Self {
            inner: unsafe {
                Surface::from_raw(ffi::cairo_pdf_surface_create(
                    path.as_ptr(),
                    width_in_points,
                    height_in_points,
                ))
            },
        })
    }

    /// Restrict the document to `version`. Only meaningful before any
    /// drawing has happened.
    pub fn restrict_to_version(&mut self, version: PdfVersion) {
        unsafe { ffi::cairo_pdf_surface_restrict_to_version(self.as_ptr(), version.to_raw()) };
    }

    /// Change the page size for pages emitted after this call.
    pub fn set_size(&mut self, width_in_points: f64, height_in_points: f64) {
        unsafe {
            ffi::cairo_pdf_surface_set_size(self.as_ptr(), width_in_points, height_in_points)
        };
    }

    /// Add an outline item under `parent_id` ([`OUTLINE_ROOT`] for a
    /// top-level item) and return its id. `link_attribs` takes the
    /// same attribute syntax as link tags.
    pub fn add_outline(
        &mut self,
        parent_id: PdfOutlineId,
        name: &str,
        link_attribs: &str,
        flags: PdfOutlineFlags,
    ) -> Result<PdfOutlineId> {
        let name = CString::new(name)?;
        let link_attribs = CString::new(link_attribs)?;
        Ok(unsafe {
            ffi::cairo_pdf_surface_add_outline(
                self.as_ptr(),
                parent_id,
                name.as_ptr(),
                link_attribs.as_ptr(),
                flags.bits(),
            )
        })
    }

    pub fn set_metadata(&mut self, metadata: PdfMetadata, value: &str) -> Result<()> {
        let value = CString::new(value)?;
        unsafe {
            ffi::cairo_pdf_surface_set_metadata(self.as_ptr(), metadata.to_raw(), value.as_ptr())
        };
        Ok(())
    }

    /// Override the label shown for the current page.
    pub fn set_page_label(&mut self, label: &str) -> Result<()> {
        let label = CString::new(label)?;
        unsafe { ffi::cairo_pdf_surface_set_page_label(self.as_ptr(), label.as_ptr()) };
        Ok(())
    }

    pub fn set_thumbnail_size(&mut self, width: i32, height: i32) {
        unsafe { ffi::cairo_pdf_surface_set_thumbnail_size(self.as_ptr(), width, height) };
    }
}
