//! Path snapshots copied out of a drawing context.

use std::iter::FusedIterator;
use std::slice;

use crate::ffi::{CairoPath, CairoPathData, Owned, PathKind};
use crate::types::Vec2F;
use crate::Status;

/// An immutable snapshot of a context's current path.
///
/// Obtained from [`Context::copy_path`](crate::Context::copy_path),
/// [`Context::copy_path_flat`](crate::Context::copy_path_flat) or
/// [`Mesh::patch_path`](crate::Mesh::patch_path). The library exposes no
/// copy or reference primitive for path data, so `Path` is move-only.
#[derive(Debug)]
pub struct Path {
    handle: Owned<PathKind>,
}

impl Path {
    pub(crate) unsafe fn from_raw(raw: *mut CairoPath) -> Self {
        Self {
            handle: Owned::from_raw(raw),
        }
    }

    pub fn as_ptr(&self) -> *mut CairoPath {
        self.handle.as_ptr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { (*self.as_ptr()).status })
    }

    /// Iterate over the path's segments.
    pub fn segments(&self) -> Segments<'_> {
        let data = unsafe {
            let raw = &*self.as_ptr();
            if raw.data.is_null() || raw.num_data <= 0 {
                &[]
            } else {
                slice::from_raw_parts(raw.data, raw.num_data as usize)
            }
        };
        Segments { data }
    }
}

/// One operation of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2F),
    LineTo(Vec2F),
    CurveTo(Vec2F, Vec2F, Vec2F),
    Close,
}

/// Iterator over the segments of a [`Path`].
pub struct Segments<'a> {
    data: &'a [CairoPathData],
}

impl<'a> Segments<'a> {
    fn point(&self, i: usize) -> Vec2F {
        // Caller checks `i` against the header length.
        let p = unsafe { self.data[i].point };
        Vec2F { x: p.x, y: p.y }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<PathSegment> {
        let header = unsafe { self.data.first()?.header };
        let length = header.length.max(1) as usize;
        if length > self.data.len() {
            return None;
        }

        let segment = match header.data_type {
            0 if length >= 2 => PathSegment::MoveTo(self.point(1)),
            1 if length >= 2 => PathSegment::LineTo(self.point(1)),
            2 if length >= 4 => {
                PathSegment::CurveTo(self.point(1), self.point(2), self.point(3))
            }
            3 => PathSegment::Close,
            _ => return None,
        };

        self.data = &self.data[length..];
        Some(segment)
    }
}

impl FusedIterator for Segments<'_> {}
