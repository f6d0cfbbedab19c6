//! Ownership handles for opaque cairo resources.
//!
//! Every wrapper type in this crate stores exactly one handle. A handle
//! holds a raw resource pointer (or null) and guarantees the resource's
//! release function runs exactly once per live pointer, on drop. Which
//! release discipline applies is chosen per resource kind:
//!
//! - [`Owned`]: exclusive, move-only ownership (paths).
//! - [`Counted`]: shared ownership through the reference count cairo
//!   embeds in the resource itself (contexts, surfaces, patterns, fonts,
//!   devices). Cloning bumps the count; dropping decrements it and cairo
//!   frees the resource when it reaches zero.
//! - [`Duplicated`]: cloning performs a library-level deep copy (font
//!   options). Copies never alias.

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use super::raw::*;

/// A resource kind's release entry point, supplied at compile time.
pub trait Resource {
    /// The opaque C type behind the handle.
    type Raw;

    /// Release one reference to, or free, the resource.
    ///
    /// # Safety
    ///
    /// `raw` must be a live pointer previously obtained from cairo.
    unsafe fn destroy(raw: *mut Self::Raw);
}

/// Resource kinds with a library-managed reference count.
pub trait Reference: Resource {
    /// Increment the resource's embedded reference count.
    ///
    /// # Safety
    ///
    /// `raw` must be a live pointer previously obtained from cairo.
    unsafe fn reference(raw: *mut Self::Raw) -> *mut Self::Raw;
}

/// Resource kinds with a library-level deep-copy operation.
pub trait Duplicate: Resource {
    /// Produce an independent copy of the resource.
    ///
    /// # Safety
    ///
    /// `raw` must be a live pointer previously obtained from cairo.
    unsafe fn duplicate(raw: *mut Self::Raw) -> *mut Self::Raw;
}

/// Exclusive owner of a raw resource pointer. Move-only.
///
/// Dropping a non-null handle runs the kind's release function; dropping
/// a null handle does nothing. Rust's move semantics stand in for the
/// explicit transfer-and-null bookkeeping a C++ handle would need: a
/// moved-from `Owned` no longer exists, so a double release cannot be
/// expressed.
pub struct Owned<R: Resource> {
    raw: *mut R::Raw,
    _kind: PhantomData<R>,
}

impl<R: Resource> Owned<R> {
    /// A handle holding no resource. Safe to drop.
    pub const fn null() -> Self {
        Self {
            raw: std::ptr::null_mut(),
            _kind: PhantomData,
        }
    }

    /// Take ownership of `raw` without touching its reference count.
    ///
    /// # Safety
    ///
    /// `raw` must be null or a pointer whose reference this handle may
    /// release, and must not be owned by any other handle.
    pub unsafe fn from_raw(raw: *mut R::Raw) -> Self {
        Self {
            raw,
            _kind: PhantomData,
        }
    }

    /// The held pointer, possibly null.
    pub fn as_ptr(&self) -> *mut R::Raw {
        self.raw
    }

    pub fn is_null(&self) -> bool {
        self.raw.is_null()
    }

    /// Give up ownership without releasing the resource.
    pub fn into_raw(self) -> *mut R::Raw {
        let raw = self.raw;
        mem::forget(self);
        raw
    }
}

impl<R: Resource> fmt::Debug for Owned<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Owned").field(&self.raw).finish()
    }
}

impl<R: Resource> Default for Owned<R> {
    fn default() -> Self {
        Self::null()
    }
}

impl<R: Resource> Drop for Owned<R> {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { R::destroy(self.raw) };
        }
    }
}

/// Handle sharing a resource through its embedded reference count.
pub struct Counted<R: Reference> {
    inner: Owned<R>,
}

impl<R: Reference> Counted<R> {
    /// Adopt a reference the caller already owns (e.g. the implicit
    /// reference returned by a `cairo_*_create` call).
    ///
    /// # Safety
    ///
    /// `raw` must be null or carry one reference that this handle may
    /// release.
    pub unsafe fn from_raw(raw: *mut R::Raw) -> Self {
        Self {
            inner: Owned::from_raw(raw),
        }
    }

    /// Attach to a resource the library still owns, incrementing its
    /// reference count. Used when cairo hands back an internal pointer
    /// (e.g. `cairo_get_target`) whose reference stays with the library.
    ///
    /// # Safety
    ///
    /// `raw` must be null or a live pointer obtained from cairo.
    pub unsafe fn from_raw_borrowed(raw: *mut R::Raw) -> Self {
        if !raw.is_null() {
            R::reference(raw);
        }
        Self::from_raw(raw)
    }

    pub fn as_ptr(&self) -> *mut R::Raw {
        self.inner.as_ptr()
    }
}

impl<R: Reference> fmt::Debug for Counted<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Counted").field(&self.as_ptr()).finish()
    }
}

impl<R: Reference> Clone for Counted<R> {
    fn clone(&self) -> Self {
        unsafe { Self::from_raw_borrowed(self.as_ptr()) }
    }
}

/// Handle whose clone is a library-level deep copy.
pub struct Duplicated<R: Duplicate> {
    inner: Owned<R>,
}

impl<R: Duplicate> Duplicated<R> {
    /// Take ownership of `raw`.
    ///
    /// # Safety
    ///
    /// Same contract as [`Owned::from_raw`].
    pub unsafe fn from_raw(raw: *mut R::Raw) -> Self {
        Self {
            inner: Owned::from_raw(raw),
        }
    }

    pub fn as_ptr(&self) -> *mut R::Raw {
        self.inner.as_ptr()
    }
}

impl<R: Duplicate> fmt::Debug for Duplicated<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Duplicated").field(&self.as_ptr()).finish()
    }
}

impl<R: Duplicate> Clone for Duplicated<R> {
    fn clone(&self) -> Self {
        if self.as_ptr().is_null() {
            return unsafe { Self::from_raw(std::ptr::null_mut()) };
        }
        unsafe { Self::from_raw(R::duplicate(self.as_ptr())) }
    }
}

/// Declare a resource kind: an uninhabited marker type wiring a raw
/// cairo type to its destroy (and optionally reference or copy) entry
/// points.
macro_rules! resource_kind {
    ($(#[$meta:meta])* $name:ident, $raw:ty, destroy = $destroy:path) => {
        $(#[$meta])*
        pub enum $name {}

        impl Resource for $name {
            type Raw = $raw;

            unsafe fn destroy(raw: *mut Self::Raw) {
                $destroy(raw)
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $raw:ty, destroy = $destroy:path, reference = $reference:path) => {
        resource_kind!($(#[$meta])* $name, $raw, destroy = $destroy);

        impl Reference for $name {
            unsafe fn reference(raw: *mut Self::Raw) -> *mut Self::Raw {
                $reference(raw)
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, $raw:ty, destroy = $destroy:path, duplicate = $duplicate:path) => {
        resource_kind!($(#[$meta])* $name, $raw, destroy = $destroy);

        impl Duplicate for $name {
            unsafe fn duplicate(raw: *mut Self::Raw) -> *mut Self::Raw {
                $duplicate(raw)
            }
        }
    };
}

resource_kind!(
    /// Drawing context (`cairo_t`).
    ContextKind, CairoContext,
    destroy = cairo_destroy,
    reference = cairo_reference
);
resource_kind!(
    /// Render target (`cairo_surface_t`).
    SurfaceKind, CairoSurface,
    destroy = cairo_surface_destroy,
    reference = cairo_surface_reference
);
resource_kind!(
    /// Paint source (`cairo_pattern_t`).
    PatternKind, CairoPattern,
    destroy = cairo_pattern_destroy,
    reference = cairo_pattern_reference
);
resource_kind!(
    /// Unscaled font face (`cairo_font_face_t`).
    FontFaceKind, CairoFontFace,
    destroy = cairo_font_face_destroy,
    reference = cairo_font_face_reference
);
resource_kind!(
    /// Font at a particular size and transform (`cairo_scaled_font_t`).
    ScaledFontKind, CairoScaledFont,
    destroy = cairo_scaled_font_destroy,
    reference = cairo_scaled_font_reference
);
resource_kind!(
    /// Backend device (`cairo_device_t`).
    DeviceKind, CairoDevice,
    destroy = cairo_device_destroy,
    reference = cairo_device_reference
);
resource_kind!(
    /// Font rendering options (`cairo_font_options_t`). Not
    /// reference-counted; copies are independent.
    FontOptionsKind, CairoFontOptions,
    destroy = cairo_font_options_destroy,
    duplicate = cairo_font_options_copy
);
resource_kind!(
    /// Path snapshot (`cairo_path_t`). No reference or copy primitive
    /// exists, so handles are move-only.
    PathKind, CairoPath,
    destroy = cairo_path_destroy
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Reference-counted fake: destroy decrements `refs` and counts
    /// itself in `releases`; reference increments `refs`.
    struct FakeRes {
        refs: AtomicUsize,
        releases: AtomicUsize,
    }

    impl FakeRes {
        fn new() -> Self {
            Self {
                refs: AtomicUsize::new(1),
                releases: AtomicUsize::new(0),
            }
        }
    }

    enum FakeKind {}

    impl Resource for FakeKind {
        type Raw = FakeRes;

        unsafe fn destroy(raw: *mut FakeRes) {
            (*raw).refs.fetch_sub(1, Ordering::SeqCst);
            (*raw).releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Reference for FakeKind {
        unsafe fn reference(raw: *mut FakeRes) -> *mut FakeRes {
            (*raw).refs.fetch_add(1, Ordering::SeqCst);
            raw
        }
    }

    /// Deep-copy fake: heap-allocated integer.
    enum BoxedKind {}

    impl Resource for BoxedKind {
        type Raw = u32;

        unsafe fn destroy(raw: *mut u32) {
            drop(Box::from_raw(raw));
        }
    }

    impl Duplicate for BoxedKind {
        unsafe fn duplicate(raw: *mut u32) -> *mut u32 {
            Box::into_raw(Box::new(*raw))
        }
    }

    #[test]
    fn null_handle_drops_without_release() {
        let handle = Owned::<FakeKind>::null();
        assert!(handle.is_null());
        drop(handle);
        // Nothing to observe: a release on null would have dereferenced
        // a null pointer and crashed the test.
        let handle: Owned<FakeKind> = Owned::default();
        drop(handle);
    }

    #[test]
    fn owned_releases_exactly_once() {
        let mut res = FakeRes::new();
        let handle = unsafe { Owned::<FakeKind>::from_raw(&mut res) };
        assert!(!handle.is_null());
        drop(handle);
        assert_eq!(res.releases.load(Ordering::SeqCst), 1);
        assert_eq!(res.refs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn into_raw_transfers_without_release() {
        let mut res = FakeRes::new();
        let handle = unsafe { Owned::<FakeKind>::from_raw(&mut res) };
        let raw = handle.into_raw();
        assert_eq!(res.releases.load(Ordering::SeqCst), 0);

        // The pointer can be re-adopted and released normally.
        let handle = unsafe { Owned::<FakeKind>::from_raw(raw) };
        drop(handle);
        assert_eq!(res.releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn counted_clone_bumps_and_releases() {
        let mut res = FakeRes::new();
        let original = unsafe { Counted::<FakeKind>::from_raw(&mut res) };
        assert_eq!(res.refs.load(Ordering::SeqCst), 1);

        let copy = original.clone();
        assert_eq!(copy.as_ptr(), original.as_ptr());
        assert_eq!(res.refs.load(Ordering::SeqCst), 2);

        drop(copy);
        assert_eq!(res.refs.load(Ordering::SeqCst), 1);
        assert_eq!(res.releases.load(Ordering::SeqCst), 1);

        drop(original);
        assert_eq!(res.refs.load(Ordering::SeqCst), 0);
        assert_eq!(res.releases.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn borrowed_attach_bumps_on_construction() {
        let mut res = FakeRes::new();
        let raw: *mut FakeRes = &mut res;

        // Simulates an accessor returning a library-owned pointer: the
        // library's own reference stays untouched.
        let attached = unsafe { Counted::<FakeKind>::from_raw_borrowed(raw) };
        assert_eq!(res.refs.load(Ordering::SeqCst), 2);
        drop(attached);
        assert_eq!(res.refs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn duplicated_clone_is_independent() {
        let original = unsafe { Duplicated::<BoxedKind>::from_raw(Box::into_raw(Box::new(7))) };
        let copy = original.clone();
        assert_ne!(copy.as_ptr(), original.as_ptr());

        unsafe { *copy.as_ptr() = 9 };
        assert_eq!(unsafe { *original.as_ptr() }, 7);
        assert_eq!(unsafe { *copy.as_ptr() }, 9);
    }
}
