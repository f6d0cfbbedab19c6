//! Paint sources: solid colors, surfaces, gradients and meshes.

use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};
use crate::ffi::{self, CairoPattern, Counted, PatternKind};
use crate::matrix::Matrix;
use crate::path::Path;
use crate::surface::Surface;
use crate::types::{Color, Extend, Filter, PatternType, Vec2F};
use crate::Status;

/// A source of paint (`cairo_pattern_t`).
///
/// Cloning shares the underlying pattern through its reference count.
/// Concrete constructors live on the typed wrappers: [`SolidPattern`],
/// [`SurfacePattern`], [`LinearGradient`], [`RadialGradient`], [`Mesh`].
#[derive(Clone, Debug)]
pub struct Pattern {
    handle: Counted<PatternKind>,
}

impl Pattern {
    pub(crate) unsafe fn from_raw(raw: *mut CairoPattern) -> Self {
        Self {
            handle: Counted::from_raw(raw),
        }
    }

    pub(crate) unsafe fn from_raw_borrowed(raw: *mut CairoPattern) -> Self {
        Self {
            handle: Counted::from_raw_borrowed(raw),
        }
    }

    pub fn as_ptr(&self) -> *mut CairoPattern {
        self.handle.as_ptr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_pattern_status(self.as_ptr()) })
    }

    pub fn pattern_type(&self) -> PatternType {
        PatternType::from_raw(unsafe { ffi::cairo_pattern_get_type(self.as_ptr()) })
    }

    /// Set the transformation from user space to pattern space.
    pub fn set_matrix(&mut self, matrix: &Matrix) {
        unsafe { ffi::cairo_pattern_set_matrix(self.as_ptr(), matrix) };
    }

    pub fn matrix(&self) -> Matrix {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_pattern_get_matrix(self.as_ptr(), &mut m) };
        m
    }

    pub fn set_extend(&mut self, extend: Extend) {
        unsafe { ffi::cairo_pattern_set_extend(self.as_ptr(), extend.to_raw()) };
    }

    pub fn extend(&self) -> Extend {
        Extend::from_raw(unsafe { ffi::cairo_pattern_get_extend(self.as_ptr()) })
    }

    pub fn set_filter(&mut self, filter: Filter) {
        unsafe { ffi::cairo_pattern_set_filter(self.as_ptr(), filter.to_raw()) };
    }

    pub fn filter(&self) -> Filter {
        Filter::from_raw(unsafe { ffi::cairo_pattern_get_filter(self.as_ptr()) })
    }
}

/// Implement the base-pattern view for a typed pattern wrapper.
macro_rules! pattern_subtype {
    ($name:ident => $base:ty) => {
        impl Deref for $name {
            type Target = $base;

            fn deref(&self) -> &$base {
                &self.inner
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $base {
                &mut self.inner
            }
        }
    };
}

/// A single translucent color.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct SolidPattern {
    inner: Pattern,
}

pattern_subtype!(SolidPattern => Pattern);

impl SolidPattern {
    pub fn new_rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            inner: unsafe { Pattern::from_raw(ffi::cairo_pattern_create_rgb(red, green, blue)) },
        }
    }

    pub fn new_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            inner: unsafe {
                Pattern::from_raw(ffi::cairo_pattern_create_rgba(red, green, blue, alpha))
            },
        }
    }

    pub fn new(color: Color) -> Self {
        Self::new_rgba(color.r, color.g, color.b, color.a)
    }

    pub fn color(&self) -> Color {
        let mut c = Color::default();
        let status = unsafe {
            ffi::cairo_pattern_get_rgba(self.as_ptr(), &mut c.r, &mut c.g, &mut c.b, &mut c.a)
        };
        // Cannot fail: the wrapper is only ever built over a solid pattern.
        debug_assert!(Status::from_raw(status).is_success());
        c
    }
}

/// A pattern sourcing paint from another surface.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct SurfacePattern {
    inner: Pattern,
}

pattern_subtype!(SurfacePattern => Pattern);

impl SurfacePattern {
    pub fn new(surface: &Surface) -> Self {
        Self {
            inner: unsafe {
                Pattern::from_raw(ffi::cairo_pattern_create_for_surface(surface.as_ptr()))
            },
        }
    }

    /// The surface this pattern paints from. The returned wrapper holds
    /// its own reference.
    pub fn surface(&self) -> Surface {
        let mut raw = std::ptr::null_mut();
        let status = unsafe { ffi::cairo_pattern_get_surface(self.as_ptr(), &mut raw) };
        debug_assert!(Status::from_raw(status).is_success());
        unsafe { Surface::from_raw_borrowed(raw) }
    }
}

/// Color-stop operations shared by linear and radial gradients.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct Gradient {
    inner: Pattern,
}

pattern_subtype!(Gradient => Pattern);

impl Gradient {
    pub fn add_color_stop_rgb(&mut self, offset: f64, red: f64, green: f64, blue: f64) {
        unsafe {
            ffi::cairo_pattern_add_color_stop_rgb(self.as_ptr(), offset, red, green, blue)
        };
    }

    pub fn add_color_stop_rgba(
        &mut self,
        offset: f64,
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    ) {
        unsafe {
            ffi::cairo_pattern_add_color_stop_rgba(self.as_ptr(), offset, red, green, blue, alpha)
        };
    }

    pub fn add_color_stop(&mut self, offset: f64, color: Color) {
        self.add_color_stop_rgba(offset, color.r, color.g, color.b, color.a);
    }

    pub fn color_stop_count(&self) -> usize {
        let mut count = 0;
        let status =
            unsafe { ffi::cairo_pattern_get_color_stop_count(self.as_ptr(), &mut count) };
        debug_assert!(Status::from_raw(status).is_success());
        count as usize
    }

    /// The offset and color of the stop at `index`, in ascending offset
    /// order. Fails with [`Status::InvalidIndex`] when out of range.
    pub fn color_stop(&self, index: usize) -> Result<(f64, Color)> {
        let mut offset = 0.0;
        let mut c = Color::default();
        let status = unsafe {
            ffi::cairo_pattern_get_color_stop_rgba(
                self.as_ptr(),
                index as i32,
                &mut offset,
                &mut c.r,
                &mut c.g,
                &mut c.b,
                &mut c.a,
            )
        };
        match Status::from_raw(status) {
            Status::Success => Ok((offset, c)),
            status => Err(Error::Cairo(status)),
        }
    }
}

/// A linear gradient between two points.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct LinearGradient {
    inner: Gradient,
}

pattern_subtype!(LinearGradient => Gradient);

impl LinearGradient {
    pub fn new(p0: Vec2F, p1: Vec2F) -> Self {
        Self {
            inner: Gradient {
                inner: unsafe {
                    Pattern::from_raw(ffi::cairo_pattern_create_linear(p0.x, p0.y, p1.x, p1.y))
                },
            },
        }
    }

    /// The gradient's endpoints.
    pub fn points(&self) -> (Vec2F, Vec2F) {
        let mut p0 = Vec2F::default();
        let mut p1 = Vec2F::default();
        let status = unsafe {
            ffi::cairo_pattern_get_linear_points(
                self.as_ptr(),
                &mut p0.x,
                &mut p0.y,
                &mut p1.x,
                &mut p1.y,
            )
        };
        debug_assert!(Status::from_raw(status).is_success());
        (p0, p1)
    }
}

/// A radial gradient between two circles.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct RadialGradient {
    inner: Gradient,
}

pattern_subtype!(RadialGradient => Gradient);

impl RadialGradient {
    pub fn new(center0: Vec2F, radius0: f64, center1: Vec2F, radius1: f64) -> Self {
        Self {
            inner: Gradient {
                inner: unsafe {
                    Pattern::from_raw(ffi::cairo_pattern_create_radial(
                        center0.x, center0.y, radius0, center1.x, center1.y, radius1,
                    ))
                },
            },
        }
    }

    /// The gradient's start and end circles as `(center, radius)` pairs.
    pub fn circles(&self) -> ((Vec2F, f64), (Vec2F, f64)) {
        let mut c0 = Vec2F::default();
        let mut r0 = 0.0;
        let mut c1 = Vec2F::default();
        let mut r1 = 0.0;
        let status = unsafe {
            ffi::cairo_pattern_get_radial_circles(
                self.as_ptr(),
                &mut c0.x,
                &mut c0.y,
                &mut r0,
                &mut c1.x,
                &mut c1.y,
                &mut r1,
            )
        };
        debug_assert!(Status::from_raw(status).is_success());
        ((c0, r0), (c1, r1))
    }
}

/// A mesh gradient built from tensor-product patches.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct Mesh {
    inner: Pattern,
}

pattern_subtype!(Mesh => Pattern);

impl Mesh {
    pub fn new() -> Self {
        Self {
            inner: unsafe { Pattern::from_raw(ffi::cairo_pattern_create_mesh()) },
        }
    }

    pub fn begin_patch(&mut self) {
        unsafe { ffi::cairo_mesh_pattern_begin_patch(self.as_ptr()) };
    }

    pub fn end_patch(&mut self) {
        unsafe { ffi::cairo_mesh_pattern_end_patch(self.as_ptr()) };
    }

    pub fn move_to(&mut self, point: Vec2F) {
        unsafe { ffi::cairo_mesh_pattern_move_to(self.as_ptr(), point.x, point.y) };
    }

    pub fn line_to(&mut self, point: Vec2F) {
        unsafe { ffi::cairo_mesh_pattern_line_to(self.as_ptr(), point.x, point.y) };
    }

    pub fn curve_to(&mut self, p1: Vec2F, p2: Vec2F, p3: Vec2F) {
        unsafe {
            ffi::cairo_mesh_pattern_curve_to(self.as_ptr(), p1.x, p1.y, p2.x, p2.y, p3.x, p3.y)
        };
    }

    /// Set an interior control point of the current patch (0..=3).
    pub fn set_control_point(&mut self, point_num: u32, point: Vec2F) {
        unsafe {
            ffi::cairo_mesh_pattern_set_control_point(self.as_ptr(), point_num, point.x, point.y)
        };
    }

    pub fn set_corner_color_rgb(&mut self, corner_num: u32, red: f64, green: f64, blue: f64) {
        unsafe {
            ffi::cairo_mesh_pattern_set_corner_color_rgb(
                self.as_ptr(),
                corner_num,
                red,
                green,
                blue,
            )
        };
    }

    pub fn set_corner_color_rgba(
        &mut self,
        corner_num: u32,
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    ) {
        unsafe {
            ffi::cairo_mesh_pattern_set_corner_color_rgba(
                self.as_ptr(),
                corner_num,
                red,
                green,
                blue,
                alpha,
            )
        };
    }

    pub fn set_corner_color(&mut self, corner_num: u32, color: Color) {
        self.set_corner_color_rgba(corner_num, color.r, color.g, color.b, color.a);
    }

    pub fn patch_count(&self) -> usize {
        let mut count = 0;
        let status = unsafe { ffi::cairo_mesh_pattern_get_patch_count(self.as_ptr(), &mut count) };
        debug_assert!(Status::from_raw(status).is_success());
        count as usize
    }

    /// The path defining the sides of patch `patch_num`.
    pub fn patch_path(&self, patch_num: u32) -> Path {
        unsafe { Path::from_raw(ffi::cairo_mesh_pattern_get_path(self.as_ptr(), patch_num)) }
    }

    pub fn corner_color(&self, patch_num: u32, corner_num: u32) -> Result<Color> {
        let mut c = Color::default();
        let status = unsafe {
            ffi::cairo_mesh_pattern_get_corner_color_rgba(
                self.as_ptr(),
                patch_num,
                corner_num,
                &mut c.r,
                &mut c.g,
                &mut c.b,
                &mut c.a,
            )
        };
        Status::from_raw(status).to_result()?;
        Ok(c)
    }

    pub fn control_point(&self, patch_num: u32, point_num: u32) -> Result<Vec2F> {
        let mut p = Vec2F::default();
        let status = unsafe {
            ffi::cairo_mesh_pattern_get_control_point(
                self.as_ptr(),
                patch_num,
                point_num,
                &mut p.x,
                &mut p.y,
            )
        };
        Status::from_raw(status).to_result()?;
        Ok(p)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
