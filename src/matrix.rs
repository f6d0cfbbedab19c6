//! Affine transformation matrices.

use std::ops::Mul;

use crate::error::Result;
use crate::ffi;
use crate::types::Vec2F;
use crate::Status;

/// A 2D affine transformation (`cairo_matrix_t`).
///
/// Maps `(x, y)` to `(xx * x + xy * y + x0, yx * x + yy * y + y0)`.
/// Plain value type; passed to the library by pointer, never owned by it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matrix {
    pub xx: f64,
    pub yx: f64,
    pub xy: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Matrix {
    pub fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_matrix_init(&mut m, xx, yx, xy, yy, x0, y0) };
        m
    }

    pub fn identity() -> Self {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_matrix_init_identity(&mut m) };
        m
    }

    pub fn from_translate(tx: f64, ty: f64) -> Self {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_matrix_init_translate(&mut m, tx, ty) };
        m
    }

    pub fn from_scale(sx: f64, sy: f64) -> Self {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_matrix_init_scale(&mut m, sx, sy) };
        m
    }

    pub fn from_rotate(radians: f64) -> Self {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_matrix_init_rotate(&mut m, radians) };
        m
    }

    /// Apply a translation before this transformation.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        unsafe { ffi::cairo_matrix_translate(self, tx, ty) };
    }

    /// Apply a scale before this transformation.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        unsafe { ffi::cairo_matrix_scale(self, sx, sy) };
    }

    /// Apply a rotation before this transformation.
    pub fn rotate(&mut self, radians: f64) {
        unsafe { ffi::cairo_matrix_rotate(self, radians) };
    }

    /// Invert in place. Fails with [`Status::InvalidMatrix`] if the
    /// matrix is singular.
    pub fn invert(&mut self) -> Result<()> {
        let status = unsafe { ffi::cairo_matrix_invert(self) };
        Status::from_raw(status).to_result()
    }

    /// Transform `d` as a distance: the translation part is ignored.
    pub fn transform_distance(&self, d: Vec2F) -> Vec2F {
        let mut dx = d.x;
        let mut dy = d.y;
        unsafe { ffi::cairo_matrix_transform_distance(self, &mut dx, &mut dy) };
        Vec2F { x: dx, y: dy }
    }

    /// Transform `p` as a point.
    pub fn transform_point(&self, p: Vec2F) -> Vec2F {
        let mut x = p.x;
        let mut y = p.y;
        unsafe { ffi::cairo_matrix_transform_point(self, &mut x, &mut y) };
        Vec2F { x, y }
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    /// The transformation applying `self` first, then `rhs`.
    fn mul(self, rhs: Matrix) -> Matrix {
        let mut result = Matrix::default();
        unsafe { ffi::cairo_matrix_multiply(&mut result, &self, &rhs) };
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_moves_points_not_distances() {
        let m = Matrix::from_translate(10.0, -3.0);
        let p = Vec2F { x: 1.0, y: 2.0 };
        assert_eq!(m.transform_point(p), Vec2F { x: 11.0, y: -1.0 });
        assert_eq!(m.transform_distance(p), p);
    }

    #[test]
    fn multiply_applies_left_operand_first() {
        let m = Matrix::from_scale(2.0, 2.0) * Matrix::from_translate(1.0, 0.0);
        assert_eq!(
            m.transform_point(Vec2F { x: 3.0, y: 3.0 }),
            Vec2F { x: 7.0, y: 6.0 }
        );
    }

    #[test]
    fn invert_undoes_the_transformation() {
        let mut m = Matrix::from_scale(2.0, 4.0);
        m.invert().unwrap();
        assert_eq!(
            m.transform_point(Vec2F { x: 2.0, y: 4.0 }),
            Vec2F { x: 1.0, y: 1.0 }
        );
    }

    #[test]
    fn singular_matrix_does_not_invert() {
        let mut m = Matrix::new(0.0, 0.0, 0.0, 0.0, 5.0, 5.0);
        let err = m.invert().unwrap_err();
        assert_eq!(err.status(), Some(Status::InvalidMatrix));
    }
}
