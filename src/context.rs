//! The drawing context, where paths, paint and text come together.

use std::ffi::CString;
use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};
use crate::ffi::{self, CairoContext, ContextKind, Counted};
use crate::font::{FontFace, FontOptions, FontSlant, FontWeight, ScaledFont};
use crate::matrix::Matrix;
use crate::path::Path;
use crate::pattern::Pattern;
use crate::surface::Surface;
use crate::types::{
    Antialias, Color, Content, FillRule, FontExtents, Glyph, LineCap, LineJoin, Operator, RectF,
    TextCluster, TextClusterFlags, TextExtents, Vec2F,
};
use crate::Status;

/// Tag name for destinations, usable with [`Context::tag_begin`].
pub const TAG_DEST: &str = "cairo.dest";
/// Tag name for hyperlinks, usable with [`Context::tag_begin`].
pub const TAG_LINK: &str = "Link";

/// The drawing context (`cairo_t`).
///
/// A context draws onto the surface it was created for, carrying a
/// stack of graphics state (source, transformation, clip, line style,
/// font). Cloning shares the underlying context through its reference
/// count.
#[derive(Clone, Debug)]
pub struct Context {
    handle: Counted<ContextKind>,
}

impl Context {
    pub fn new(target: &Surface) -> Self {
        Self {
            handle: unsafe { Counted::from_raw(ffi::cairo_create(target.as_ptr())) },
        }
    }

    pub fn as_ptr(&self) -> *mut CairoContext {
        self.handle.as_ptr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_status(self.as_ptr()) })
    }

    /// The surface this context draws onto.
    pub fn target(&self) -> Surface {
        unsafe { Surface::from_raw_borrowed(ffi::cairo_get_target(self.as_ptr())) }
    }

    pub fn save(&mut self) {
        unsafe { ffi::cairo_save(self.as_ptr()) };
    }

    pub fn restore(&mut self) {
        unsafe { ffi::cairo_restore(self.as_ptr()) };
    }

    /// Save the graphics state and restore it when the returned guard
    /// goes out of scope.
    pub fn save_scope(&mut self) -> SaveScope<'_> {
        self.save();
        SaveScope { cr: self }
    }

    // Groups

    pub fn push_group(&mut self) {
        unsafe { ffi::cairo_push_group(self.as_ptr()) };
    }

    pub fn push_group_with_content(&mut self, content: Content) {
        unsafe { ffi::cairo_push_group_with_content(self.as_ptr(), content.to_raw()) };
    }

    /// End the current group and return what was drawn into it as a
    /// pattern.
    pub fn pop_group(&mut self) -> Pattern {
        unsafe { Pattern::from_raw(ffi::cairo_pop_group(self.as_ptr())) }
    }

    pub fn pop_group_to_source(&mut self) {
        unsafe { ffi::cairo_pop_group_to_source(self.as_ptr()) };
    }

    pub fn group_target(&self) -> Surface {
        unsafe { Surface::from_raw_borrowed(ffi::cairo_get_group_target(self.as_ptr())) }
    }

    // Graphics state

    pub fn set_operator(&mut self, op: Operator) {
        unsafe { ffi::cairo_set_operator(self.as_ptr(), op.to_raw()) };
    }

    pub fn operator(&self) -> Operator {
        Operator::from_raw(unsafe { ffi::cairo_get_operator(self.as_ptr()) })
    }

    pub fn set_source(&mut self, source: &Pattern) {
        unsafe { ffi::cairo_set_source(self.as_ptr(), source.as_ptr()) };
    }

    /// The current source pattern.
    pub fn source(&self) -> Pattern {
        unsafe { Pattern::from_raw_borrowed(ffi::cairo_get_source(self.as_ptr())) }
    }

    /// Use `surface` as the source, placing its origin at `(x, y)` in
    /// user space.
    pub fn set_source_surface(&mut self, surface: &Surface, x: f64, y: f64) {
        unsafe { ffi::cairo_set_source_surface(self.as_ptr(), surface.as_ptr(), x, y) };
    }

    pub fn set_source_rgb(&mut self, red: f64, green: f64, blue: f64) {
        unsafe { ffi::cairo_set_source_rgb(self.as_ptr(), red, green, blue) };
    }

    pub fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64) {
        unsafe { ffi::cairo_set_source_rgba(self.as_ptr(), red, green, blue, alpha) };
    }

    pub fn set_source_color(&mut self, color: Color) {
        self.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    pub fn set_tolerance(&mut self, tolerance: f64) {
        unsafe { ffi::cairo_set_tolerance(self.as_ptr(), tolerance) };
    }

    pub fn tolerance(&self) -> f64 {
        unsafe { ffi::cairo_get_tolerance(self.as_ptr()) }
    }

    pub fn set_antialias(&mut self, antialias: Antialias) {
        unsafe { ffi::cairo_set_antialias(self.as_ptr(), antialias.to_raw()) };
    }

    pub fn antialias(&self) -> Antialias {
        Antialias::from_raw(unsafe { ffi::cairo_get_antialias(self.as_ptr()) })
    }

    pub fn set_fill_rule(&mut self, fill_rule: FillRule) {
        unsafe { ffi::cairo_set_fill_rule(self.as_ptr(), fill_rule.to_raw()) };
    }

    pub fn fill_rule(&self) -> FillRule {
        FillRule::from_raw(unsafe { ffi::cairo_get_fill_rule(self.as_ptr()) })
    }

    pub fn set_line_width(&mut self, width: f64) {
        unsafe { ffi::cairo_set_line_width(self.as_ptr(), width) };
    }

    pub fn line_width(&self) -> f64 {
        unsafe { ffi::cairo_get_line_width(self.as_ptr()) }
    }

    pub fn set_line_cap(&mut self, line_cap: LineCap) {
        unsafe { ffi::cairo_set_line_cap(self.as_ptr(), line_cap.to_raw()) };
    }

    pub fn line_cap(&self) -> LineCap {
        LineCap::from_raw(unsafe { ffi::cairo_get_line_cap(self.as_ptr()) })
    }

    pub fn set_line_join(&mut self, line_join: LineJoin) {
        unsafe { ffi::cairo_set_line_join(self.as_ptr(), line_join.to_raw()) };
    }

    pub fn line_join(&self) -> LineJoin {
        LineJoin::from_raw(unsafe { ffi::cairo_get_line_join(self.as_ptr()) })
    }

    /// Set the dash pattern for stroking. An empty slice turns dashing
    /// off. All-zero dashes put the context in the
    /// [`Status::InvalidDash`] error state.
    pub fn set_dash(&mut self, dashes: &[f64], offset: f64) {
        unsafe {
            ffi::cairo_set_dash(self.as_ptr(), dashes.as_ptr(), dashes.len() as i32, offset)
        };
    }

    pub fn dash_count(&self) -> usize {
        unsafe { ffi::cairo_get_dash_count(self.as_ptr()) as usize }
    }

    /// The current dash pattern and offset.
    pub fn dash(&self) -> (Vec<f64>, f64) {
        let mut dashes = vec![0.0; self.dash_count()];
        let mut offset = 0.0;
        unsafe { ffi::cairo_get_dash(self.as_ptr(), dashes.as_mut_ptr(), &mut offset) };
        (dashes, offset)
    }

    pub fn set_miter_limit(&mut self, limit: f64) {
        unsafe { ffi::cairo_set_miter_limit(self.as_ptr(), limit) };
    }

    pub fn miter_limit(&self) -> f64 {
        unsafe { ffi::cairo_get_miter_limit(self.as_ptr()) }
    }

    // Transformations

    pub fn translate(&mut self, tx: f64, ty: f64) {
        unsafe { ffi::cairo_translate(self.as_ptr(), tx, ty) };
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        unsafe { ffi::cairo_scale(self.as_ptr(), sx, sy) };
    }

    pub fn rotate(&mut self, angle: f64) {
        unsafe { ffi::cairo_rotate(self.as_ptr(), angle) };
    }

    pub fn transform(&mut self, matrix: &Matrix) {
        unsafe { ffi::cairo_transform(self.as_ptr(), matrix) };
    }

    pub fn set_matrix(&mut self, matrix: &Matrix) {
        unsafe { ffi::cairo_set_matrix(self.as_ptr(), matrix) };
    }

    pub fn matrix(&self) -> Matrix {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_get_matrix(self.as_ptr(), &mut m) };
        m
    }

    pub fn identity_matrix(&mut self) {
        unsafe { ffi::cairo_identity_matrix(self.as_ptr()) };
    }

    pub fn user_to_device(&self, point: Vec2F) -> Vec2F {
        let mut p = point;
        unsafe { ffi::cairo_user_to_device(self.as_ptr(), &mut p.x, &mut p.y) };
        p
    }

    pub fn user_to_device_distance(&self, distance: Vec2F) -> Vec2F {
        let mut d = distance;
        unsafe { ffi::cairo_user_to_device_distance(self.as_ptr(), &mut d.x, &mut d.y) };
        d
    }

    pub fn device_to_user(&self, point: Vec2F) -> Vec2F {
        let mut p = point;
        unsafe { ffi::cairo_device_to_user(self.as_ptr(), &mut p.x, &mut p.y) };
        p
    }

    pub fn device_to_user_distance(&self, distance: Vec2F) -> Vec2F {
        let mut d = distance;
        unsafe { ffi::cairo_device_to_user_distance(self.as_ptr(), &mut d.x, &mut d.y) };
        d
    }

    // Path building

    pub fn new_path(&mut self) {
        unsafe { ffi::cairo_new_path(self.as_ptr()) };
    }

    pub fn new_sub_path(&mut self) {
        unsafe { ffi::cairo_new_sub_path(self.as_ptr()) };
    }

    pub fn move_to(&mut self, point: Vec2F) {
        unsafe { ffi::cairo_move_to(self.as_ptr(), point.x, point.y) };
    }

    pub fn line_to(&mut self, point: Vec2F) {
        unsafe { ffi::cairo_line_to(self.as_ptr(), point.x, point.y) };
    }

    pub fn curve_to(&mut self, p1: Vec2F, p2: Vec2F, p3: Vec2F) {
        unsafe { ffi::cairo_curve_to(self.as_ptr(), p1.x, p1.y, p2.x, p2.y, p3.x, p3.y) };
    }

    /// Add a clockwise arc around `center`, from `angle1` to `angle2`
    /// in radians.
    pub fn arc(&mut self, center: Vec2F, radius: f64, angle1: f64, angle2: f64) {
        unsafe { ffi::cairo_arc(self.as_ptr(), center.x, center.y, radius, angle1, angle2) };
    }

    pub fn arc_negative(&mut self, center: Vec2F, radius: f64, angle1: f64, angle2: f64) {
        unsafe {
            ffi::cairo_arc_negative(self.as_ptr(), center.x, center.y, radius, angle1, angle2)
        };
    }

    pub fn rel_move_to(&mut self, delta: Vec2F) {
        unsafe { ffi::cairo_rel_move_to(self.as_ptr(), delta.x, delta.y) };
    }

    pub fn rel_line_to(&mut self, delta: Vec2F) {
        unsafe { ffi::cairo_rel_line_to(self.as_ptr(), delta.x, delta.y) };
    }

    pub fn rel_curve_to(&mut self, d1: Vec2F, d2: Vec2F, d3: Vec2F) {
        unsafe { ffi::cairo_rel_curve_to(self.as_ptr(), d1.x, d1.y, d2.x, d2.y, d3.x, d3.y) };
    }

    pub fn rectangle(&mut self, rect: RectF) {
        unsafe { ffi::cairo_rectangle(self.as_ptr(), rect.x, rect.y, rect.w, rect.h) };
    }

    pub fn close_path(&mut self) {
        unsafe { ffi::cairo_close_path(self.as_ptr()) };
    }

    pub fn path_extents(&self) -> RectF {
        extents_rect(|x1, y1, x2, y2| unsafe {
            ffi::cairo_path_extents(self.as_ptr(), x1, y1, x2, y2)
        })
    }

    pub fn has_current_point(&self) -> bool {
        unsafe { ffi::cairo_has_current_point(self.as_ptr()) != 0 }
    }

    /// The current point of the path, if there is one.
    pub fn current_point(&self) -> Option<Vec2F> {
        if !self.has_current_point() {
            return None;
        }
        let mut p = Vec2F::default();
        unsafe { ffi::cairo_get_current_point(self.as_ptr(), &mut p.x, &mut p.y) };
        Some(p)
    }

    /// A copy of the current path.
    pub fn copy_path(&self) -> Path {
        unsafe { Path::from_raw(ffi::cairo_copy_path(self.as_ptr())) }
    }

    /// A copy of the current path with curves flattened to line
    /// segments within the current tolerance.
    pub fn copy_path_flat(&self) -> Path {
        unsafe { Path::from_raw(ffi::cairo_copy_path_flat(self.as_ptr())) }
    }

    pub fn append_path(&mut self, path: &Path) {
        unsafe { ffi::cairo_append_path(self.as_ptr(), path.as_ptr()) };
    }

    // Painting

    pub fn paint(&mut self) {
        unsafe { ffi::cairo_paint(self.as_ptr()) };
    }

    pub fn paint_with_alpha(&mut self, alpha: f64) {
        unsafe { ffi::cairo_paint_with_alpha(self.as_ptr(), alpha) };
    }

    /// Paint the current source using the alpha channel of `pattern`
    /// as a mask.
    pub fn mask(&mut self, pattern: &Pattern) {
        unsafe { ffi::cairo_mask(self.as_ptr(), pattern.as_ptr()) };
    }

    pub fn mask_surface(&mut self, surface: &Surface, surface_x: f64, surface_y: f64) {
        unsafe { ffi::cairo_mask_surface(self.as_ptr(), surface.as_ptr(), surface_x, surface_y) };
    }

    pub fn stroke(&mut self) {
        unsafe { ffi::cairo_stroke(self.as_ptr()) };
    }

    pub fn stroke_preserve(&mut self) {
        unsafe { ffi::cairo_stroke_preserve(self.as_ptr()) };
    }

    pub fn fill(&mut self) {
        unsafe { ffi::cairo_fill(self.as_ptr()) };
    }

    pub fn fill_preserve(&mut self) {
        unsafe { ffi::cairo_fill_preserve(self.as_ptr()) };
    }

    pub fn copy_page(&mut self) {
        unsafe { ffi::cairo_copy_page(self.as_ptr()) };
    }

    pub fn show_page(&mut self) {
        unsafe { ffi::cairo_show_page(self.as_ptr()) };
    }

    // Hit testing and extents

    pub fn in_stroke(&self, point: Vec2F) -> bool {
        unsafe { ffi::cairo_in_stroke(self.as_ptr(), point.x, point.y) != 0 }
    }

    pub fn in_fill(&self, point: Vec2F) -> bool {
        unsafe { ffi::cairo_in_fill(self.as_ptr(), point.x, point.y) != 0 }
    }

    pub fn in_clip(&self, point: Vec2F) -> bool {
        unsafe { ffi::cairo_in_clip(self.as_ptr(), point.x, point.y) != 0 }
    }

    pub fn stroke_extents(&self) -> RectF {
        extents_rect(|x1, y1, x2, y2| unsafe {
            ffi::cairo_stroke_extents(self.as_ptr(), x1, y1, x2, y2)
        })
    }

    pub fn fill_extents(&self) -> RectF {
        extents_rect(|x1, y1, x2, y2| unsafe {
            ffi::cairo_fill_extents(self.as_ptr(), x1, y1, x2, y2)
        })
    }

    // Clipping

    pub fn reset_clip(&mut self) {
        unsafe { ffi::cairo_reset_clip(self.as_ptr()) };
    }

    pub fn clip(&mut self) {
        unsafe { ffi::cairo_clip(self.as_ptr()) };
    }

    pub fn clip_preserve(&mut self) {
        unsafe { ffi::cairo_clip_preserve(self.as_ptr()) };
    }

    pub fn clip_extents(&self) -> RectF {
        extents_rect(|x1, y1, x2, y2| unsafe {
            ffi::cairo_clip_extents(self.as_ptr(), x1, y1, x2, y2)
        })
    }

    /// The current clip region as a list of rectangles in user space.
    /// Fails with [`Status::ClipNotRepresentable`] when the clip is not
    /// an axis-aligned rectangle set.
    pub fn clip_rectangles(&self) -> Result<Vec<RectF>> {
        let raw = unsafe { ffi::cairo_copy_clip_rectangle_list(self.as_ptr()) };
        let list = unsafe { &*raw };
        let result = match Status::from_raw(list.status) {
            Status::Success => {
                // An empty clip comes back as a zero count with a null
                // rectangle pointer.
                if list.num_rectangles <= 0 || list.rectangles.is_null() {
                    Ok(Vec::new())
                } else {
                    let rects = unsafe {
                        std::slice::from_raw_parts(list.rectangles, list.num_rectangles as usize)
                    };
                    Ok(rects.iter().copied().map(RectF::from).collect())
                }
            }
            status => Err(Error::Cairo(status)),
        };
        unsafe { ffi::cairo_rectangle_list_destroy(raw) };
        result
    }

    // Logical structure tags

    /// Begin a logical structure tag, e.g. [`TAG_LINK`] with
    /// `attributes` like `"uri='https://example.org'"`.
    pub fn tag_begin(&mut self, tag_name: &str, attributes: &str) -> Result<()> {
        let tag_name = CString::new(tag_name)?;
        let attributes = CString::new(attributes)?;
        unsafe { ffi::cairo_tag_begin(self.as_ptr(), tag_name.as_ptr(), attributes.as_ptr()) };
        Ok(())
    }

    pub fn tag_end(&mut self, tag_name: &str) -> Result<()> {
        let tag_name = CString::new(tag_name)?;
        unsafe { ffi::cairo_tag_end(self.as_ptr(), tag_name.as_ptr()) };
        Ok(())
    }

    // Text

    /// Select a font with the simple "toy" API.
    pub fn select_font_face(
        &mut self,
        family: &str,
        slant: FontSlant,
        weight: FontWeight,
    ) -> Result<()> {
        let family = CString::new(family)?;
        unsafe {
            ffi::cairo_select_font_face(
                self.as_ptr(),
                family.as_ptr(),
                slant.to_raw(),
                weight.to_raw(),
            )
        };
        Ok(())
    }

    pub fn set_font_size(&mut self, size: f64) {
        unsafe { ffi::cairo_set_font_size(self.as_ptr(), size) };
    }

    pub fn set_font_matrix(&mut self, matrix: &Matrix) {
        unsafe { ffi::cairo_set_font_matrix(self.as_ptr(), matrix) };
    }

    pub fn font_matrix(&self) -> Matrix {
        let mut m = Matrix::default();
        unsafe { ffi::cairo_get_font_matrix(self.as_ptr(), &mut m) };
        m
    }

    pub fn set_font_options(&mut self, options: &FontOptions) {
        unsafe { ffi::cairo_set_font_options(self.as_ptr(), options.as_ptr()) };
    }

    pub fn font_options(&self) -> FontOptions {
        let options = FontOptions::new();
        unsafe { ffi::cairo_get_font_options(self.as_ptr(), options.as_ptr()) };
        options
    }

    pub fn set_font_face(&mut self, font_face: &FontFace) {
        unsafe { ffi::cairo_set_font_face(self.as_ptr(), font_face.as_ptr()) };
    }

    pub fn font_face(&self) -> FontFace {
        unsafe { FontFace::from_raw_borrowed(ffi::cairo_get_font_face(self.as_ptr())) }
    }

    pub fn set_scaled_font(&mut self, scaled_font: &ScaledFont) {
        unsafe { ffi::cairo_set_scaled_font(self.as_ptr(), scaled_font.as_ptr()) };
    }

    pub fn scaled_font(&self) -> ScaledFont {
        unsafe { ScaledFont::from_raw_borrowed(ffi::cairo_get_scaled_font(self.as_ptr())) }
    }

    /// Draw `text` with the current font, advancing the current point.
    pub fn show_text(&mut self, text: &str) -> Result<()> {
        let text = CString::new(text)?;
        unsafe { ffi::cairo_show_text(self.as_ptr(), text.as_ptr()) };
        Ok(())
    }

    pub fn show_glyphs(&mut self, glyphs: &[Glyph]) {
        unsafe { ffi::cairo_show_glyphs(self.as_ptr(), glyphs.as_ptr(), glyphs.len() as i32) };
    }

    /// Draw pre-shaped glyphs while retaining the mapping back to the
    /// text, for backends that can embed it.
    pub fn show_text_glyphs(
        &mut self,
        text: &str,
        glyphs: &[Glyph],
        clusters: &[TextCluster],
        cluster_flags: TextClusterFlags,
    ) {
        unsafe {
            ffi::cairo_show_text_glyphs(
                self.as_ptr(),
                text.as_ptr() as *const _,
                text.len() as i32,
                glyphs.as_ptr(),
                glyphs.len() as i32,
                clusters.as_ptr(),
                clusters.len() as i32,
                cluster_flags.to_raw(),
            )
        };
    }

    /// Add the outlines of `text` to the current path.
    pub fn text_path(&mut self, text: &str) -> Result<()> {
        let text = CString::new(text)?;
        unsafe { ffi::cairo_text_path(self.as_ptr(), text.as_ptr()) };
        Ok(())
    }

    pub fn glyph_path(&mut self, glyphs: &[Glyph]) {
        unsafe { ffi::cairo_glyph_path(self.as_ptr(), glyphs.as_ptr(), glyphs.len() as i32) };
    }

    pub fn text_extents(&self, text: &str) -> Result<TextExtents> {
        let text = CString::new(text)?;
        let mut extents = TextExtents::default();
        unsafe { ffi::cairo_text_extents(self.as_ptr(), text.as_ptr(), &mut extents) };
        Ok(extents)
    }

    pub fn glyph_extents(&self, glyphs: &[Glyph]) -> TextExtents {
        let mut extents = TextExtents::default();
        unsafe {
            ffi::cairo_glyph_extents(
                self.as_ptr(),
                glyphs.as_ptr(),
                glyphs.len() as i32,
                &mut extents,
            )
        };
        extents
    }

    pub fn font_extents(&self) -> FontExtents {
        let mut extents = FontExtents::default();
        unsafe { ffi::cairo_font_extents(self.as_ptr(), &mut extents) };
        extents
    }
}

/// Restores the saved graphics state on drop. Created by
/// [`Context::save_scope`].
pub struct SaveScope<'a> {
    cr: &'a mut Context,
}

impl Deref for SaveScope<'_> {
    type Target = Context;

    fn deref(&self) -> &Context {
        self.cr
    }
}

impl DerefMut for SaveScope<'_> {
    fn deref_mut(&mut self) -> &mut Context {
        self.cr
    }
}

impl Drop for SaveScope<'_> {
    fn drop(&mut self) {
        self.cr.restore();
    }
}

/// Run a `(x1, y1) .. (x2, y2)` extents query and fold the answer into
/// a rectangle.
fn extents_rect(query: impl FnOnce(&mut f64, &mut f64, &mut f64, &mut f64)) -> RectF {
    let (mut x1, mut y1, mut x2, mut y2) = (0.0, 0.0, 0.0, 0.0);
    query(&mut x1, &mut y1, &mut x2, &mut y2);
    RectF {
        x: x1,
        y: y1,
        w: x2 - x1,
        h: y2 - y1,
    }
}
