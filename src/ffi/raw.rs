//! Raw C function bindings for libcairo.
//!
//! This module contains the direct FFI bindings to the C API.
//! Users should prefer the safe Rust wrappers in the parent modules.

use std::os::raw::{c_char, c_double, c_int, c_uchar, c_uint, c_ulong};

use crate::matrix::Matrix;
use crate::types::{FontExtents, Glyph, TextCluster, TextExtents};

/// C boolean (`cairo_bool_t`): zero is false, anything else is true.
pub type CairoBool = c_int;

/// Status code returned by C functions (`cairo_status_t`).
pub type CairoStatus = c_int;

pub const CAIRO_STATUS_SUCCESS: CairoStatus = 0;

// Opaque resource types. Only ever handled through pointers.
macro_rules! opaque {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(C)]
        pub struct $name {
            _opaque: [u8; 0],
        }
    };
}

opaque!(
    /// `cairo_t`, the drawing context.
    CairoContext
);
opaque!(
    /// `cairo_surface_t`.
    CairoSurface
);
opaque!(
    /// `cairo_pattern_t`.
    CairoPattern
);
opaque!(
    /// `cairo_device_t`.
    CairoDevice
);
opaque!(
    /// `cairo_font_face_t`.
    CairoFontFace
);
opaque!(
    /// `cairo_scaled_font_t`.
    CairoScaledFont
);
opaque!(
    /// `cairo_font_options_t`.
    CairoFontOptions
);

/// One element of a path's data array (`cairo_path_data_t`).
///
/// The first element of each path operation is a header; the following
/// `length - 1` elements are points.
#[repr(C)]
#[derive(Clone, Copy)]
pub union CairoPathData {
    pub header: CairoPathDataHeader,
    pub point: CairoPathDataPoint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct CairoPathDataHeader {
    pub data_type: c_int,
    pub length: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct CairoPathDataPoint {
    pub x: c_double,
    pub y: c_double,
}

/// Snapshot of a path (`cairo_path_t`). Freed with [`cairo_path_destroy`].
#[repr(C)]
pub struct CairoPath {
    pub status: CairoStatus,
    pub data: *mut CairoPathData,
    pub num_data: c_int,
}

/// `cairo_rectangle_t` (doubles, unlike `cairo_rectangle_int_t`).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct CairoRectangle {
    pub x: c_double,
    pub y: c_double,
    pub width: c_double,
    pub height: c_double,
}

/// `cairo_rectangle_list_t`, as returned by `cairo_copy_clip_rectangle_list`.
#[repr(C)]
pub struct CairoRectangleList {
    pub status: CairoStatus,
    pub rectangles: *mut CairoRectangle,
    pub num_rectangles: c_int,
}

// External C functions
extern "C" {
    // Library version
    pub fn cairo_version() -> c_int;
    pub fn cairo_version_string() -> *const c_char;
    pub fn cairo_status_to_string(status: CairoStatus) -> *const c_char;
    pub fn cairo_debug_reset_static_data();

    // Matrix
    pub fn cairo_matrix_init(
        matrix: *mut Matrix,
        xx: c_double,
        yx: c_double,
        xy: c_double,
        yy: c_double,
        x0: c_double,
        y0: c_double,
    );
    pub fn cairo_matrix_init_identity(matrix: *mut Matrix);
    pub fn cairo_matrix_init_translate(matrix: *mut Matrix, tx: c_double, ty: c_double);
    pub fn cairo_matrix_init_scale(matrix: *mut Matrix, sx: c_double, sy: c_double);
    pub fn cairo_matrix_init_rotate(matrix: *mut Matrix, radians: c_double);
    pub fn cairo_matrix_translate(matrix: *mut Matrix, tx: c_double, ty: c_double);
    pub fn cairo_matrix_scale(matrix: *mut Matrix, sx: c_double, sy: c_double);
    pub fn cairo_matrix_rotate(matrix: *mut Matrix, radians: c_double);
    pub fn cairo_matrix_invert(matrix: *mut Matrix) -> CairoStatus;
    pub fn cairo_matrix_multiply(result: *mut Matrix, a: *const Matrix, b: *const Matrix);
    pub fn cairo_matrix_transform_distance(
        matrix: *const Matrix,
        dx: *mut c_double,
        dy: *mut c_double,
    );
    pub fn cairo_matrix_transform_point(matrix: *const Matrix, x: *mut c_double, y: *mut c_double);

    // Font options
    pub fn cairo_font_options_create() -> *mut CairoFontOptions;
    pub fn cairo_font_options_copy(original: *const CairoFontOptions) -> *mut CairoFontOptions;
    pub fn cairo_font_options_destroy(options: *mut CairoFontOptions);
    pub fn cairo_font_options_status(options: *mut CairoFontOptions) -> CairoStatus;
    pub fn cairo_font_options_merge(options: *mut CairoFontOptions, other: *const CairoFontOptions);
    pub fn cairo_font_options_equal(
        options: *const CairoFontOptions,
        other: *const CairoFontOptions,
    ) -> CairoBool;
    pub fn cairo_font_options_hash(options: *const CairoFontOptions) -> c_ulong;
    pub fn cairo_font_options_set_antialias(options: *mut CairoFontOptions, antialias: c_int);
    pub fn cairo_font_options_get_antialias(options: *const CairoFontOptions) -> c_int;
    pub fn cairo_font_options_set_subpixel_order(options: *mut CairoFontOptions, order: c_int);
    pub fn cairo_font_options_get_subpixel_order(options: *const CairoFontOptions) -> c_int;
    pub fn cairo_font_options_set_hint_style(options: *mut CairoFontOptions, style: c_int);
    pub fn cairo_font_options_get_hint_style(options: *const CairoFontOptions) -> c_int;
    pub fn cairo_font_options_set_hint_metrics(options: *mut CairoFontOptions, metrics: c_int);
    pub fn cairo_font_options_get_hint_metrics(options: *const CairoFontOptions) -> c_int;
    pub fn cairo_font_options_set_variations(
        options: *mut CairoFontOptions,
        variations: *const c_char,
    );
    pub fn cairo_font_options_get_variations(options: *mut CairoFontOptions) -> *const c_char;

    // Font faces
    pub fn cairo_font_face_reference(font_face: *mut CairoFontFace) -> *mut CairoFontFace;
    pub fn cairo_font_face_destroy(font_face: *mut CairoFontFace);
    pub fn cairo_font_face_get_reference_count(font_face: *mut CairoFontFace) -> c_uint;
    pub fn cairo_font_face_status(font_face: *mut CairoFontFace) -> CairoStatus;
    pub fn cairo_font_face_get_type(font_face: *mut CairoFontFace) -> c_int;

    pub fn cairo_toy_font_face_create(
        family: *const c_char,
        slant: c_int,
        weight: c_int,
    ) -> *mut CairoFontFace;
    pub fn cairo_toy_font_face_get_family(font_face: *mut CairoFontFace) -> *const c_char;
    pub fn cairo_toy_font_face_get_slant(font_face: *mut CairoFontFace) -> c_int;
    pub fn cairo_toy_font_face_get_weight(font_face: *mut CairoFontFace) -> c_int;

    // Scaled fonts
    pub fn cairo_scaled_font_create(
        font_face: *mut CairoFontFace,
        font_matrix: *const Matrix,
        ctm: *const Matrix,
        options: *const CairoFontOptions,
    ) -> *mut CairoScaledFont;
    pub fn cairo_scaled_font_reference(scaled_font: *mut CairoScaledFont)
        -> *mut CairoScaledFont;
    pub fn cairo_scaled_font_destroy(scaled_font: *mut CairoScaledFont);
    pub fn cairo_scaled_font_get_reference_count(scaled_font: *mut CairoScaledFont) -> c_uint;
    pub fn cairo_scaled_font_status(scaled_font: *mut CairoScaledFont) -> CairoStatus;
    pub fn cairo_scaled_font_get_type(scaled_font: *mut CairoScaledFont) -> c_int;
    pub fn cairo_scaled_font_extents(
        scaled_font: *mut CairoScaledFont,
        extents: *mut FontExtents,
    );
    pub fn cairo_scaled_font_text_extents(
        scaled_font: *mut CairoScaledFont,
        utf8: *const c_char,
        extents: *mut TextExtents,
    );
    pub fn cairo_scaled_font_glyph_extents(
        scaled_font: *mut CairoScaledFont,
        glyphs: *const Glyph,
        num_glyphs: c_int,
        extents: *mut TextExtents,
    );
    pub fn cairo_scaled_font_text_to_glyphs(
        scaled_font: *mut CairoScaledFont,
        x: c_double,
        y: c_double,
        utf8: *const c_char,
        utf8_len: c_int,
        glyphs: *mut *mut Glyph,
        num_glyphs: *mut c_int,
        clusters: *mut *mut TextCluster,
        num_clusters: *mut c_int,
        cluster_flags: *mut c_int,
    ) -> CairoStatus;
    pub fn cairo_scaled_font_get_font_face(
        scaled_font: *mut CairoScaledFont,
    ) -> *mut CairoFontFace;
    pub fn cairo_scaled_font_get_font_matrix(
        scaled_font: *mut CairoScaledFont,
        font_matrix: *mut Matrix,
    );
    pub fn cairo_scaled_font_get_ctm(scaled_font: *mut CairoScaledFont, ctm: *mut Matrix);
    pub fn cairo_scaled_font_get_scale_matrix(
        scaled_font: *mut CairoScaledFont,
        scale_matrix: *mut Matrix,
    );
    pub fn cairo_scaled_font_get_font_options(
        scaled_font: *mut CairoScaledFont,
        options: *mut CairoFontOptions,
    );

    pub fn cairo_glyph_free(glyphs: *mut Glyph);
    pub fn cairo_text_cluster_free(clusters: *mut TextCluster);

    // Paths
    pub fn cairo_path_destroy(path: *mut CairoPath);

    // Patterns
    pub fn cairo_pattern_reference(pattern: *mut CairoPattern) -> *mut CairoPattern;
    pub fn cairo_pattern_destroy(pattern: *mut CairoPattern);
    pub fn cairo_pattern_get_reference_count(pattern: *mut CairoPattern) -> c_uint;
    pub fn cairo_pattern_status(pattern: *mut CairoPattern) -> CairoStatus;
    pub fn cairo_pattern_get_type(pattern: *mut CairoPattern) -> c_int;
    pub fn cairo_pattern_set_matrix(pattern: *mut CairoPattern, matrix: *const Matrix);
    pub fn cairo_pattern_get_matrix(pattern: *mut CairoPattern, matrix: *mut Matrix);
    pub fn cairo_pattern_set_extend(pattern: *mut CairoPattern, extend: c_int);
    pub fn cairo_pattern_get_extend(pattern: *mut CairoPattern) -> c_int;
    pub fn cairo_pattern_set_filter(pattern: *mut CairoPattern, filter: c_int);
    pub fn cairo_pattern_get_filter(pattern: *mut CairoPattern) -> c_int;

    pub fn cairo_pattern_create_rgb(
        red: c_double,
        green: c_double,
        blue: c_double,
    ) -> *mut CairoPattern;
    pub fn cairo_pattern_create_rgba(
        red: c_double,
        green: c_double,
        blue: c_double,
        alpha: c_double,
    ) -> *mut CairoPattern;
    pub fn cairo_pattern_get_rgba(
        pattern: *mut CairoPattern,
        red: *mut c_double,
        green: *mut c_double,
        blue: *mut c_double,
        alpha: *mut c_double,
    ) -> CairoStatus;

    pub fn cairo_pattern_create_for_surface(surface: *mut CairoSurface) -> *mut CairoPattern;
    pub fn cairo_pattern_get_surface(
        pattern: *mut CairoPattern,
        surface: *mut *mut CairoSurface,
    ) -> CairoStatus;

    pub fn cairo_pattern_add_color_stop_rgb(
        pattern: *mut CairoPattern,
        offset: c_double,
        red: c_double,
        green: c_double,
        blue: c_double,
    );
    pub fn cairo_pattern_add_color_stop_rgba(
        pattern: *mut CairoPattern,
        offset: c_double,
        red: c_double,
        green: c_double,
        blue: c_double,
        alpha: c_double,
    );
    pub fn cairo_pattern_get_color_stop_count(
        pattern: *mut CairoPattern,
        count: *mut c_int,
    ) -> CairoStatus;
    pub fn cairo_pattern_get_color_stop_rgba(
        pattern: *mut CairoPattern,
        index: c_int,
        offset: *mut c_double,
        red: *mut c_double,
        green: *mut c_double,
        blue: *mut c_double,
        alpha: *mut c_double,
    ) -> CairoStatus;

    pub fn cairo_pattern_create_linear(
        x0: c_double,
        y0: c_double,
        x1: c_double,
        y1: c_double,
    ) -> *mut CairoPattern;
    pub fn cairo_pattern_get_linear_points(
        pattern: *mut CairoPattern,
        x0: *mut c_double,
        y0: *mut c_double,
        x1: *mut c_double,
        y1: *mut c_double,
    ) -> CairoStatus;

    pub fn cairo_pattern_create_radial(
        cx0: c_double,
        cy0: c_double,
        radius0: c_double,
        cx1: c_double,
        cy1: c_double,
        radius1: c_double,
    ) -> *mut CairoPattern;
    pub fn cairo_pattern_get_radial_circles(
        pattern: *mut CairoPattern,
        x0: *mut c_double,
        y0: *mut c_double,
        r0: *mut c_double,
        x1: *mut c_double,
        y1: *mut c_double,
        r1: *mut c_double,
    ) -> CairoStatus;

    pub fn cairo_pattern_create_mesh() -> *mut CairoPattern;
    pub fn cairo_mesh_pattern_begin_patch(pattern: *mut CairoPattern);
    pub fn cairo_mesh_pattern_end_patch(pattern: *mut CairoPattern);
    pub fn cairo_mesh_pattern_move_to(pattern: *mut CairoPattern, x: c_double, y: c_double);
    pub fn cairo_mesh_pattern_line_to(pattern: *mut CairoPattern, x: c_double, y: c_double);
    pub fn cairo_mesh_pattern_curve_to(
        pattern: *mut CairoPattern,
        x1: c_double,
        y1: c_double,
        x2: c_double,
        y2: c_double,
        x3: c_double,
        y3: c_double,
    );
    pub fn cairo_mesh_pattern_set_control_point(
        pattern: *mut CairoPattern,
        point_num: c_uint,
        x: c_double,
        y: c_double,
    );
    pub fn cairo_mesh_pattern_set_corner_color_rgb(
        pattern: *mut CairoPattern,
        corner_num: c_uint,
        red: c_double,
        green: c_double,
        blue: c_double,
    );
    pub fn cairo_mesh_pattern_set_corner_color_rgba(
        pattern: *mut CairoPattern,
        corner_num: c_uint,
        red: c_double,
        green: c_double,
        blue: c_double,
        alpha: c_double,
    );
    pub fn cairo_mesh_pattern_get_patch_count(
        pattern: *mut CairoPattern,
        count: *mut c_uint,
    ) -> CairoStatus;
    pub fn cairo_mesh_pattern_get_path(
        pattern: *mut CairoPattern,
        patch_num: c_uint,
    ) -> *mut CairoPath;
    pub fn cairo_mesh_pattern_get_corner_color_rgba(
        pattern: *mut CairoPattern,
        patch_num: c_uint,
        corner_num: c_uint,
        red: *mut c_double,
        green: *mut c_double,
        blue: *mut c_double,
        alpha: *mut c_double,
    ) -> CairoStatus;
    pub fn cairo_mesh_pattern_get_control_point(
        pattern: *mut CairoPattern,
        patch_num: c_uint,
        point_num: c_uint,
        x: *mut c_double,
        y: *mut c_double,
    ) -> CairoStatus;

    // Devices
    pub fn cairo_device_reference(device: *mut CairoDevice) -> *mut CairoDevice;
    pub fn cairo_device_destroy(device: *mut CairoDevice);
    pub fn cairo_device_status(device: *mut CairoDevice) -> CairoStatus;
    pub fn cairo_device_get_type(device: *mut CairoDevice) -> c_int;
    pub fn cairo_device_acquire(device: *mut CairoDevice) -> CairoStatus;
    pub fn cairo_device_release(device: *mut CairoDevice);
    pub fn cairo_device_flush(device: *mut CairoDevice);
    pub fn cairo_device_finish(device: *mut CairoDevice);

    // Surfaces
    pub fn cairo_surface_reference(surface: *mut CairoSurface) -> *mut CairoSurface;
    pub fn cairo_surface_destroy(surface: *mut CairoSurface);
    pub fn cairo_surface_get_reference_count(surface: *mut CairoSurface) -> c_uint;
    pub fn cairo_surface_status(surface: *mut CairoSurface) -> CairoStatus;
    pub fn cairo_surface_get_type(surface: *mut CairoSurface) -> c_int;
    pub fn cairo_surface_get_content(surface: *mut CairoSurface) -> c_int;
    pub fn cairo_surface_create_similar(
        other: *mut CairoSurface,
        content: c_int,
        width: c_int,
        height: c_int,
    ) -> *mut CairoSurface;
    pub fn cairo_surface_create_similar_image(
        other: *mut CairoSurface,
        format: c_int,
        width: c_int,
        height: c_int,
    ) -> *mut CairoSurface;
    pub fn cairo_surface_create_for_rectangle(
        target: *mut CairoSurface,
        x: c_double,
        y: c_double,
        width: c_double,
        height: c_double,
    ) -> *mut CairoSurface;
    pub fn cairo_surface_finish(surface: *mut CairoSurface);
    pub fn cairo_surface_get_device(surface: *mut CairoSurface) -> *mut CairoDevice;
    #[cfg(feature = "png")]
    pub fn cairo_surface_write_to_png(
        surface: *mut CairoSurface,
        filename: *const c_char,
    ) -> CairoStatus;
    pub fn cairo_surface_get_font_options(
        surface: *mut CairoSurface,
        options: *mut CairoFontOptions,
    );
    pub fn cairo_surface_flush(surface: *mut CairoSurface);
    pub fn cairo_surface_mark_dirty(surface: *mut CairoSurface);
    pub fn cairo_surface_mark_dirty_rectangle(
        surface: *mut CairoSurface,
        x: c_int,
        y: c_int,
        width: c_int,
        height: c_int,
    );
    pub fn cairo_surface_set_device_scale(
        surface: *mut CairoSurface,
        x_scale: c_double,
        y_scale: c_double,
    );
    pub fn cairo_surface_get_device_scale(
        surface: *mut CairoSurface,
        x_scale: *mut c_double,
        y_scale: *mut c_double,
    );
    pub fn cairo_surface_set_device_offset(
        surface: *mut CairoSurface,
        x_offset: c_double,
        y_offset: c_double,
    );
    pub fn cairo_surface_get_device_offset(
        surface: *mut CairoSurface,
        x_offset: *mut c_double,
        y_offset: *mut c_double,
    );
    pub fn cairo_surface_set_fallback_resolution(
        surface: *mut CairoSurface,
        x_pixels_per_inch: c_double,
        y_pixels_per_inch: c_double,
    );
    pub fn cairo_surface_get_fallback_resolution(
        surface: *mut CairoSurface,
        x_pixels_per_inch: *mut c_double,
        y_pixels_per_inch: *mut c_double,
    );
    pub fn cairo_surface_copy_page(surface: *mut CairoSurface);
    pub fn cairo_surface_show_page(surface: *mut CairoSurface);
    pub fn cairo_surface_has_show_text_glyphs(surface: *mut CairoSurface) -> CairoBool;

    // Image surfaces
    pub fn cairo_format_stride_for_width(format: c_int, width: c_int) -> c_int;
    pub fn cairo_image_surface_create(format: c_int, width: c_int, height: c_int)
        -> *mut CairoSurface;
    pub fn cairo_image_surface_create_for_data(
        data: *mut c_uchar,
        format: c_int,
        width: c_int,
        height: c_int,
        stride: c_int,
    ) -> *mut CairoSurface;
    #[cfg(feature = "png")]
    pub fn cairo_image_surface_create_from_png(filename: *const c_char) -> *mut CairoSurface;
    pub fn cairo_image_surface_get_data(surface: *mut CairoSurface) -> *mut c_uchar;
    pub fn cairo_image_surface_get_format(surface: *mut CairoSurface) -> c_int;
    pub fn cairo_image_surface_get_width(surface: *mut CairoSurface) -> c_int;
    pub fn cairo_image_surface_get_height(surface: *mut CairoSurface) -> c_int;
    pub fn cairo_image_surface_get_stride(surface: *mut CairoSurface) -> c_int;

    // Recording surfaces
    pub fn cairo_recording_surface_create(
        content: c_int,
        extents: *const CairoRectangle,
    ) -> *mut CairoSurface;
    pub fn cairo_recording_surface_ink_extents(
        surface: *mut CairoSurface,
        x0: *mut c_double,
        y0: *mut c_double,
        width: *mut c_double,
        height: *mut c_double,
    );
    pub fn cairo_recording_surface_get_extents(
        surface: *mut CairoSurface,
        extents: *mut CairoRectangle,
    ) -> CairoBool;

    // Drawing contexts
    pub fn cairo_create(target: *mut CairoSurface) -> *mut CairoContext;
    pub fn cairo_reference(cr: *mut CairoContext) -> *mut CairoContext;
    pub fn cairo_destroy(cr: *mut CairoContext);
    pub fn cairo_get_reference_count(cr: *mut CairoContext) -> c_uint;
    pub fn cairo_status(cr: *mut CairoContext) -> CairoStatus;
    pub fn cairo_get_target(cr: *mut CairoContext) -> *mut CairoSurface;
    pub fn cairo_save(cr: *mut CairoContext);
    pub fn cairo_restore(cr: *mut CairoContext);
    pub fn cairo_push_group(cr: *mut CairoContext);
    pub fn cairo_push_group_with_content(cr: *mut CairoContext, content: c_int);
    pub fn cairo_pop_group(cr: *mut CairoContext) -> *mut CairoPattern;
    pub fn cairo_pop_group_to_source(cr: *mut CairoContext);
    pub fn cairo_get_group_target(cr: *mut CairoContext) -> *mut CairoSurface;

    pub fn cairo_set_operator(cr: *mut CairoContext, op: c_int);
    pub fn cairo_get_operator(cr: *mut CairoContext) -> c_int;
    pub fn cairo_set_source(cr: *mut CairoContext, source: *mut CairoPattern);
    pub fn cairo_get_source(cr: *mut CairoContext) -> *mut CairoPattern;
    pub fn cairo_set_source_surface(
        cr: *mut CairoContext,
        surface: *mut CairoSurface,
        x: c_double,
        y: c_double,
    );
    pub fn cairo_set_source_rgb(
        cr: *mut CairoContext,
        red: c_double,
        green: c_double,
        blue: c_double,
    );
    pub fn cairo_set_source_rgba(
        cr: *mut CairoContext,
        red: c_double,
        green: c_double,
        blue: c_double,
        alpha: c_double,
    );
    pub fn cairo_set_tolerance(cr: *mut CairoContext, tolerance: c_double);
    pub fn cairo_get_tolerance(cr: *mut CairoContext) -> c_double;
    pub fn cairo_set_antialias(cr: *mut CairoContext, antialias: c_int);
    pub fn cairo_get_antialias(cr: *mut CairoContext) -> c_int;
    pub fn cairo_set_fill_rule(cr: *mut CairoContext, fill_rule: c_int);
    pub fn cairo_get_fill_rule(cr: *mut CairoContext) -> c_int;
    pub fn cairo_set_line_width(cr: *mut CairoContext, width: c_double);
    pub fn cairo_get_line_width(cr: *mut CairoContext) -> c_double;
    pub fn cairo_set_line_cap(cr: *mut CairoContext, line_cap: c_int);
    pub fn cairo_get_line_cap(cr: *mut CairoContext) -> c_int;
    pub fn cairo_set_line_join(cr: *mut CairoContext, line_join: c_int);
    pub fn cairo_get_line_join(cr: *mut CairoContext) -> c_int;
    pub fn cairo_set_dash(
        cr: *mut CairoContext,
        dashes: *const c_double,
        num_dashes: c_int,
        offset: c_double,
    );
    pub fn cairo_get_dash_count(cr: *mut CairoContext) -> c_int;
    pub fn cairo_get_dash(cr: *mut CairoContext, dashes: *mut c_double, offset: *mut c_double);
    pub fn cairo_set_miter_limit(cr: *mut CairoContext, limit: c_double);
    pub fn cairo_get_miter_limit(cr: *mut CairoContext) -> c_double;

    pub fn cairo_translate(cr: *mut CairoContext, tx: c_double, ty: c_double);
    pub fn cairo_scale(cr: *mut CairoContext, sx: c_double, sy: c_double);
    pub fn cairo_rotate(cr: *mut CairoContext, angle: c_double);
    pub fn cairo_transform(cr: *mut CairoContext, matrix: *const Matrix);
    pub fn cairo_set_matrix(cr: *mut CairoContext, matrix: *const Matrix);
    pub fn cairo_get_matrix(cr: *mut CairoContext, matrix: *mut Matrix);
    pub fn cairo_identity_matrix(cr: *mut CairoContext);
    pub fn cairo_user_to_device(cr: *mut CairoContext, x: *mut c_double, y: *mut c_double);
    pub fn cairo_user_to_device_distance(
        cr: *mut CairoContext,
        dx: *mut c_double,
        dy: *mut c_double,
    );
    pub fn cairo_device_to_user(cr: *mut CairoContext, x: *mut c_double, y: *mut c_double);
    pub fn cairo_device_to_user_distance(
        cr: *mut CairoContext,
        dx: *mut c_double,
        dy: *mut c_double,
    );

    pub fn cairo_new_path(cr: *mut CairoContext);
    pub fn cairo_new_sub_path(cr: *mut CairoContext);
    pub fn cairo_move_to(cr: *mut CairoContext, x: c_double, y: c_double);
    pub fn cairo_line_to(cr: *mut CairoContext, x: c_double, y: c_double);
    pub fn cairo_curve_to(
        cr: *mut CairoContext,
        x1: c_double,
        y1: c_double,
        x2: c_double,
        y2: c_double,
        x3: c_double,
        y3: c_double,
    );
    pub fn cairo_arc(
        cr: *mut CairoContext,
        xc: c_double,
        yc: c_double,
        radius: c_double,
        angle1: c_double,
        angle2: c_double,
    );
    pub fn cairo_arc_negative(
        cr: *mut CairoContext,
        xc: c_double,
        yc: c_double,
        radius: c_double,
        angle1: c_double,
        angle2: c_double,
    );
    pub fn cairo_rel_move_to(cr: *mut CairoContext, dx: c_double, dy: c_double);
    pub fn cairo_rel_line_to(cr: *mut CairoContext, dx: c_double, dy: c_double);
    pub fn cairo_rel_curve_to(
        cr: *mut CairoContext,
        dx1: c_double,
        dy1: c_double,
        dx2: c_double,
        dy2: c_double,
        dx3: c_double,
        dy3: c_double,
    );
    pub fn cairo_rectangle(
        cr: *mut CairoContext,
        x: c_double,
        y: c_double,
        width: c_double,
        height: c_double,
    );
    pub fn cairo_close_path(cr: *mut CairoContext);
    pub fn cairo_path_extents(
        cr: *mut CairoContext,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_has_current_point(cr: *mut CairoContext) -> CairoBool;
    pub fn cairo_get_current_point(cr: *mut CairoContext, x: *mut c_double, y: *mut c_double);
    pub fn cairo_copy_path(cr: *mut CairoContext) -> *mut CairoPath;
    pub fn cairo_copy_path_flat(cr: *mut CairoContext) -> *mut CairoPath;
    pub fn cairo_append_path(cr: *mut CairoContext, path: *const CairoPath);

    pub fn cairo_paint(cr: *mut CairoContext);
    pub fn cairo_paint_with_alpha(cr: *mut CairoContext, alpha: c_double);
    pub fn cairo_mask(cr: *mut CairoContext, pattern: *mut CairoPattern);
    pub fn cairo_mask_surface(
        cr: *mut CairoContext,
        surface: *mut CairoSurface,
        surface_x: c_double,
        surface_y: c_double,
    );
    pub fn cairo_stroke(cr: *mut CairoContext);
    pub fn cairo_stroke_preserve(cr: *mut CairoContext);
    pub fn cairo_fill(cr: *mut CairoContext);
    pub fn cairo_fill_preserve(cr: *mut CairoContext);
    pub fn cairo_copy_page(cr: *mut CairoContext);
    pub fn cairo_show_page(cr: *mut CairoContext);

    pub fn cairo_in_stroke(cr: *mut CairoContext, x: c_double, y: c_double) -> CairoBool;
    pub fn cairo_in_fill(cr: *mut CairoContext, x: c_double, y: c_double) -> CairoBool;
    pub fn cairo_in_clip(cr: *mut CairoContext, x: c_double, y: c_double) -> CairoBool;
    pub fn cairo_stroke_extents(
        cr: *mut CairoContext,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_fill_extents(
        cr: *mut CairoContext,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );

    pub fn cairo_reset_clip(cr: *mut CairoContext);
    pub fn cairo_clip(cr: *mut CairoContext);
    pub fn cairo_clip_preserve(cr: *mut CairoContext);
    pub fn cairo_clip_extents(
        cr: *mut CairoContext,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_copy_clip_rectangle_list(cr: *mut CairoContext) -> *mut CairoRectangleList;
    pub fn cairo_rectangle_list_destroy(rectangle_list: *mut CairoRectangleList);

    pub fn cairo_tag_begin(
        cr: *mut CairoContext,
        tag_name: *const c_char,
        attributes: *const c_char,
    );
    pub fn cairo_tag_end(cr: *mut CairoContext, tag_name: *const c_char);

    // Toy text API
    pub fn cairo_select_font_face(
        cr: *mut CairoContext,
        family: *const c_char,
        slant: c_int,
        weight: c_int,
    );
    pub fn cairo_set_font_size(cr: *mut CairoContext, size: c_double);
    pub fn cairo_set_font_matrix(cr: *mut CairoContext, matrix: *const Matrix);
    pub fn cairo_get_font_matrix(cr: *mut CairoContext, matrix: *mut Matrix);
    pub fn cairo_set_font_options(cr: *mut CairoContext, options: *const CairoFontOptions);
    pub fn cairo_get_font_options(cr: *mut CairoContext, options: *mut CairoFontOptions);
    pub fn cairo_set_font_face(cr: *mut CairoContext, font_face: *mut CairoFontFace);
    pub fn cairo_get_font_face(cr: *mut CairoContext) -> *mut CairoFontFace;
    pub fn cairo_set_scaled_font(cr: *mut CairoContext, scaled_font: *const CairoScaledFont);
    pub fn cairo_get_scaled_font(cr: *mut CairoContext) -> *mut CairoScaledFont;
    pub fn cairo_show_text(cr: *mut CairoContext, utf8: *const c_char);
    pub fn cairo_show_glyphs(cr: *mut CairoContext, glyphs: *const Glyph, num_glyphs: c_int);
    pub fn cairo_show_text_glyphs(
        cr: *mut CairoContext,
        utf8: *const c_char,
        utf8_len: c_int,
        glyphs: *const Glyph,
        num_glyphs: c_int,
        clusters: *const TextCluster,
        num_clusters: c_int,
        cluster_flags: c_int,
    );
    pub fn cairo_text_path(cr: *mut CairoContext, utf8: *const c_char);
    pub fn cairo_glyph_path(cr: *mut CairoContext, glyphs: *const Glyph, num_glyphs: c_int);
    pub fn cairo_text_extents(
        cr: *mut CairoContext,
        utf8: *const c_char,
        extents: *mut TextExtents,
    );
    pub fn cairo_glyph_extents(
        cr: *mut CairoContext,
        glyphs: *const Glyph,
        num_glyphs: c_int,
        extents: *mut TextExtents,
    );
    pub fn cairo_font_extents(cr: *mut CairoContext, extents: *mut FontExtents);
}

// PDF surface backend (cairo-pdf.h)
#[cfg(feature = "pdf")]
extern "C" {
    pub fn cairo_pdf_surface_create(
        filename: *const c_char,
        width_in_points: c_double,
        height_in_points: c_double,
    ) -> *mut CairoSurface;
    pub fn cairo_pdf_surface_restrict_to_version(surface: *mut CairoSurface, version: c_int);
    pub fn cairo_pdf_get_versions(versions: *mut *const c_int, num_versions: *mut c_int);
    pub fn cairo_pdf_version_to_string(version: c_int) -> *const c_char;
    pub fn cairo_pdf_surface_set_size(
        surface: *mut CairoSurface,
        width_in_points: c_double,
        height_in_points: c_double,
    );
    pub fn cairo_pdf_surface_add_outline(
        surface: *mut CairoSurface,
        parent_id: c_int,
        utf8: *const c_char,
        link_attribs: *const c_char,
        flags: c_int,
    ) -> c_int;
    pub fn cairo_pdf_surface_set_metadata(
        surface: *mut CairoSurface,
        metadata: c_int,
        utf8: *const c_char,
    );
    pub fn cairo_pdf_surface_set_page_label(surface: *mut CairoSurface, utf8: *const c_char);
    pub fn cairo_pdf_surface_set_thumbnail_size(
        surface: *mut CairoSurface,
        width: c_int,
        height: c_int,
    );
}
