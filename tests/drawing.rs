//! Drawing context behavior: graphics state, path construction,
//! transformations, clipping, gradients and text.

use cairo::{
    Color, Context, FillRule, FontSlant, FontWeight, Format, ImageSurface, LineCap, LineJoin,
    LinearGradient, Matrix, Mesh, Operator, PathSegment, PatternType, RadialGradient, RectF,
    ScaledFont, Status, ToyFontFace, Vec2F,
};

fn test_context() -> Context {
    Context::new(&ImageSurface::new(Format::Argb32, 64, 64))
}

#[test]
fn graphics_state_round_trips() {
    let mut cr = test_context();

    cr.set_line_width(4.5);
    cr.set_line_cap(LineCap::Round);
    cr.set_line_join(LineJoin::Bevel);
    cr.set_miter_limit(3.0);
    cr.set_operator(Operator::Multiply);
    cr.set_fill_rule(FillRule::EvenOdd);
    cr.set_tolerance(0.25);

    assert_eq!(cr.line_width(), 4.5);
    assert_eq!(cr.line_cap(), LineCap::Round);
    assert_eq!(cr.line_join(), LineJoin::Bevel);
    assert_eq!(cr.miter_limit(), 3.0);
    assert_eq!(cr.operator(), Operator::Multiply);
    assert_eq!(cr.fill_rule(), FillRule::EvenOdd);
    assert_eq!(cr.tolerance(), 0.25);
    assert_eq!(cr.status(), Status::Success);
}

#[test]
fn dash_round_trips() {
    let mut cr = test_context();
    assert_eq!(cr.dash_count(), 0);

    cr.set_dash(&[4.0, 1.0, 2.0], 0.5);
    assert_eq!(cr.dash_count(), 3);
    assert_eq!(cr.dash(), (vec![4.0, 1.0, 2.0], 0.5));

    cr.set_dash(&[], 0.0);
    assert_eq!(cr.dash_count(), 0);
}

#[test]
fn all_zero_dashes_poison_the_context() {
    let mut cr = test_context();
    cr.set_dash(&[0.0, 0.0], 0.0);
    assert_eq!(cr.status(), Status::InvalidDash);
}

#[test]
fn save_scope_restores_on_drop() {
    let mut cr = test_context();
    cr.set_line_width(5.0);
    {
        let mut scope = cr.save_scope();
        scope.set_line_width(10.0);
        assert_eq!(scope.line_width(), 10.0);
    }
    assert_eq!(cr.line_width(), 5.0);
}

#[test]
fn copied_path_reports_its_segments() {
    let mut cr = test_context();
    cr.move_to(Vec2F { x: 1.0, y: 2.0 });
    cr.line_to(Vec2F { x: 11.0, y: 2.0 });
    cr.curve_to(
        Vec2F { x: 11.0, y: 8.0 },
        Vec2F { x: 1.0, y: 8.0 },
        Vec2F { x: 1.0, y: 2.0 },
    );
    cr.close_path();

    let segments: Vec<PathSegment> = cr.copy_path().segments().collect();
    assert_eq!(segments[0], PathSegment::MoveTo(Vec2F { x: 1.0, y: 2.0 }));
    assert_eq!(segments[1], PathSegment::LineTo(Vec2F { x: 11.0, y: 2.0 }));
    assert!(matches!(segments[2], PathSegment::CurveTo(..)));
    assert!(segments.contains(&PathSegment::Close));
}

#[test]
fn flattened_path_has_no_curves() {
    let mut cr = test_context();
    cr.arc(Vec2F { x: 32.0, y: 32.0 }, 10.0, 0.0, std::f64::consts::PI);

    let flat = cr.copy_path_flat();
    assert!(flat
        .segments()
        .all(|seg| !matches!(seg, PathSegment::CurveTo(..))));
}

#[test]
fn appended_path_reaches_the_new_context() {
    let mut cr = test_context();
    cr.rectangle(RectF {
        x: 4.0,
        y: 4.0,
        w: 8.0,
        h: 8.0,
    });
    let path = cr.copy_path();

    let mut other = test_context();
    other.append_path(&path);
    assert!(other.in_fill(Vec2F { x: 6.0, y: 6.0 }));
}

#[test]
fn current_point_tracks_the_path() {
    let mut cr = test_context();
    assert_eq!(cr.current_point(), None);

    cr.move_to(Vec2F { x: 5.0, y: 7.0 });
    assert_eq!(cr.current_point(), Some(Vec2F { x: 5.0, y: 7.0 }));

    cr.new_path();
    assert_eq!(cr.current_point(), None);
}

#[test]
fn fill_hit_testing_and_extents() {
    let rect = RectF {
        x: 10.0,
        y: 10.0,
        w: 20.0,
        h: 15.0,
    };
    let mut cr = test_context();
    cr.rectangle(rect);

    assert!(cr.in_fill(Vec2F { x: 15.0, y: 12.0 }));
    assert!(!cr.in_fill(Vec2F { x: 50.0, y: 50.0 }));
    assert_eq!(cr.fill_extents(), rect);
    assert_eq!(cr.path_extents(), rect);
}

#[test]
fn transformations_compose() {
    let mut cr = test_context();
    cr.translate(10.0, 20.0);
    cr.scale(2.0, 2.0);

    let p = cr.user_to_device(Vec2F { x: 1.0, y: 1.0 });
    assert_eq!(p, Vec2F { x: 12.0, y: 22.0 });

    // Distances ignore the translation component.
    let d = cr.user_to_device_distance(Vec2F { x: 1.0, y: 1.0 });
    assert_eq!(d, Vec2F { x: 2.0, y: 2.0 });

    let back = cr.device_to_user(p);
    assert_eq!(back, Vec2F { x: 1.0, y: 1.0 });

    cr.identity_matrix();
    assert_eq!(cr.matrix(), Matrix::identity());
}

#[test]
fn set_matrix_round_trips() {
    let mut cr = test_context();
    let m = Matrix::from_translate(3.0, 4.0);
    cr.set_matrix(&m);
    assert_eq!(cr.matrix(), m);
}

#[test]
fn clipping_restricts_and_reports() {
    let rect = RectF {
        x: 8.0,
        y: 8.0,
        w: 16.0,
        h: 16.0,
    };
    let mut cr = test_context();
    cr.rectangle(rect);
    cr.clip();

    assert_eq!(cr.clip_extents(), rect);
    assert!(cr.in_clip(Vec2F { x: 10.0, y: 10.0 }));
    assert!(!cr.in_clip(Vec2F { x: 40.0, y: 40.0 }));

    let rectangles = cr.clip_rectangles().expect("rectangular clip");
    assert_eq!(rectangles, vec![rect]);

    cr.reset_clip();
    assert!(cr.in_clip(Vec2F { x: 40.0, y: 40.0 }));
}

#[test]
fn empty_clip_reports_no_rectangles() {
    let mut cr = test_context();
    cr.rectangle(RectF {
        x: 8.0,
        y: 8.0,
        w: 0.0,
        h: 0.0,
    });
    cr.clip();

    let rectangles = cr.clip_rectangles().expect("rectangular clip");
    assert!(rectangles.is_empty());
}

#[test]
fn source_defaults_and_follows_set_source() {
    let mut cr = test_context();
    assert_eq!(cr.source().pattern_type(), PatternType::Solid);

    let gradient = LinearGradient::new(Vec2F { x: 0.0, y: 0.0 }, Vec2F { x: 64.0, y: 0.0 });
    cr.set_source(&gradient);
    assert_eq!(cr.source().pattern_type(), PatternType::Linear);
}

#[test]
fn group_renders_to_a_surface_pattern() {
    let mut cr = test_context();
    cr.push_group();
    cr.set_source_rgb(1.0, 0.0, 1.0);
    cr.paint();
    let group = cr.pop_group();

    assert_eq!(group.status(), Status::Success);
    assert_eq!(group.pattern_type(), PatternType::Surface);
    assert_eq!(cr.status(), Status::Success);
}

#[test]
fn linear_gradient_stops_round_trip() {
    let p0 = Vec2F { x: 0.0, y: 0.0 };
    let p1 = Vec2F { x: 10.0, y: 0.0 };
    let mut gradient = LinearGradient::new(p0, p1);
    assert_eq!(gradient.points(), (p0, p1));
    assert_eq!(gradient.color_stop_count(), 0);

    gradient.add_color_stop(0.0, Color::rgb(1.0, 0.0, 0.0));
    gradient.add_color_stop_rgba(1.0, 0.0, 0.0, 1.0, 0.5);
    assert_eq!(gradient.color_stop_count(), 2);

    let (offset, color) = gradient.color_stop(0).unwrap();
    assert_eq!(offset, 0.0);
    assert_eq!(color, Color::rgb(1.0, 0.0, 0.0));

    let err = gradient.color_stop(5).unwrap_err();
    assert_eq!(err.status(), Some(Status::InvalidIndex));
}

#[test]
fn radial_gradient_reports_its_circles() {
    let gradient = RadialGradient::new(
        Vec2F { x: 5.0, y: 5.0 },
        1.0,
        Vec2F { x: 5.0, y: 5.0 },
        8.0,
    );
    let ((c0, r0), (c1, r1)) = gradient.circles();
    assert_eq!(c0, Vec2F { x: 5.0, y: 5.0 });
    assert_eq!(r0, 1.0);
    assert_eq!(c1, Vec2F { x: 5.0, y: 5.0 });
    assert_eq!(r1, 8.0);
}

#[test]
fn mesh_patch_round_trips() {
    let mut mesh = Mesh::new();
    assert_eq!(mesh.patch_count(), 0);

    mesh.begin_patch();
    mesh.move_to(Vec2F { x: 0.0, y: 0.0 });
    mesh.line_to(Vec2F { x: 10.0, y: 0.0 });
    mesh.line_to(Vec2F { x: 10.0, y: 10.0 });
    mesh.line_to(Vec2F { x: 0.0, y: 10.0 });
    mesh.set_corner_color(0, Color::rgb(1.0, 0.0, 0.0));
    mesh.set_corner_color(1, Color::rgb(0.0, 1.0, 0.0));
    mesh.set_corner_color(2, Color::rgb(0.0, 0.0, 1.0));
    mesh.set_corner_color(3, Color::rgb(1.0, 1.0, 0.0));
    mesh.end_patch();

    assert_eq!(mesh.status(), Status::Success);
    assert_eq!(mesh.patch_count(), 1);
    assert_eq!(
        mesh.corner_color(0, 1).unwrap(),
        Color::rgb(0.0, 1.0, 0.0)
    );
    assert!(mesh.corner_color(7, 0).is_err());

    let path = mesh.patch_path(0);
    assert_eq!(path.status(), Status::Success);
    assert!(path.segments().next().is_some());
}

#[test]
fn toy_font_face_round_trips() {
    let face = ToyFontFace::new("serif", FontSlant::Italic, FontWeight::Bold).unwrap();
    assert_eq!(face.status(), Status::Success);
    assert_eq!(face.family(), "serif");
    assert_eq!(face.slant(), FontSlant::Italic);
    assert_eq!(face.weight(), FontWeight::Bold);
}

#[test]
fn context_font_face_downcasts_to_toy() {
    let mut cr = test_context();
    cr.select_font_face("monospace", FontSlant::Normal, FontWeight::Normal)
        .unwrap();

    let toy = cr.font_face().into_toy().expect("toy font face");
    assert_eq!(toy.family(), "monospace");
}

#[test]
fn toy_text_draws_without_error() {
    let mut cr = test_context();
    cr.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Normal)
        .unwrap();
    cr.set_font_size(12.0);

    let extents = cr.font_extents();
    assert!(extents.height >= 0.0);

    cr.move_to(Vec2F { x: 4.0, y: 32.0 });
    cr.show_text("hello").unwrap();
    assert_eq!(cr.status(), Status::Success);
}

#[test]
fn scaled_font_reports_its_inputs() {
    let face = ToyFontFace::new("sans-serif", FontSlant::Normal, FontWeight::Normal).unwrap();
    let font_matrix = Matrix::from_scale(16.0, 16.0);
    let ctm = Matrix::identity();
    let font = ScaledFont::new(&face, &font_matrix, &ctm, &Default::default());

    assert_eq!(font.status(), Status::Success);
    assert_eq!(font.font_matrix(), font_matrix);
    assert_eq!(font.ctm(), ctm);
    assert_eq!(font.font_face().status(), Status::Success);
}

#[test]
fn shaping_an_empty_string_yields_no_glyphs() {
    let face = ToyFontFace::new("sans-serif", FontSlant::Normal, FontWeight::Normal).unwrap();
    let matrix = Matrix::from_scale(16.0, 16.0);
    let font = ScaledFont::new(&face, &matrix, &Matrix::identity(), &Default::default());

    let shaped = font.text_to_glyphs(0.0, 0.0, "").unwrap();
    assert!(shaped.glyphs.is_empty());
    assert!(shaped.clusters.is_empty());
}

#[test]
fn interior_nul_is_rejected_up_front() {
    let mut cr = test_context();
    let err = cr.show_text("bad\0text").unwrap_err();
    assert!(err.status().is_none());
    assert_eq!(cr.status(), Status::Success);
}
