//! Ownership semantics of the wrapper handles: clones share
//! reference-counted objects, deep-copied objects stay independent,
//! and dependents keep their dependencies alive.

use cairo::{
    Antialias, Color, Content, Context, FontOptions, Format, HintStyle, ImageSurface,
    SolidPattern, Status, SurfacePattern, Vec2F,
};

fn surface_refs(surface: &cairo::Surface) -> u32 {
    unsafe { cairo::ffi::cairo_surface_get_reference_count(surface.as_ptr()) }
}

#[test]
fn surface_clone_shares_the_object() {
    let surface = ImageSurface::new(Format::Argb32, 8, 8);
    assert_eq!(surface_refs(&surface), 1);

    let clone = surface.clone();
    assert_eq!(clone.as_ptr(), surface.as_ptr());
    assert_eq!(surface_refs(&surface), 2);

    drop(clone);
    assert_eq!(surface_refs(&surface), 1);
}

#[test]
fn pattern_clone_shares_the_object() {
    let pattern = SolidPattern::new(Color::rgb(0.2, 0.4, 0.6));
    let refs =
        |p: &SolidPattern| unsafe { cairo::ffi::cairo_pattern_get_reference_count(p.as_ptr()) };
    assert_eq!(refs(&pattern), 1);

    let clone = pattern.clone();
    assert_eq!(refs(&pattern), 2);
    drop(clone);
    assert_eq!(refs(&pattern), 1);
}

#[test]
fn context_keeps_its_target_alive() {
    let surface = ImageSurface::new(Format::Argb32, 8, 8);
    let raw = surface.as_ptr();
    let mut cr = Context::new(&surface);
    drop(surface);

    // The context still holds a reference, so drawing stays valid.
    cr.set_source_rgb(1.0, 0.0, 0.0);
    cr.paint();
    assert_eq!(cr.status(), Status::Success);

    let target = cr.target();
    assert_eq!(target.as_ptr(), raw);
    assert_eq!(target.status(), Status::Success);
    assert_eq!(target.content(), Content::ColorAlpha);
}

#[test]
fn surface_pattern_keeps_its_surface_alive() {
    let surface = ImageSurface::new(Format::A8, 4, 4);
    let raw = surface.as_ptr();
    let pattern = SurfacePattern::new(&surface);
    drop(surface);

    let held = pattern.surface();
    assert_eq!(held.as_ptr(), raw);
    assert_eq!(held.status(), Status::Success);
    assert_eq!(held.content(), Content::Alpha);
}

#[test]
fn borrowing_accessor_adds_a_reference() {
    let surface = ImageSurface::new(Format::Argb32, 4, 4);
    let pattern = SurfacePattern::new(&surface);
    assert_eq!(surface_refs(&surface), 2);

    let held = pattern.surface();
    assert_eq!(surface_refs(&surface), 3);
    drop(held);
    assert_eq!(surface_refs(&surface), 2);
}

#[test]
fn font_options_clone_is_independent() {
    let mut options = FontOptions::new();
    options.set_antialias(Antialias::Best);

    let mut copy = options.clone();
    assert_eq!(options, copy);

    copy.set_hint_style(HintStyle::Full);
    assert_ne!(options, copy);
    assert_eq!(options.hint_style(), HintStyle::Default);
    assert_eq!(copy.antialias(), Antialias::Best);
}

#[test]
fn context_source_outlives_the_context() {
    let surface = ImageSurface::new(Format::Argb32, 4, 4);
    let mut cr = Context::new(&surface);
    cr.set_source_rgb(0.0, 1.0, 0.0);

    let source = cr.source();
    drop(cr);
    assert_eq!(source.status(), Status::Success);
}

#[test]
fn copied_path_is_owned_by_the_caller() {
    let surface = ImageSurface::new(Format::Argb32, 4, 4);
    let mut cr = Context::new(&surface);
    cr.move_to(Vec2F { x: 0.0, y: 0.0 });
    cr.line_to(Vec2F { x: 3.0, y: 3.0 });

    let path = cr.copy_path();
    cr.new_path();
    drop(cr);

    // The copy is independent of the context it came from.
    assert_eq!(path.status(), Status::Success);
    assert_eq!(path.segments().count(), 2);
}
