//! Surface behavior: image surface pixel access, similar surfaces,
//! recording surfaces, and the file-based backends.

use cairo::{
    Content, Context, Format, ImageSurface, RecordingSurface, RectF, Status, SurfaceType, Vec2F,
};

#[test]
fn image_surface_reports_its_shape() {
    let surface = ImageSurface::new(Format::Argb32, 10, 20);
    assert_eq!(surface.status(), Status::Success);
    assert_eq!(surface.surface_type(), SurfaceType::Image);
    assert_eq!(surface.content(), Content::ColorAlpha);
    assert_eq!(surface.format(), Format::Argb32);
    assert_eq!(surface.width(), 10);
    assert_eq!(surface.height(), 20);
    assert_eq!(
        Some(surface.stride()),
        cairo::format_stride_for_width(Format::Argb32, 10)
    );
}

#[test]
fn painted_pixels_show_up_in_data() {
    let mut surface = ImageSurface::new(Format::Argb32, 4, 4);
    let mut cr = Context::new(&surface);
    cr.set_source_rgb(1.0, 0.0, 0.0);
    cr.paint();
    drop(cr);

    let data = surface.data();
    assert!(!data.is_empty());
    let first = u32::from_ne_bytes(data[..4].try_into().unwrap());
    assert_eq!(first, 0xff_ff_00_00);
}

#[test]
fn similar_surfaces_match_the_request() {
    let surface = ImageSurface::new(Format::Argb32, 16, 16);

    let similar = surface.create_similar(Content::Alpha, 8, 8);
    assert_eq!(similar.status(), Status::Success);
    assert_eq!(similar.content(), Content::Alpha);

    let image = surface.create_similar_image(Format::A8, 8, 8);
    assert_eq!(image.status(), Status::Success);
    assert_eq!(image.format(), Format::A8);
    assert_eq!(image.width(), 8);
}

#[test]
fn subsurface_clips_drawing_to_its_rectangle() {
    let mut target = ImageSurface::new(Format::Argb32, 16, 16);
    let sub = target.create_for_rectangle(RectF {
        x: 4.0,
        y: 4.0,
        w: 8.0,
        h: 8.0,
    });
    assert_eq!(sub.status(), Status::Success);

    // Painting the whole subsurface only touches its rectangle.
    let mut cr = Context::new(&sub);
    cr.set_source_rgb(1.0, 0.0, 0.0);
    cr.paint();
    assert_eq!(cr.status(), Status::Success);
    drop(cr);
    drop(sub);

    let stride = target.stride() as usize;
    let data = target.data();
    let pixel = |x: usize, y: usize| {
        u32::from_ne_bytes(data[y * stride + x * 4..][..4].try_into().unwrap())
    };
    assert_eq!(pixel(8, 8), 0xff_ff_00_00);
    assert_eq!(pixel(1, 1), 0);
    assert_eq!(pixel(14, 14), 0);
}

#[test]
fn device_offset_and_scale_round_trip() {
    let mut surface = ImageSurface::new(Format::Argb32, 8, 8);

    surface.set_device_offset(2.0, 3.0);
    assert_eq!(surface.device_offset(), Vec2F { x: 2.0, y: 3.0 });

    surface.set_device_scale(2.0, 2.0);
    assert_eq!(surface.device_scale(), Vec2F { x: 2.0, y: 2.0 });
}

#[test]
fn fallback_resolution_round_trips() {
    let mut surface = ImageSurface::new(Format::Argb32, 8, 8);
    surface.set_fallback_resolution(150.0, 150.0);
    assert_eq!(
        surface.fallback_resolution(),
        Vec2F { x: 150.0, y: 150.0 }
    );
}

#[test]
fn image_surfaces_have_no_device() {
    let surface = ImageSurface::new(Format::Argb32, 8, 8);
    assert!(surface.device().is_none());
}

#[test]
fn drawing_on_a_finished_surface_fails() {
    let mut surface = ImageSurface::new(Format::Argb32, 8, 8);
    surface.finish();
    assert_eq!(surface.status(), Status::Success);

    let mut cr = Context::new(&surface);
    cr.paint();
    assert_eq!(cr.status(), Status::SurfaceFinished);
}

#[test]
fn bounded_recording_reports_its_extents() {
    let extents = RectF {
        x: 0.0,
        y: 0.0,
        w: 32.0,
        h: 32.0,
    };
    let surface = RecordingSurface::new(Content::ColorAlpha, Some(extents));
    assert_eq!(surface.status(), Status::Success);
    assert_eq!(surface.surface_type(), SurfaceType::Recording);
    assert_eq!(surface.extents(), Some(extents));
}

#[test]
fn unbounded_recording_tracks_ink_extents() {
    let surface = RecordingSurface::new(Content::ColorAlpha, None);
    assert_eq!(surface.extents(), None);

    let mut cr = Context::new(&surface);
    cr.rectangle(RectF {
        x: 2.0,
        y: 4.0,
        w: 10.0,
        h: 6.0,
    });
    cr.fill();
    drop(cr);

    assert_eq!(
        surface.ink_extents(),
        RectF {
            x: 2.0,
            y: 4.0,
            w: 10.0,
            h: 6.0,
        }
    );
}

#[test]
fn recording_replays_onto_another_surface() {
    let recording = RecordingSurface::new(Content::ColorAlpha, None);
    let mut cr = Context::new(&recording);
    cr.set_source_rgb(0.0, 1.0, 0.0);
    cr.rectangle(RectF {
        x: 0.0,
        y: 0.0,
        w: 4.0,
        h: 4.0,
    });
    cr.fill();
    drop(cr);

    let mut target = ImageSurface::new(Format::Argb32, 4, 4);
    let mut cr = Context::new(&target);
    cr.set_source_surface(&recording, 0.0, 0.0);
    cr.paint();
    drop(cr);

    let data = target.data();
    let first = u32::from_ne_bytes(data[..4].try_into().unwrap());
    assert_eq!(first, 0xff_00_ff_00);
}

#[cfg(feature = "png")]
mod png {
    use super::*;

    #[test]
    fn png_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let surface = ImageSurface::new(Format::Argb32, 12, 7);
        let mut cr = Context::new(&surface);
        cr.set_source_rgb(0.0, 0.0, 1.0);
        cr.paint();
        drop(cr);
        surface.write_to_png(&path).unwrap();

        let loaded = ImageSurface::from_png(&path).unwrap();
        assert_eq!(loaded.status(), Status::Success);
        assert_eq!(loaded.width(), 12);
        assert_eq!(loaded.height(), 7);
    }

    #[test]
    fn missing_png_reports_file_not_found() {
        let loaded = ImageSurface::from_png("/no/such/file.png").unwrap();
        assert_eq!(loaded.status(), Status::FileNotFound);
    }
}

#[cfg(feature = "pdf")]
mod pdf {
    use super::*;
    use cairo::{PdfMetadata, PdfOutlineFlags, PdfSurface, PdfVersion, OUTLINE_ROOT};

    #[test]
    fn pdf_surface_writes_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let path = path.to_str().unwrap();

        let mut surface = PdfSurface::new(path, 595.0, 842.0).unwrap();
        assert_eq!(surface.status(), Status::Success);
        assert_eq!(surface.surface_type(), SurfaceType::Pdf);

        surface.set_metadata(PdfMetadata::Title, "test document").unwrap();
        surface
            .add_outline(
                OUTLINE_ROOT,
                "First page",
                "page=1",
                PdfOutlineFlags::OPEN | PdfOutlineFlags::BOLD,
            )
            .unwrap();

        let mut cr = Context::new(&surface);
        cr.set_source_rgb(0.1, 0.2, 0.3);
        cr.rectangle(RectF {
            x: 72.0,
            y: 72.0,
            w: 100.0,
            h: 100.0,
        });
        cr.fill();
        cr.show_page();
        assert_eq!(cr.status(), Status::Success);
        drop(cr);

        surface.finish();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }

    #[test]
    fn pdf_versions_are_reported() {
        let versions = PdfVersion::versions();
        assert!(versions.contains(&PdfVersion::V1_4));
        assert_eq!(PdfVersion::V1_4.to_string(), "PDF 1.4");
    }
}
