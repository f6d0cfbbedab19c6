//! Draws a small scene exercising paths, gradients, dashes and text,
//! and writes it out as `showcase.png`.

use std::f64::consts::{PI, TAU};

use cairo::{
    Color, Context, FontSlant, FontWeight, Format, ImageSurface, LineCap, LinearGradient, RectF,
    Vec2F,
};

fn main() -> cairo::Result<()> {
    let surface = ImageSurface::new(Format::Argb32, 400, 300);
    let mut cr = Context::new(&surface);

    // Background
    let mut sky = LinearGradient::new(Vec2F { x: 0.0, y: 0.0 }, Vec2F { x: 0.0, y: 300.0 });
    sky.add_color_stop(0.0, Color::rgb(0.4, 0.6, 0.9));
    sky.add_color_stop(1.0, Color::rgb(0.9, 0.9, 1.0));
    cr.set_source(&sky);
    cr.paint();

    // Sun
    cr.set_source_color(Color::rgb(1.0, 0.85, 0.2));
    cr.arc(Vec2F { x: 320.0, y: 70.0 }, 40.0, 0.0, TAU);
    cr.fill();

    // Hills, as one closed curve
    cr.set_source_color(Color::rgb(0.2, 0.55, 0.25));
    cr.move_to(Vec2F { x: 0.0, y: 240.0 });
    cr.curve_to(
        Vec2F { x: 100.0, y: 180.0 },
        Vec2F { x: 180.0, y: 260.0 },
        Vec2F { x: 400.0, y: 210.0 },
    );
    cr.line_to(Vec2F { x: 400.0, y: 300.0 });
    cr.line_to(Vec2F { x: 0.0, y: 300.0 });
    cr.close_path();
    cr.fill();

    // Dashed flight path for the arc above the hills
    {
        let mut scope = cr.save_scope();
        scope.set_source_color(Color::rgba(1.0, 1.0, 1.0, 0.8));
        scope.set_line_width(3.0);
        scope.set_line_cap(LineCap::Round);
        scope.set_dash(&[1.0, 12.0], 0.0);
        scope.arc(Vec2F { x: 200.0, y: 260.0 }, 160.0, 1.1 * PI, 1.9 * PI);
        scope.stroke();
    }

    // Caption in a translucent box
    cr.set_source_color(Color::rgba(0.0, 0.0, 0.0, 0.35));
    cr.rectangle(RectF {
        x: 10.0,
        y: 10.0,
        w: 150.0,
        h: 34.0,
    });
    cr.fill();

    cr.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Bold)?;
    cr.set_font_size(18.0);
    cr.set_source_color(Color::rgb(1.0, 1.0, 1.0));
    cr.move_to(Vec2F { x: 18.0, y: 34.0 });
    cr.show_text("cairo-vg")?;

    surface.write_to_png("showcase.png")?;
    println!("wrote showcase.png ({})", cairo::version_string());
    Ok(())
}
