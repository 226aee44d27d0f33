use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Straight connection line.
pub fn draw_line(
    context: &CanvasRenderingContext2d,
    from: (f64, f64),
    to: (f64, f64),
    stroke: &str,
    width: f64,
) {
    context.set_stroke_style_str(stroke);
    context.set_line_width(width);
    context.begin_path();
    context.move_to(from.0, from.1);
    context.line_to(to.0, to.1);
    context.stroke();
}

/// Soft sphere: a disc filled with a radial gradient that is opaque at the
/// centre and fully transparent at `radius`.  `opacity` scales the whole disc
/// through the global alpha, which is reset afterwards.
pub fn draw_sphere(
    context: &CanvasRenderingContext2d,
    center: (f64, f64),
    radius: f64,
    opacity: f64,
    inner: &str,
    outer: &str,
) -> Result<(), JsValue> {
    context.set_global_alpha(opacity);
    let drawn = fill_gradient_disc(context, center, radius, inner, outer);
    context.set_global_alpha(1.0);
    drawn
}

fn fill_gradient_disc(
    context: &CanvasRenderingContext2d,
    (x, y): (f64, f64),
    radius: f64,
    inner: &str,
    outer: &str,
) -> Result<(), JsValue> {
    let gradient = context.create_radial_gradient(x, y, 0.0, x, y, radius)?;
    gradient.add_color_stop(0.0, inner)?;
    gradient.add_color_stop(1.0, outer)?;
    context.set_fill_style_canvas_gradient(&gradient);

    context.begin_path();
    context.arc(x, y, radius, 0.0, 2.0 * PI)?;
    context.fill();
    Ok(())
}
