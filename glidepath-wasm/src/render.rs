//! Rendering: draws path, handles, and moving objects to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only engine state
//! and produces pixels; it never mutates the simulation.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use glidepath::engine::{EngineCore, ObjectFrame};
use glidepath::model::{Color, MovingObject, PathSegment};

const PATH_STROKE: &str = "#3a3f45";
const PATH_WIDTH: f64 = 2.0;
const HANDLE_FILL: &str = "#1e90ff";
const HANDLE_MARKER_RADIUS: f64 = 4.0;
/// Fill used instead of an object's base color while it overlaps another.
const COLLISION_FILL: &str = "#ffb400";
/// Arrowhead length in surface units, measured outward from the object rim.
const ARROW_LENGTH: f64 = 14.0;
const ARROW_HALF_WIDTH: f64 = 4.5;

/// The 2D context of `canvas`, if the surface can currently provide one.
pub(crate) fn context_of(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn css_color(c: Color) -> String {
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, f64::from(c.a) / 255.0)
}

/// Draw the full scene for the current tick.
///
/// # Errors
///
/// Returns `Err` if a `Canvas2D` call fails; the caller logs and moves on.
pub(crate) fn draw(
    ctx: &CanvasRenderingContext2d,
    engine: &EngineCore,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);

    stroke_path(ctx, engine.scene().path().segments())?;
    draw_handles(ctx, engine)?;

    for (frame, obj) in engine.frame().iter().zip(engine.scene().objects()) {
        draw_heading_arrow(ctx, frame, obj)?;
        draw_object(ctx, frame, obj)?;
    }
    Ok(())
}

/// All segments as one continuous stroke path.
fn stroke_path(ctx: &CanvasRenderingContext2d, segments: &[PathSegment]) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(PATH_STROKE);
    ctx.set_line_width(PATH_WIDTH);
    ctx.begin_path();
    for seg in segments {
        match *seg {
            PathSegment::Line { from, to } => {
                ctx.move_to(f64::from(from.x), f64::from(from.y));
                ctx.line_to(f64::from(to.x), f64::from(to.y));
            }
            PathSegment::Quadratic { from, ctrl, to } => {
                ctx.move_to(f64::from(from.x), f64::from(from.y));
                ctx.quadratic_curve_to(
                    f64::from(ctrl.x),
                    f64::from(ctrl.y),
                    f64::from(to.x),
                    f64::from(to.y),
                );
            }
            PathSegment::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                let sx = f64::from(center.x) + f64::from(radius) * f64::from(start_angle).cos();
                let sy = f64::from(center.y) + f64::from(radius) * f64::from(start_angle).sin();
                ctx.move_to(sx, sy);
                ctx.arc_with_anticlockwise(
                    f64::from(center.x),
                    f64::from(center.y),
                    f64::from(radius),
                    f64::from(start_angle),
                    f64::from(end_angle),
                    end_angle < start_angle,
                )?;
            }
        }
    }
    ctx.stroke();
    Ok(())
}

fn draw_handles(ctx: &CanvasRenderingContext2d, engine: &EngineCore) -> Result<(), JsValue> {
    ctx.set_fill_style_str(HANDLE_FILL);
    for handle in engine.scene().handles() {
        ctx.begin_path();
        ctx.arc(
            f64::from(handle.pos.x),
            f64::from(handle.pos.y),
            HANDLE_MARKER_RADIUS,
            0.0,
            2.0 * PI,
        )?;
        ctx.fill();
    }
    Ok(())
}

/// Arrowhead just ahead of the object, oriented along its heading.
fn draw_heading_arrow(
    ctx: &CanvasRenderingContext2d,
    frame: &ObjectFrame,
    obj: &MovingObject,
) -> Result<(), JsValue> {
    let rim = f64::from(obj.radius) + 2.0;

    ctx.save();
    ctx.translate(f64::from(frame.pos.x), f64::from(frame.pos.y))?;
    ctx.rotate(f64::from(frame.angle))?;

    ctx.set_fill_style_str(&css_color(obj.color));
    ctx.begin_path();
    ctx.move_to(rim + ARROW_LENGTH, 0.0);
    ctx.line_to(rim, -ARROW_HALF_WIDTH);
    ctx.line_to(rim, ARROW_HALF_WIDTH);
    ctx.close_path();
    ctx.fill();

    ctx.restore();
    Ok(())
}

fn draw_object(
    ctx: &CanvasRenderingContext2d,
    frame: &ObjectFrame,
    obj: &MovingObject,
) -> Result<(), JsValue> {
    let fill = if frame.colliding {
        COLLISION_FILL.to_owned()
    } else {
        css_color(obj.color)
    };
    ctx.set_fill_style_str(&fill);
    ctx.begin_path();
    ctx.arc(
        f64::from(frame.pos.x),
        f64::from(frame.pos.y),
        f64::from(obj.radius),
        0.0,
        2.0 * PI,
    )?;
    ctx.fill();
    Ok(())
}
