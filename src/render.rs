//! Canvas-2D drawing for the FX simulations. All numeric state lives in
//! `core::fx`; this module only turns records into radial-gradient glows.

use crate::core::fx::{BokehSim, FirefliesSim, ParticlesSim};
use std::f64::consts::TAU;
use web_sys as web;

fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}

fn hsla(hue: f32, s: f32, l: f32, alpha: f32) -> String {
    format!("hsla({hue}, {s}%, {l}%, {alpha})")
}

fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

pub fn draw_bokeh(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    sim: &BokehSim,
) {
    clear(ctx, canvas);
    let tick = sim.tick_count();
    for orb in sim.orbs() {
        let r = (orb.pulsed_size(tick) / 2.0) as f64;
        let (x, y) = (orb.pos.x as f64, orb.pos.y as f64);

        let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            continue;
        };
        _ = gradient.add_color_stop(0.0, &rgba(orb.color, orb.opacity * 1.2));
        _ = gradient.add_color_stop(0.4, &rgba(orb.color, orb.opacity));
        _ = gradient.add_color_stop(0.7, &rgba(orb.color, orb.opacity * 0.5));
        _ = gradient.add_color_stop(1.0, &rgba(orb.color, 0.0));

        ctx.begin_path();
        _ = ctx.arc(x, y, r, 0.0, TAU);
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();

        // Subtle rim highlight
        ctx.begin_path();
        _ = ctx.arc(x, y, (r - 2.0).max(0.0), 0.0, TAU);
        ctx.set_stroke_style_str(&rgba(orb.color, orb.opacity * 0.25));
        ctx.set_line_width(1.0);
        ctx.stroke();
    }
}

pub fn draw_fireflies(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    sim: &FirefliesSim,
) {
    clear(ctx, canvas);
    for f in sim.fireflies() {
        let glow = f.glow();
        if glow <= 0.01 {
            continue;
        }
        let (x, y) = (f.pos.x as f64, f.pos.y as f64);
        let radius = f.glow_radius as f64;

        let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
            continue;
        };
        _ = gradient.add_color_stop(0.0, &hsla(f.hue, 80.0, 70.0, glow * 0.35));
        _ = gradient.add_color_stop(0.4, &hsla(f.hue, 70.0, 60.0, glow * 0.12));
        _ = gradient.add_color_stop(1.0, &hsla(f.hue, 60.0, 50.0, 0.0));

        ctx.begin_path();
        _ = ctx.arc(x, y, radius, 0.0, TAU);
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();

        // Bright core
        ctx.begin_path();
        _ = ctx.arc(x, y, f.size as f64, 0.0, TAU);
        ctx.set_fill_style_str(&hsla(f.hue, 90.0, 85.0, glow * 0.9));
        ctx.fill();
    }
}

pub fn draw_particles(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    sim: &ParticlesSim,
) {
    clear(ctx, canvas);
    for p in sim.particles() {
        let glow = p.glow();
        let (x, y) = (p.pos.x as f64, p.pos.y as f64);

        ctx.begin_path();
        _ = ctx.arc(x, y, p.size as f64, 0.0, TAU);
        ctx.set_fill_style_str(&format!("rgba(255, 245, 225, {glow})"));
        ctx.set_shadow_color(&format!("rgba(255, 245, 225, {})", glow * 0.5));
        ctx.set_shadow_blur((p.size * 3.0) as f64);
        ctx.fill();
    }
    ctx.set_shadow_blur(0.0);
}
