//! Scene painter
//!
//! `render` is a pure function of the game state: it never mutates it.
//! Animation-only values (flame frames, pulses, sparkles) are derived from
//! the `now_ms` the caller reads from its clock.

use glam::Vec2;

use super::canvas::{Canvas, ColorStop, Paint, Rgba, TextAlign, rect};
use crate::consts::PARTICLE_LIFETIME;
use crate::settings::Settings;
use crate::sim::{
    GamePhase, GameState, Hostile, PowerUp, PowerUpKind, Projectile, Randomness, seeded,
};

/// Per-frame inputs the painter needs besides the state
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub settings: &'a Settings,
    /// Margin used by collision tests, outlined around projectiles
    pub collision_margin: f32,
    pub now_ms: f64,
}

const BACKGROUND: (u8, u8, u8) = (10, 10, 10);
const TRAIL_CLEAR_ALPHA: f32 = 0.1;

/// Draw the whole frame, back to front
pub fn render(state: &GameState, ctx: &FrameContext, canvas: &mut impl Canvas) {
    clear(state, ctx, canvas);
    draw_stars(state, canvas);
    draw_player(state, ctx, canvas);
    for shot in &state.projectiles {
        draw_projectile(shot, ctx, canvas);
    }
    for hostile in &state.hostiles {
        draw_hostile(hostile, ctx, canvas);
    }
    for power_up in &state.power_ups {
        draw_power_up(power_up, ctx, canvas);
    }
    if ctx.settings.particles {
        draw_particles(state, canvas);
    }
    if state.phase == GamePhase::GameOver {
        draw_game_over(state, ctx, canvas);
    }
}

fn glow(ctx: &FrameContext, canvas: &mut impl Canvas, color: Rgba, blur: f32) {
    if ctx.settings.quality.glow_enabled() {
        canvas.set_glow(color, blur);
    }
}

fn no_glow(ctx: &FrameContext, canvas: &mut impl Canvas) {
    if ctx.settings.quality.glow_enabled() {
        canvas.set_glow(Rgba::rgba(0, 0, 0, 0.0), 0.0);
    }
}

/// Sine pulse in [-1, 1], flat when pulses are disabled
fn pulse(ctx: &FrameContext, rate: f64) -> f32 {
    if ctx.settings.effective_pulse() {
        (ctx.now_ms * rate).sin() as f32
    } else {
        0.0
    }
}

fn clear(state: &GameState, ctx: &FrameContext, canvas: &mut impl Canvas) {
    let alpha = if ctx.settings.effective_motion_trails() {
        TRAIL_CLEAR_ALPHA
    } else {
        1.0
    };
    let (r, g, b) = BACKGROUND;
    let field = state.playfield;
    canvas.fill_rect(
        rect(0.0, 0.0, field.width, field.height),
        &Rgba::rgba(r, g, b, alpha).into(),
    );
}

fn draw_stars(state: &GameState, canvas: &mut impl Canvas) {
    let white = Paint::Solid(Rgba::WHITE);
    for star in &state.stars {
        canvas.set_alpha(star.opacity);
        canvas.fill_rect(rect(star.pos.x, star.pos.y, star.size, star.size), &white);
    }
    canvas.set_alpha(1.0);
}

/// Rocket sprite: (dx, dy, w, h, color)
const ROCKET: &[(f32, f32, f32, f32, u32)] = &[
    // Nose cone
    (7.0, 0.0, 2.0, 1.0, 0xff4444),
    (6.0, 1.0, 4.0, 1.0, 0xff6666),
    (5.0, 2.0, 6.0, 1.0, 0xff4444),
    (4.0, 3.0, 8.0, 1.0, 0xff6666),
    (3.0, 4.0, 10.0, 1.0, 0xff4444),
    // Body
    (2.0, 5.0, 12.0, 1.0, 0xffffff),
    (2.0, 6.0, 12.0, 1.0, 0xe6f3ff),
    (2.0, 7.0, 12.0, 1.0, 0x4dabf7),
    (2.0, 8.0, 12.0, 1.0, 0x0d6efd),
    (2.0, 9.0, 12.0, 1.0, 0x1c7ed6),
    // Cockpit
    (6.0, 10.0, 4.0, 3.0, 0x87ceeb),
    (7.0, 11.0, 2.0, 1.0, 0xffffff),
    (2.0, 13.0, 12.0, 1.0, 0x0d6efd),
    (2.0, 14.0, 12.0, 1.0, 0x1c7ed6),
    (2.0, 15.0, 12.0, 1.0, 0x0d6efd),
    // Stripes
    (2.0, 16.0, 12.0, 1.0, 0xff6666),
    (2.0, 18.0, 12.0, 1.0, 0xffaa00),
    (2.0, 20.0, 12.0, 1.0, 0x0d6efd),
    (2.0, 21.0, 12.0, 1.0, 0x1c7ed6),
    (2.0, 22.0, 12.0, 1.0, 0x0d6efd),
    // Nozzle
    (4.0, 23.0, 8.0, 2.0, 0x2c3e50),
    // Fins
    (0.0, 20.0, 2.0, 4.0, 0x339af0),
    (0.0, 21.0, 1.0, 2.0, 0x339af0),
    (14.0, 20.0, 2.0, 4.0, 0x339af0),
    (15.0, 21.0, 1.0, 2.0, 0x339af0),
    (6.0, 18.0, 4.0, 2.0, 0x339af0),
    (7.0, 17.0, 2.0, 1.0, 0x339af0),
    (6.0, 26.0, 4.0, 2.0, 0x339af0),
    (7.0, 28.0, 2.0, 1.0, 0x339af0),
];

const FLAME_COLORS: [u32; 4] = [0xff4444, 0xff6666, 0xffaa00, 0xffaa00];

fn draw_player(state: &GameState, ctx: &FrameContext, canvas: &mut impl Canvas) {
    let Vec2 { x, y } = state.player.pos;
    canvas.set_pixelated(true);

    for &(dx, dy, w, h, color) in ROCKET {
        canvas.fill_rect(rect(x + dx, y + dy, w, h), &Rgba::hex(color).into());
    }

    let flame_frame = ((ctx.now_ms * 0.04).floor() as i64).rem_euclid(4) as usize;
    let outer = Paint::Solid(Rgba::hex(FLAME_COLORS[flame_frame]));
    canvas.fill_rect(rect(x + 5.0, y + 25.0, 6.0, 2.0), &outer);
    canvas.fill_rect(rect(x + 6.0, y + 27.0, 4.0, 1.0), &outer);
    canvas.fill_rect(rect(x + 6.0, y + 26.0, 4.0, 1.0), &Rgba::hex(0xffaa00).into());
    canvas.fill_rect(rect(x + 7.0, y + 26.0, 2.0, 1.0), &Rgba::WHITE.into());

    glow(ctx, canvas, Rgba::hex(0x00bfff), 8.0);
    canvas.fill_rect(rect(x, y, 16.0, 32.0), &Rgba::rgba(0, 191, 255, 0.3).into());
    no_glow(ctx, canvas);

    canvas.set_pixelated(false);
}

const SHOT_STOPS: &[ColorStop] = &[
    (0.0, Rgba::WHITE),
    (0.5, Rgba::hex(0x00ff00)),
    (1.0, Rgba::hex(0x00cc00)),
];

fn draw_projectile(shot: &Projectile, ctx: &FrameContext, canvas: &mut impl Canvas) {
    let b = shot.bounds();
    glow(ctx, canvas, Rgba::hex(0x00ff00), 15.0);
    canvas.fill_rect(
        b,
        &Paint::Linear {
            from: b.pos,
            to: Vec2::new(b.left(), b.bottom()),
            stops: SHOT_STOPS,
        },
    );
    canvas.fill_rect(
        rect(b.left(), b.bottom(), b.size.x, 5.0),
        &Rgba::rgba(0, 255, 0, 0.4).into(),
    );
    let m = ctx.collision_margin;
    canvas.stroke_rect(
        rect(b.left() - m, b.top() - m, b.size.x + 2.0 * m, b.size.y + 2.0 * m),
        Rgba::rgba(0, 255, 0, 0.2),
        1.0,
    );
    no_glow(ctx, canvas);
}

const ELITE_STOPS: &[ColorStop] = &[
    (0.0, Rgba::hex(0xff6600)),
    (0.5, Rgba::hex(0xff3300)),
    (1.0, Rgba::hex(0xcc0000)),
];

/// Elites are drawn this much larger than their hitbox
const ELITE_SCALE: f32 = 1.5;

fn draw_hostile(hostile: &Hostile, ctx: &FrameContext, canvas: &mut impl Canvas) {
    let Vec2 { x, y } = hostile.pos;
    let Vec2 { x: w, y: h } = hostile.size;

    if hostile.elite {
        glow(ctx, canvas, Rgba::hex(0xff6600), 25.0);

        let (sw, sh) = (w * ELITE_SCALE, h * ELITE_SCALE);
        canvas.fill_rect(
            rect(x + (w - sw) / 2.0, y + (h - sh) / 2.0, sw, sh),
            &Paint::Linear {
                from: hostile.pos,
                to: Vec2::new(x, y + h),
                stops: ELITE_STOPS,
            },
        );

        // Crown
        let gold = Paint::Solid(Rgba::hex(0xffd700));
        canvas.fill_rect(rect(x + 10.0, y + 5.0, 10.0, 5.0), &gold);
        canvas.fill_rect(rect(x + 8.0, y + 3.0, 14.0, 3.0), &gold);

        let eyes = Paint::Solid(Rgba::hex(0xff0000));
        canvas.fill_rect(rect(x + 12.0, y + 12.0, 3.0, 3.0), &eyes);
        canvas.fill_rect(rect(x + 15.0, y + 12.0, 3.0, 3.0), &eyes);

        let wings = Paint::Solid(Rgba::hex(0xff4400));
        canvas.fill_rect(rect(x + 3.0, y + 25.0, 12.0, 8.0), &wings);
        canvas.fill_rect(rect(x + 15.0, y + 25.0, 12.0, 8.0), &wings);

        // Health bar
        canvas.fill_rect(rect(x - 1.0, y - 8.0, w + 2.0, 6.0), &Rgba::hex(0x333333).into());
        canvas.fill_rect(rect(x, y - 7.0, w, 4.0), &Rgba::hex(0xff0000).into());
        canvas.fill_rect(
            rect(x, y - 7.0, w * hostile.health_fraction(), 4.0),
            &Rgba::hex(0x00ff00).into(),
        );

        canvas.fill_text(
            "BOSS",
            Vec2::new(x + 5.0, y - 10.0),
            8.0,
            TextAlign::Left,
            &Rgba::WHITE.into(),
        );
    } else {
        glow(ctx, canvas, Rgba::hex(0xff0000), 15.0);

        canvas.fill_rect(rect(x, y, w, h), &Rgba::hex(0xff0000).into());
        canvas.fill_rect(rect(x + 10.0, y + 10.0, 10.0, 10.0), &Rgba::hex(0xff6b6b).into());

        let eyes = Paint::Solid(Rgba::WHITE);
        canvas.fill_rect(rect(x + 12.0, y + 12.0, 3.0, 3.0), &eyes);
        canvas.fill_rect(rect(x + 15.0, y + 12.0, 3.0, 3.0), &eyes);

        let wings = Paint::Solid(Rgba::hex(0xcc0000));
        canvas.fill_rect(rect(x + 5.0, y + 25.0, 8.0, 5.0), &wings);
        canvas.fill_rect(rect(x + 17.0, y + 25.0, 8.0, 5.0), &wings);
    }

    no_glow(ctx, canvas);
}

const HEART_STOPS: &[ColorStop] = &[
    (0.0, Rgba::WHITE),
    (0.5, Rgba::hex(0xff6b6b)),
    (1.0, Rgba::hex(0xff4757)),
];

const REPAIR_STOPS: &[ColorStop] = &[
    (0.0, Rgba::hex(0xffd43b)),
    (0.5, Rgba::hex(0xffa502)),
    (1.0, Rgba::hex(0xff8c00)),
];

fn draw_power_up(power_up: &PowerUp, ctx: &FrameContext, canvas: &mut impl Canvas) {
    let b = power_up.bounds();
    let Vec2 { x, y } = b.pos;
    let center = b.center();

    let glow_color = match power_up.kind {
        PowerUpKind::Health => Rgba::hex(0xff6b6b),
        PowerUpKind::Repair => Rgba::hex(0xffa502),
    };
    glow(ctx, canvas, glow_color, 30.0);

    // Rarity frame
    canvas.stroke_rect(
        rect(x - 2.0, y - 2.0, b.size.x + 4.0, b.size.y + 4.0),
        Rgba::hex(0xffd700),
        4.0,
    );

    match power_up.kind {
        PowerUpKind::Health => {
            canvas.fill_circle(
                center,
                10.0,
                &Paint::Radial {
                    center,
                    radius: 12.0,
                    stops: HEART_STOPS,
                },
            );
            let beat = 1.0 + pulse(ctx, 0.008) * 0.3;
            canvas.fill_circle(center, 6.0 * beat, &Rgba::hex(0xff4757).into());

            let spin = ctx.now_ms * 0.016;
            let gold = Paint::Solid(Rgba::hex(0xffd700));
            for i in 0..4 {
                let angle = spin + i as f64 * std::f64::consts::FRAC_PI_2;
                let p = center + Vec2::new(angle.cos() as f32, angle.sin() as f32) * 12.0;
                canvas.fill_rect(rect(p.x, p.y, 2.0, 2.0), &gold);
            }
        }
        PowerUpKind::Repair => {
            canvas.fill_rect(
                rect(x + 5.0, y + 5.0, 20.0, 20.0),
                &Paint::Linear {
                    from: b.pos,
                    to: Vec2::new(x, b.bottom()),
                    stops: REPAIR_STOPS,
                },
            );
            // Hammer head and handle
            canvas.fill_rect(rect(x + 8.0, y + 8.0, 14.0, 8.0), &Rgba::hex(0xff6348).into());
            canvas.fill_rect(rect(x + 12.0, y + 16.0, 6.0, 8.0), &Rgba::hex(0x8b4513).into());

            let spin = ctx.now_ms * 0.015;
            let white = Paint::Solid(Rgba::WHITE);
            for i in 0..5 {
                let angle = spin + i as f64 * std::f64::consts::TAU / 5.0;
                let p = center + Vec2::new(angle.cos() as f32, angle.sin() as f32) * 10.0;
                canvas.fill_rect(rect(p.x, p.y, 3.0, 3.0), &white);
            }
        }
    }

    let border_alpha = 0.7 + 0.3 * pulse(ctx, 0.008);
    canvas.stroke_rect(b, Rgba::WHITE.with_alpha(border_alpha), 4.0);

    canvas.fill_text(
        "RARE",
        Vec2::new(x + 2.0, y - 5.0),
        6.0,
        TextAlign::Left,
        &Rgba::hex(0xffd700).into(),
    );

    no_glow(ctx, canvas);
}

fn draw_particles(state: &GameState, canvas: &mut impl Canvas) {
    for particle in &state.particles {
        canvas.set_alpha(particle.life as f32 / PARTICLE_LIFETIME as f32);
        canvas.fill_rect(
            rect(particle.pos.x, particle.pos.y, 3.0, 3.0),
            &Rgba::from_hsl(particle.hue, 1.0, 0.5).into(),
        );
    }
    canvas.set_alpha(1.0);
}

const TITLE_STOPS: &[ColorStop] = &[
    (0.0, Rgba::hex(0xff6b6b)),
    (0.5, Rgba::hex(0x4ecdc4)),
    (1.0, Rgba::hex(0x45b7d1)),
];

fn draw_game_over(state: &GameState, ctx: &FrameContext, canvas: &mut impl Canvas) {
    let field = state.playfield;
    let (w, h) = (field.width, field.height);
    let mid = Vec2::new(w / 2.0, h / 2.0);

    canvas.fill_rect(rect(0.0, 0.0, w, h), &Rgba::rgba(0, 0, 0, 0.8).into());

    canvas.fill_text(
        "GAME OVER",
        mid + Vec2::new(0.0, -80.0),
        64.0,
        TextAlign::Center,
        &Paint::Linear {
            from: Vec2::ZERO,
            to: Vec2::new(w, 0.0),
            stops: TITLE_STOPS,
        },
    );

    let white = Paint::Solid(Rgba::WHITE);
    canvas.fill_text(
        &format!("Final Score: {}", state.session.score),
        mid + Vec2::new(0.0, -20.0),
        32.0,
        TextAlign::Center,
        &white,
    );
    canvas.fill_text(
        &format!("Level Reached: {}", state.session.level),
        mid + Vec2::new(0.0, 20.0),
        28.0,
        TextAlign::Center,
        &white,
    );
    canvas.fill_text(
        "Click anywhere to restart",
        mid + Vec2::new(0.0, 80.0),
        20.0,
        TextAlign::Center,
        &Rgba::hex(0xffc107).into(),
    );
    canvas.fill_text(
        "Game will auto-start when you click",
        mid + Vec2::new(0.0, 110.0),
        16.0,
        TextAlign::Center,
        &Rgba::hex(0xadb5bd).into(),
    );

    // Sparkles reshuffle ten times a second
    let mut sparkle = seeded(state.seed ^ (ctx.now_ms / 100.0) as u64);
    canvas.set_alpha(0.6);
    for _ in 0..20 {
        let size = sparkle.roll() * 3.0 + 1.0;
        let (sx, sy) = (sparkle.roll() * w, sparkle.roll() * h);
        canvas.fill_rect(rect(sx, sy, size, size), &white);
    }
    canvas.set_alpha(1.0);

    let frame = rect(50.0, h / 2.0 - 120.0, w - 100.0, 200.0);
    canvas.stroke_rect(frame, Rgba::hex(0x0d6efd), 3.0);
    let alpha = 0.5 + 0.3 * pulse(ctx, 0.005);
    canvas.set_line_dash(&[10.0, 5.0]);
    canvas.stroke_rect(frame, Rgba::rgba(13, 110, 253, alpha), 2.0);
    canvas.set_line_dash(&[]);
}
