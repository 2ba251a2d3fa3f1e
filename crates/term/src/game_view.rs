//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The fixed 800x600 field is projected onto
//! whatever viewport the terminal currently has; the simulation never sees
//! terminal coordinates.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use tui_flappy_core::{Run, Session};
use tui_flappy_types::{Rect, SessionPhase, FIELD_HEIGHT, FIELD_WIDTH, FLOOR_Y};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Day/night palette, selected by the dark-theme toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub sky: Rgb,
    pub text: Rgb,
    pub ground: Rgb,
    pub barrier: Rgb,
}

impl Theme {
    pub fn palette(dark: bool) -> Self {
        if dark {
            Self {
                sky: Rgb::new(15, 15, 30),
                text: Rgb::new(230, 230, 230),
                ground: Rgb::new(70, 70, 70),
                barrier: Rgb::new(0, 180, 120),
            }
        } else {
            Self {
                sky: Rgb::new(135, 206, 235),
                text: Rgb::new(0, 0, 0),
                ground: Rgb::new(222, 216, 149),
                barrier: Rgb::new(0, 180, 0),
            }
        }
    }
}

const BIRD_COLOR: Rgb = Rgb::new(245, 200, 66);
const GAME_OVER_COLOR: Rgb = Rgb::new(255, 60, 60);
const RAIN_COLOR: Rgb = Rgb::new(180, 180, 255);

/// A lightweight terminal view of the game.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the session into an existing framebuffer.
    ///
    /// Allocation-free hot path: callers reuse one framebuffer across
    /// frames, resized only when the terminal size changes. `frame` drives
    /// decoration animation (rain) only.
    pub fn render_into(
        &self,
        session: &Session,
        frame: u64,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let toggles = session.toggles();
        let theme = Theme::palette(toggles.dark);
        let mut sky = CellStyle::on(theme.sky).with_fg(theme.text);
        if toggles.fog {
            sky = sky.dimmed();
        }
        fb.clear(sky.into_cell(' '));

        if let Some(run) = session.run() {
            self.draw_obstacles(fb, viewport, run, theme);
        }
        self.draw_ground(fb, viewport, theme);
        if let Some(run) = session.run() {
            self.draw_bird(fb, viewport, run);
        }
        if toggles.rain {
            self.draw_rain(fb, viewport, frame);
        }

        let text = CellStyle::on(theme.sky).with_fg(theme.text);
        match session.phase() {
            SessionPhase::Start => self.draw_start_screen(fb, viewport, session, text),
            SessionPhase::Playing => self.draw_hud(fb, session, text),
            SessionPhase::GameOver => self.draw_game_over(fb, viewport, session, text),
        }
    }

    fn draw_ground(&self, fb: &mut FrameBuffer, viewport: Viewport, theme: Theme) {
        let gy = cell_y(viewport, FLOOR_Y);
        let (y0, _) = clamp_span(gy, viewport.height as i32, viewport.height);
        fb.fill_rect(
            0,
            y0,
            viewport.width,
            viewport.height - y0,
            ' ',
            CellStyle::on(theme.ground),
        );
    }

    fn draw_obstacles(&self, fb: &mut FrameBuffer, viewport: Viewport, run: &Run, theme: Theme) {
        let gap_height = run.params().gap_height;
        let style = CellStyle::on(theme.barrier);
        for obstacle in run.track().obstacles() {
            self.fill_field_rect(fb, viewport, obstacle.upper_rect(), style);
            // Clip the lower barrier at the ground line; the ground strip
            // is drawn separately.
            let lower = obstacle.lower_rect(gap_height);
            let clipped = Rect::new(lower.x, lower.y, lower.w, (FLOOR_Y - lower.y).max(0.0));
            self.fill_field_rect(fb, viewport, clipped, style);
        }
    }

    fn draw_bird(&self, fb: &mut FrameBuffer, viewport: Viewport, run: &Run) {
        self.fill_field_rect(fb, viewport, run.bird().bounds(), CellStyle::on(BIRD_COLOR));
    }

    fn draw_rain(&self, fb: &mut FrameBuffer, viewport: Viewport, frame: u64) {
        let ground_row = cell_y(viewport, FLOOR_Y).max(0) as u16;
        for y in 0..ground_row.min(viewport.height) {
            for x in 0..viewport.width {
                let h = x as u64 * 31 + y as u64 * 17 + frame * 7;
                if h % 53 == 0 {
                    if let Some(mut cell) = fb.get(x, y) {
                        cell.ch = '/';
                        cell.style.fg = RAIN_COLOR;
                        fb.set(x, y, cell);
                    }
                }
            }
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, session: &Session, text: CellStyle) {
        fb.put_str(2, 1, &format!("SCORE {}", session.score()), text);
        fb.put_str(2, 2, &format!("HIGH  {}", session.high_score()), text);
    }

    fn draw_start_screen(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        session: &Session,
        text: CellStyle,
    ) {
        let mid = viewport.height / 3;
        put_centered(fb, mid, "TUI FLAPPY", text.bold());
        put_centered(fb, mid + 2, "1 EASY   2 MEDIUM   3 HARD", text);
        put_centered(
            fb,
            mid + 4,
            &format!("HIGH SCORE : {}", session.high_score()),
            text,
        );
        put_centered(fb, mid + 6, "R RAIN   F FOG   D/L THEME   Q QUIT", text);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        session: &Session,
        text: CellStyle,
    ) {
        let mid = viewport.height / 3;
        put_centered(fb, mid, "GAME OVER", text.with_fg(GAME_OVER_COLOR).bold());
        put_centered(fb, mid + 2, &format!("SCORE : {}", session.score()), text);
        put_centered(
            fb,
            mid + 3,
            &format!("HIGH  : {}", session.high_score()),
            text,
        );
        put_centered(fb, mid + 5, "PRESS ANY KEY", text);
    }

    /// Project a field-space rectangle onto viewport cells and fill it.
    fn fill_field_rect(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        rect: Rect,
        style: CellStyle,
    ) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let (x0, x1) = clamp_span(
            cell_x(viewport, rect.x),
            cell_x_ceil(viewport, rect.x + rect.w),
            viewport.width,
        );
        let (y0, y1) = clamp_span(
            cell_y(viewport, rect.y),
            cell_y_ceil(viewport, rect.y + rect.h),
            viewport.height,
        );
        if x1 > x0 && y1 > y0 {
            fb.fill_rect(x0, y0, x1 - x0, y1 - y0, ' ', style);
        }
    }
}

fn cell_x(viewport: Viewport, x: f32) -> i32 {
    (x / FIELD_WIDTH * viewport.width as f32).floor() as i32
}

fn cell_x_ceil(viewport: Viewport, x: f32) -> i32 {
    (x / FIELD_WIDTH * viewport.width as f32).ceil() as i32
}

fn cell_y(viewport: Viewport, y: f32) -> i32 {
    (y / FIELD_HEIGHT * viewport.height as f32).floor() as i32
}

fn cell_y_ceil(viewport: Viewport, y: f32) -> i32 {
    (y / FIELD_HEIGHT * viewport.height as f32).ceil() as i32
}

fn clamp_span(lo: i32, hi: i32, max: u16) -> (u16, u16) {
    let lo = lo.clamp(0, max as i32) as u16;
    let hi = hi.clamp(0, max as i32) as u16;
    (lo, hi)
}

fn put_centered(fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
    let len = text.chars().count() as u16;
    let x = fb.width().saturating_sub(len) / 2;
    fb.put_str(x, y, text, style);
}
