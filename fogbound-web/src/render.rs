//! Canvas renderer: viewport math plus the per-frame draw pass.
//!
//! The viewport is an 11x11 window locked on the player while fog of war is
//! on, and the whole maze scaled into a fixed 440px square otherwise. Fog is
//! purely a display filter; nothing here feeds back into movement.

use fogbound_game::{Cell, FOG_VIEWPORT, GameSession, Position, is_revealed};
use web_sys::CanvasRenderingContext2d;

use crate::prefs::DisplayPrefs;

/// Cell size in pixels while the fogged viewport is active.
pub const FOG_CELL_PX: i32 = 40;
/// Canvas side in pixels for the full-maze view.
pub const FULL_VIEW_PX: i32 = 440;

const WALL_COLOR: &str = "#333";
const FLOOR_COLOR: &str = "#fff";
const FOG_COLOR: &str = "#888";
const TRAIL_COLOR: &str = "rgba(100, 149, 237, 0.5)";
const PORTAL_COLOR: &str = "purple";
const EXIT_COLOR: &str = "green";
const PLAYER_COLOR: &str = "red";
const ARROW_COLOR: &str = "yellow";

/// Window of grid cells mapped onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub origin: Position,
    pub size: i32,
    pub cell_px: i32,
}

impl Viewport {
    /// Viewport for the current frame: fogged window centered on the player,
    /// or the whole maze.
    #[must_use]
    pub const fn new(maze_size: i32, player: Position, fog_of_war: bool) -> Self {
        if fog_of_war {
            Self {
                origin: Position::new(player.x - FOG_VIEWPORT / 2, player.y - FOG_VIEWPORT / 2),
                size: FOG_VIEWPORT,
                cell_px: FOG_CELL_PX,
            }
        } else {
            Self {
                origin: Position::new(0, 0),
                size: maze_size,
                cell_px: FULL_VIEW_PX / maze_size,
            }
        }
    }

    /// Canvas side length in pixels.
    #[must_use]
    pub const fn side_px(&self) -> i32 {
        self.size * self.cell_px
    }

    /// Grid position translated into viewport cell coordinates.
    #[must_use]
    pub const fn to_screen(&self, pos: Position) -> Position {
        Position::new(pos.x - self.origin.x, pos.y - self.origin.y)
    }

    /// Whether a viewport cell coordinate is inside the window.
    #[must_use]
    pub const fn on_screen(&self, screen: Position) -> bool {
        screen.x >= 0 && screen.x < self.size && screen.y >= 0 && screen.y < self.size
    }
}

/// Render one frame of the session onto `ctx`. The canvas is expected to be
/// `side_px` square for the frame's viewport.
pub fn draw(ctx: &CanvasRenderingContext2d, session: &GameSession, prefs: DisplayPrefs) {
    let grid = session.grid();
    let player = session.player();
    let view = Viewport::new(grid.size(), player, prefs.fog_of_war);
    let cell = f64::from(view.cell_px);
    let side = f64::from(view.side_px());

    ctx.clear_rect(0.0, 0.0, side, side);

    for sy in 0..view.size {
        for sx in 0..view.size {
            let pos = Position::new(view.origin.x + sx, view.origin.y + sy);
            if !grid.contains(pos) {
                continue;
            }
            let px = f64::from(sx) * cell;
            let py = f64::from(sy) * cell;

            if prefs.fog_of_war && !is_revealed(player, pos) {
                ctx.set_fill_style_str(FOG_COLOR);
                ctx.fill_rect(px, py, cell, cell);
                continue;
            }

            ctx.set_fill_style_str(if grid.cell(pos) == Cell::Wall {
                WALL_COLOR
            } else {
                FLOOR_COLOR
            });
            ctx.fill_rect(px, py, cell, cell);

            if prefs.show_path && session.has_visited(pos) {
                ctx.set_fill_style_str(TRAIL_COLOR);
                ctx.fill_rect(px, py, cell, cell);
            }

            if prefs.show_portals && session.portals().contains(pos) {
                ctx.set_fill_style_str(PORTAL_COLOR);
                ctx.begin_path();
                let _ = ctx.arc(
                    px + cell / 2.0,
                    py + cell / 2.0,
                    cell / 6.0,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
            }
        }
    }

    if prefs.show_exit {
        let screen = view.to_screen(session.exit());
        if view.on_screen(screen) {
            ctx.set_fill_style_str(EXIT_COLOR);
            ctx.fill_rect(
                f64::from(screen.x) * cell + cell / 4.0,
                f64::from(screen.y) * cell + cell / 4.0,
                cell / 2.0,
                cell / 2.0,
            );
        }
    }

    let player_screen = view.to_screen(player);
    let center_x = f64::from(player_screen.x) * cell + cell / 2.0;
    let center_y = f64::from(player_screen.y) * cell + cell / 2.0;
    ctx.set_fill_style_str(PLAYER_COLOR);
    ctx.begin_path();
    let _ = ctx.arc(center_x, center_y, cell / 3.0, 0.0, std::f64::consts::TAU);
    ctx.fill();

    // With the maze mostly hidden, a compass arrow toward the exit keeps the
    // fogged mode navigable.
    if prefs.fog_of_war && prefs.show_exit {
        draw_exit_arrow(ctx, center_x, center_y, cell, player, session.exit());
    }
}

fn draw_exit_arrow(
    ctx: &CanvasRenderingContext2d,
    center_x: f64,
    center_y: f64,
    cell: f64,
    player: Position,
    exit: Position,
) {
    let angle = f64::from(exit.y - player.y).atan2(f64::from(exit.x - player.x));
    let length = cell / 2.0;
    let head = length / 3.0;
    let end_x = center_x + angle.cos() * length;
    let end_y = center_y + angle.sin() * length;

    ctx.set_stroke_style_str(ARROW_COLOR);
    ctx.set_line_width(3.0);
    ctx.begin_path();
    ctx.move_to(center_x, center_y);
    ctx.line_to(end_x, end_y);
    for barb in [
        angle - std::f64::consts::FRAC_PI_6,
        angle + std::f64::consts::FRAC_PI_6,
    ] {
        ctx.move_to(end_x, end_y);
        ctx.line_to(end_x - head * barb.cos(), end_y - head * barb.sin());
    }
    ctx.stroke();
}
