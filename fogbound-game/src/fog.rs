//! Fog-of-war visibility. Display-only: movement legality always consults
//! the full grid, never this filter.

use crate::grid::Position;

/// Euclidean reveal radius around the player.
pub const FOG_RADIUS: f64 = 3.0;

/// Side length of the fogged viewport window, in cells.
pub const FOG_VIEWPORT: i32 = 11;

/// Whether `cell` is revealed to a player standing at `player`.
#[must_use]
pub fn is_revealed(player: Position, cell: Position) -> bool {
    let dx = f64::from(cell.x - player.x);
    let dy = f64::from(cell.y - player.y);
    (dx * dx + dy * dy).sqrt() <= FOG_RADIUS
}
