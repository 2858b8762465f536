//! Maze generation: randomized backtracking carve, portal pairs, exit pick.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use crate::constants::{
    CENTER_EXCLUSION_RADIUS, EXIT_PLACEMENT_ATTEMPTS, MIN_MAZE_SIZE, PORTAL_PLACEMENT_ATTEMPTS,
};
use crate::grid::{Cell, Direction, Grid, Position};

/// Errors surfaced by maze generation.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    #[error("maze size must be odd and at least {MIN_MAZE_SIZE}, got {size}")]
    InvalidSize { size: i32 },
}

/// Symmetric map of portal endpoints: if A warps to B, B warps to A.
#[derive(Debug, Clone, Default)]
pub struct PortalTable {
    links: HashMap<Position, Position>,
}

impl PortalTable {
    /// Insert both directions of a pair.
    pub fn link(&mut self, a: Position, b: Position) {
        self.links.insert(a, b);
        self.links.insert(b, a);
    }

    /// Paired destination for `pos`, if `pos` is a portal endpoint.
    #[must_use]
    pub fn destination(&self, pos: Position) -> Option<Position> {
        self.links.get(&pos).copied()
    }

    /// Whether `pos` already participates in any pair.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.links.contains_key(&pos)
    }

    /// Number of placed pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.links.len() / 2
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterate every portal endpoint position.
    pub fn endpoints(&self) -> impl Iterator<Item = Position> + '_ {
        self.links.keys().copied()
    }

    /// Iterate forward mappings, both directions of each pair included.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.links.iter().map(|(a, b)| (*a, *b))
    }
}

/// How an exit position was chosen: a successful random draw, or the
/// deterministic opposite-quadrant fallback after the attempt budget ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPlacement {
    Random(Position),
    Forced(Position),
}

impl ExitPlacement {
    #[must_use]
    pub const fn position(self) -> Position {
        match self {
            Self::Random(pos) | Self::Forced(pos) => pos,
        }
    }

    #[must_use]
    pub const fn is_forced(self) -> bool {
        matches!(self, Self::Forced(_))
    }
}

/// A freshly generated maze: carved grid, portal pairs, exit.
#[derive(Debug, Clone)]
pub struct MazeLayout {
    pub grid: Grid,
    pub portals: PortalTable,
    pub exit: ExitPlacement,
}

/// Generate a complete maze layout.
///
/// Carves a spanning-tree maze from the center cell, places
/// `portal_pairs` bidirectional portal pairs, and picks an exit away from
/// the center.
///
/// # Errors
///
/// Returns [`MazeError::InvalidSize`] when `size` is even or below the
/// minimum.
pub fn generate(size: i32, portal_pairs: u32, rng: &mut impl Rng) -> Result<MazeLayout, MazeError> {
    if size < MIN_MAZE_SIZE || size % 2 == 0 {
        return Err(MazeError::InvalidSize { size });
    }
    let mut grid = Grid::new(size);
    let center = grid.center();
    carve_from(&mut grid, center, rng);
    let portals = place_portal_pairs(&grid, portal_pairs, PORTAL_PLACEMENT_ATTEMPTS, rng);
    let exit = pick_exit(&grid, EXIT_PLACEMENT_ATTEMPTS, rng);
    Ok(MazeLayout {
        grid,
        portals,
        exit,
    })
}

/// Randomized depth-first backtracking carve starting at `start`.
///
/// Each frame holds its own uniformly shuffled direction order; a step-by-2
/// target is only entered while it is still wall and strictly inside the
/// border ring, which keeps the border intact and the result cycle-free.
/// The frame stack replaces native recursion so depth never limits grid size.
pub fn carve_from(grid: &mut Grid, start: Position, rng: &mut impl Rng) {
    let mut frames: Vec<(Position, SmallVec<[Direction; 4]>)> = Vec::new();
    grid.carve(start);
    frames.push((start, shuffled_directions(rng)));

    while let Some((pos, remaining)) = frames.last_mut() {
        let Some(dir) = remaining.pop() else {
            frames.pop();
            continue;
        };
        let pos = *pos;
        let target = pos.offset(dir, 2);
        if grid.interior_contains(target) && grid.cell(target) == Cell::Wall {
            grid.carve(pos.offset(dir, 1));
            grid.carve(target);
            frames.push((target, shuffled_directions(rng)));
        }
    }
}

fn shuffled_directions(rng: &mut impl Rng) -> SmallVec<[Direction; 4]> {
    let mut dirs: SmallVec<[Direction; 4]> = SmallVec::from_slice(&Direction::ALL);
    dirs.shuffle(rng);
    dirs
}

/// Place up to `pairs` portal pairs on distinct passage cells.
///
/// Each pair draws two independent uniform positions and rejects the draw
/// while either lands on wall, they coincide, or either endpoint already
/// belongs to a pair. A pair that exhausts `max_attempts` is skipped, so the
/// returned table may hold fewer pairs than requested.
pub fn place_portal_pairs(
    grid: &Grid,
    pairs: u32,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> PortalTable {
    let mut portals = PortalTable::default();
    for _ in 0..pairs {
        for _ in 0..max_attempts {
            let a = random_position(grid, rng);
            let b = random_position(grid, rng);
            if grid.cell(a) == Cell::Wall
                || grid.cell(b) == Cell::Wall
                || a == b
                || portals.contains(a)
                || portals.contains(b)
            {
                continue;
            }
            portals.link(a, b);
            break;
        }
    }
    portals
}

/// Generation-time exit pick: any passage cell outside the 3x3 box around
/// the maze center, falling back to the far-corner heuristic.
pub fn pick_exit(grid: &Grid, max_attempts: u32, rng: &mut impl Rng) -> ExitPlacement {
    let center = grid.center();
    for _ in 0..max_attempts {
        let pos = random_position(grid, rng);
        let near_center = (pos.x - center.x).abs() < CENTER_EXCLUSION_RADIUS
            && (pos.y - center.y).abs() < CENTER_EXCLUSION_RADIUS;
        if grid.cell(pos) == Cell::Passage && !near_center {
            return ExitPlacement::Random(pos);
        }
    }
    ExitPlacement::Forced(forced_exit(grid, center))
}

/// Session exit placement: any passage cell at Manhattan distance at least
/// `min_distance` from `player`, falling back after `max_attempts` draws to
/// the corner of the quadrant opposite the player.
pub fn place_exit_away_from(
    grid: &Grid,
    player: Position,
    min_distance: i32,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> ExitPlacement {
    for _ in 0..max_attempts {
        let pos = random_position(grid, rng);
        if grid.cell(pos) == Cell::Passage && player.manhattan_distance(pos) >= min_distance {
            return ExitPlacement::Random(pos);
        }
    }
    ExitPlacement::Forced(forced_exit(grid, player))
}

/// Opposite-quadrant corner relative to `from`, snapped to the nearest
/// passage cell so the forced exit is always reachable.
fn forced_exit(grid: &Grid, from: Position) -> Position {
    // Compare against size/2 without integer truncation: on an odd grid the
    // center column counts as the low half.
    let corner = Position::new(
        if 2 * from.x < grid.size() {
            grid.size() - 2
        } else {
            1
        },
        if 2 * from.y < grid.size() {
            grid.size() - 2
        } else {
            1
        },
    );
    nearest_passage(grid, corner)
}

/// Nearest passage cell to `from`, searching outward ring by ring in
/// Chebyshev distance. Returns `from` unchanged when the grid has no
/// passage at all (only possible before carving).
#[must_use]
pub fn nearest_passage(grid: &Grid, from: Position) -> Position {
    if grid.is_open(from) {
        return from;
    }
    for radius in 1..grid.size() {
        let mut best: Option<(i32, Position)> = None;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx.abs() != radius && dy.abs() != radius {
                    continue; // interior of the ring was covered earlier
                }
                let pos = Position::new(from.x + dx, from.y + dy);
                if grid.is_open(pos) {
                    let dist = from.manhattan_distance(pos);
                    if best.is_none_or(|(d, _)| dist < d) {
                        best = Some((dist, pos));
                    }
                }
            }
        }
        if let Some((_, pos)) = best {
            return pos;
        }
    }
    from
}

fn random_position(grid: &Grid, rng: &mut impl Rng) -> Position {
    Position::new(rng.gen_range(0..grid.size()), rng.gen_range(0..grid.size()))
}
