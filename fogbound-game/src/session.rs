//! Game session: player state, movement validation, portal warps, victory.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::constants::{
    DEFAULT_MAZE_SIZE, DEFAULT_PORTAL_PAIRS, EXIT_MIN_PLAYER_DISTANCE, EXIT_PLACEMENT_ATTEMPTS,
};
use crate::generator::{self, ExitPlacement, MazeError, PortalTable};
use crate::grid::{Direction, Grid, Position};
use crate::timer::SessionClock;

/// Parameters for constructing a session. `Default` mirrors the shipped
/// game: 21x21 maze, 3 portal pairs, exit at least 10 steps away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub size: i32,
    pub portal_pairs: u32,
    pub exit_min_distance: i32,
    pub placement_attempts: u32,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_MAZE_SIZE,
            portal_pairs: DEFAULT_PORTAL_PAIRS,
            exit_min_distance: EXIT_MIN_PLAYER_DISTANCE,
            placement_attempts: EXIT_PLACEMENT_ATTEMPTS,
            seed: 0,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of a single directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The step (plus any portal warp) committed.
    Moved,
    /// Rejected; no state changed.
    Blocked,
    /// The player reached the exit; the clock is now frozen.
    Victory { elapsed_ms: u64 },
}

/// Session lifecycle. The only way out of either phase is constructing a
/// fresh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Ready,
    Won,
}

/// One complete generate-play-win cycle: maze, portals, exit, player,
/// visited trail, and the session clock.
///
/// Owned by whatever drives input events; there is no ambient singleton.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    portals: PortalTable,
    exit: ExitPlacement,
    player: Position,
    visited: HashSet<Position>,
    clock: SessionClock,
    phase: SessionPhase,
    portals_enabled: bool,
}

impl GameSession {
    /// Generate a maze from `cfg.seed`, place the exit away from the player,
    /// center the player, and start the clock at `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidSize`] for an even or too-small maze size.
    pub fn new(cfg: &SessionConfig, now_ms: u64) -> Result<Self, MazeError> {
        let mut rng = ChaCha20Rng::seed_from_u64(cfg.seed);
        let layout = generator::generate(cfg.size, cfg.portal_pairs, &mut rng)?;
        let player = layout.grid.center();
        let exit = generator::place_exit_away_from(
            &layout.grid,
            player,
            cfg.exit_min_distance,
            cfg.placement_attempts,
            &mut rng,
        );
        let mut visited = HashSet::new();
        visited.insert(player);
        Ok(Self {
            grid: layout.grid,
            portals: layout.portals,
            exit,
            player,
            visited,
            clock: SessionClock::start(now_ms),
            phase: SessionPhase::Ready,
            portals_enabled: true,
        })
    }

    /// Build a session from an existing layout and player position, with the
    /// clock started at `now_ms`. Useful for drivers and tests that already
    /// hold a maze rather than a seed.
    #[must_use]
    pub fn from_parts(
        grid: Grid,
        portals: PortalTable,
        exit: ExitPlacement,
        player: Position,
        now_ms: u64,
    ) -> Self {
        let mut visited = HashSet::new();
        visited.insert(player);
        Self {
            grid,
            portals,
            exit,
            player,
            visited,
            clock: SessionClock::start(now_ms),
            phase: SessionPhase::Ready,
            portals_enabled: true,
        }
    }

    /// Attempt a single-cell step in `direction`.
    ///
    /// A step into a wall or out of bounds is [`MoveOutcome::Blocked`] and
    /// changes nothing. A committed step records the new cell in the visited
    /// trail; when portals are enabled and the cell is a portal endpoint the
    /// player warps to the paired destination (recorded too). Landing on the
    /// exit stops the clock and yields [`MoveOutcome::Victory`]. Input after
    /// victory is inert.
    pub fn attempt_move(&mut self, direction: Direction, now_ms: u64) -> MoveOutcome {
        if self.phase == SessionPhase::Won {
            return MoveOutcome::Blocked;
        }
        let next = self.player.step(direction);
        if !self.is_valid_move(next) {
            return MoveOutcome::Blocked;
        }
        self.player = next;
        self.visited.insert(next);

        if self.portals_enabled
            && let Some(dest) = self.portals.destination(next)
        {
            self.player = dest;
            self.visited.insert(dest);
        }

        if self.player == self.exit.position() {
            self.clock.stop(now_ms);
            self.phase = SessionPhase::Won;
            return MoveOutcome::Victory {
                elapsed_ms: self.clock.elapsed_ms(now_ms),
            };
        }
        MoveOutcome::Moved
    }

    /// Pure legality predicate: in bounds and a passage cell.
    #[must_use]
    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.grid.is_open(pos)
    }

    /// Whether stepping onto a portal endpoint triggers a warp. Mirrors the
    /// show-portals display toggle: hidden portals do not fire.
    pub fn set_portals_enabled(&mut self, enabled: bool) {
        self.portals_enabled = enabled;
    }

    #[must_use]
    pub const fn portals_enabled(&self) -> bool {
        self.portals_enabled
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn portals(&self) -> &PortalTable {
        &self.portals
    }

    #[must_use]
    pub const fn player(&self) -> Position {
        self.player
    }

    #[must_use]
    pub const fn exit(&self) -> Position {
        self.exit.position()
    }

    /// How the exit position was chosen (random draw or forced fallback).
    #[must_use]
    pub const fn exit_placement(&self) -> ExitPlacement {
        self.exit
    }

    #[must_use]
    pub const fn visited(&self) -> &HashSet<Position> {
        &self.visited
    }

    #[must_use]
    pub fn has_visited(&self, pos: Position) -> bool {
        self.visited.contains(&pos)
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == SessionPhase::Won
    }

    /// Elapsed milliseconds; frozen at the victory timestamp after winning.
    #[must_use]
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.clock.elapsed_ms(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn session(seed: u64) -> GameSession {
        GameSession::new(&SessionConfig::default().with_seed(seed), 0).unwrap()
    }

    #[test]
    fn new_session_starts_centered_with_visited_center() {
        let s = session(1);
        let center = s.grid().center();
        assert_eq!(s.player(), center);
        assert_eq!(s.visited().len(), 1);
        assert!(s.has_visited(center));
        assert_eq!(s.phase(), SessionPhase::Ready);
        assert!(s.portals_enabled());
    }

    #[test]
    fn session_generation_is_seed_stable() {
        let a = session(42);
        let b = session(42);
        assert_eq!(a.exit(), b.exit());
        assert!(
            a.grid()
                .positions()
                .all(|p| a.grid().cell(p) == b.grid().cell(p))
        );
    }

    #[test]
    fn exit_respects_min_player_distance_unless_forced() {
        for seed in 0..30 {
            let s = session(seed);
            if !s.exit_placement().is_forced() {
                assert!(s.player().manhattan_distance(s.exit()) >= EXIT_MIN_PLAYER_DISTANCE);
            }
            assert_eq!(s.grid().cell(s.exit()), Cell::Passage);
        }
    }

    #[test]
    fn invalid_size_surfaces_generation_error() {
        let cfg = SessionConfig {
            size: 10,
            ..SessionConfig::default()
        };
        assert!(GameSession::new(&cfg, 0).is_err());
    }

    #[test]
    fn blocked_move_changes_nothing() {
        let mut s = session(2);
        // Walk into a wall: some cardinal neighbor of the center is wall in
        // any carved maze larger than the trivial one (the carve leaves the
        // step-by-1 ring partially intact). Find one.
        let blocked_dir = Direction::ALL
            .into_iter()
            .find(|d| !s.is_valid_move(s.player().step(*d)));
        if let Some(dir) = blocked_dir {
            let player = s.player();
            let exit = s.exit();
            let visited = s.visited().clone();
            assert_eq!(s.attempt_move(dir, 500), MoveOutcome::Blocked);
            assert_eq!(s.player(), player);
            assert_eq!(s.exit(), exit);
            assert_eq!(*s.visited(), visited);
        }
    }

    #[test]
    fn moving_into_passage_records_the_trail() {
        let mut s = session(3);
        let dir = Direction::ALL
            .into_iter()
            .find(|d| s.is_valid_move(s.player().step(*d)))
            .expect("center always has at least one open neighbor");
        let target = s.player().step(dir);
        let outcome = s.attempt_move(dir, 100);
        assert!(matches!(
            outcome,
            MoveOutcome::Moved | MoveOutcome::Victory { .. }
        ));
        assert!(s.has_visited(target));
    }

    #[test]
    fn unknown_positions_are_invalid_moves() {
        let s = session(4);
        assert!(!s.is_valid_move(Position::new(-1, 5)));
        assert!(!s.is_valid_move(Position::new(5, -1)));
        assert!(!s.is_valid_move(Position::new(s.grid().size(), 0)));
        assert!(!s.is_valid_move(Position::new(0, 0))); // border is wall
    }

    #[test]
    fn portal_toggle_round_trips() {
        // Deterministic warp scenarios live in tests/session_flow.rs; this
        // only covers the toggle plumbing.
        let mut s = session(5);
        s.set_portals_enabled(false);
        assert!(!s.portals_enabled());
        s.set_portals_enabled(true);
        assert!(s.portals_enabled());
    }

    #[test]
    fn elapsed_time_runs_until_victory() {
        let s = session(6);
        assert_eq!(s.elapsed_ms(0), 0);
        assert_eq!(s.elapsed_ms(30_000), 30_000);
    }
}
