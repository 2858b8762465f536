//! Centralized tuning constants for Fogbound game logic.
//!
//! Keeping them together ensures gameplay can only be adjusted via code
//! changes reviewed in version control.

// Maze shape ---------------------------------------------------------------
pub const DEFAULT_MAZE_SIZE: i32 = 21;
pub const MIN_MAZE_SIZE: i32 = 5;

// Portals ------------------------------------------------------------------
pub const DEFAULT_PORTAL_PAIRS: u32 = 3;
pub const PORTAL_PLACEMENT_ATTEMPTS: u32 = 1_000;

// Exit ---------------------------------------------------------------------
/// Minimum Manhattan distance between the player and a randomly placed exit.
pub const EXIT_MIN_PLAYER_DISTANCE: i32 = 10;
/// Random draws before the opposite-quadrant fallback kicks in.
pub const EXIT_PLACEMENT_ATTEMPTS: u32 = 100;
/// Half-width of the center box the generation-time exit draw must avoid.
pub const CENTER_EXCLUSION_RADIUS: i32 = 3;
