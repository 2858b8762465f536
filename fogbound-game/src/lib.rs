//! Fogbound Game Engine
//!
//! Platform-agnostic core logic for the Fogbound maze game: procedural maze
//! generation, portal pairs, fog-of-war visibility, and the session state
//! machine. This crate has no UI or platform-specific dependencies; the host
//! supplies directional input and millisecond timestamps and renders from
//! the read-only views exposed here.

pub mod constants;
pub mod fog;
pub mod generator;
pub mod grid;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use fog::{FOG_RADIUS, FOG_VIEWPORT, is_revealed};
pub use generator::{
    ExitPlacement, MazeError, MazeLayout, PortalTable, carve_from, generate, nearest_passage,
    pick_exit, place_exit_away_from, place_portal_pairs,
};
pub use grid::{Cell, Direction, Grid, Position};
pub use session::{GameSession, MoveOutcome, SessionConfig, SessionPhase};
pub use timer::{SessionClock, format_elapsed};
