// Centralized keyboard mapping: every input source (keydown listener,
// on-screen d-pad) funnels into a single requested `Direction`.

use fogbound_game::Direction;

/// Map a `KeyboardEvent.key` value to a movement direction.
/// Returns `None` for any other key; those are no-ops, not errors.
#[must_use]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Right));
    }

    #[test]
    fn wasd_maps_in_both_cases() {
        assert_eq!(direction_for_key("w"), Some(Direction::Up));
        assert_eq!(direction_for_key("S"), Some(Direction::Down));
        assert_eq!(direction_for_key("a"), Some(Direction::Left));
        assert_eq!(direction_for_key("D"), Some(Direction::Right));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(direction_for_key("Enter"), None);
        assert_eq!(direction_for_key(" "), None);
        assert_eq!(direction_for_key("q"), None);
    }
}
