//! Persisted display toggles. These only shape what gets rendered, with one
//! documented exception: hiding portals also disables portal warps.

use serde::{Deserialize, Serialize};

use crate::dom;

const STORAGE_KEY: &str = "fogbound.prefs";

/// The four display toggles from the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPrefs {
    pub fog_of_war: bool,
    pub show_exit: bool,
    pub show_path: bool,
    pub show_portals: bool,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            fog_of_war: true,
            show_exit: true,
            show_path: true,
            show_portals: true,
        }
    }
}

impl DisplayPrefs {
    /// Load saved prefs, falling back to defaults when storage is missing
    /// or holds something unparseable.
    #[must_use]
    pub fn load() -> Self {
        dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Best-effort persistence; a full or unavailable storage is not worth
    /// interrupting the game over.
    pub fn save(self) {
        let Ok(json) = serde_json::to_string(&self) else {
            return;
        };
        if let Ok(storage) = dom::local_storage() {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
    }
}
