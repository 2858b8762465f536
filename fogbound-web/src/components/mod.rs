pub mod dpad;
pub mod toggles;
pub mod victory;

pub use dpad::DirectionPad;
pub use toggles::TogglePanel;
pub use victory::VictoryOverlay;
