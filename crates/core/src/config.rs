//! Round configuration.

/// Maximum submissions per round in the reference protocol.
pub const DEFAULT_MAX_TURNS: u32 = 8;

/// Tunable constants for a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Caps total accepted submissions per round. Fixed at round start;
    /// changing it mid-session only affects rounds started afterwards.
    pub max_turns: u32,
}

impl GameConfig {
    pub const fn new(max_turns: u32) -> Self {
        Self { max_turns }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}
