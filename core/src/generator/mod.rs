use crate::*;
pub use random::*;

mod random;

/// Source of mine layouts. Production games draw from OS entropy, tests inject a seeded RNG.
pub trait MineGenerator {
    /// Draws a layout with exactly `config.mines()` mines.
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}
