use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform rejection sampling: keep drawing random cells over the whole board and mark the
/// ones that are not mines yet, until the requested count is reached.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R> {
    rng: R,
}

impl RandomMineGenerator<StdRng> {
    /// Fresh generator keyed from the operating system's entropy source.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMineGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Result<MineLayout> {
        let mut mine_mask = empty_grid();
        let mut mines_placed: CellCount = 0;

        // config caps mines below the cell count, so a free cell always remains
        while mines_placed < config.mines() {
            let coords: Coord2 = (
                self.rng.random_range(0..ROWS),
                self.rng.random_range(0..COLUMNS),
            );
            let cell = &mut mine_mask[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }

        MineLayout::from_generated(mine_mask, config)
    }
}
