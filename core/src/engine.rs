use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One wager round on a 5x5 board.
///
/// The mine layout stays hidden from callers until [`Game::is_over`]; the reveal mask, counters
/// and payout are public state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    mine_layout: MineLayout,
    revealed_mask: Array2<bool>,
    safe_reveals: CellCount,
    game_over: bool,
    payout: f64,
    #[serde(default)]
    revision: u64,
}

impl Game {
    /// Starts a game with mines placed from a freshly seeded OS-entropy generator.
    pub fn new(mine_count: CellCount) -> Result<Self> {
        Self::with_generator(mine_count, RandomMineGenerator::from_os_rng())
    }

    pub fn with_generator(mine_count: CellCount, generator: impl MineGenerator) -> Result<Self> {
        let config = GameConfig::new(mine_count)?;
        let mine_layout = generator.generate(config)?;
        mine_layout.check_matches(config)?;
        Ok(Self::from_layout(mine_layout))
    }

    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let game = Self {
            id: GameId::new_random(),
            mine_layout,
            revealed_mask: empty_grid(),
            safe_reveals: 0,
            game_over: false,
            payout: BASE_PAYOUT,
            revision: 0,
        };
        log::debug!("Created game {} with {} mines", game.id, game.mine_count());
        game
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn safe_reveals(&self) -> CellCount {
        self.safe_reveals
    }

    pub fn safe_cells_left(&self) -> CellCount {
        self.mine_layout.safe_cell_count() - self.safe_reveals
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn payout(&self) -> f64 {
        self.payout
    }

    /// Multiplier the next safe reveal would pay, `None` once nothing more can be won.
    pub fn next_payout(&self) -> Option<f64> {
        if self.game_over || self.safe_cells_left() == 0 {
            None
        } else {
            Some(payout_for(self.mine_count(), self.safe_reveals + 1))
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Called by storage after a successful write; gameplay never touches the revision.
    pub fn advance_revision(&mut self) {
        self.revision += 1;
    }

    pub fn revealed_mask(&self) -> &Array2<bool> {
        &self.revealed_mask
    }

    /// Full mine layout. Only hand this to players once the game is over.
    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed_mask[coords.to_nd_index()]
    }

    /// Reveals the cell at `(row, col)`.
    ///
    /// Rejections leave the game untouched and are checked in a fixed order: a finished game,
    /// then coordinates off the board, then a cell that was already revealed. Revealing a mine
    /// is not an error, it ends the game with a zero payout.
    pub fn apply_move(&mut self, row: i64, col: i64) -> Result<MoveOutcome> {
        self.check_not_over()?;
        let coords = board_coords(row, col).ok_or(GameError::OutOfBounds)?;
        if self.is_revealed(coords) {
            return Err(GameError::CellAlreadyRevealed);
        }

        self.revealed_mask[coords.to_nd_index()] = true;

        let outcome = if self.mine_layout.contains_mine(coords) {
            self.game_over = true;
            self.payout = LOST_PAYOUT;
            MoveOutcome::HitMine
        } else {
            self.safe_reveals += 1;
            self.payout = payout_for(self.mine_count(), self.safe_reveals);
            MoveOutcome::Safe
        };

        log::debug!(
            "Game {} revealed ({}, {}): {:?}, payout {}",
            self.id,
            row,
            col,
            outcome,
            self.payout
        );
        Ok(outcome)
    }

    fn check_not_over(&self) -> Result<()> {
        if self.game_over {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(mines: &[Coord2]) -> Game {
        Game::from_layout(MineLayout::from_mine_coords(mines).unwrap())
    }

    fn three_mine_game() -> Game {
        game(&[(4, 2), (4, 3), (4, 4)])
    }

    fn revealed_count(game: &Game) -> usize {
        game.revealed_mask().count_set()
    }

    #[test]
    fn new_game_starts_zeroed() {
        let game = Game::new(3).unwrap();

        assert_eq!(game.mine_count(), 3);
        assert_eq!(game.mine_layout().mine_mask().count_set(), 3);
        assert_eq!(game.safe_reveals(), 0);
        assert_eq!(game.payout(), BASE_PAYOUT);
        assert_eq!(game.revision(), 0);
        assert!(!game.is_over());
        assert_eq!(revealed_count(&game), 0);
    }

    #[test]
    fn every_valid_mine_count_produces_that_many_mines() {
        for mines in MIN_MINES..=MAX_MINES {
            let generator = RandomMineGenerator::from_seed(1000 + u64::from(mines));
            let game = Game::with_generator(mines, generator).unwrap();

            assert_eq!(game.mine_layout().mine_mask().count_set(), usize::from(mines));
        }
    }

    #[test]
    fn mine_count_bounds() {
        assert_eq!(Game::new(0).unwrap_err(), GameError::InvalidConfiguration);
        assert_eq!(Game::new(25).unwrap_err(), GameError::InvalidConfiguration);
        assert!(Game::new(1).is_ok());
        assert!(Game::new(24).is_ok());
    }

    struct FixedLayout(MineLayout);

    impl MineGenerator for FixedLayout {
        fn generate(self, _config: GameConfig) -> Result<MineLayout> {
            Ok(self.0)
        }
    }

    #[test]
    fn injected_generator_must_honour_the_mine_count() {
        let layout = MineLayout::from_mine_coords(&[(0, 0), (1, 1)]).unwrap();

        assert_eq!(
            Game::with_generator(3, FixedLayout(layout.clone())).unwrap_err(),
            GameError::InvalidConfiguration
        );
        let game = Game::with_generator(2, FixedLayout(layout)).unwrap();
        assert_eq!(game.mine_count(), 2);
    }

    #[test]
    fn games_get_distinct_ids() {
        assert_ne!(Game::new(3).unwrap().id(), Game::new(3).unwrap().id());
    }

    #[test]
    fn safe_reveals_follow_the_odds_table() {
        let mut game = three_mine_game();

        assert_eq!(game.apply_move(0, 0), Ok(MoveOutcome::Safe));
        assert_eq!(game.safe_reveals(), 1);
        assert_eq!(game.payout(), 1.12);
        assert!(!game.is_over());

        assert_eq!(game.apply_move(0, 1), Ok(MoveOutcome::Safe));
        assert_eq!(game.safe_reveals(), 2);
        assert_eq!(game.payout(), 1.48);
        assert!(!game.is_over());
        assert!(game.is_revealed((0, 0)));
        assert!(game.is_revealed((0, 1)));
    }

    #[test]
    fn hitting_a_mine_ends_the_game_with_zero_payout() {
        let mut game = three_mine_game();
        game.apply_move(0, 0).unwrap();
        game.apply_move(0, 1).unwrap();

        assert_eq!(game.apply_move(4, 4), Ok(MoveOutcome::HitMine));
        assert!(game.is_over());
        assert_eq!(game.payout(), LOST_PAYOUT);
        assert_eq!(game.safe_reveals(), 2);
        assert!(game.is_revealed((4, 4)));
        assert_eq!(game.next_payout(), None);
    }

    #[test]
    fn moves_after_game_over_are_rejected_without_changes() {
        let mut game = three_mine_game();
        game.apply_move(4, 2).unwrap();
        let snapshot = game.clone();

        assert_eq!(game.apply_move(1, 1), Err(GameError::GameAlreadyOver));
        assert_eq!(game.apply_move(4, 2), Err(GameError::GameAlreadyOver));
        assert_eq!(game.apply_move(-1, 9), Err(GameError::GameAlreadyOver));
        assert_eq!(game, snapshot);
    }

    #[test]
    fn out_of_bounds_moves_are_rejected_without_changes() {
        let mut game = three_mine_game();
        let snapshot = game.clone();

        for (row, col) in [(-1, 0), (0, -1), (5, 0), (0, 5), (i64::MIN, i64::MAX)] {
            assert_eq!(game.apply_move(row, col), Err(GameError::OutOfBounds));
        }
        assert_eq!(game, snapshot);
    }

    #[test]
    fn revealing_a_cell_twice_is_rejected() {
        let mut game = three_mine_game();
        game.apply_move(2, 2).unwrap();
        let snapshot = game.clone();

        assert_eq!(game.apply_move(2, 2), Err(GameError::CellAlreadyRevealed));
        assert_eq!(game, snapshot);
    }

    #[test]
    fn reveal_mask_and_counter_only_grow() {
        let mut game = game(&[(4, 4)]);
        let mut previous_mask = game.revealed_mask().clone();

        for row in 0..5 {
            for col in 0..5 {
                if (row, col) == (4, 4) {
                    continue;
                }
                let before = game.safe_reveals();
                assert_eq!(game.apply_move(row, col), Ok(MoveOutcome::Safe));
                assert_eq!(game.safe_reveals(), before + 1);

                let mask = game.revealed_mask();
                assert!(previous_mask.iter().zip(mask.iter()).all(|(&was, &now)| !was || now));
                assert_eq!(revealed_count(&game), usize::from(game.safe_reveals()));
                previous_mask = mask.clone();
            }
        }

        assert_eq!(game.safe_cells_left(), 0);
        assert_eq!(game.payout(), 24.75);
        assert!(!game.is_over());
        assert_eq!(game.next_payout(), None);
    }

    #[test]
    fn final_reveal_on_the_short_five_mine_row_pays_base() {
        let mut game = game(&[(4, 0), (4, 1), (4, 2), (4, 3), (4, 4)]);
        for row in 0..4 {
            for col in 0..5 {
                game.apply_move(row, col).unwrap();
            }
        }

        assert_eq!(game.safe_reveals(), 20);
        assert_eq!(game.payout(), BASE_PAYOUT);
    }

    #[test]
    fn next_payout_previews_the_following_reveal() {
        let mut game = three_mine_game();
        assert_eq!(game.next_payout(), Some(1.12));

        game.apply_move(0, 0).unwrap();
        assert_eq!(game.next_payout(), Some(1.48));
    }

    #[test]
    fn revision_only_moves_when_advanced() {
        let mut game = three_mine_game();
        game.apply_move(0, 0).unwrap();
        assert_eq!(game.revision(), 0);

        game.advance_revision();
        assert_eq!(game.revision(), 1);
    }

    #[test]
    fn serde_keeps_hidden_layout_for_storage() {
        let mut game = three_mine_game();
        game.apply_move(1, 1).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, game);
        assert!(restored.mine_layout().contains_mine((4, 4)));
    }
}
