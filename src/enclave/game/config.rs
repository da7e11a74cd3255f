use crate::enclave::prelude::*;

/// The settings a game is created with. Values are validated as given and never clamped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of seats, `1..=MAX_PLAYERS`.
    pub player_count: usize,

    /// Side length of the square grid, `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub grid_size: usize,

    /// Number of pieces on offer at any time; at least 1.
    pub marketplace_size: usize,

    /// Seed for the piece generator. `None` draws a seed from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_count: 2,
            grid_size: DEFAULT_GRID_SIZE,
            marketplace_size: MARKETPLACE_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> GameConfig {
        GameConfig::default()
    }

    pub fn with_players(mut self, player_count: usize) -> GameConfig {
        self.player_count = player_count;
        self
    }

    pub fn with_grid_size(mut self, grid_size: usize) -> GameConfig {
        self.grid_size = grid_size;
        self
    }

    pub fn with_marketplace_size(mut self, marketplace_size: usize) -> GameConfig {
        self.marketplace_size = marketplace_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> GameConfig {
        self.seed = Some(seed);
        self
    }

    /// Refuses any configuration the engine cannot represent.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(anyhow!("player count must be between 1 and {MAX_PLAYERS}, received {}", self.player_count));
        }
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(anyhow!(
                "grid size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, received {}", self.grid_size
            ));
        }
        if self.marketplace_size == 0 {
            return Err(anyhow!("the marketplace must offer at least one piece"));
        }
        Ok(())
    }
}
