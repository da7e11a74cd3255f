use clap::Parser;
use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
pub struct EnclaveServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(short, long, default_value_t = 2)]
    pub players: usize,

    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    #[arg(short, long, default_value_t = MARKETPLACE_SIZE)]
    pub marketplace_size: usize,

    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl EnclaveServerOptions {
    pub fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::default()
            .with_players(self.players)
            .with_grid_size(self.grid_size)
            .with_marketplace_size(self.marketplace_size);

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

impl Default for EnclaveServerOptions {
    fn default() -> Self {
        EnclaveServerOptions {
            log_level: None,
            players: 2,
            grid_size: DEFAULT_GRID_SIZE,
            marketplace_size: MARKETPLACE_SIZE,
            seed: None,
        }
    }
}
