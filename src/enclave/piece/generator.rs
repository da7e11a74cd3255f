use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::enclave::prelude::*;

/// Deals random pieces, biased towards smaller shapes as the board fills up.
#[derive(Clone, Debug)]
pub struct PieceGenerator {
    rng: StdRng,
    next_id: u64,
}

impl PieceGenerator {
    /// A generator seeded from the given value, or from the operating system if none is given.
    pub fn new(seed: Option<u64>) -> PieceGenerator {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_os_rng(),
        };
        PieceGenerator { rng, next_id: 0 }
    }

    /// The shapes eligible to be dealt at the given fill ratio (occupied cells over total cells).
    ///
    /// - at `CROWDED_FILL_RATIO` and above: shapes of at most 3 cells
    /// - at `BUSY_FILL_RATIO` and above: shapes of fewer than 5 cells
    /// - otherwise: shapes of more than 2 cells
    ///
    /// Falls back to the whole catalog if the filter leaves nothing.
    pub fn pool(fill_ratio: f64) -> Vec<&'static Shape> {
        let keep: fn(usize) -> bool = if fill_ratio >= CROWDED_FILL_RATIO {
            |n| n <= 3
        } else if fill_ratio >= BUSY_FILL_RATIO {
            |n| n < 5
        } else {
            |n| n > 2
        };

        let pool = catalog::all().iter().filter(|s| keep(s.cell_count())).collect::<Vec<_>>();
        if pool.is_empty() {
            log::warn!("no shapes eligible at fill ratio {fill_ratio:.2}; dealing from the full catalog");
            return catalog::all().iter().collect();
        }
        pool
    }

    /// Deals a new piece for a board with the given fill ratio.
    pub fn generate(&mut self, fill_ratio: f64) -> Piece {
        let pool = PieceGenerator::pool(fill_ratio);
        let shape = pool[self.rng.random_range(0..pool.len())].clone();

        let colors = Color::all();
        let patterns = Pattern::all();
        let color = colors[self.rng.random_range(0..colors.len())];
        let pattern = patterns[self.rng.random_range(0..patterns.len())];

        let piece = Piece::new(self.fresh_id(), shape, color, pattern);
        log::debug!("dealt {} at fill ratio {fill_ratio:.2}", piece.notate());
        piece
    }

    /// Reserves a piece id that no dealt piece will reuse.
    pub fn fresh_id(&mut self) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Makes sure ids up to and including `id` are never dealt, for pieces stocked by hand.
    /// Ids above `MAX_STOCKED_PIECE_ID` are refused so dealing can never run out of ids.
    pub fn reserve_through(&mut self, id: PieceId) -> Result<()> {
        if id.0 > MAX_STOCKED_PIECE_ID {
            return Err(anyhow!("piece id #{id} is too large; stocked ids go up to {MAX_STOCKED_PIECE_ID}"));
        }
        self.next_id = self.next_id.max(id.0 + 1);
        Ok(())
    }
}
