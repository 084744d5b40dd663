// Coin relocation
//
// After a pickup the coin jumps to a random spot chosen by the configured
// CoinPlacement. The generator is a Pcg32 so a seed in the config reproduces
// the same sequence of positions.

use crate::config::CoinPlacement;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use sdl2::rect::Rect;
use std::ops::RangeInclusive;

pub struct CoinSpawner {
    rng: Pcg32,
    placement: CoinPlacement,
}

impl CoinSpawner {
    pub fn new(placement: CoinPlacement, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };

        CoinSpawner { rng, placement }
    }

    pub fn placement(&self) -> CoinPlacement {
        self.placement
    }

    /// Allowed x and y values for a coin of `coin_size` in the window
    pub fn bounds(
        &self,
        window_width: u32,
        window_height: u32,
        coin_size: u32,
    ) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
        let width = window_width as i32;
        let height = window_height as i32;
        let size = coin_size.max(1) as i32;

        match self.placement {
            CoinPlacement::Pixel => (0..=(width - size).max(0), 0..=(height - size).max(0)),
            CoinPlacement::LegacyCell => (
                0..=(width / size - 1).max(0),
                0..=(height - size - 1).max(0),
            ),
        }
    }

    /// Moves `coin` to a new random position inside the bounds
    ///
    /// The new position always differs from the old one unless the bounds
    /// allow exactly one position.
    pub fn relocate(&mut self, coin: &mut Rect, window_width: u32, window_height: u32) {
        let (x_range, y_range) = self.bounds(window_width, window_height, coin.width());
        let single_position =
            x_range.start() == x_range.end() && y_range.start() == y_range.end();
        let previous = (coin.x(), coin.y());

        loop {
            let x = self.rng.random_range(x_range.clone());
            let y = self.rng.random_range(y_range.clone());

            if single_position || (x, y) != previous {
                coin.set_x(x);
                coin.set_y(y);
                log::debug!("Coin moved to ({}, {})", x, y);
                return;
            }
        }
    }
}
