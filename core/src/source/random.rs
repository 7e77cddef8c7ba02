use rand::prelude::*;

use super::*;

/// Color source drawing uniformly from the palette with a seeded [`SmallRng`].
#[derive(Clone, Debug)]
pub struct RandomColorSource {
    rng: SmallRng,
}

impl RandomColorSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for RandomColorSource {
    fn next_color(&mut self) -> Color {
        let index = self.rng.random_range(0..Color::ALL.len());
        Color::ALL[index]
    }
}
