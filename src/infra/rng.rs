use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::engine::RandomSource;

/// Боевой RNG поверх `thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut thread_rng());
    }

    fn pick_index(&mut self, upper: usize) -> usize {
        thread_rng().gen_range(0..upper)
    }

    fn roll_unit(&mut self) -> f64 {
        thread_rng().gen::<f64>()
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn pick_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    fn roll_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
