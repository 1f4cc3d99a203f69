use crate::InstanceId;
use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    seed: Option<u64>,
    rng: StdRng,
}

impl RngState {
    /// Seeded from the operating system. Production sessions use this.
    pub fn from_entropy() -> Self {
        Self {
            seed: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    pub fn instance_id(&mut self) -> InstanceId {
        InstanceId::new(format!("card-{:016x}", self.next_u64()))
    }
}

impl Default for RngState {
    fn default() -> Self {
        Self::from_entropy()
    }
}
