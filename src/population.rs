use crate::java_random::JavaRandom;

// Per-chunk decoration seed, derived from the world seed with two long draws
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PopulationSeeder {
    world_seed: i64,
    k: i64,
    l: i64,
}

impl PopulationSeeder {
    pub fn new(world_seed: i64) -> Self {
        let mut rng = JavaRandom::new(world_seed);
        // Division truncates toward zero, matching the reference for negative longs
        let k = (rng.next_long() / 2 * 2).wrapping_add(1);
        let l = (rng.next_long() / 2 * 2).wrapping_add(1);
        PopulationSeeder { world_seed, k, l }
    }

    pub fn multipliers(&self) -> (i64, i64) {
        (self.k, self.l)
    }

    pub fn chunk_seed(&self, cx: i32, cz: i32) -> i64 {
        (cx as i64)
            .wrapping_mul(self.k)
            .wrapping_add((cz as i64).wrapping_mul(self.l))
            ^ self.world_seed
    }

    pub fn chunk_random(&self, cx: i32, cz: i32) -> JavaRandom {
        JavaRandom::new(self.chunk_seed(cx, cz))
    }
}
