pub mod benchmark;
pub mod canopy;
pub mod error;
pub mod java_random;
pub mod parity;
pub mod perf_counter;
pub mod population;
pub mod tree_shape;

// Re-export main types
pub use benchmark::{Benchmark, BenchmarkTotals, BENCHMARK_SEED};
pub use canopy::{Canopy, LeafCell};
pub use error::RandomError;
pub use java_random::{Bound, JavaRandom};
pub use parity::first_divergence;
pub use perf_counter::PerfCounter;
pub use population::PopulationSeeder;
pub use tree_shape::{
    compute_height, is_true_corner, leaf_radius, should_place_corner, DARK_OAK_BASE_HEIGHT,
};
