use crate::canopy::Canopy;
use crate::java_random::JavaRandom;
use crate::perf_counter::PerfCounter;
use crate::tree_shape::{compute_height, DARK_OAK_BASE_HEIGHT};
use std::time::Instant;

pub const BENCHMARK_SEED: i64 = 123;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BenchmarkTotals {
    pub canopies: usize,
    pub placed: usize,
    pub height_sum: i64,
    pub draws: usize,
}

pub struct Benchmark {
    random: JavaRandom,
    totals: BenchmarkTotals,
}

impl Benchmark {
    pub fn new() -> Self {
        Benchmark {
            random: JavaRandom::new(BENCHMARK_SEED),
            totals: BenchmarkTotals::default(),
        }
    }

    fn do_canopies(&mut self, canopy_cnt: usize) {
        for _i in 0..canopy_cnt {
            let height = compute_height(&mut self.random, DARK_OAK_BASE_HEIGHT);
            let canopy = Canopy::generate(&mut self.random, height);

            self.totals.canopies += 1;
            self.totals.placed += canopy.placed();
            self.totals.height_sum += height as i64;
            self.totals.draws += 2 + canopy.draws();
        }
    }

    pub fn totals(&self) -> BenchmarkTotals {
        self.totals
    }

    pub fn run(&mut self, canopy_cnt: usize, expected_placed: Option<usize>) -> String {
        self.totals = BenchmarkTotals::default();
        self.random.set_seed(BENCHMARK_SEED);

        let mut perf_counter = PerfCounter::new();

        perf_counter.start();
        let start = Instant::now();

        self.do_canopies(canopy_cnt);

        let duration = start.elapsed();
        perf_counter.stop();
        let perf_cycles = perf_counter.cycles();

        let seconds_total = duration.as_secs_f64();
        let kcps = canopy_cnt as f64 / seconds_total / 1000.0;
        let ns_per_draw = seconds_total * 1e9 / self.totals.draws.max(1) as f64;

        let cc_per_canopy = match perf_cycles {
            Some(cycles) => format!("{:.1}", cycles as f64 / canopy_cnt.max(1) as f64),
            None => "N/A".to_string(),
        };

        let avg_height = self.totals.height_sum as f64 / canopy_cnt.max(1) as f64;

        log::debug!("Benchmark::run(): {:?}", self.totals);

        // A different total means the draw sequence desynchronized somewhere
        assert_eq!(
            expected_placed.unwrap_or(self.totals.placed),
            self.totals.placed
        );

        format!(
            "\n{} canopies \n\
             in {:.6} seconds => {:.3} kcps, {:.2} ns/draw\n\
             CC/canopy (perf counter): {}\n\
             {} leaves placed, {} draws\n\
             AVG height = {:.6}",
            canopy_cnt,
            seconds_total,
            kcps,
            ns_per_draw,
            cc_per_canopy,
            self.totals.placed,
            self.totals.draws,
            avg_height
        )
    }
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new()
    }
}
