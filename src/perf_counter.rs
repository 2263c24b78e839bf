use perf_event::events::Hardware;
use perf_event::{Builder, Counter};

// CPU cycle counter; absent when perf events are unavailable (containers, non-Linux)
pub struct PerfCounter {
    counter: Option<Counter>,
}

impl PerfCounter {
    pub fn new() -> Self {
        let counter = match Builder::new().kind(Hardware::CPU_CYCLES).build() {
            Ok(counter) => Some(counter),
            Err(e) => {
                log::warn!(
                    "PerfCounter::new(): cycle counter unavailable ({}), timing only",
                    e
                );
                None
            }
        };
        PerfCounter { counter }
    }

    pub fn start(&mut self) {
        if let Some(counter) = self.counter.as_mut() {
            if let Err(e) = counter.reset() {
                log::warn!("PerfCounter::start(): reset failed: {}", e);
            }
            if let Err(e) = counter.enable() {
                log::warn!("PerfCounter::start(): enable failed: {}", e);
            }
        }
    }

    pub fn stop(&mut self) {
        if let Some(counter) = self.counter.as_mut() {
            if let Err(e) = counter.disable() {
                log::warn!("PerfCounter::stop(): {}", e);
            }
        }
    }

    /// Cycles counted between `start` and `stop`, if the counter could be read.
    pub fn cycles(&mut self) -> Option<u64> {
        let counter = self.counter.as_mut()?;
        counter
            .read()
            .map_err(|e| log::warn!("PerfCounter::cycles(): failed to read counter: {}", e))
            .ok()
    }
}

impl Default for PerfCounter {
    fn default() -> Self {
        Self::new()
    }
}
