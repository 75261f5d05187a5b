use crate::core::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use std::time::Duration;

/// How many cycles to run and how long to pause between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSchedule {
    pub cycles: u64,
    pub interval: Duration,
}

impl CycleSchedule {
    /// Single-run forces exactly one cycle; a non-positive cycle count is
    /// treated as 1.
    pub fn new(max_cycles: i64, interval: Duration, single_run: bool) -> Self {
        let cycles = if single_run {
            1
        } else if max_cycles <= 0 {
            1
        } else {
            max_cycles as u64
        };
        Self { cycles, interval }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.max_cycles(), config.fetch_interval(), config.single_run())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub cycles_run: u64,
    pub total_invited: usize,
}

/// Drives the fetch-filter-invite loop. Cycles are strictly sequential and
/// any error aborts the whole run.
pub struct CycleRunner<P: Pipeline> {
    pipeline: P,
    schedule: CycleSchedule,
}

impl<P: Pipeline> CycleRunner<P> {
    pub fn new(pipeline: P, schedule: CycleSchedule) -> Self {
        Self { pipeline, schedule }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for cycle in 1..=self.schedule.cycles {
            println!("\n=== Cycle {}/{} ===", cycle, self.schedule.cycles);
            summary.total_invited += self.run_cycle().await?;
            summary.cycles_run = cycle;

            // Never sleep after the last cycle.
            if cycle < self.schedule.cycles {
                println!(
                    "Waiting {} seconds for next cycle...",
                    self.schedule.interval.as_secs()
                );
                tokio::time::sleep(self.schedule.interval).await;
            }
        }

        Ok(summary)
    }

    async fn run_cycle(&self) -> Result<usize> {
        println!("Fetching users looking for party...");
        let candidates = self.pipeline.fetch().await?;
        println!("Fetched {} candidates", candidates.len());

        let batch = self.pipeline.filter(candidates);

        if batch.is_empty() {
            println!("No users to invite at this time.");
            return Ok(0);
        }

        println!("Found {} valid users to invite.", batch.len());
        let invited = self.pipeline.invite(batch).await?;
        println!("Successfully invited {} users!", invited);
        Ok(invited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_clamps_non_positive_cycles() {
        let interval = Duration::from_secs(0);
        assert_eq!(CycleSchedule::new(0, interval, false).cycles, 1);
        assert_eq!(CycleSchedule::new(-3, interval, false).cycles, 1);
        assert_eq!(CycleSchedule::new(5, interval, false).cycles, 5);
    }

    #[test]
    fn test_single_run_overrides_max_cycles() {
        let interval = Duration::from_secs(120);
        assert_eq!(CycleSchedule::new(5, interval, true).cycles, 1);
        assert_eq!(CycleSchedule::new(0, interval, true).cycles, 1);
    }
}
