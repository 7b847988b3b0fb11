//! Runs the pipeline once, or forever on a fixed interval.
//!
//! Passes share nothing. A posting that qualified on one pass is logged again
//! on the next one if it still qualifies.

pub mod clock;

use std::sync::Arc;

use tracing::info;

use crate::config::{Config, RunMode};
use crate::errors::AppError;
use crate::pipeline::run_pass;
use crate::schedule::clock::Clock;
use crate::scoring::ats::MatchScorer;

pub struct Scheduler {
    config: Config,
    scorer: Arc<dyn MatchScorer>,
    clock: Arc<dyn Clock>,
}

impl Scheduler {
    pub fn new(config: Config, scorer: Arc<dyn MatchScorer>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            scorer,
            clock,
        }
    }

    /// Returns the number of passes run. In continuous mode without a pass
    /// limit this only returns on error.
    pub async fn run(&self) -> Result<u64, AppError> {
        let mut passes = 0_u64;
        loop {
            run_pass(&self.config, self.scorer.as_ref(), self.clock.as_ref())?;
            passes += 1;

            let RunMode::Continuous { interval } = self.config.mode else {
                return Ok(passes);
            };
            if self.config.max_passes.is_some_and(|max| passes >= max) {
                info!("Reached {passes} pass(es), stopping");
                return Ok(passes);
            }

            info!("Sleeping for {} minutes", interval.as_secs() / 60);
            self.clock.sleep(interval).await;
        }
    }
}
