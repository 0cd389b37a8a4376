use std::time::Instant;

use clap::ValueEnum;

use crate::errors::MedbenchError;
use crate::types::Selection;

/// Measurement strategy, chosen once per run. The two modes are mutually
/// exclusive and write to different dataset files, so op-count and timing
/// sweeps never clobber each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Record the number of element comparisons per invocation.
    Ops,
    /// Record elapsed monotonic nanoseconds per invocation.
    Time,
}

impl Mode {
    /// Fixed dataset filename for this mode, truncated and rewritten per run.
    pub fn output_filename(self) -> &'static str {
        match self {
            Mode::Ops => "results_ops.csv",
            Mode::Time => "results_time.csv",
        }
    }

    /// CSV column labels: (brute force, quickselect).
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            Mode::Ops => ("BRUTE_OPERATIONS", "QUICK_OPERATIONS"),
            Mode::Time => ("BRUTE_TIME", "QUICK_TIME"),
        }
    }

    /// Unit name for progress readouts.
    pub fn unit(self) -> &'static str {
        match self {
            Mode::Ops => "operations",
            Mode::Time => "nanoseconds",
        }
    }

    /// Run one algorithm over the sample and return its selection together
    /// with the scalar this mode records for it.
    ///
    /// In time mode the timed region contains nothing but the algorithm call;
    /// `Instant` is monotonic, so wall-clock adjustments cannot skew it.
    pub fn record<F>(self, data: &mut [i32], algo: F) -> Result<(Selection, f64), MedbenchError>
    where
        F: FnOnce(&mut [i32]) -> Result<Selection, MedbenchError>,
    {
        match self {
            Mode::Ops => {
                let selection = algo(data)?;
                Ok((selection, selection.comparisons as f64))
            }
            Mode::Time => {
                let started = Instant::now();
                let selection = algo(data)?;
                let elapsed = started.elapsed();
                Ok((selection, elapsed.as_nanos() as f64))
            }
        }
    }
}
