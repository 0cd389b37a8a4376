use std::io::Write;

use anyhow::Result;
use rand::Rng;

use crate::brute;
use crate::errors::MedbenchError;
use crate::measure::Mode;
use crate::report;
use crate::select;
use crate::types::{DatasetRow, SweepConfig};

/// Reject configurations the sweep cannot make sense of, naming the offending
/// parameter. Runs before any allocation or sweeping.
pub fn validate(config: &SweepConfig) -> Result<(), MedbenchError> {
    if config.start < 1 {
        return Err(MedbenchError::InvalidArgument {
            name: "start",
            detail: "must be at least 1".to_string(),
        });
    }
    if config.stop < config.start {
        return Err(MedbenchError::InvalidArgument {
            name: "stop",
            detail: format!("must be at least start ({})", config.start),
        });
    }
    if config.increments < 1 {
        return Err(MedbenchError::InvalidArgument {
            name: "increments",
            detail: "must be at least 1".to_string(),
        });
    }
    if config.trials < 1 {
        return Err(MedbenchError::InvalidArgument {
            name: "trials",
            detail: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Step between swept sizes: the span divided into `increments - 1`
/// intervals, clamped so it is never below one. The clamp guarantees forward
/// progress for degenerate spans (`start == stop`) and a single size for
/// `increments = 1`.
pub fn step_size(config: &SweepConfig) -> f64 {
    let span = config.stop as f64 - config.start as f64;
    let intervals = (config.increments as f64 - 1.0).max(1.0);
    (span / intervals).max(1.0)
}

/// The sizes a sweep visits, in increasing order.
///
/// Sizes are generated by floating-point stepping from `start` and rounding
/// each accumulator value, continuing while the rounded size stays within
/// `stop`. The raw accumulator may drift past `stop` before the guard stops
/// it; the guard clamps what is emitted, so no size ever exceeds `stop`.
pub fn sweep_sizes(config: &SweepConfig) -> Vec<usize> {
    let step = step_size(config);
    let mut sizes = Vec::new();

    let mut current = config.start as f64;
    while current.round() <= config.stop as f64 {
        sizes.push(current.round() as usize);
        current += step;
    }

    sizes
}

/// Allocate the single sample buffer, sized for the largest swept size.
///
/// Allocating once up front keeps allocator and cache effects out of the
/// measurements, and turns an oversized request into an immediate error
/// instead of a failure halfway through a long sweep.
fn allocate_sample(capacity: usize) -> Result<Vec<i32>, MedbenchError> {
    let mut data: Vec<i32> = Vec::new();
    data.try_reserve_exact(capacity)
        .map_err(|_| MedbenchError::AllocationFailed {
            requested: capacity,
        })?;
    data.resize(capacity, 0);
    Ok(data)
}

/// Fill the sample with uniform draws spanning the full `i32` range.
fn populate_random(data: &mut [i32], rng: &mut impl Rng) {
    for slot in data.iter_mut() {
        *slot = rng.gen_range(i32::MIN..=i32::MAX);
    }
}

/// Execute the full sweep: for each size, `trials` rounds of
/// populate → brute force → quickselect, averaged into one dataset row.
///
/// Both algorithms see the same logical sample per trial. Brute force runs
/// first: quickselect permutes the buffer freely, so the invocation order
/// within a trial is fixed. Progress feedback goes to `progress` between
/// measured calls, never inside a timed region.
pub fn run(
    config: &SweepConfig,
    mode: Mode,
    rng: &mut impl Rng,
    progress: &mut impl Write,
) -> Result<Vec<DatasetRow>> {
    validate(config)?;

    let capacity = config.start.max(config.stop);
    let mut data = allocate_sample(capacity)?;

    let mut rows = Vec::new();

    for size in sweep_sizes(config) {
        let mut brute_total = 0.0;
        let mut quick_total = 0.0;

        for trial in 1..=config.trials {
            let sample = &mut data[..size];

            writeln!(
                progress,
                "{}",
                report::trial_banner(trial, config.trials, size, config.stop)
            )?;

            populate_random(sample, rng);

            let (brute_selection, brute_cost) = mode.record(sample, brute::median)?;
            brute_total += brute_cost;
            writeln!(
                progress,
                "{}",
                report::algorithm_result("Brute force", brute_cost, mode)
            )?;

            let (quick_selection, quick_cost) = mode.record(sample, select::median)?;
            quick_total += quick_cost;
            writeln!(
                progress,
                "{}",
                report::algorithm_result("Quick median", quick_cost, mode)
            )?;

            // Same multiset, so the two selections must agree.
            debug_assert_eq!(brute_selection.value, quick_selection.value);
        }

        rows.push(DatasetRow {
            size,
            brute_average: brute_total / config.trials as f64,
            quick_average: quick_total / config.trials as f64,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(start: usize, stop: usize, increments: usize, trials: usize) -> SweepConfig {
        SweepConfig {
            start,
            stop,
            increments,
            trials,
        }
    }

    #[test]
    fn validate_accepts_minimal_config() {
        assert!(validate(&config(1, 1, 1, 1)).is_ok());
    }

    #[test]
    fn validate_names_the_bad_parameter() {
        let cases = [
            (config(0, 10, 1, 1), "start"),
            (config(100, 10, 1, 1), "stop"),
            (config(10, 10, 0, 1), "increments"),
            (config(10, 10, 1, 0), "trials"),
        ];

        for (bad, expected) in cases {
            let err = validate(&bad).unwrap_err();
            assert!(
                err.to_string().contains(expected),
                "{:?} should mention {}",
                bad,
                expected
            );
        }
    }

    #[test]
    fn step_clamps_up_for_degenerate_spans() {
        // Zero span divided into four intervals would be a zero step; the
        // clamp keeps the sweep moving.
        assert_eq!(step_size(&config(100, 100, 5, 1)), 1.0);
    }

    #[test]
    fn step_divides_the_span_evenly() {
        assert_eq!(step_size(&config(10, 100, 10, 1)), 10.0);
        assert_eq!(step_size(&config(1, 10, 4, 1)), 3.0);
    }

    #[test]
    fn single_increment_steps_by_the_whole_span() {
        // increments = 1 leaves a single interval, so the sweep visits the
        // two endpoints.
        assert_eq!(step_size(&config(10, 100, 1, 1)), 90.0);
        assert_eq!(sweep_sizes(&config(10, 100, 1, 1)), vec![10, 100]);
    }

    #[test]
    fn degenerate_span_sweeps_exactly_one_size() {
        assert_eq!(sweep_sizes(&config(100, 100, 5, 1)), vec![100]);
    }

    #[test]
    fn even_sweep_hits_every_size() {
        assert_eq!(
            sweep_sizes(&config(10, 100, 10, 1)),
            vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
        );
    }

    #[test]
    fn fractional_step_clamps_to_one() {
        assert_eq!(sweep_sizes(&config(1, 4, 7, 1)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn fractional_steps_round_half_away_from_zero() {
        // step = 2.5: 10, 12.5 → 13, 15.
        assert_eq!(sweep_sizes(&config(10, 15, 3, 1)), vec![10, 13, 15]);
    }

    #[test]
    fn no_swept_size_exceeds_stop() {
        for cfg in [
            config(1, 7, 3, 1),
            config(5, 23, 6, 1),
            config(10, 100, 7, 1),
            config(3, 3, 9, 1),
        ] {
            let sizes = sweep_sizes(&cfg);
            assert!(!sizes.is_empty());
            assert!(sizes.iter().all(|&n| n >= cfg.start && n <= cfg.stop));
            assert!(sizes.is_sorted());
        }
    }

    #[test]
    fn oversized_allocation_fails_before_sweeping() {
        let cfg = config(1, usize::MAX / 2, 1, 1);
        let mut rng = StdRng::seed_from_u64(0);
        let err = run(&cfg, Mode::Ops, &mut rng, &mut std::io::sink()).unwrap_err();
        assert!(err.to_string().contains("allocate"));
        assert!(err.to_string().contains(&(usize::MAX / 2).to_string()));
    }

    #[test]
    fn single_size_run_produces_one_row() {
        let cfg = config(10, 10, 1, 3);
        let mut rng = StdRng::seed_from_u64(42);

        let rows = run(&cfg, Mode::Ops, &mut rng, &mut std::io::sink()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].size, 10);
        // Brute-force comparisons depend only on the size: for N = 10 each of
        // the ranks 0..=5 scans the tail, 9+8+7+6+5+4 = 39.
        assert_eq!(rows[0].brute_average, 39.0);
        assert!(rows[0].quick_average > 0.0);
    }

    #[test]
    fn identical_seeds_give_identical_op_counts() {
        let cfg = config(5, 50, 4, 2);

        let mut first_rng = StdRng::seed_from_u64(7);
        let first = run(&cfg, Mode::Ops, &mut first_rng, &mut std::io::sink()).unwrap();

        let mut second_rng = StdRng::seed_from_u64(7);
        let second = run(&cfg, Mode::Ops, &mut second_rng, &mut std::io::sink()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn time_mode_rows_are_nonnegative() {
        let cfg = config(8, 32, 3, 2);
        let mut rng = StdRng::seed_from_u64(1);

        let rows = run(&cfg, Mode::Time, &mut rng, &mut std::io::sink()).unwrap();

        assert_eq!(rows.len(), 3);
        for row in rows {
            assert!(row.brute_average >= 0.0);
            assert!(row.quick_average >= 0.0);
        }
    }

    #[test]
    fn progress_feedback_mentions_every_trial() {
        let cfg = config(4, 4, 1, 2);
        let mut rng = StdRng::seed_from_u64(3);
        let mut progress = Vec::new();

        run(&cfg, Mode::Ops, &mut rng, &mut progress).unwrap();

        let text = String::from_utf8(progress).unwrap();
        assert!(text.contains("Trial 1 of 2"));
        assert!(text.contains("Trial 2 of 2"));
        assert!(text.contains("Brute force finished"));
        assert!(text.contains("Quick median finished"));
    }
}
