use owo_colors::{OwoColorize, Stream};

use crate::measure::Mode;
use crate::types::DatasetRow;

/// Render the dataset as CSV: a header naming the active mode's columns, then
/// one row per swept size with six-digit averages.
pub fn format_csv(rows: &[DatasetRow], mode: Mode) -> String {
    let (brute_label, quick_label) = mode.labels();

    let mut out = String::new();
    out.push_str(&format!("INPUT_SIZE, {}, {}\n", brute_label, quick_label));

    for row in rows {
        out.push_str(&format!(
            "{}, {:.6}, {:.6}\n",
            row.size, row.brute_average, row.quick_average
        ));
    }

    out
}

/// One line of per-trial feedback, dimmed on capable terminals.
pub fn trial_banner(trial: usize, trials: usize, size: usize, stop: usize) -> String {
    format!("Trial {} of {}, n = {}/{}", trial, trials, size, stop)
        .if_supports_color(Stream::Stdout, |s| s.dimmed())
        .to_string()
}

/// Per-algorithm readout printed after each measured call. The cost is
/// integral in both modes (a comparison count or whole nanoseconds).
pub fn algorithm_result(name: &str, cost: f64, mode: Mode) -> String {
    format!(
        "\t{} finished, measured {} {}",
        name.if_supports_color(Stream::Stdout, |s| s.green()),
        cost as u64,
        mode.unit()
    )
}
