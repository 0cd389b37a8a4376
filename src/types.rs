/// Result of one median computation: the selected value together with the
/// number of element comparisons performed to find it.
///
/// The comparison counter is owned by the invocation and starts at zero on
/// every call, so counts never leak between trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub value: i32,
    pub comparisons: u64,
}

/// Sweep parameters as supplied on the command line.
///
/// All four fields must pass `driver::validate` before a sweep starts;
/// `start` and `stop` are inclusive input sizes.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    pub start: usize,
    pub stop: usize,
    pub increments: usize,
    pub trials: usize,
}

/// One averaged result per swept input size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetRow {
    pub size: usize,
    pub brute_average: f64,
    pub quick_average: f64,
}
