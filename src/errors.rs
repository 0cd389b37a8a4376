#[derive(thiserror::Error, Debug)]
pub enum MedbenchError {
    #[error("Invalid value for {name}: {detail}")]
    InvalidArgument { name: &'static str, detail: String },

    #[error("Could not allocate a sample buffer of {requested} elements. Try a smaller stop value.")]
    AllocationFailed { requested: usize },

    #[error("Cannot take the median of an empty sample")]
    EmptySample,
}
