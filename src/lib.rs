pub mod brute;
pub mod driver;
pub mod errors;
pub mod measure;
pub mod report;
pub mod select;
pub mod types;
