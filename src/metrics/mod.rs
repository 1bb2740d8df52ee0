mod collector;
mod stats;
mod types;


pub use collector::setup_sample_collector;
pub use types::{RunReport, RunSummary, Sample};
