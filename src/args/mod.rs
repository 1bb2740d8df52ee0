mod cli;
mod normalize;
mod parsers;
mod types;


pub use cli::ProbeArgs;
pub use normalize::normalize_url;
pub use types::{PositiveU64, PositiveUsize};
