pub(crate) mod progress;
pub(crate) mod runner;
pub(crate) mod summary;
