mod client;
mod probe;


pub use client::build_client;
pub use probe::execute_probe;
