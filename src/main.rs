mod app;
mod args;
mod entry;
mod error;
mod http;
mod logger;
mod metrics;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
