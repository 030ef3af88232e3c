//! Shared helpers for integration tests.

use fmf::config::Config;
use fmf::reports::Outcome;
use fmf::search::SearchLoop;

/// Parse and run a scenario to completion with the default configuration,
/// panicking on a parse error.
pub fn run(text: &str) -> Outcome {
    let signature = fmf::input::parse(text).expect("scenario failed to parse");
    SearchLoop::run(&signature, &Config::default())
}

/// Parse and run a scenario with a caller-supplied configuration.
pub fn run_with(text: &str, config: &Config) -> Outcome {
    let signature = fmf::input::parse(text).expect("scenario failed to parse");
    SearchLoop::run(&signature, config)
}
