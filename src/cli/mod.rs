//! Command-line parsing for the dashboard, proxy server and rules runner.

mod args;

pub use args::{parse_args, print_usage, CliAction, Command, VERSION};
