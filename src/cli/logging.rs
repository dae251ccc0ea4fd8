//! Logger setup for the `sgraph` binary.

use log::LevelFilter;

/// Build the logger used by `sgraph`.
///
/// `env_filter` is the value of `RUST_LOG`, if set; otherwise `default_level`
/// applies. `verbose` forces the default level to debug over both.
pub fn logger_builder(
    verbose: bool,
    default_level: &str,
    env_filter: Option<&str>,
) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(env_filter.unwrap_or(default_level));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None);
    builder
}
