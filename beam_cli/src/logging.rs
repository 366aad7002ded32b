use env_logger::{Builder, Env};
use log::LevelFilter;

use crate::error::Result;

/// Log level for the `-v` count and `--quiet` flag
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG`, when set, overrides the flags.
pub fn setup_logging(verbosity: u8, quiet: bool) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(verbosity, quiet))
        .format_timestamp(None)
        .format_target(verbosity >= 2)
        .parse_env(Env::default());
    builder.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0, false), LevelFilter::Warn);
        assert_eq!(level_for(1, false), LevelFilter::Info);
        assert_eq!(level_for(2, false), LevelFilter::Debug);
        assert_eq!(level_for(7, false), LevelFilter::Trace);
    }

    #[test]
    fn quiet_keeps_errors_only() {
        assert_eq!(level_for(0, true), LevelFilter::Error);
    }
}
