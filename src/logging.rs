//! Logging setup.
//!
//! Call sites use the `tracing` macros directly. A host that wants to see
//! them installs a subscriber once at startup:
//!
//! ```ignore
//! spark_forms::logging::try_init_tracing("debug");
//! ```
//!
//! `RUST_LOG`, when set, wins over the level passed in.

use tracing_subscriber::EnvFilter;

/// Build the level filter: `RUST_LOG` if present and valid, else `level`.
///
/// An unparseable `level` falls back to `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a fmt subscriber filtered at `level`.
///
/// Returns false if a global subscriber was already installed; that is not
/// an error, the existing one stays in place.
pub fn try_init_tracing(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Install a subscriber at the configured `log_level`.
pub fn try_init_from_config() -> bool {
    try_init_tracing(&crate::config::get_config().log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_not_an_error() {
        // Whichever test installs first wins; the second call must just report it
        try_init_tracing("debug");
        assert!(!try_init_tracing("info"));
    }

    #[test]
    fn test_bad_level_falls_back() {
        // Must not panic on garbage
        let _filter = env_filter("not a level [");
    }
}
