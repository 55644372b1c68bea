//! This module contains the logging setup for the panel binary.
//!
//! Library code logs through `tracing` macros; the binary installs a
//! formatting subscriber filtered by `RUST_LOG` or the `--log-level` flag.
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise third-party crates log at `info`
/// and this crate at `level`. Calling this twice is harmless.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn default_directives(level: &str) -> String {
    format!("info,vcp_coolant={}", level.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_level_is_applied_on_top_of_info() {
        assert_eq!(default_directives("DEBUG"), "info,vcp_coolant=debug");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init("debug");
        init("trace");
    }
}
