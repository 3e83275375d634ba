#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub use log;

#[cfg(feature = "macros")]
mod macros;

#[cfg(feature = "env_logger")]
pub use env_logger_init::*;

#[cfg(feature = "env_logger")]
mod env_logger_init {
    use thiserror::Error;

    #[cfg(debug_assertions)]
    pub const DEFAULT_LOG_LEVEL: &str = "userbox=trace,actix_web=debug";
    #[cfg(not(debug_assertions))]
    pub const DEFAULT_LOG_LEVEL: &str = "userbox=info,actix_web=info";

    #[derive(Debug, Error)]
    pub enum InitError {
        #[error(transparent)]
        SetLogger(#[from] log::SetLoggerError),
    }

    /// `USERBOX_LOG` wins over `RUST_LOG`, which wins over [`DEFAULT_LOG_LEVEL`].
    #[must_use]
    pub fn resolve_filter(userbox_log: Option<String>, rust_log: Option<String>) -> String {
        let non_blank = |x: &String| !x.trim().is_empty();

        userbox_log
            .filter(non_blank)
            .or_else(|| rust_log.filter(non_blank))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Installs the global logger.
    ///
    /// # Errors
    ///
    /// * If a global logger has already been installed
    pub fn init() -> Result<(), InitError> {
        let filter = resolve_filter(
            std::env::var("USERBOX_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );

        env_logger::Builder::new()
            .parse_filters(&filter)
            .format_timestamp_millis()
            .try_init()?;

        log::trace!("Initialized logger with filter '{filter}'");

        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use pretty_assertions::assert_eq;

        use super::*;

        #[test_log::test]
        fn resolve_filter_prefers_userbox_log() {
            let filter = resolve_filter(Some("userbox=warn".into()), Some("debug".into()));

            assert_eq!(filter, "userbox=warn");
        }

        #[test_log::test]
        fn resolve_filter_falls_back_to_rust_log() {
            let filter = resolve_filter(None, Some("debug".into()));

            assert_eq!(filter, "debug");
        }

        #[test_log::test]
        fn resolve_filter_uses_default_when_nothing_is_set() {
            assert_eq!(resolve_filter(None, None), DEFAULT_LOG_LEVEL);
        }

        #[test_log::test]
        fn resolve_filter_ignores_blank_values() {
            assert_eq!(resolve_filter(Some("  ".into()), None), DEFAULT_LOG_LEVEL);
            assert_eq!(resolve_filter(Some(String::new()), Some("info".into())), "info");
        }
    }
}
