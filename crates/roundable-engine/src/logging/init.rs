use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "roundable_ui=debug,roundable_engine=trace"). When unset, `RUST_LOG` is
/// consulted, then the level falls back to `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness capture.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Returns `true` only for the call that actually installed the logger.
/// Later calls, and calls made after some other logger was installed, are
/// ignored.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }

        builder.write_style(config.write_style).is_test(config.is_test);

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("logging initialized");
        }
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_ignored() {
        let config = LoggingConfig {
            env_filter: Some("debug".to_string()),
            is_test: true,
            ..LoggingConfig::default()
        };
        // Whichever test initializes first wins; every later call is a no-op.
        let _ = init_logging(config.clone());
        assert!(!init_logging(config));
    }
}
