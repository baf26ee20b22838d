/// `env_filter` follows the `env_logger` filter syntax, e.g. "canvas_platformer=trace".
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
static INIT: std::sync::Once = std::sync::Once::new();

/// Installs the global logger. Subsequent calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}

/// No logger backend is installed in the browser build, so records are dropped.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(_config: LoggingConfig) {}
