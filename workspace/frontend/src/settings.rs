use localboost_common::{ConfigError, ServiceOrigin};
use log::Level;
use web_sys::window;

/// localStorage key overriding the analysis service origin
pub const ORIGIN_STORAGE_KEY: &str = "localboost_service_origin";

/// localStorage key overriding the log level
pub const LOG_LEVEL_STORAGE_KEY: &str = "localboost_log_level";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Base URL of the analysis service, used for the upload and for plot images
    pub service_origin: ServiceOrigin,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            service_origin: ServiceOrigin::default(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from build environment, window location and localStorage
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(origin) = option_env!("LOCALBOOST_SERVICE_ORIGIN") {
            settings.apply_origin_or_warn(origin);
        }

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(origin)) = storage.get_item(ORIGIN_STORAGE_KEY) {
                    settings.apply_origin_or_warn(&origin);
                }

                if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_STORAGE_KEY) {
                    settings.log_level = parse_log_level(&log_level).unwrap_or(settings.log_level);
                }
            }
        }

        settings
    }

    /// Replace the service origin, keeping the current one if `raw` is invalid
    pub fn apply_origin(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.service_origin = ServiceOrigin::parse(raw)?;
        Ok(())
    }

    fn apply_origin_or_warn(&mut self, raw: &str) {
        if let Err(err) = self.apply_origin(raw) {
            // Settings are resolved before the logger exists
            web_sys::console::warn_1(&format!("{}; using {}", err, self.service_origin).into());
        }
    }

    /// Full URL of the analyze endpoint
    pub fn analyze_url(&self) -> String {
        self.service_origin.analyze_url()
    }
}

/// Parse a log level name such as `debug` or `WARN`
pub fn parse_log_level(raw: &str) -> Option<Level> {
    match raw.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
