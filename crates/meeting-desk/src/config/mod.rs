mod gateway_config;
mod logging_config;
#[allow(clippy::module_inception)]
mod config;
mod recorder_config;

pub(crate) use {
    config::Config, gateway_config::GatewayConfig, logging_config::LoggingConfig,
    recorder_config::RecorderConfig,
};

pub(crate) const DEFAULT_DRIVER_INTERVAL_MS: u64 = 250;
pub(crate) const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;
pub(crate) const DEFAULT_SAVED_INDICATOR_SECS: u64 = 2;
pub(crate) const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1000;
pub(crate) const DEFAULT_LOG_FILTER: &str = "meeting_desk=debug,meeting_desk_core=debug";

pub(crate) fn default_driver_interval_ms() -> u64 {
    DEFAULT_DRIVER_INTERVAL_MS
}

pub(crate) fn default_autosave_interval_secs() -> u64 {
    DEFAULT_AUTOSAVE_INTERVAL_SECS
}

pub(crate) fn default_saved_indicator_secs() -> u64 {
    DEFAULT_SAVED_INDICATOR_SECS
}

pub(crate) fn default_simulated_latency_ms() -> u64 {
    DEFAULT_SIMULATED_LATENCY_MS
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
