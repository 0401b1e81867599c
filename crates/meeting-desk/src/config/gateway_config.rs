use crate::config::{DEFAULT_SIMULATED_LATENCY_MS, default_simulated_latency_ms};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Artificial delay applied to every save and create, in milliseconds.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
        }
    }
}

impl GatewayConfig {
    /// Simulated latency as a `Duration`.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
