use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings shared by every outgoing HTTP client
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct NetworkConfig {
    /// Request timeout, `None` keeps the HTTP client's default
    pub timeout_seconds: Option<u64>,
}

impl NetworkConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
