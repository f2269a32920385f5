//! Listener configuration

use lesson_constant::defaults;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// `host:port` to bind
    pub listen_addr: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            listen_addr: defaults::LISTEN_ADDR.to_string(),
        }
    }
}

impl WebConfig {
    pub fn with_listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.listen_addr = addr.into();
        self
    }

    /// `LESSON_LISTEN_ADDR`, else the default.
    pub fn from_env() -> Self {
        match std::env::var("LESSON_LISTEN_ADDR") {
            Ok(addr) if !addr.trim().is_empty() => Self::default().with_listen_addr(addr),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listen_addr() {
        assert_eq!(WebConfig::default().listen_addr, "0.0.0.0:8000");
    }

    #[test]
    fn builder_overrides_addr() {
        let config = WebConfig::default().with_listen_addr("127.0.0.1:9000");
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
    }
}
