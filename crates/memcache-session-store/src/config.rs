//! Store configuration.

/// Default cache endpoint port (memcached).
pub const DEFAULT_PORT: u16 = 11211;

/// Configuration for a session cache store.
///
/// Resolved once at construction and immutable thereafter; reconfiguring
/// means building a new store instance.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Namespace prepended to every session id when deriving cache keys.
    pub prefix: String,

    /// Cache endpoints, used only when no pre-built client is injected.
    pub hosts: Vec<String>,

    /// Cache endpoint port.
    pub port: u16,

    /// Optional username for client authentication.
    pub username: Option<String>,

    /// Optional password for client authentication.
    pub password: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            hosts: Vec::new(),
            port: DEFAULT_PORT,
            username: None,
            password: None,
        }
    }
}

impl StoreConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key namespace prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Add a cache endpoint host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.hosts.push(host.into());
        self
    }

    /// Set the cache endpoint port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set client authentication credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::new();
        assert_eq!(config.prefix, "");
        assert_eq!(config.port, 11211);
        assert!(config.hosts.is_empty());
        assert!(config.username.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = StoreConfig::new()
            .with_prefix("sess:")
            .with_host("cache-1.internal")
            .with_host("cache-2.internal")
            .with_port(11212)
            .with_credentials("app", "secret");

        assert_eq!(config.prefix, "sess:");
        assert_eq!(config.hosts.len(), 2);
        assert_eq!(config.port, 11212);
        assert_eq!(config.username.as_deref(), Some("app"));
    }
}
