use std::net::SocketAddr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 50505;

/// Default document root. The trailing slash is part of the value because
/// requested paths are appended to it verbatim.
const DEFAULT_DOCUMENT_ROOT: &str = "/var/www/html/";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub resources: ResourcesConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ResourcesConfig {
    /// Base directory under which every requested file is resolved.
    pub document_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            resources: ResourcesConfig {
                document_root: DEFAULT_DOCUMENT_ROOT.to_string(),
            },
        }
    }
}

impl Config {
    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listening_port() {
        let config = Config::default();
        assert_eq!(config.server.port, 50505);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_default_document_root_keeps_trailing_slash() {
        let config = Config::default();
        assert!(config.resources.document_root.ends_with('/'));
    }

    #[test]
    fn test_socket_addr_from_defaults() {
        let config = Config::default();
        let addr = config.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 50505);
    }

    #[test]
    fn test_socket_addr_rejects_bad_host() {
        let mut config = Config::default();
        config.server.host = "not a host".to_string();
        assert!(config.get_socket_addr().is_err());
    }
}
