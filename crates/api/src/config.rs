//! Process configuration, read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Read `HOST` and `PORT` from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables fall back to
    /// defaults; set but unparsable ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("HOST") {
            config.host = raw
                .trim()
                .parse()
                .with_context(|| format!("HOST must be an IP address, got {raw:?}"))?;
        }
        if let Some(raw) = lookup("PORT") {
            config.port = raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_port_3000_on_all_interfaces() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn reads_port_and_host() {
        let config = ApiConfig::from_lookup(lookup(&[("PORT", "8081"), ("HOST", "127.0.0.1")])).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:8081".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn rejects_unparsable_port() {
        let err = ApiConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(ApiConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
    }
}
