use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on unparseable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Host placed in share URLs handed back to clients.
    pub public_host: String,
    /// Directory holding the editor UI.
    pub static_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            bind_addr: var("BIND_ADDR", "0.0.0.0")
                .parse::<IpAddr>()
                .context("BIND_ADDR must be a valid IP address")?,
            port: var("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            public_host: var("PUBLIC_HOST", "localhost"),
            static_dir: PathBuf::from(var("STATIC_DIR", "public")),
            rust_log: var("RUST_LOG", "info"),
        })
    }

    /// Public link for a portfolio page.
    pub fn share_url(&self, portfolio_id: &str) -> String {
        format!(
            "http://{}:{}/portfolio/{}",
            self.public_host, self.port, portfolio_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0");
        assert_eq!(config.public_host, "localhost");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_port_override() {
        let config = config_from(&[("PORT", "8081")]).unwrap();
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_bind_addr_rejected() {
        assert!(config_from(&[("BIND_ADDR", "not-an-ip")]).is_err());
    }

    #[test]
    fn test_share_url() {
        let config = config_from(&[("PORT", "4000"), ("PUBLIC_HOST", "folio.example")]).unwrap();
        assert_eq!(
            config.share_url("abc"),
            "http://folio.example:4000/portfolio/abc"
        );
    }
}
