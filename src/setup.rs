// src/setup.rs

use tracing_subscriber::EnvFilter;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

pub(super) struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub(super) fn from_env() -> Self {
        let host = std::env::var("HOST")
            .ok()
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_port(std::env::var("PORT").ok());

        ServerConfig { host, port }
    }

    pub(super) fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(value: Option<String>) -> u16 {
    match value.filter(|p| !p.is_empty()) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(port = %raw, error = %e, "invalid PORT, using {}", DEFAULT_PORT);
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}

/// `RUST_LOG` picks the filter (default `info`); `LOG_FORMAT=json` switches
/// to JSON lines.
pub(super) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
