//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DATA_FILE: &str = "products.json";

/// HTTP port (`PORT`, default 3000).
pub fn port() -> anyhow::Result<u16> {
    parse_port(std::env::var("PORT").ok().as_deref())
}

/// Interface to bind (`HOST`, default `0.0.0.0`).
pub fn host() -> String {
    std::env::var("HOST")
        .ok()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

/// Backing file for the product collection (`PRODUCTS_FILE`, default `products.json`).
pub fn data_file() -> PathBuf {
    std::env::var("PRODUCTS_FILE")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let host = host();
    let port = port()?;
    format!("{}:{}", host, port)
        .parse::<SocketAddr>()
        .with_context(|| format!("HOST/PORT do not form a socket address: {}:{}", host, port))
}

fn parse_port(raw: Option<&str>) -> anyhow::Result<u16> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(v) => v
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid u16, got {:?}", v)),
    }
}
