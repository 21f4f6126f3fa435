use std::net::SocketAddr;

use crate::errors::AppError;
use crate::models::whatsapp::Destination;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub destination: Destination,
    pub static_dir: String,
}

impl AppConfig {
    /// Load from the process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR '{bind}': {e}")))?;

        let destination = match lookup("WHATSAPP_DESTINATION") {
            Some(val) => match Destination::parse(&val) {
                Some(d) => {
                    log::info!("Using WHATSAPP_DESTINATION from environment");
                    d
                }
                None => {
                    log::warn!("WHATSAPP_DESTINATION '{val}' is not digits-only, using default");
                    Destination::default()
                }
            },
            None => Destination::default(),
        };

        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self { bind_addr, destination, static_dir })
    }
}
