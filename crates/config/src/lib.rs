//! Configuration management for the UltraDNS client.
//!
//! This crate provides types and loaders for managing UltraDNS connection
//! configuration from environment variables and `.env` files.

pub mod constants;
mod loader;
mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
