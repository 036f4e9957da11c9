pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod queries;
pub mod services;

pub use config::Config;
pub use database::{Database, DbConn, DbPool, PoolStatus, PooledConn};
pub use error::{Error, Result};

/// Load configuration from environment variables
pub fn load_config() -> Result<Config> {
    Ok(Config::load()?)
}
