//! # cs-infra
//!
//! Infrastructure adapters: the SQLite clip store, the system clock and the
//! TOML configuration loader.

pub mod config;
pub mod db;
pub mod time;

pub use config::load_config;
pub use db::repositories::DieselClipStore;
pub use time::SystemClock;
