//! Shared configuration for the PackTrack server
//!
//! This crate holds the process-wide configuration types loaded once at
//! startup and passed by value into the layers that need them.

pub mod config;

pub use config::{AppConfig, ConfigError, DatabaseConfig, JwtConfig, ServerConfig};
