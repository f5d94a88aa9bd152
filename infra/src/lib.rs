//! # PackTrack Infrastructure
//!
//! MySQL implementations of the core repository traits, plus connection
//! pool management.

pub mod database;

use thiserror::Error;

/// Infrastructure-level errors raised while wiring up external resources
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
