//! Authentication route handlers
//!
//! Registration and login; both mint a bearer token on success.

pub mod login;
pub mod register;
