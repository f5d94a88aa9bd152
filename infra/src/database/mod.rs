pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlOrderRepository, MySqlUserRepository, MySqlVideoRepository};
