pub mod config;
pub mod provider;
pub mod routes;

pub use crate::config::ServerConfig;
pub use crate::provider::DataProvider;
pub use crate::routes::router;
