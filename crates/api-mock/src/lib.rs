mod config;
mod error;
mod openapi;
mod routes;

pub use config::MockConfig;
pub use error::MockError;
pub use openapi::openapi;
pub use routes::router;
