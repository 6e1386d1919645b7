mod client;
mod error;
mod types;

pub use client::DocClient;
pub use error::Error;
pub use types::{DocInfo, OpenApiDoc};
