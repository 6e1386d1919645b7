pub(crate) mod generate;

use std::sync::Arc;

use axum::{Router, routing::get};

use mockgen_openai::OpenAiClient;
use mockgen_openapi_doc::DocClient;

use crate::config::MockConfig;
use crate::error::MockError;

pub fn router(config: MockConfig) -> Result<Router, MockError> {
    let openai = OpenAiClient::new(&config.openai_api_key)
        .map_err(|e| MockError::Internal(e.to_string()))?
        .with_base_url(&config.openai_base_url)
        .with_timeout(config.timeout);

    let docs = DocClient::new().with_timeout(config.timeout);

    let router = Router::new()
        .route("/", get(generate::generate))
        .route("/generate", get(generate::generate))
        .layer(axum::Extension(Arc::new(openai)))
        .layer(axum::Extension(Arc::new(docs)))
        .layer(axum::Extension(Arc::new(config)));

    Ok(router)
}
