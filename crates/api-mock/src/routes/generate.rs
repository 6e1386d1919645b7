use std::sync::Arc;

use axum::{Extension, Json, extract::Query};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use mockgen_openai::{ChatCompletionRequest, ChatMessage, OpenAiClient};
use mockgen_openapi_doc::{DocClient, OpenApiDoc};

use crate::config::MockConfig;
use crate::error::{MockError, Result};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Name of the service to mock.
    #[serde(rename = "service-name")]
    pub service_name: Option<String>,
    /// URL of an OpenAPI document describing the service. Takes precedence
    /// over `service-name` when both are given.
    #[serde(rename = "open-api-url")]
    pub open_api_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub response: String,
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn doc_prompt(doc: &OpenApiDoc) -> String {
    format!(
        "I've created an API called {}, here's the description {}. \
         Please make this API feel bad for existing in the world",
        doc.info.title, doc.info.description
    )
}

fn service_prompt(name: &str) -> String {
    format!("Mock my {name}")
}

#[utoipa::path(
    get,
    path = "/generate",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated mock text", body = GenerateResponse),
        (status = 500, description = "Missing parameter, unreachable spec URL, or generation failure"),
    ),
    tag = "mock",
)]
pub async fn generate(
    Extension(config): Extension<Arc<MockConfig>>,
    Extension(openai): Extension<Arc<OpenAiClient>>,
    Extension(docs): Extension<Arc<DocClient>>,
    Query(query): Query<GenerateQuery>,
) -> Result<Json<GenerateResponse>> {
    let user_prompt = match (&query.open_api_url, &query.service_name) {
        (Some(url), _) => {
            tracing::info!(url = %url, mode = "spec_url", "mock_request_received");
            if !is_http_url(url) {
                return Err(MockError::UrlRequired);
            }
            let doc = docs.fetch(url).await?;
            tracing::info!(title = %doc.info.title, "spec_document_parsed");
            doc_prompt(&doc)
        }
        (None, Some(name)) if !name.is_empty() => {
            tracing::info!(service = %name, mode = "service_name", "mock_request_received");
            service_prompt(name)
        }
        _ => return Err(MockError::UrlRequired),
    };

    sentry::configure_scope(|scope| {
        scope.set_tag("mock.model", &config.model);
    });

    let request = ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(&config.system_prompt),
            ChatMessage::user(user_prompt),
        ],
        max_tokens: config.max_tokens,
    };

    let completion = openai.chat_completions(&request).await?;

    tracing::info!(
        model = %completion.model,
        prompt_tokens = completion.usage.prompt_tokens,
        completion_tokens = completion.usage.completion_tokens,
        total_tokens = completion.usage.total_tokens,
        "mock_generated"
    );

    let content = completion.first_content().ok_or(MockError::NoChoices)?;

    Ok(Json(GenerateResponse {
        response: content.to_owned(),
    }))
}
