use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MockError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum MockError {
    #[error("OpenAPI Url is required")]
    UrlRequired,

    #[error("Unable to download URL")]
    Download(#[source] mockgen_openapi_doc::Error),

    #[error("Unable to parse OpenAPI document")]
    Parse(#[source] mockgen_openapi_doc::Error),

    #[error("Failed to generate mock")]
    Completion(#[source] mockgen_openai::Error),

    #[error("Failed to generate mock")]
    NoChoices,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<mockgen_openapi_doc::Error> for MockError {
    fn from(err: mockgen_openapi_doc::Error) -> Self {
        match &err {
            mockgen_openapi_doc::Error::Parse(_) => Self::Parse(err),
            mockgen_openapi_doc::Error::Download { .. } => Self::Download(err),
        }
    }
}

impl From<mockgen_openai::Error> for MockError {
    fn from(err: mockgen_openai::Error) -> Self {
        Self::Completion(err)
    }
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        match &self {
            Self::UrlRequired => {
                tracing::warn!("missing_or_invalid_openapi_url");
            }
            Self::Download(source) => {
                let upstream_status = match source {
                    mockgen_openapi_doc::Error::Download { status } => *status,
                    _ => 0,
                };
                tracing::error!(upstream_status, "spec_download_failed");
            }
            Self::Parse(source) => {
                tracing::error!(error = %source, "spec_parse_failed");
            }
            Self::Completion(source) => {
                tracing::error!(error = %source, "completion_failed");
                let upstream_status = source.upstream_status();
                sentry::configure_scope(|scope| {
                    scope.set_tag("error.type", "OpenAIError");
                    if let Some(status) = upstream_status {
                        scope.set_tag("upstream.status", status.to_string());
                    }
                    if let mockgen_openai::Error::Api { body, .. } = source {
                        scope.set_extra("upstream.body", body.clone().into());
                    }
                });
            }
            Self::NoChoices => {
                tracing::error!("completion_empty_choices");
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal_error");
                sentry::capture_message(msg, sentry::Level::Error);
            }
        }

        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
