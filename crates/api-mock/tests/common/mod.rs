#![allow(dead_code)]

use std::time::Duration;

use api_mock::{MockConfig, router};
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestHarness {
    pub openai: MockServer,
    pub spec_host: MockServer,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self {
            openai: MockServer::start().await,
            spec_host: MockServer::start().await,
        }
    }

    pub fn config(&self) -> MockConfig {
        MockConfig::new("test-api-key").with_base_url(self.openai.uri())
    }

    pub fn app(&self) -> Router {
        router(self.config()).unwrap()
    }

    pub fn app_with(&self, config: MockConfig) -> Router {
        router(config).unwrap()
    }

    pub fn spec_url(&self) -> String {
        format!("{}/spec.yaml", self.spec_host.uri())
    }

    pub async fn mount_completion(&self, response: serde_json::Value) {
        self.mount_completion_times(response, 1).await;
    }

    pub async fn mount_completion_times(&self, response: serde_json::Value, times: u64) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response))
            .expect(times)
            .mount(&self.openai)
            .await;
    }

    pub async fn mount_completion_error(&self, status: u16, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(&response))
            .expect(1)
            .mount(&self.openai)
            .await;
    }

    pub async fn mount_completion_delayed(&self, response: serde_json::Value, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(&response)
                    .set_delay(delay),
            )
            .mount(&self.openai)
            .await;
    }

    pub async fn expect_no_completion(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.openai)
            .await;
    }

    pub async fn mount_spec(&self, body: &str) {
        Mock::given(method("GET"))
            .and(path("/spec.yaml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&self.spec_host)
            .await;
    }

    pub async fn mount_spec_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/spec.yaml"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&self.spec_host)
            .await;
    }

    pub async fn expect_no_spec_fetch(&self) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.spec_host)
            .await;
    }

    pub async fn openai_request_body(&self) -> serde_json::Value {
        let requests = self.openai.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one completion request");
        serde_json::from_slice(&requests[0].body).unwrap()
    }
}

pub fn completion_response(id: &str, model: &str, content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": model,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
    })
}

pub fn build_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn response_to_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
