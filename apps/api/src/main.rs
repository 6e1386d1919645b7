mod env;

use anyhow::Result;
use axum::{Json, routing::get};
use tracing_subscriber::EnvFilter;

use mockgen_api_mock::{MockConfig, router};

use crate::env::Env;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let env: Env = envy::from_env()?;

    let _sentry = env.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(env))
}

async fn run(env: Env) -> Result<()> {
    let mut config = MockConfig::new(env.openai_api_key);
    if let Some(base_url) = env.openai_base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(prompt) = env.system_prompt {
        config = config.with_system_prompt(prompt);
    }

    let openapi = serde_json::to_value(mockgen_api_mock::openapi())?;
    let app = router(config)?.route("/openapi.json", get(move || async move { Json(openapi) }));

    let port = env.port.unwrap_or(8080);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
