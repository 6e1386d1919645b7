use serde::{Deserialize, Deserializer};

fn filter_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

#[derive(Deserialize)]
pub struct Env {
    pub openai_api_key: String,
    #[serde(default, deserialize_with = "filter_empty")]
    pub openai_base_url: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub system_prompt: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub sentry_dsn: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}
