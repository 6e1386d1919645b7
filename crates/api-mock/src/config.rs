use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_MAX_TOKENS: u32 = 300;
const DEFAULT_TIMEOUT_MS: u64 = 55_000;

const DEFAULT_SYSTEM_PROMPT: &str = "You are a merciless comedy roast writer. \
Given an API or a service, reply with a short roast that mocks it. \
Keep it under three sentences and never break character.";

#[derive(Clone)]
pub struct MockConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub system_prompt: String,
    pub timeout: Duration,
}

impl MockConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: api_key.into(),
            openai_base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.openai_base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
