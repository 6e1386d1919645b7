mod client;
mod error;
mod types;

pub use client::OpenAiClient;
pub use error::Error;
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, Role, Usage,
};
