use anyhow::Context;
use derivative::Derivative;
use reqwest::{
    Client,
    Url,
};

use crate::llm_client::request::{
    CompletionRequest,
    CompletionResponse,
};
use crate::upstream::{
    ensure_success,
    http_client,
    UpstreamError,
};

const PROVIDER: &str = "language model provider";

/// Client of a chat-completions style text generation API.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct LlmClient {
    http_client: Client,
    base_url: Url,
    model: String,
    #[derivative(Debug = "ignore")]
    token: String,
}

impl LlmClient {
    pub fn new(
        base_url: Url,
        model: String,
        token: String,
        timeout_secs: u64,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self {
            http_client: http_client(timeout_secs).context(format!(
                "Error creating language model client with:\nbase_url: {}\nmodel: \
                 {}\ntimeout_secs: {}",
                base_url, model, timeout_secs
            ))?,
            base_url,
            model,
            token,
        })
    }

    /// Sends `prompt` as a single user message and returns the raw text of the
    /// first choice.
    #[tracing::instrument(name = "requesting completion", skip(self, prompt), fields(model = %self.model))]
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, UpstreamError> {
        let response = self
            .http_client
            .post(self.base_url.join("v1/chat/completions")?)
            .bearer_auth(&self.token)
            .json(&CompletionRequest::new(&self.model, prompt, max_tokens))
            .send()
            .await?;
        ensure_success(PROVIDER, response)
            .await?
            .json::<CompletionResponse>()
            .await?
            .into_text()
            .ok_or(UpstreamError::EmptyCompletion)
    }
}
