use serde::{
    Deserialize,
    Serialize,
};

/// Body of a `chat/completions` call carrying a single user prompt.
#[derive(Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> CompletionRequest<'a> {
    const TEMPERATURE: f32 = 0.7;

    pub fn new(model: &'a str, prompt: &'a str, max_tokens: u32) -> Self {
        Self {
            model,
            max_tokens,
            temperature: Self::TEMPERATURE,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        }
    }
}

#[derive(Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if it has any.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
    }
}
