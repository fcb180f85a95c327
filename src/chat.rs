use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct ChatApiResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Deserialize, Debug)]
pub struct ChatMessage {
    pub role: Option<Role>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OpenAiChatRequestBody {
    pub model: String,
    pub messages: Vec<ChatMessageRole>,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageRole {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}
