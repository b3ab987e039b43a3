//! Tipos de dados para requisições e respostas do gateway de IA.
//!
//! Todas as structs derivam `Serialize` e `Deserialize`; os payloads são
//! validados na fronteira via tipos explícitos em vez de JSON dinâmico —
//! um corpo que não desserializa é rejeitado antes de chegar a qualquer
//! outra camada.

use serde::{Deserialize, Serialize};

/// Corpo da requisição de chat-completion enviada ao gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Identificador do modelo hospedado a ser usado.
    pub model: String,
    /// Número máximo de tokens na resposta gerada.
    pub max_tokens: u32,
    /// Mensagens compondo a conversa (usuário e assistente).
    pub messages: Vec<ChatMessage>,
}

/// Uma única mensagem em uma conversa com o gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Papel do remetente: "user" ou "assistant".
    pub role: String,
    /// Conteúdo textual da mensagem.
    pub content: String,
}

/// Resposta retornada pelo gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Identificador único da resposta.
    pub id: String,
    /// Blocos de conteúdo gerados (normalmente um único bloco de texto).
    pub content: Vec<ContentBlock>,
    /// Modelo que gerou a resposta.
    pub model: String,
    /// Motivo da parada ("end_turn", "max_tokens"); `None` em progresso.
    pub stop_reason: Option<String>,
    /// Estatísticas de uso de tokens.
    pub usage: Usage,
}

impl CompletionResponse {
    /// Texto do primeiro bloco de conteúdo, já aparado.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|block| block.text.trim())
    }
}

/// Um bloco de conteúdo na resposta — atualmente apenas texto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Tipo do bloco ("text"). Serializado como "type" no JSON.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Conteúdo textual deste bloco.
    pub text: String,
}

/// Estatísticas de consumo de tokens para uma chamada.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}
