//! Geração de artefatos de negócio assistida por IA.
//!
//! O [`ArtifactGenerator`] valida a descrição do negócio, consulta o cache
//! de respostas e só então monta o prompt e chama o gateway. A resposta é
//! JSON estruturado, desserializado em tipos explícitos na fronteira —
//! saída que não segue o schema vira [`NexiaError::Schema`], nunca um erro
//! de gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::{Clock, ResponseCache};
use crate::error::NexiaError;
use crate::gateway::{ChatMessage, CompletionRequest, CompletionSender};
use crate::validation::{validate_business_input, validate_short_input};

/// Field name used in validation messages for the business description.
const DESCRIPTION_FIELD: &str = "Descrição do negócio";

/// The kinds of business artifact Nexia generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Proposal,
    Contract,
    Positioning,
    Diagnostic,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Proposal => "proposal",
            ArtifactKind::Contract => "contract",
            ArtifactKind::Positioning => "positioning",
            ArtifactKind::Diagnostic => "diagnostic",
        }
    }

    /// Kind-specific instructions placed at the top of the prompt.
    fn instructions(&self) -> &'static str {
        match self {
            ArtifactKind::Proposal => {
                "Write a commercial proposal for the business described below, \
                 with scope, deliverables and investment sections."
            }
            ArtifactKind::Contract => {
                "Draft a service contract outline for the business described \
                 below, with parties, scope, payment and termination sections."
            }
            ArtifactKind::Positioning => {
                "Write a market positioning statement for the business \
                 described below, with audience, differentiation and promise \
                 sections."
            }
            ArtifactKind::Diagnostic => {
                "Write a business diagnostic for the business described below, \
                 with strengths, risks and recommended next steps sections."
            }
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw LLM response shape used for JSON deserialization.
#[derive(Debug, Deserialize)]
struct LlmArtifact {
    title: String,
    sections: Vec<LlmSection>,
}

#[derive(Debug, Deserialize)]
struct LlmSection {
    heading: String,
    body: String,
}

/// One section of a generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSection {
    pub heading: String,
    pub body: String,
}

/// A generated business artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub id: Uuid,
    pub kind: ArtifactKind,
    pub title: String,
    pub sections: Vec<ArtifactSection>,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

/// Generates business artifacts through the AI gateway.
pub struct ArtifactGenerator {
    model: String,
    max_tokens: u32,
    demo_mode: bool,
}

impl ArtifactGenerator {
    pub fn new(model: String, demo_mode: bool) -> Self {
        Self {
            model,
            max_tokens: 2048,
            demo_mode,
        }
    }

    /// Generates an artifact for the given business description.
    ///
    /// The description is validated first; garbage input never reaches the
    /// gateway. In demo mode only the required/length checks apply. A cache
    /// hit skips the gateway call entirely.
    pub async fn generate(
        &self,
        client: &impl CompletionSender,
        cache: &mut ResponseCache<impl Clock>,
        kind: ArtifactKind,
        description: &str,
    ) -> Result<Artifact, NexiaError> {
        let check = if self.demo_mode {
            validate_short_input(description, DESCRIPTION_FIELD, 3)
        } else {
            validate_business_input(description, DESCRIPTION_FIELD, 10)
        };
        if !check.valid {
            let message = check.error.unwrap_or_else(|| "invalid input".to_string());
            return Err(NexiaError::InvalidInput(message));
        }

        let prompt = build_prompt(kind, description);

        if let Some(cached) = cache.get(&prompt) {
            return parse_artifact(&cached.text, kind, cached.model);
        }

        let req = CompletionRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![ChatMessage {
                role: "user".into(),
                content: prompt.clone(),
            }],
        };

        let response = client.send_completion(&req).await?;
        let text = response
            .first_text()
            .ok_or_else(|| NexiaError::Schema("empty gateway response".into()))?
            .to_string();

        let artifact = parse_artifact(&text, kind, response.model)?;
        cache.insert(&prompt, text, artifact.model.clone());
        Ok(artifact)
    }
}

fn build_prompt(kind: ArtifactKind, description: &str) -> String {
    format!(
        "{}\n\
         Respond with ONLY valid JSON, no other text.\n\
         \n\
         Format:\n\
         {{\"title\": \"<artifact title>\", \"sections\": [\n\
           {{\"heading\": \"<section heading>\", \"body\": \"<section text>\"}}\n\
         ]}}\n\
         \n\
         Rules:\n\
         - Write in the same language as the business description\n\
         - Produce 3-6 sections, each with a concrete, client-ready body\n\
         - Do not invent data the description does not support\n\
         \n\
         Business: {description}",
        kind.instructions()
    )
}

/// Parses the gateway text into an [`Artifact`], enforcing the schema.
fn parse_artifact(text: &str, kind: ArtifactKind, model: String) -> Result<Artifact, NexiaError> {
    let parsed: LlmArtifact = serde_json::from_str(text)
        .map_err(|e| NexiaError::Schema(format!("invalid artifact JSON: {e}")))?;

    if parsed.title.trim().is_empty() {
        return Err(NexiaError::Schema("artifact title is empty".into()));
    }
    if parsed.sections.is_empty() {
        return Err(NexiaError::Schema("artifact has no sections".into()));
    }

    Ok(Artifact {
        id: Uuid::new_v4(),
        kind,
        title: parsed.title,
        sections: parsed
            .sections
            .into_iter()
            .map(|s| ArtifactSection {
                heading: s.heading,
                body: s.body,
            })
            .collect(),
        model,
        created_at: Utc::now(),
    })
}
