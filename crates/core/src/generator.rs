//! Quiz Generation Pipeline
//!
//! Renders the quiz prompt for a topic, sends it to the configured language
//! model and parses the completion into JSON. The pipeline is linear and
//! stateless; every call works on its own prompt and response.

use crate::{llm_client::LLMClient, parser::parse_json_output, prompt::PromptTemplate};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Defines the contract for any service that can generate a quiz.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    /// Generates a quiz for `topic` and returns the model's JSON verbatim.
    ///
    /// The returned value is only guaranteed to be well-formed JSON; it is not
    /// checked against the quiz shape requested in the prompt.
    async fn generate_quiz(&self, topic: &str) -> Result<Value>;
}

/// A `QuizGenerator` backed by an `LLMClient`.
pub struct LLMQuizGenerator {
    client: Arc<dyn LLMClient>,
    template: PromptTemplate,
}

impl LLMQuizGenerator {
    /// Creates a generator that uses the built-in quiz template.
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self::with_template(client, PromptTemplate::quiz())
    }

    pub fn with_template(client: Arc<dyn LLMClient>, template: PromptTemplate) -> Self {
        Self { client, template }
    }
}

#[async_trait]
impl QuizGenerator for LLMQuizGenerator {
    async fn generate_quiz(&self, topic: &str) -> Result<Value> {
        let prompt = self.template.render(topic);
        let completion = self.client.complete(prompt).await?;
        debug!(length = completion.len(), "Model completion received");
        Ok(parse_json_output(&completion)?)
    }
}
