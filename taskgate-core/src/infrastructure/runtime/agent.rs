use super::directive::{AgentDirective, parse_directive};
use crate::agent::{AgentError, AgentRuntime};
use crate::config::{AgentConfig, LlmSettings};
use crate::constants::CONTINUE_PROMPT;
use crate::model::{ModelProvider, ModelRequest};
use crate::request::ConversationTurn;
use crate::types::ChatMessage;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const SUMMARY_LIMIT: usize = 160;

pub struct LlmAgent<P: ModelProvider> {
    provider: P,
    settings: LlmSettings,
    system_prompt: String,
    max_steps: usize,
    memory: Vec<ChatMessage>,
    current_step: usize,
}

impl<P: ModelProvider> LlmAgent<P> {
    pub fn new(provider: P, config: AgentConfig) -> Self {
        Self {
            provider,
            settings: config.llm,
            system_prompt: config.system_prompt,
            max_steps: config.max_steps,
            memory: Vec::new(),
            current_step: 0,
        }
    }

    fn seed_memory(&mut self, task: &str, history: &[ConversationTurn]) {
        self.memory.clear();
        self.current_step = 0;
        if !self.system_prompt.trim().is_empty() {
            self.memory.push(ChatMessage::system(self.system_prompt.clone()));
        }
        self.memory.extend(history.iter().map(ChatMessage::from));
        self.memory.push(ChatMessage::user(task));
    }

    fn request(&self) -> ModelRequest {
        ModelRequest {
            model: self.settings.model.clone(),
            messages: self.memory.clone(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }
}

#[async_trait]
impl<P: ModelProvider> AgentRuntime for LlmAgent<P> {
    async fn run(
        &mut self,
        task: &str,
        history: &[ConversationTurn],
        cancel: &CancellationToken,
    ) -> Result<String, AgentError> {
        self.seed_memory(task, history);
        info!(
            max_steps = self.max_steps,
            history = history.len(),
            "Agent run started"
        );

        let mut results = Vec::new();
        while self.current_step < self.max_steps {
            if cancel.is_cancelled() {
                return Err(AgentError::Cancelled);
            }
            self.current_step += 1;
            let step = self.current_step;
            debug!(step, "Submitting agent step to model provider");

            let request = self.request();
            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(AgentError::Cancelled),
                response = self.provider.chat(request) => response?,
            };

            match parse_directive(&response.content) {
                AgentDirective::Final { response } => {
                    info!(step, "Agent returned final response");
                    results.push(format!("Step {step}: {}", summarise(&response)));
                    self.memory.push(ChatMessage::assistant(response));
                    return Ok(results.join("\n"));
                }
                AgentDirective::Think { thought } => {
                    debug!(step, "Agent requested another step");
                    results.push(format!("Step {step}: {}", summarise(&thought)));
                    self.memory.push(ChatMessage::assistant(response.content));
                    self.memory.push(ChatMessage::user(CONTINUE_PROMPT));
                }
            }
        }

        warn!(max_steps = self.max_steps, "Agent exceeded max steps");
        results.push(format!("Terminated: reached max steps ({})", self.max_steps));
        Ok(results.join("\n"))
    }

    fn steps_taken(&self) -> usize {
        self.current_step
    }

    fn messages(&self) -> &[ChatMessage] {
        &self.memory
    }
}

fn summarise(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(SUMMARY_LIMIT) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
