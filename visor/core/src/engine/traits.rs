//! Answer Engine Traits
//!
//! Trait definitions for the answer engine. This abstraction lets the
//! orchestrator work against any text/answer provider without changing core
//! logic, and lets tests script responses deterministically.
//!
//! # Design Philosophy
//!
//! One fallible operation, `ask`, covers everything the HUD needs: weather
//! prompts, headline generation, and grounded search. Grounding is a request
//! flag, not a separate method, because the only difference on the wire is
//! whether the provider may consult live search and attach citations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A cited source attached to a grounded answer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Source title as reported by the engine
    pub title: String,
    /// Link to the source; may be empty when the engine withholds it
    pub uri: String,
}

impl Citation {
    /// Create a citation
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }

    /// Whether the link is usable for display
    ///
    /// Entries without one are dropped rather than shown with a blank link.
    #[must_use]
    pub fn has_resolvable_uri(&self) -> bool {
        !self.uri.trim().is_empty()
    }
}

/// Configuration for an answer request
#[derive(Clone, Debug)]
pub struct AnswerRequest {
    /// The prompt to send
    pub prompt: String,
    /// Whether the engine may consult live search and attach citations
    pub grounding: bool,
}

impl AnswerRequest {
    /// Create a request with grounding disabled
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            grounding: false,
        }
    }

    /// Set the grounding flag
    #[must_use]
    pub fn with_grounding(mut self, grounding: bool) -> Self {
        self.grounding = grounding;
        self
    }
}

/// A settled answer from the engine
///
/// With grounding disabled, `citations` is always empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Answer {
    /// Generated answer text
    pub text: String,
    /// Cited sources, in engine order, unfiltered
    pub citations: Vec<Citation>,
}

impl Answer {
    /// Create an answer with no citations
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            citations: Vec::new(),
        }
    }
}

/// Answer engine trait
///
/// Implement this to back the HUD with a different provider. Every caller
/// treats `ask` as fallible and converts failures into fixed fallback data
/// for the slot it owns.
#[async_trait]
pub trait AnswerEngine: Send + Sync {
    /// Engine name for logs and the status line (e.g. "Gemini")
    fn name(&self) -> &str;

    /// Check whether the engine is reachable and willing to answer
    ///
    /// Used once at startup for an operator notice. Never gates requests:
    /// an engine that fails its health check still gets asked, and the
    /// per-call fallbacks handle the failures.
    async fn health_check(&self) -> bool;

    /// Send a prompt and wait for the complete answer
    async fn ask(&self, request: &AnswerRequest) -> Result<Answer, EngineError>;
}
