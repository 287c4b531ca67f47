//! Answer Engine Integration
//!
//! This module provides abstracted access to the text/answer service through
//! a common trait interface.
//!
//! # Available Engines
//!
//! - **Gemini**: Google Generative Language API with optional search
//!   grounding (default)
//!
//! # Usage
//!
//! ```ignore
//! use visor_core::engine::{AnswerEngine, AnswerRequest, GeminiEngine};
//!
//! let engine = GeminiEngine::from_env();
//! let request = AnswerRequest::new("Three short headlines, one per line.");
//! let answer = engine.ask(&request).await?;
//! ```

mod gemini;
mod traits;

pub use gemini::{GeminiEngine, DEFAULT_MODEL};
pub use traits::{Answer, AnswerEngine, AnswerRequest, Citation};
