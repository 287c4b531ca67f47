//! Headline Loading
//!
//! One-shot startup fetch for the feed pane. The engine is asked, without
//! grounding, for exactly three newline-delimited headlines; blank lines are
//! dropped and the count is clamped on the way in. Any failure installs the
//! fixed fallback sequence instead, and nothing retries.

use crate::engine::{AnswerEngine, AnswerRequest};
use crate::state::HeadlineSet;

const HEADLINE_PROMPT: &str = "Generate exactly 3 short, punchy news headlines \
    about technology and the near future. One headline per line. \
    No numbering, no bullets, no other text.";

/// Fetch the startup headlines, falling back on any failure
pub async fn load<E: AnswerEngine>(engine: &E) -> HeadlineSet {
    let request = AnswerRequest::new(HEADLINE_PROMPT);
    match engine.ask(&request).await {
        Ok(answer) => parse_headlines(&answer.text),
        Err(err) => {
            tracing::warn!("Headline load failed, installing fallback: {err}");
            HeadlineSet::fallback()
        }
    }
}

/// Split answer text into clean headline lines
fn parse_headlines(text: &str) -> HeadlineSet {
    HeadlineSet::from_lines(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}
