//! Weather Resolution
//!
//! One weather pass chains two fallible hops: a position fix from the device
//! sensors, then a grounded engine query phrased to come back as a single
//! pipe-delimited line. Each hop has its own fixed fallback reading, so the
//! weather slot always holds something renderable no matter where the pass
//! died.
//!
//! The pass itself runs in a spawned task and reports back as a
//! [`WeatherOutcome`]; committing the outcome to the slot happens on the
//! orchestrator task, which is also where the prior temperature for the
//! degraded shape is read.

use crate::engine::{AnswerEngine, AnswerRequest};
use crate::sensors::{DeviceSensors, GeoPoint};
use crate::state::WeatherReading;

/// How a single weather pass ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WeatherOutcome {
    /// No position fix was available
    PositionFailed,
    /// Position was fine but the engine call failed
    EngineFailed,
    /// The engine answered; text not yet parsed
    Answered(String),
}

impl WeatherOutcome {
    /// Fold this outcome into the weather slot
    ///
    /// `current` supplies the prior temperature in case the answer text is
    /// off-shape and the reading degrades.
    #[must_use]
    pub fn commit(self, current: &WeatherReading) -> WeatherReading {
        match self {
            Self::PositionFailed => WeatherReading::no_signal(),
            Self::EngineFailed => WeatherReading::offline(),
            Self::Answered(text) => parse_reading(&text, &current.temperature),
        }
    }
}

/// Run one full weather pass: position fix, then grounded query
pub async fn resolve<E, S>(engine: &E, sensors: &S) -> WeatherOutcome
where
    E: AnswerEngine,
    S: DeviceSensors,
{
    let position = match sensors.current_position().await {
        Ok(position) => position,
        Err(err) => {
            tracing::warn!("Weather pass aborted, no position fix: {err}");
            return WeatherOutcome::PositionFailed;
        }
    };

    let request = AnswerRequest::new(build_weather_prompt(position)).with_grounding(true);
    match engine.ask(&request).await {
        Ok(answer) => WeatherOutcome::Answered(answer.text),
        Err(err) => {
            tracing::warn!("Weather query failed: {err}");
            WeatherOutcome::EngineFailed
        }
    }
}

/// Build the single-line weather prompt for a position
fn build_weather_prompt(position: GeoPoint) -> String {
    format!(
        "Current weather at latitude {:.4}, longitude {:.4}. \
         Reply with exactly one line in this format: \
         location | temperature | condition. \
         Example: Tokyo | 15°C | Rainy. No other text.",
        position.latitude, position.longitude
    )
}

/// Parse the engine's answer into a reading
///
/// Segments split on `|` and trim. Three or more segments make a resolved
/// reading (extras ignored); anything shorter degrades, carrying
/// `prior_temperature` forward.
fn parse_reading(text: &str, prior_temperature: &str) -> WeatherReading {
    let segments: Vec<&str> = text.split('|').map(str::trim).collect();
    if segments.len() >= 3 {
        WeatherReading::resolved(segments[0], segments[1], segments[2])
    } else {
        WeatherReading::degraded(prior_temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_well_formed_line() {
        let reading = parse_reading("Tokyo | 15°C | Rainy", "--");
        assert_eq!(reading, WeatherReading::resolved("Tokyo", "15°C", "Rainy"));
    }

    #[test]
    fn test_parse_ignores_extra_segments() {
        let reading = parse_reading("Berlin | 21°C | Clear | humidity 40%", "--");
        assert_eq!(reading, WeatherReading::resolved("Berlin", "21°C", "Clear"));
    }

    #[test]
    fn test_parse_off_shape_text_degrades() {
        let reading = parse_reading("It is currently raining in Tokyo.", "15°C");
        assert_eq!(reading, WeatherReading::degraded("15°C"));
        assert_eq!(reading.temperature, "15°C");
    }

    #[test]
    fn test_parse_two_segments_degrades() {
        let reading = parse_reading("Tokyo | 15°C", "--");
        assert_eq!(reading, WeatherReading::degraded("--"));
    }

    #[test]
    fn test_commit_position_failure() {
        let prior = WeatherReading::resolved("Tokyo", "15°C", "Rainy");
        let committed = WeatherOutcome::PositionFailed.commit(&prior);
        assert_eq!(committed, WeatherReading::no_signal());
    }

    #[test]
    fn test_commit_engine_failure() {
        let committed = WeatherOutcome::EngineFailed.commit(&WeatherReading::scanning());
        assert_eq!(committed, WeatherReading::offline());
    }

    #[test]
    fn test_commit_answer_degrades_against_current_slot() {
        let prior = WeatherReading::resolved("Tokyo", "15°C", "Rainy");
        let committed = WeatherOutcome::Answered("no pipes here".to_string()).commit(&prior);
        assert_eq!(committed, WeatherReading::degraded("15°C"));
    }

    #[test]
    fn test_prompt_embeds_position() {
        let prompt = build_weather_prompt(GeoPoint {
            latitude: 35.6762,
            longitude: 139.6503,
        });
        assert!(prompt.contains("35.6762"));
        assert!(prompt.contains("139.6503"));
        assert!(prompt.contains("location | temperature | condition"));
    }
}
