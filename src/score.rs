//! Score ingestion from the embedding page
//!
//! Quiz results arrive as window `message` events carrying a JSON
//! payload. The handler writes into a `ScoreCell`; the frame loop reads
//! one snapshot per frame, so a mid-frame update can never tear the
//! ratio computation.

use serde::{Deserialize, Serialize};

/// Message type tag carried by score result payloads
pub const SCORE_EVENT_TYPE: &str = "H5P_SCORE_RESULT";

/// Wire format of a quiz result message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub score: f64,
    #[serde(rename = "maxScore")]
    pub max_score: f64,
}

/// The latest score pair. Defaults to 0/0 before any event arrives,
/// which renders as the waiting state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreSnapshot {
    pub score: f64,
    pub max_score: f64,
}

impl ScoreSnapshot {
    /// Fraction of the maximum score. A zero or missing maximum is not an
    /// error; it reads as ratio 0.
    pub fn ratio(&self) -> f32 {
        if self.max_score > 0.0 {
            (self.score / self.max_score) as f32
        } else {
            0.0
        }
    }
}

/// Single-writer score cell: the message handler stores, the frame loop
/// loads. Both run on the same cooperative scheduler, so no lock.
#[derive(Debug, Default)]
pub struct ScoreCell {
    latest: ScoreSnapshot,
}

impl ScoreCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and ingest a raw message payload. Anything that is not a
    /// well-formed score result is dropped without touching state.
    /// Returns whether the snapshot was updated.
    pub fn ingest(&mut self, raw: &str) -> bool {
        match serde_json::from_str::<ScoreEvent>(raw) {
            Ok(event) if event.kind == SCORE_EVENT_TYPE => {
                self.latest = ScoreSnapshot {
                    score: event.score,
                    max_score: event.max_score,
                };
                log::info!("score updated: {}/{}", event.score, event.max_score);
                true
            }
            _ => false,
        }
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_guards_zero_max() {
        let snap = ScoreSnapshot::default();
        assert_eq!(snap.ratio(), 0.0);
        let snap = ScoreSnapshot {
            score: 5.0,
            max_score: 0.0,
        };
        assert_eq!(snap.ratio(), 0.0);
    }

    #[test]
    fn test_ratio_of_partial_score() {
        let snap = ScoreSnapshot {
            score: 95.0,
            max_score: 100.0,
        };
        assert!((snap.ratio() - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_ingest_valid_result() {
        let mut cell = ScoreCell::new();
        let updated =
            cell.ingest(r#"{"type":"H5P_SCORE_RESULT","score":70,"maxScore":100}"#);
        assert!(updated);
        let snap = cell.snapshot();
        assert_eq!(snap.score, 70.0);
        assert_eq!(snap.max_score, 100.0);
    }

    #[test]
    fn test_ingest_ignores_malformed_payloads() {
        let mut cell = ScoreCell::new();
        cell.ingest(r#"{"type":"H5P_SCORE_RESULT","score":95,"maxScore":100}"#);
        let before = cell.snapshot();

        assert!(!cell.ingest("not json at all"));
        assert!(!cell.ingest(r#"{"score":1}"#));
        assert!(!cell.ingest(r#"{"type":"SOMETHING_ELSE","score":1,"maxScore":2}"#));
        assert!(!cell.ingest(r#"{"type":"H5P_SCORE_RESULT","score":"high"}"#));

        assert_eq!(cell.snapshot(), before);
    }

    #[test]
    fn test_later_event_replaces_earlier() {
        let mut cell = ScoreCell::new();
        cell.ingest(r#"{"type":"H5P_SCORE_RESULT","score":10,"maxScore":100}"#);
        cell.ingest(r#"{"type":"H5P_SCORE_RESULT","score":90,"maxScore":100}"#);
        assert_eq!(cell.snapshot().score, 90.0);
    }
}
