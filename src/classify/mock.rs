/// Simulated collaborators
///
/// Everything in this file is a stand-in. `SimulatedClassifier` plays the
/// role of a real multimodal inference service: it waits a fixed delay and
/// returns one canned answer, ignoring the image entirely. Replacing it is
/// a drop-in substitution behind `PestClassifier`; nothing else in the app
/// knows the answer is scripted.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

use super::{AnalysisError, LookupError, PestClassifier, PestLookup};
use crate::state::data::{Classification, PestRecord, ThreatLevel};

/// How long the simulated model "thinks" before answering
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1800);

/// The one answer the simulation knows
pub fn canned_classification() -> Classification {
    Classification {
        label: "Aphid".to_string(),
        confidence_pct: 94,
        traits: vec!["Soft-bodied".to_string(), "Sap-sucking".to_string()],
        threat: ThreatLevel::Medium,
        recommendations: "Introduce lady beetles, use neem oil for organic control, \
                          consider selective insecticide if infestation persists."
            .to_string(),
    }
}

/// Fixed-delay, fixed-answer classifier
#[derive(Debug, Clone)]
pub struct SimulatedClassifier {
    delay: Duration,
}

impl SimulatedClassifier {
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }

    /// Override the delay, mainly for driving tests
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PestClassifier for SimulatedClassifier {
    async fn classify(&self, _image: PathBuf) -> Result<Classification, AnalysisError> {
        tokio::time::sleep(self.delay).await;
        Ok(canned_classification())
    }
}

/// No-op stand-in for the external identification collaborator behind the
/// custom-search dialog. Forwarding the query anywhere is out of scope, so
/// every search comes back empty.
#[derive(Debug, Clone, Default)]
pub struct OfflineLookup;

#[async_trait]
impl PestLookup for OfflineLookup {
    async fn search(&self, query: String) -> Result<Option<PestRecord>, LookupError> {
        println!("🔎 Custom search requested: \"{}\" (external lookup not wired up)", query);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_with_deadline;
    use std::sync::Arc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn answers_with_the_canned_result_after_the_fixed_delay() {
        let classifier = SimulatedClassifier::new();
        let started = Instant::now();

        let outcome = classifier.classify("/photos/leaf.jpg".into()).await.unwrap();

        assert_eq!(started.elapsed(), SIMULATED_DELAY);
        assert_eq!(outcome, canned_classification());
        assert!(!outcome.label.is_empty());
        assert!(outcome.confidence_pct <= 100);
    }

    #[tokio::test(start_paused = true)]
    async fn the_answer_ignores_the_input_image() {
        let classifier = SimulatedClassifier::with_delay(Duration::from_millis(1));

        let first = classifier.classify("/photos/a.jpg".into()).await.unwrap();
        let second = classifier.classify("/photos/b.png".into()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn finishes_well_inside_the_caller_deadline() {
        let provider: Arc<dyn PestClassifier> = Arc::new(SimulatedClassifier::new());

        let outcome = classify_with_deadline(provider, "/photos/leaf.jpg".into()).await;

        assert_eq!(outcome, Ok(canned_classification()));
    }

    #[tokio::test]
    async fn offline_lookup_always_reports_no_match() {
        let lookup = OfflineLookup;
        let outcome = lookup.search("tiny green insect".to_string()).await;
        assert_eq!(outcome, Ok(None));
    }
}
