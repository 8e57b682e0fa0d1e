/// Classification and lookup collaborators
///
/// The session state machine never talks to a model directly; it goes
/// through the `PestClassifier` seam below, so the bundled simulation can
/// be swapped for a real multimodal inference service without touching any
/// workflow code. The same applies to the custom-search dialog and
/// `PestLookup`.

pub mod intake;
pub mod mock;

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::state::data::{Classification, PestRecord};

/// Upper bound on one analysis run. Completions that miss it surface as
/// `AnalysisError::Timeout`.
pub const ANALYSIS_DEADLINE: Duration = Duration::from_secs(10);

/// Failures of a classification run. Both variants send the session back
/// to the preview so the user can retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("the analysis did not finish in time")]
    Timeout,
    #[error("analysis failed: {0}")]
    Failed(String),
}

/// Failures of a custom-search request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("custom search failed: {0}")]
    Failed(String),
}

/// Image in, classification out.
///
/// Implementations must answer within a bounded delay; callers enforce
/// `ANALYSIS_DEADLINE` on top via `classify_with_deadline`.
#[async_trait]
pub trait PestClassifier: Send + Sync {
    async fn classify(&self, image: PathBuf) -> Result<Classification, AnalysisError>;
}

/// Free-text identification lookup behind the custom-search dialog.
/// `Ok(None)` means the collaborator had no match.
#[async_trait]
pub trait PestLookup: Send + Sync {
    async fn search(&self, query: String) -> Result<Option<PestRecord>, LookupError>;
}

/// Run one classification with the deadline applied.
pub async fn classify_with_deadline(
    provider: Arc<dyn PestClassifier>,
    image: PathBuf,
) -> Result<Classification, AnalysisError> {
    match tokio::time::timeout(ANALYSIS_DEADLINE, provider.classify(image)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(AnalysisError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A provider that never answers, for exercising the deadline path
    struct StalledClassifier;

    #[async_trait]
    impl PestClassifier for StalledClassifier {
        async fn classify(&self, _image: PathBuf) -> Result<Classification, AnalysisError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(AnalysisError::Failed("unreachable".to_string()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn overlong_runs_surface_as_timeout() {
        let provider: Arc<dyn PestClassifier> = Arc::new(StalledClassifier);

        let outcome = classify_with_deadline(provider, "/photos/leaf.jpg".into()).await;

        assert_eq!(outcome, Err(AnalysisError::Timeout));
    }
}
