/// The classification session state machine
///
/// One `Session` models a user's in-progress identification attempt:
/// picking an image, previewing it, running the analysis, and reading the
/// result. All transitions are explicit methods so the UI layer stays a
/// thin dispatcher and the machine can be exercised without a window.
///
/// The only asynchronous boundary is `Processing`: `begin_analysis` hands
/// out a ticket whose generation number must match when the analysis task
/// completes. A reset (or a later re-arm) bumps the generation, so a task
/// that fires after the user walked away is recognized as stale and
/// discarded instead of corrupting a fresh session.

use thiserror::Error;

use super::data::{Classification, SelectedImage};
use crate::classify::AnalysisError;

/// Discrete stage of a classification session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// No image yet; the drop zone is showing
    #[default]
    Idle,
    /// An image is selected and waiting to be classified
    Preview,
    /// The analysis task is in flight
    Processing,
    /// A classification has arrived
    Result,
}

/// Rejected session commands. All are recoverable and leave the stage
/// unchanged; the UI surfaces them inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no image selected yet")]
    NoFileSelected,
    #[error("an analysis is already running")]
    AnalysisInFlight,
    #[error("nothing to classify in this stage")]
    NotInPreview,
}

/// Handle for one analysis run.
///
/// The generation number ties a finished analysis back to the session
/// state that started it; `finish_analysis` ignores tickets from any
/// earlier generation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisTicket {
    pub generation: u64,
    pub image: SelectedImage,
}

/// One user's classification attempt, from image selection through result
/// or reset
#[derive(Debug, Clone, Default)]
pub struct Session {
    stage: Stage,
    selected: Option<SelectedImage>,
    outcome: Option<Classification>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn outcome(&self) -> Option<&Classification> {
        self.outcome.as_ref()
    }

    /// Accept a user-supplied image.
    ///
    /// Allowed in `Idle` (starts a preview), in `Preview` (replaces the
    /// current image without leaving the stage), and in `Result` (discards
    /// the old outcome and begins a fresh preview). Rejected while an
    /// analysis is in flight so the run's input cannot change under it.
    pub fn select(&mut self, image: SelectedImage) -> Result<(), SessionError> {
        match self.stage {
            Stage::Processing => Err(SessionError::AnalysisInFlight),
            Stage::Idle | Stage::Preview | Stage::Result => {
                self.outcome = None;
                self.selected = Some(image);
                self.stage = Stage::Preview;
                Ok(())
            }
        }
    }

    /// Move `Preview → Processing` and hand back a ticket for the analysis
    /// task.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, SessionError> {
        match self.stage {
            Stage::Processing => Err(SessionError::AnalysisInFlight),
            Stage::Idle => Err(SessionError::NoFileSelected),
            Stage::Result => Err(SessionError::NotInPreview),
            Stage::Preview => {
                let image = self.selected.clone().ok_or(SessionError::NoFileSelected)?;
                self.generation += 1;
                self.stage = Stage::Processing;
                Ok(AnalysisTicket {
                    generation: self.generation,
                    image,
                })
            }
        }
    }

    /// Apply a finished analysis.
    ///
    /// Returns `false` when the completion is stale: the session was reset
    /// or re-armed since the ticket was issued, or it is no longer
    /// processing. A stale completion leaves the session untouched.
    pub fn finish_analysis(
        &mut self,
        generation: u64,
        outcome: Result<Classification, AnalysisError>,
    ) -> bool {
        if self.stage != Stage::Processing || generation != self.generation {
            return false;
        }

        match outcome {
            Ok(classification) => {
                self.outcome = Some(classification);
                self.stage = Stage::Result;
            }
            Err(_) => {
                // Failed runs fall back to the preview so the user can retry
                self.outcome = None;
                self.stage = Stage::Preview;
            }
        }

        true
    }

    /// Discard the image and any outcome and return to `Idle`.
    ///
    /// Bumps the generation, invalidating tickets from analyses still in
    /// flight. Backs both the "Reset" and "Classify another" buttons.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.stage = Stage::Idle;
        self.selected = None;
        self.outcome = None;
    }
}
