use tracing::instrument;

use crate::domain::{
    authentication::{session::SessionSubscription, value_objects::Identity},
    common::{PipelineConfig, entities::app_errors::CoreError},
    food_analysis::{entities::AnalysisResult, ports::FoodAnalysisService, value_objects::AnalyzeFoodInput},
    food_entry::{entities::FoodEntry, ports::FoodEntryService, value_objects::SaveFoodEntryInput},
    intake::{
        entities::{IntakeStep, PreviewRef, StagedImage},
        ports::{Notifier, PreviewStore},
    },
    storage::{policies::ensure_valid_image, value_objects::ImageFile},
};

#[derive(Debug)]
struct IntakeState {
    step: IntakeStep,
    staged: Option<StagedImage>,
    analysis: Option<AnalysisResult>,
}

/// Moves the analyzer into a busy step and puts it back in `fallback` if the
/// owning future is dropped before the step settles.
struct StepGuard<'a> {
    state: &'a mut IntakeState,
    fallback: IntakeStep,
    settled: bool,
}

impl<'a> StepGuard<'a> {
    fn enter(state: &'a mut IntakeState, busy: IntakeStep, fallback: IntakeStep) -> Self {
        state.step = busy;
        Self {
            state,
            fallback,
            settled: false,
        }
    }

    fn settle(mut self, step: IntakeStep) {
        self.state.step = step;
        self.settled = true;
    }

    fn state(&mut self) -> &mut IntakeState {
        self.state
    }
}

impl Drop for StepGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!(
                busy = %self.state.step,
                fallback = %self.fallback,
                "in-flight intake operation dropped"
            );
            self.state.step = self.fallback;
        }
    }
}

/// Photo intake state machine: `select -> analyzing -> results -> saving`.
///
/// Holds at most one staged photo and its preview. Operations take
/// `&mut self`, so one analysis or save is in flight per analyzer; dropping
/// an in-flight operation restores the previous step. The preview is
/// released on [`reset`](Self::reset), after a successful save, and when the
/// analyzer itself is dropped.
pub struct FoodAnalyzer<S, P, N>
where
    P: PreviewStore,
{
    service: S,
    previews: P,
    notifier: N,
    session: SessionSubscription,
    config: PipelineConfig,
    state: IntakeState,
}

impl<S, P, N> FoodAnalyzer<S, P, N>
where
    S: FoodAnalysisService + FoodEntryService,
    P: PreviewStore,
    N: Notifier,
{
    pub fn new(
        service: S,
        previews: P,
        notifier: N,
        session: SessionSubscription,
        config: PipelineConfig,
    ) -> Self {
        Self {
            service,
            previews,
            notifier,
            session,
            config,
            state: IntakeState {
                step: IntakeStep::Select,
                staged: None,
                analysis: None,
            },
        }
    }

    pub fn step(&self) -> IntakeStep {
        self.state.step
    }

    pub fn staged_image(&self) -> Option<&ImageFile> {
        self.state.staged.as_ref().map(|s| &s.image)
    }

    pub fn preview(&self) -> Option<&PreviewRef> {
        self.state.staged.as_ref().map(|s| &s.preview)
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.state.analysis.as_ref()
    }

    /// Validate and stage a candidate photo.
    ///
    /// On failure nothing changes: the previously staged photo (if any) stays.
    #[instrument(skip(self, image), fields(filename = %image.file_name, size = image.len()))]
    pub fn select_file(&mut self, image: ImageFile) -> Result<(), CoreError> {
        if matches!(self.state.step, IntakeStep::Analyzing | IntakeStep::Saving) {
            return Err(CoreError::InvalidState(format!(
                "cannot select a file while {}",
                self.state.step
            )));
        }

        if let Err(e) = ensure_valid_image(&image, &self.config) {
            self.notifier.error(&e.to_string());
            return Err(e);
        }

        let preview = match self.previews.materialize(&image) {
            Ok(preview) => preview,
            Err(e) => {
                self.notifier.error(&e.to_string());
                return Err(e);
            }
        };

        if let Some(previous) = self.state.staged.take() {
            self.previews.release(&previous.preview);
        }

        self.state.staged = Some(StagedImage { image, preview });
        self.state.analysis = None;
        self.state.step = IntakeStep::Select;

        Ok(())
    }

    /// Analyze the staged photo. On failure the analyzer returns to `select`
    /// with the photo still staged so the caller can retry.
    #[instrument(skip(self))]
    pub async fn request_analysis(&mut self) -> Result<AnalysisResult, CoreError> {
        let identity = self.current_identity()?;

        let image = match (self.state.step, &self.state.staged) {
            (IntakeStep::Select, Some(staged)) => staged.image.clone(),
            (IntakeStep::Select, None) => {
                return Err(CoreError::InvalidState("no image selected".to_string()));
            }
            (step, _) => {
                return Err(CoreError::InvalidState(format!(
                    "analysis already {step}"
                )));
            }
        };

        let mut guard = StepGuard::enter(&mut self.state, IntakeStep::Analyzing, IntakeStep::Select);
        let result = self
            .service
            .analyze_food(identity, AnalyzeFoodInput::new(image))
            .await;

        match result {
            Ok(analysis) => {
                guard.state().analysis = Some(analysis.clone());
                guard.settle(IntakeStep::Results);
                self.notifier.success("Food analysis completed!");
                Ok(analysis)
            }
            Err(e) => {
                guard.settle(IntakeStep::Select);
                tracing::warn!(error = %e, "food analysis failed");
                self.notifier.error(&e.to_string());
                Err(e)
            }
        }
    }

    /// Persist the current analysis. Failure returns to `results` so the
    /// analysis is kept and the save can be retried.
    #[instrument(skip(self))]
    pub async fn save(&mut self) -> Result<FoodEntry, CoreError> {
        let identity = self.current_identity()?;

        let (image, analysis) = match (self.state.step, &self.state.analysis) {
            (IntakeStep::Results, Some(analysis)) => (
                self.state.staged.as_ref().map(|s| s.image.clone()),
                analysis.clone(),
            ),
            (step, _) => {
                return Err(CoreError::InvalidState(format!(
                    "nothing to save while {step}"
                )));
            }
        };

        let guard = StepGuard::enter(&mut self.state, IntakeStep::Saving, IntakeStep::Results);
        let result = self
            .service
            .save_food_entry(identity, SaveFoodEntryInput { image, analysis })
            .await;

        match result {
            Ok(entry) => {
                guard.settle(IntakeStep::Select);
                self.clear();
                self.notifier.success("Food entry saved successfully!");
                self.notifier.entry_saved(&entry);
                Ok(entry)
            }
            Err(e) => {
                guard.settle(IntakeStep::Results);
                tracing::warn!(error = %e, "saving food entry failed");
                self.notifier.error(&e.to_string());
                Err(e)
            }
        }
    }

    /// Release the preview and go back to an empty `select` step.
    pub fn reset(&mut self) {
        self.clear();
        self.state.step = IntakeStep::Select;
    }

    /// Wait for the next session change. Signing out discards staged work.
    pub async fn session_changed(&mut self) -> Result<Option<Identity>, CoreError> {
        let identity = self.session.changed().await?;
        if identity.is_none() {
            tracing::info!("session ended, discarding staged photo");
            self.reset();
        }
        Ok(identity)
    }

    /// Tear down explicitly: release the preview and the session subscription.
    pub fn dispose(mut self) {
        self.reset();
    }

    fn current_identity(&self) -> Result<Identity, CoreError> {
        self.session.require_identity().inspect_err(|_| {
            self.notifier.error("Please sign in to analyze food");
        })
    }

    fn clear(&mut self) {
        if let Some(staged) = self.state.staged.take() {
            self.previews.release(&staged.preview);
        }
        self.state.analysis = None;
    }
}

impl<S, P, N> Drop for FoodAnalyzer<S, P, N>
where
    P: PreviewStore,
{
    fn drop(&mut self) {
        if let Some(staged) = self.state.staged.take() {
            self.previews.release(&staged.preview);
        }
    }
}
