use crate::domain::{
    recommendation::{
        entities::{RecommendationResult, Suggestion},
        ports::RecommendationService,
        value_objects::PipelineState,
    },
    selection::entities::Selection,
};

/// The invoking surface: holds the user's selection and what is currently
/// shown, and allows at most one submission in flight.
#[derive(Debug, Clone)]
pub struct RecommendationForm {
    pub selection: Selection,
    state: PipelineState,
    suggestions: Vec<Suggestion>,
    last_error: Option<String>,
}

impl Default for RecommendationForm {
    fn default() -> Self {
        Self::new(Selection::default())
    }
}

impl RecommendationForm {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            state: PipelineState::Idle,
            suggestions: Vec::new(),
            last_error: None,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.state == PipelineState::Idle && self.selection.is_complete()
    }

    /// Moves to `InFlight` and hands out a snapshot of the selection, or
    /// returns `None` when the form is incomplete or already submitting.
    pub fn begin_submission(&mut self) -> Option<Selection> {
        if !self.can_submit() {
            return None;
        }
        self.state = PipelineState::InFlight;
        Some(self.selection.clone())
    }

    /// Back to `Idle`. A failure clears whatever was shown before.
    pub fn finish_submission(&mut self, result: RecommendationResult) {
        self.state = PipelineState::Idle;
        match result {
            Ok(recommendation) => {
                self.suggestions = recommendation.suggestions;
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!("Error generating restaurant recommendation: {}", e);
                self.suggestions.clear();
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Runs one submission end to end. Returns `false` without calling the
    /// service when the form cannot be submitted.
    pub async fn submit<S>(&mut self, service: &S) -> bool
    where
        S: RecommendationService,
    {
        let Some(selection) = self.begin_submission() else {
            return false;
        };
        let result = service.recommend(selection).await;
        self.finish_submission(result);
        true
    }
}
