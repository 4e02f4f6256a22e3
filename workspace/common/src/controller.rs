//! Upload-analyze controller state.
//!
//! [`AnalyzeState`] owns the selected file, the last result and the last
//! error. It changes only through [`AnalyzeState::apply`], so a UI reducer can
//! wrap it directly. A submit is split into three steps so the network call
//! can run outside the state owner:
//!
//! 1. [`AnalyzeState::prepare_submit`] decides whether a request may start,
//! 2. [`AnalyzeAction::SubmitStarted`] marks the request as pending,
//! 3. [`SubmitTicket::run`] performs the call and its [`Completion`] is fed
//!    back as [`AnalyzeAction::SubmitCompleted`].
//!
//! [`AnalyzeState::submit`] runs the three steps in one call.

use crate::analysis::AnalysisResult;
use crate::error::AnalysisError;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Sends one file to the analysis service.
#[async_trait(?Send)]
pub trait AnalysisService {
    /// File handle type understood by this service
    type Upload;

    async fn analyze(&self, file: &Self::Upload) -> Result<AnalysisResult, AnalysisError>;
}

/// Transition applied to [`AnalyzeState`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeAction<F> {
    /// Replace the selected file. `None` clears the selection.
    SelectFile(Option<F>),
    /// Submit was refused before any request was made
    SubmitRejected(AnalysisError),
    /// A request with this generation is now in flight
    SubmitStarted(u64),
    /// A request finished
    SubmitCompleted(Completion),
}

/// Outcome of [`AnalyzeState::prepare_submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision<F> {
    Start(SubmitTicket<F>),
    Rejected(AnalysisError),
    /// A request is already pending
    Busy,
}

/// Permission to run one request.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket<F> {
    generation: u64,
    file: F,
}

impl<F> SubmitTicket<F> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    /// Perform the request. Always resolves, errors included.
    pub async fn run<S>(self, service: &S) -> Completion
    where
        S: AnalysisService<Upload = F> + ?Sized,
    {
        let outcome = service.analyze(&self.file).await;
        Completion { generation: self.generation, outcome }
    }
}

/// Result of one request, tagged with the generation that started it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub generation: u64,
    pub outcome: Result<AnalysisResult, AnalysisError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeState<F> {
    selected_file: Option<F>,
    result: Option<AnalysisResult>,
    error: Option<AnalysisError>,
    pending: Option<u64>,
    generation: u64,
}

impl<F> Default for AnalyzeState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            result: None,
            error: None,
            pending: None,
            generation: 0,
        }
    }
}

impl<F> AnalyzeState<F> {
    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        self.error.as_ref()
    }

    /// Text to display for the current error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn select_file(&mut self, file: Option<F>) {
        self.apply(AnalyzeAction::SelectFile(file));
    }

    pub fn apply(&mut self, action: AnalyzeAction<F>) {
        match action {
            AnalyzeAction::SelectFile(file) => {
                self.selected_file = file;
            }
            AnalyzeAction::SubmitRejected(error) => {
                debug!(%error, "Submit rejected");
                self.error = Some(error);
            }
            AnalyzeAction::SubmitStarted(generation) => {
                if let Some(current) = self.pending {
                    debug!(current, generation, "Ignoring start while a request is pending");
                    return;
                }
                self.error = None;
                self.pending = Some(generation);
                self.generation = self.generation.max(generation);
            }
            AnalyzeAction::SubmitCompleted(completion) => {
                if self.pending != Some(completion.generation) {
                    debug!(
                        generation = completion.generation,
                        pending = ?self.pending,
                        "Discarding completion of a superseded request"
                    );
                    return;
                }
                self.pending = None;
                match completion.outcome {
                    Ok(result) => {
                        info!(points = result.forecast.len(), "Analysis completed");
                        self.result = Some(result);
                        self.error = None;
                    }
                    Err(error) => {
                        warn!(%error, kind = ?error.kind(), "Analysis failed");
                        self.error = Some(error);
                    }
                }
            }
        }
    }
}

impl<F: Clone> AnalyzeState<F> {
    /// Decide whether a submit may issue a request.
    ///
    /// Does not change the state; the caller applies the matching action.
    pub fn prepare_submit(&self) -> SubmitDecision<F> {
        if self.pending.is_some() {
            return SubmitDecision::Busy;
        }
        match &self.selected_file {
            None => SubmitDecision::Rejected(AnalysisError::NoFileSelected),
            Some(file) => SubmitDecision::Start(SubmitTicket {
                generation: self.generation + 1,
                file: file.clone(),
            }),
        }
    }

    /// Run a complete submit against `service`.
    ///
    /// Issues at most one request. Returns `false` when nothing was sent.
    pub async fn submit<S>(&mut self, service: &S) -> bool
    where
        S: AnalysisService<Upload = F> + ?Sized,
    {
        match self.prepare_submit() {
            SubmitDecision::Busy => false,
            SubmitDecision::Rejected(error) => {
                self.apply(AnalyzeAction::SubmitRejected(error));
                false
            }
            SubmitDecision::Start(ticket) => {
                self.apply(AnalyzeAction::SubmitStarted(ticket.generation()));
                let completion = ticket.run(service).await;
                self.apply(AnalyzeAction::SubmitCompleted(completion));
                true
            }
        }
    }
}
