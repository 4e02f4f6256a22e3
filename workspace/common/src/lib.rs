//! Framework-independent core of the LocalBoost analysis client.
//! Holds the wire types of the analysis service, the interpretation of its
//! responses and the upload-analyze state machine, so the browser frontend
//! only has to provide the HTTP transport and the views.

mod analysis;
mod controller;
mod error;
mod origin;

pub use analysis::{interpret_response, AnalysisResult, ErrorResponse, ForecastEntry, PlotKind};
pub use controller::{
    AnalysisService, AnalyzeAction, AnalyzeState, Completion, SubmitDecision, SubmitTicket,
};
pub use error::{AnalysisError, ConfigError, ErrorKind, NO_FILE_MESSAGE, UPLOAD_FAILED_MESSAGE};
pub use origin::{ServiceOrigin, ANALYZE_PATH, DEFAULT_SERVICE_ORIGIN};
