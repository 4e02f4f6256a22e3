//! Wire schema of the analyze endpoint and interpretation of its responses.

use crate::error::{AnalysisError, UPLOAD_FAILED_MESSAGE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One forecast point as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastEntry {
    pub date: String,
    pub value: f64,
}

impl fmt::Display for ForecastEntry {
    /// Renders as `date: value`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.value)
    }
}

/// Success body of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Forecast points in server order
    pub forecast: Vec<ForecastEntry>,
    pub seasonal_decomp_path: String,
    pub forecast_plot_path: String,
    pub residuals_time_path: String,
    pub residuals_hist_path: String,
}

/// The four plots the service renders for every analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    SeasonalDecomposition,
    Forecast,
    ResidualsOverTime,
    ResidualDistribution,
}

impl PlotKind {
    pub const ALL: [PlotKind; 4] = [
        PlotKind::SeasonalDecomposition,
        PlotKind::Forecast,
        PlotKind::ResidualsOverTime,
        PlotKind::ResidualDistribution,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PlotKind::SeasonalDecomposition => "Seasonal Decomposition",
            PlotKind::Forecast => "Forecast Plot",
            PlotKind::ResidualsOverTime => "Residuals Over Time",
            PlotKind::ResidualDistribution => "Residual Distribution",
        }
    }
}

impl AnalysisResult {
    pub fn plot_path(&self, kind: PlotKind) -> &str {
        match kind {
            PlotKind::SeasonalDecomposition => &self.seasonal_decomp_path,
            PlotKind::Forecast => &self.forecast_plot_path,
            PlotKind::ResidualsOverTime => &self.residuals_time_path,
            PlotKind::ResidualDistribution => &self.residuals_hist_path,
        }
    }

    /// Plot paths in display order.
    pub fn plots(&self) -> impl Iterator<Item = (PlotKind, &str)> + '_ {
        PlotKind::ALL.into_iter().map(move |kind| (kind, self.plot_path(kind)))
    }
}

/// Error body of a failed request. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

/// Turn a completed HTTP exchange into an analysis outcome.
///
/// Non-success statuses take their message from the body's `error` string,
/// falling back to [`UPLOAD_FAILED_MESSAGE`] when the body is not JSON or the
/// field is missing, empty or not a string.
pub fn interpret_response(status: u16, body: &str) -> Result<AnalysisResult, AnalysisError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| UPLOAD_FAILED_MESSAGE.to_string());

        tracing::debug!(status, %message, "Analysis service returned an error status");
        return Err(AnalysisError::Service { status, message });
    }

    serde_json::from_str::<AnalysisResult>(body).map_err(|e| {
        tracing::warn!(status, error = %e, "Analysis response did not match the result schema");
        AnalysisError::MalformedResponse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn sample_body() -> serde_json::Value {
        json!({
            "forecast": [
                {"date": "2024-01-01", "value": 42.5},
                {"date": "2024-01-02", "value": 40.0}
            ],
            "seasonal_decomp_path": "out/a.png",
            "forecast_plot_path": "out/b.png",
            "residuals_time_path": "out/c.png",
            "residuals_hist_path": "out/d.png"
        })
    }

    #[test]
    fn test_success_body_is_taken_as_is() {
        let result = interpret_response(200, &sample_body().to_string()).unwrap();

        assert_eq!(result.forecast.len(), 2);
        assert_eq!(result.forecast[0], ForecastEntry { date: "2024-01-01".to_string(), value: 42.5 });
        assert_eq!(result.seasonal_decomp_path, "out/a.png");
        assert_eq!(result.residuals_hist_path, "out/d.png");
        assert_eq!(serde_json::to_value(&result).unwrap(), sample_body());
    }

    #[test]
    fn test_any_2xx_is_success() {
        assert!(interpret_response(201, &sample_body().to_string()).is_ok());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut body = sample_body();
        body["elapsed_ms"] = json!(1234);
        assert!(interpret_response(200, &body.to_string()).is_ok());
    }

    #[test]
    fn test_error_field_becomes_message() {
        let err = interpret_response(400, r#"{"error": "CSV must contain a 'date' column"}"#).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Service { status: 400, message: "CSV must contain a 'date' column".to_string() }
        );
        assert_eq!(err.to_string(), "CSV must contain a 'date' column");
    }

    #[test]
    fn test_missing_error_field_falls_back() {
        for body in ["{}", "", "<html>Internal Server Error</html>", r#"{"error": ""}"#, r#"{"error": 17}"#] {
            let err = interpret_response(500, body).unwrap_err();
            assert_eq!(err.to_string(), "Upload failed", "body {body:?}");
            assert_eq!(err.kind(), ErrorKind::Service);
        }
    }

    #[test]
    fn test_error_status_ignores_result_shaped_body() {
        let err = interpret_response(404, &sample_body().to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Upload failed");
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let mut body = sample_body();
        body.as_object_mut().unwrap().remove("forecast_plot_path");

        let err = interpret_response(200, &body.to_string()).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(ref detail) if detail.contains("forecast_plot_path")));
        assert_eq!(err.kind(), ErrorKind::Service);
    }

    #[test]
    fn test_wrong_value_type_is_malformed() {
        let mut body = sample_body();
        body["forecast"][0]["value"] = json!("42.5");
        assert!(matches!(
            interpret_response(200, &body.to_string()),
            Err(AnalysisError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_forecast_entry_display() {
        let entry = ForecastEntry { date: "2024-01-01".to_string(), value: 42.5 };
        assert_eq!(entry.to_string(), "2024-01-01: 42.5");

        let whole = ForecastEntry { date: "2024-01-02".to_string(), value: 40.0 };
        assert_eq!(whole.to_string(), "2024-01-02: 40");
    }

    #[test]
    fn test_plots_in_display_order() {
        let result = interpret_response(200, &sample_body().to_string()).unwrap();
        let plots: Vec<_> = result.plots().map(|(kind, path)| (kind.title(), path)).collect();
        assert_eq!(
            plots,
            vec![
                ("Seasonal Decomposition", "out/a.png"),
                ("Forecast Plot", "out/b.png"),
                ("Residuals Over Time", "out/c.png"),
                ("Residual Distribution", "out/d.png"),
            ]
        );
    }
}
