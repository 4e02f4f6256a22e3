use async_trait::async_trait;
use gloo_net::http::Request;
use localboost_common::{interpret_response, AnalysisError, AnalysisResult, AnalysisService, ServiceOrigin};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData};

use crate::settings;

/// Multipart field name the analysis service reads the upload from
pub const UPLOAD_FIELD: &str = "file";

/// Analysis service reached over `fetch`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpAnalysisService {
    origin: ServiceOrigin,
}

impl HttpAnalysisService {
    pub fn new(origin: ServiceOrigin) -> Self {
        Self { origin }
    }

    /// Service at the origin from the global settings
    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().service_origin)
    }
}

#[async_trait(?Send)]
impl AnalysisService for HttpAnalysisService {
    type Upload = File;

    async fn analyze(&self, file: &File) -> Result<AnalysisResult, AnalysisError> {
        let url = self.origin.analyze_url();
        log::debug!("POST request to: {} ({}, {} bytes)", url, file.name(), file.size());

        let form_data = FormData::new().map_err(|e| transport_error("Failed to create form data", e))?;
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| transport_error("Failed to attach file", e))?;

        let response = Request::post(&url)
            .body(form_data)
            .map_err(|e| {
                log::error!("POST {} - Failed to build request: {}", url, e);
                AnalysisError::Transport(e.to_string())
            })?
            .send()
            .await
            .map_err(|e| {
                let description = describe_gloo_error(e);
                log::error!("POST {} - Request failed: {}", url, description);
                AnalysisError::Transport(description)
            })?;

        let status = response.status();
        if !response.ok() {
            log::warn!("POST {} - Non-OK response: {}", url, status);
        }

        // An unreadable body still came from the service, so let the status decide
        let body = response.text().await.unwrap_or_else(|e| {
            log::warn!("POST {} - Failed to read response body: {}", url, e);
            String::new()
        });

        log::trace!("POST {} - Response received, interpreting {} bytes", url, body.len());
        let outcome = interpret_response(status, &body);
        if outcome.is_ok() {
            log::info!("POST {} - Success", url);
        }
        outcome
    }
}

/// Message of a failed `fetch`, without the JS error name prefix.
fn describe_gloo_error(error: gloo_net::Error) -> String {
    match error {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    }
}

fn transport_error(context: &str, value: JsValue) -> AnalysisError {
    let detail = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    log::error!("{}: {}", context, detail);
    AnalysisError::Transport(format!("{}: {}", context, detail))
}
