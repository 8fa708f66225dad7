//! Forwards a normalized submission to the collection endpoint. One request
//! per successful validation pass; the caller disables the submit control
//! while a request is in flight.

use chrono::{SecondsFormat, Utc};
use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::lead::validate::LeadSubmission;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("submission rejected: {0}")]
    Server(String),
}

/// Wire shape: the validated record plus when and where it was captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadEnvelope {
    #[serde(flatten)]
    pub lead: LeadSubmission,
    pub submission_date: String,
    pub current_url: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl LeadEnvelope {
    pub fn new(lead: LeadSubmission) -> Self {
        let current_url = web_sys::window()
            .and_then(|window| window.location().href().ok())
            .unwrap_or_default();
        Self {
            lead,
            submission_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            current_url,
        }
    }
}

pub async fn submit_lead(lead: LeadSubmission) -> Result<(), SubmitError> {
    let envelope = LeadEnvelope::new(lead);
    if let Ok(payload) = serde_json::to_string(&envelope) {
        log!("Submitting lead:", payload);
    }

    let request = Request::post(&format!("{}/api/leads", config::get_backend_url()))
        .json(&envelope)
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    match request.send().await {
        Ok(response) if response.ok() => Ok(()),
        Ok(response) => {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => format!("server returned status {}", response.status()),
            };
            Err(SubmitError::Server(message))
        }
        Err(e) => Err(SubmitError::Network(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serializes_camel_case() {
        let envelope = LeadEnvelope {
            lead: LeadSubmission {
                first_name: "Fahad".to_string(),
                email: "fahad@example.com".to_string(),
                country_code: "+966".to_string(),
                phone_number: "501234567".to_string(),
                city: "Riyadh".to_string(),
                job_title: "Kitchen Manager".to_string(),
                business_name: "Al Noor Catering".to_string(),
                timeline: "Within 1 month".to_string(),
                selected_guide: "ovens".to_string(),
            },
            submission_date: "2026-06-01T12:00:00.000Z".to_string(),
            current_url: "https://stovia.example/".to_string(),
        };

        let value = serde_json::to_value(&envelope).expect("envelope serializes");
        let object = value.as_object().expect("json object");
        for key in [
            "firstName",
            "email",
            "countryCode",
            "phoneNumber",
            "city",
            "jobTitle",
            "businessName",
            "timeline",
            "selectedGuide",
            "submissionDate",
            "currentUrl",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object["selectedGuide"], "ovens");
    }
}
