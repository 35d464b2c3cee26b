use std::time::Duration;

use anyhow::Context;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

use secrecy::Secret;

use serde::{Deserialize, Serialize};

use thiserror::Error;

use url::Url;

/// Client for the hosted form-intake service that relays bookings by email
#[derive(Debug)]
pub struct FormIntakeClient {
    client: Client,
    // The form id in the URL is all it takes to post to the form
    endpoint: Secret<String>,
}

impl FormIntakeClient {
    pub fn new(endpoint: Secret<String>, api_timeout: Duration) -> anyhow::Result<Self> {
        use secrecy::ExposeSecret;

        Url::parse(endpoint.expose_secret()).context("Failed to parse intake endpoint URL")?;

        let client = Client::builder()
            .timeout(api_timeout)
            .build()
            .context("Failed to build http client")?;

        Ok(Self { client, endpoint })
    }

    /// Post one submission, a non-2xx answer is a rejection
    #[tracing::instrument(
        name = "Forward a booking to the intake endpoint",
        skip(self, payload),
        fields(inquiry_type = %payload.inquiry_type)
    )]
    pub async fn send(&self, payload: &IntakePayload) -> Result<(), IntakeError> {
        use secrecy::ExposeSecret;

        let res = self
            .client
            .post(self.endpoint.expose_secret())
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(IntakeError::Transport)?;

        let status = res.status();
        // The body is optional, even on errors
        let body = res.json::<IntakeResponse>().await.ok();

        if status.is_success() {
            return Ok(());
        }

        let message = body
            .and_then(|body| body.errors.into_iter().next())
            .and_then(|error| error.message);

        Err(IntakeError::Rejected { status, message })
    }
}

/// JSON body accepted by the intake service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakePayload {
    #[serde(rename = "_subject")]
    pub subject: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
struct IntakeResponse {
    #[serde(default)]
    errors: Vec<IntakeFieldError>,
}

#[derive(Debug, Deserialize)]
struct IntakeFieldError {
    message: Option<String>,
}

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Failed to reach the intake endpoint: {0}")]
    Transport(reqwest::Error),

    #[error("Intake endpoint rejected the submission with {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
}
