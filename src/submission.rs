use chrono::NaiveDateTime;

use serde::{Deserialize, Serialize};

use crate::client::{FormIntakeClient, IntakeError, IntakePayload};
use crate::domain::{EmailAddress, InquiryType, PersonName, PhoneNumber, PreferredDateTime};
use crate::error::{Error, Result};

pub const MISSING_CONSENT: &str = "Please agree to be contacted by email or SMS.";
pub const NETWORK_ERROR: &str = "Network error—please try again in a moment.";
pub const SERVER_ERROR: &str = "Something went wrong sending your message.";

/// The booking form exactly as posted, absent fields are empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawContactForm {
    /// Hidden honeypot, people never fill it in
    pub website: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub inquiry_type: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    pub message: String,
    /// `on` when the box is ticked, missing otherwise
    pub consent: String,
}

impl RawContactForm {
    pub fn is_spam(&self) -> bool {
        !self.website.is_empty()
    }

    pub fn consented(&self) -> bool {
        self.consent == "on"
    }
}

/// A booking inquiry that passed every check
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub inquiry_type: InquiryType,
    pub preferred: PreferredDateTime,
    pub message: String,
}

impl BookingRequest {
    /// Validate a posted form, the first failing check wins
    pub fn parse(form: &RawContactForm, now: NaiveDateTime) -> Result<Self> {
        let name = form.name.parse()?;
        let email = form.email.parse()?;
        let phone = form.phone.parse()?;
        let preferred = PreferredDateTime::parse(&form.date, &form.time, now)?;
        if !form.consented() {
            return Err(Error::Validation(MISSING_CONSENT));
        }

        Ok(Self {
            name,
            email,
            phone,
            inquiry_type: InquiryType::from_form(&form.inquiry_type),
            preferred,
            message: form.message.trim().to_string(),
        })
    }

    /// Subject line of the email the studio receives
    pub fn subject(&self) -> String {
        let when = self.preferred.to_us();
        format!(
            "New {} inquiry from {} — {} {}",
            self.inquiry_type, self.name, when.date_us, when.time_12
        )
    }

    pub fn to_payload(&self) -> IntakePayload {
        let when = self.preferred.to_us();

        IntakePayload {
            subject: self.subject(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            phone: self.phone.raw().to_string(),
            inquiry_type: self.inquiry_type.to_string(),
            preferred_date: when.date_us,
            preferred_time: when.time_12,
            message: self.message.clone(),
        }
    }
}

/// What happened to one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    /// Honeypot was filled in, nothing was sent
    Discarded,
    ValidationError(String),
    NetworkError,
    ServerError(String),
}

impl SubmissionOutcome {
    /// Text shown next to the form, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success | Self::Discarded => None,
            Self::ValidationError(reason) => Some(reason.as_str()),
            Self::NetworkError => Some(NETWORK_ERROR),
            Self::ServerError(message) => Some(message.as_str()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<Error> for SubmissionOutcome {
    fn from(e: Error) -> Self {
        match e {
            Error::Validation(reason) => Self::ValidationError(reason.into()),
        }
    }
}

impl From<IntakeError> for SubmissionOutcome {
    fn from(e: IntakeError) -> Self {
        match e {
            IntakeError::Transport(_) => Self::NetworkError,
            IntakeError::Rejected { message, .. } => {
                Self::ServerError(message.unwrap_or_else(|| SERVER_ERROR.into()))
            }
        }
    }
}

/// Validate one booking and forward it to the intake service
///
/// At most one request is made, failures are not retried.
#[tracing::instrument(
    name = "Submit a booking inquiry",
    skip(intake, form),
    fields(inquiry_type = %form.inquiry_type)
)]
pub async fn submit(
    intake: &FormIntakeClient,
    form: &RawContactForm,
    now: NaiveDateTime,
) -> SubmissionOutcome {
    if form.is_spam() {
        tracing::info!("Discarding a booking with the honeypot filled in");
        return SubmissionOutcome::Discarded;
    }

    let booking = match BookingRequest::parse(form, now) {
        Ok(booking) => booking,
        Err(e) => {
            tracing::debug!("Booking failed validation: {}", e);
            return e.into();
        }
    };

    match intake.send(&booking.to_payload()).await {
        Ok(()) => SubmissionOutcome::Success,
        Err(e) => {
            match &e {
                IntakeError::Transport(_) => tracing::error!("{}", e),
                IntakeError::Rejected { .. } => tracing::warn!("{}", e),
            }
            e.into()
        }
    }
}
