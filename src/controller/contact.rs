use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, Scope};

use askama::Template;

use chrono::NaiveDateTime;

use crate::client::FormIntakeClient;
use crate::content::{BOOKING_BACKGROUND, SERVICE_AREA_BADGES};
use crate::controller::{render, Layout, PageResult};
use crate::domain::{date_input_min, format_phone, time_slots, InquiryType, StudioClock, TimeSlot};
use crate::media::{Cdn, HeadAssets};
use crate::submission::{self, RawContactForm, SubmissionOutcome};

/// How long the success toast stays on screen
pub const SUCCESS_TOAST_DURATION: Duration = Duration::from_secs(4);

pub const SUCCESS_TOAST: &str = "Message received — I’ll reply within 24–48h.";
pub const THANK_YOU_NOTE: &str = "Thank you! I’ll be in touch within 24–48 hours.";

/// Example shown in the empty phone field
const PHONE_EXAMPLE: &str = "5135550123";

/// One `<option>` of a select
struct SelectOption {
    value: String,
    label: String,
    selected: bool,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate<'a> {
    layout: Layout<'a>,
    background: String,
    badges: &'static [&'static str],
    form: RawContactForm,
    phone: String,
    phone_placeholder: String,
    inquiry_options: Vec<SelectOption>,
    time_options: Vec<SelectOption>,
    date_min: String,
    error: Option<String>,
    success: bool,
    toast: &'static str,
    toast_millis: u128,
    thank_you: &'static str,
}

impl<'a> ContactTemplate<'a> {
    fn new(layout: Layout<'a>, cdn: &Cdn, form: RawContactForm, now: &NaiveDateTime) -> Self {
        let selected_type = InquiryType::from_form(&form.inquiry_type);
        let inquiry_options = InquiryType::ALL
            .iter()
            .map(|inquiry_type| SelectOption {
                value: inquiry_type.as_str().to_string(),
                label: inquiry_type.as_str().to_string(),
                selected: *inquiry_type == selected_type,
            })
            .collect();
        let time_options = time_slots()
            .into_iter()
            .map(|TimeSlot { value, label }| SelectOption {
                selected: value == form.time.trim(),
                value,
                label,
            })
            .collect();

        Self {
            layout,
            background: cdn.image(BOOKING_BACKGROUND).width(1600),
            badges: &SERVICE_AREA_BADGES,
            phone: format_phone(&form.phone),
            form,
            phone_placeholder: format_phone(PHONE_EXAMPLE),
            inquiry_options,
            time_options,
            date_min: date_input_min(now),
            error: None,
            success: false,
            toast: SUCCESS_TOAST,
            toast_millis: SUCCESS_TOAST_DURATION.as_millis(),
            thank_you: THANK_YOU_NOTE,
        }
    }
}

fn status_for(outcome: &SubmissionOutcome) -> StatusCode {
    match outcome {
        SubmissionOutcome::Success | SubmissionOutcome::Discarded => StatusCode::OK,
        SubmissionOutcome::ValidationError(_) => StatusCode::BAD_REQUEST,
        SubmissionOutcome::ServerError(_) => StatusCode::BAD_GATEWAY,
        SubmissionOutcome::NetworkError => StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[tracing::instrument(name = "Render contact page", skip(head, cdn, clock))]
#[get("")]
async fn contact_page(
    head: web::Data<HeadAssets>,
    cdn: web::Data<Cdn>,
    clock: web::Data<StudioClock>,
) -> PageResult<HttpResponse> {
    let now = clock.now();
    let layout = Layout::new(&head, &cdn, "/contact", "Contact");

    render(
        StatusCode::OK,
        &ContactTemplate::new(layout, &cdn, RawContactForm::default(), &now),
    )
}

#[tracing::instrument(
    name = "Handle a booking inquiry",
    skip(head, cdn, intake, clock, form),
    fields(email = %form.email)
)]
#[post("")]
async fn submit(
    head: web::Data<HeadAssets>,
    cdn: web::Data<Cdn>,
    intake: web::Data<FormIntakeClient>,
    clock: web::Data<StudioClock>,
    form: web::Form<RawContactForm>,
) -> PageResult<HttpResponse> {
    let form = form.into_inner();
    let now = clock.now();

    let outcome = submission::submit(&intake, &form, now).await;

    // The form keeps its values only when the visitor has something to fix
    let kept = match outcome {
        SubmissionOutcome::Success | SubmissionOutcome::Discarded => RawContactForm::default(),
        _ => form,
    };

    let layout = Layout::new(&head, &cdn, "/contact", "Contact");
    let mut template = ContactTemplate::new(layout, &cdn, kept, &now);
    template.error = outcome.message().map(String::from);
    template.success = outcome.is_success();

    render(status_for(&outcome), &template)
}

/// Booking form
pub fn scope() -> Scope {
    web::scope("/contact").service(contact_page).service(submit)
}
