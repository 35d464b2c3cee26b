use std::time::Duration;

use reqwest::StatusCode;

use wiremock::matchers::*;
use wiremock::{Mock, ResponseTemplate};

use moments::controller::contact::SUCCESS_TOAST;
use moments::submission::{RawContactForm, NETWORK_ERROR};

use crate::helpers::{input_date, studio_clock, valid_booking, TestApp, INTAKE_PATH};

#[tokio::test]
async fn contact_page_renders_the_form() {
    let app = TestApp::spawn().await;

    let res = app.page("contact").await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let body = res.text().await.unwrap();
    assert!(body.contains(r#"name="website""#));
    assert!(body.contains(r#"<option value="19:30">7:30 PM</option>"#));
    assert!(body.contains("General Inquiry"));
    assert!(!body.contains("Message received"));
}

#[tokio::test]
async fn valid_booking_is_forwarded_once_and_confirmed() {
    let app = TestApp::spawn().await;

    Mock::given(path(INTAKE_PATH))
        .and(method("POST"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&app.intake_server)
        .await;

    let booking = valid_booking();
    let res = app
        .contact_submit(&booking)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let body = res.text().await.unwrap();
    assert!(body.contains(SUCCESS_TOAST));
    assert!(body.contains("Thank you!"));
    // Cleared after success
    assert!(!body.contains("Jane Doe"));

    let requests = app.intake_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    let date = chrono::NaiveDate::parse_from_str(&booking.date, "%Y-%m-%d").unwrap();
    let date_us = date.format("%m-%d-%Y").to_string();
    assert_eq!(
        format!("New Wedding inquiry from Jane Doe — {} 7:30 PM", date_us),
        sent["_subject"]
    );
    assert_eq!("(513) 555-0123", sent["phone"]);
    assert_eq!("Wedding", sent["inquiryType"]);
    assert_eq!(date_us, sent["preferredDate"]);
    assert_eq!("7:30 PM", sent["preferredTime"]);
    assert_eq!("Hi!", sent["message"]);
}

#[tokio::test]
async fn invalid_bookings_are_rejected_without_a_request() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.intake_server)
        .await;

    let yesterday = studio_clock().now().date().pred_opt().unwrap();

    let test_cases: Vec<(RawContactForm, &str)> = vec![
        (
            RawContactForm {
                name: "   ".into(),
                ..valid_booking()
            },
            "Please enter your name.",
        ),
        (
            RawContactForm {
                email: "".into(),
                ..valid_booking()
            },
            "Please enter a valid email.",
        ),
        (
            RawContactForm {
                phone: "123".into(),
                ..valid_booking()
            },
            "Please enter a valid phone number.",
        ),
        (
            RawContactForm {
                time: "".into(),
                ..valid_booking()
            },
            "Please choose a date and time.",
        ),
        (
            RawContactForm {
                date: "2025-02-30".into(),
                ..valid_booking()
            },
            "Please choose a valid date &amp; time.",
        ),
        (
            RawContactForm {
                date: input_date(yesterday),
                ..valid_booking()
            },
            "Please choose a future date &amp; time.",
        ),
        (
            RawContactForm {
                consent: "".into(),
                ..valid_booking()
            },
            "Please agree to be contacted by email or SMS.",
        ),
    ];

    for (form, message) in test_cases {
        let res = app
            .contact_submit(&form)
            .await
            .expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "Form was not rejected for {}",
            message
        );
        let body = res.text().await.unwrap();
        assert!(body.contains(message), "Missing message {}", message);
        assert!(!body.contains("Message received"));
    }
}

#[tokio::test]
async fn rejected_booking_keeps_the_visitors_input() {
    let app = TestApp::spawn().await;

    let form = RawContactForm {
        phone: "555-1234".into(),
        ..valid_booking()
    };
    let res = app
        .contact_submit(&form)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());
    let body = res.text().await.unwrap();
    assert!(body.contains(r#"value="Jane Doe""#));
    assert!(body.contains(r#"value="jane@example.com""#));
    assert!(body.contains(r#"<option value="19:30" selected>"#));
    assert!(body.contains(r#"<option value="Wedding" selected>"#));
}

#[tokio::test]
async fn rejected_booking_echoes_the_phone_formatted() {
    let app = TestApp::spawn().await;

    let form = RawContactForm {
        phone: "5135550123".into(),
        consent: "".into(),
        ..valid_booking()
    };
    let res = app
        .contact_submit(&form)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());
    let body = res.text().await.unwrap();
    assert!(body.contains(r#"value="(513) 555-0123""#));
}

#[tokio::test]
async fn honeypot_discards_silently() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.intake_server)
        .await;

    let form = RawContactForm {
        website: "http://spam.example".into(),
        ..valid_booking()
    };
    let res = app
        .contact_submit(&form)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let body = res.text().await.unwrap();
    assert!(!body.contains("Message received"));
    assert!(!body.contains(r#"role="alert""#));
    assert!(!body.contains("Jane Doe"));
}

#[tokio::test]
async fn intake_rejection_shows_its_message() {
    let app = TestApp::spawn().await;

    Mock::given(path(INTAKE_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "errors": [{ "message": "Invalid email" }]
        })))
        .expect(1)
        .mount(&app.intake_server)
        .await;

    let res = app
        .contact_submit(&valid_booking())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_GATEWAY, res.status());
    let body = res.text().await.unwrap();
    assert!(body.contains("Invalid email"));
    assert!(body.contains(r#"value="Jane Doe""#));
    assert!(!body.contains("Message received"));
}

#[tokio::test]
async fn intake_rejection_without_body_uses_the_generic_message() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.intake_server)
        .await;

    let res = app
        .contact_submit(&valid_booking())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_GATEWAY, res.status());
    let body = res.text().await.unwrap();
    assert!(body.contains("Something went wrong sending your message."));
}

#[tokio::test]
async fn slow_intake_is_a_network_error() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .expect(1)
        .mount(&app.intake_server)
        .await;

    let res = app
        .contact_submit(&valid_booking())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::SERVICE_UNAVAILABLE, res.status());
    let body = res.text().await.unwrap();
    assert!(body.contains(NETWORK_ERROR));
}

#[tokio::test]
async fn unknown_inquiry_type_is_sent_as_general() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.intake_server)
        .await;

    let form = RawContactForm {
        inquiry_type: "Boudoir".into(),
        ..valid_booking()
    };
    let res = app
        .contact_submit(&form)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let requests = app.intake_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!("General Inquiry", sent["inquiryType"]);
}
