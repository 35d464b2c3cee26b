use std::net::TcpListener;
use std::time::Duration;

use chrono::NaiveDate;

use reqwest::redirect::Policy;
use reqwest::{Client, Method, Response};

use secrecy::Secret;

use url::Url;

use wiremock::MockServer;

use moments::app;
use moments::client::{CdnClient, FormIntakeClient};
use moments::domain::{StudioClock, DATE_INPUT_FORMAT};
use moments::media::{Cdn, ImageCache};
use moments::submission::RawContactForm;

/// Path of the intake form on the mock intake server
pub const INTAKE_PATH: &str = "/f/test-form";
/// Upload root on the mock CDN
pub const UPLOAD_ROOT: &str = "/demo/image/upload/";

/// The app under test reads booking times on this clock
pub fn studio_clock() -> StudioClock {
    StudioClock::new(chrono_tz::America::New_York)
}

pub struct TestApp {
    addr: String,

    pub client: Client,
    pub intake_server: MockServer,
    pub cdn_server: MockServer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let intake_server = MockServer::start().await;
        let cdn_server = MockServer::start().await;

        let intake_client = {
            let endpoint = Secret::new(format!("{}{}", intake_server.uri(), INTAKE_PATH));
            FormIntakeClient::new(endpoint, Duration::from_secs(2))
                .expect("Failed to create intake client")
        };
        let cdn_client =
            CdnClient::new(Duration::from_secs(2)).expect("Failed to create CDN client");
        let cdn = {
            let base_url = Url::parse(&format!("{}{}", cdn_server.uri(), UPLOAD_ROOT))
                .expect("Failed to parse mock server uri");
            Cdn::new(base_url)
        };

        let server = app::run(
            listener,
            intake_client,
            cdn_client,
            cdn,
            ImageCache::new(8),
            studio_clock(),
        )
        .expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        // Redirects are asserted on, not followed
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("Failed to build test client");

        Self {
            addr,
            client,
            intake_server,
            cdn_server,
        }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn health_check(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "health_check").send().await
    }

    pub async fn page(&self, path: &str) -> reqwest::Result<Response> {
        self.request(Method::GET, path).send().await
    }

    pub async fn contact_submit(&self, form: &RawContactForm) -> reqwest::Result<Response> {
        self.request(Method::POST, "contact")
            .form(form)
            .send()
            .await
    }
}

/// `YYYY-MM-DD` for the day after today at the studio
pub fn tomorrow() -> String {
    let today = studio_clock().now().date();
    input_date(today.succ_opt().expect("Ran out of calendar"))
}

pub fn input_date(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// A booking that passes every check
pub fn valid_booking() -> RawContactForm {
    RawContactForm {
        website: String::new(),
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        phone: "(513) 555-0123".into(),
        inquiry_type: "Wedding".into(),
        date: tomorrow(),
        time: "19:30".into(),
        message: "Hi!".into(),
        consent: "on".into(),
    }
}
