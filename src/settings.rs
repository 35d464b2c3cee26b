use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;

use chrono_tz::Tz;

use config::{Config, Environment, File};

use secrecy::Secret;

use serde::Deserialize;
use serde_aux::prelude::*;

use url::Url;

use crate::domain::StudioClock;
use crate::media::Cdn;

/// Runtime environment, either `Dev` for local development, or `Prod` for release
#[derive(Debug)]
pub enum Runtime {
    Dev,
    Prod,
}

impl Runtime {
    pub fn as_str(&self) -> &str {
        match self {
            Runtime::Dev => "dev",
            Runtime::Prod => "prod",
        }
    }
}

impl TryFrom<String> for Runtime {
    type Error = anyhow::Error;

    fn try_from(s: String) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("{} is not a valid runtime environment", other),
        }
    }
}

/// Application settings wrapper
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub intake: IntakeSettings,
    pub media: MediaSettings,
}

impl Settings {
    /// Load application settings from the settings directory
    pub fn load() -> anyhow::Result<Self> {
        // Get the path to the settings directory
        let path = env::current_dir()?.join("settings");
        // Get the current environment based on the `APP_ENV` environment variable, default to `Dev`
        let runtime: Runtime = env::var("APP_ENV")
            .unwrap_or_else(|_| "dev".into())
            .try_into()?;

        Self::load_from(runtime, &path)
    }
    /// Load application settings from a specified path and runtime
    pub fn load_from(runtime: Runtime, base_path: &Path) -> anyhow::Result<Self> {
        Config::builder()
            // Include the base settings
            .add_source(File::from(base_path.join("base")).required(true))
            // Include the runtime settings
            .add_source(File::from(base_path.join(runtime.as_str())).required(true))
            // Override/include any settings from environment variables
            // NOTE: Takes the form `APP_<settings category>__<setting name>`, e.g. `APP_INTAKE__ENDPOINT`.
            .add_source(
                Environment::with_prefix("app")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .context("Failed to load/deserialize settings")
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,
    studio_timezone: Tz,
}

impl ApplicationSettings {
    /// The application address to bind to
    pub fn addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
    /// Clock for the zone booking times are entered in
    pub fn clock(&self) -> StudioClock {
        StudioClock::new(self.studio_timezone)
    }
}

#[derive(Debug, Deserialize)]
pub struct IntakeSettings {
    endpoint: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    timeout_milliseconds: u64,
}

impl IntakeSettings {
    /// The form-intake URL bookings are posted to
    pub fn endpoint(&self) -> Secret<String> {
        self.endpoint.clone()
    }
    /// How long to wait on the intake service
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Debug, Deserialize)]
pub struct MediaSettings {
    cdn_base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    timeout_milliseconds: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    image_cache_capacity: usize,
}

impl MediaSettings {
    /// The CDN upload root that image paths are relative to
    pub fn cdn(&self) -> anyhow::Result<Cdn> {
        let base_url = Url::parse(&self.cdn_base_url).context("Failed to parse CDN base URL")?;
        Ok(Cdn::new(base_url))
    }
    /// How long to wait on the CDN when fetching an image
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
    /// How many image renditions to keep in memory
    pub fn image_cache_capacity(&self) -> usize {
        self.image_cache_capacity
    }
}
