use std::env;
use std::net::TcpListener;

use anyhow::Context;

use moments::app;
use moments::client::{CdnClient, FormIntakeClient};
use moments::media::ImageCache;
use moments::settings::Settings;
use moments::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| telemetry::DEFAULT_FILTER.into());
    telemetry::set_subscriber(telemetry::create_subscriber(env_filter, std::io::stdout))?;

    let settings = Settings::load().context("Failed to load settings")?;

    let intake_client =
        FormIntakeClient::new(settings.intake.endpoint(), settings.intake.timeout())?;
    let cdn_client = CdnClient::new(settings.media.timeout())?;
    let cdn = settings.media.cdn()?;
    let image_cache = ImageCache::new(settings.media.image_cache_capacity());

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    app::run(
        listener,
        intake_client,
        cdn_client,
        cdn,
        image_cache,
        settings.app.clock(),
    )?
        .await
        .context("Failed to run app")
}
