use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::http::header::LOCATION;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::client::{CdnClient, FormIntakeClient};
use crate::controller::{contact, images, pages};
use crate::domain::StudioClock;
use crate::media::{Cdn, HeadAssets, ImageCache};

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Unknown pages go back to the home page
async fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/"))
        .finish()
}

/// Run the application on a specified TCP listener
pub fn run(
    listener: TcpListener,
    intake_client: FormIntakeClient,
    cdn_client: CdnClient,
    cdn: Cdn,
    image_cache: ImageCache,
    clock: StudioClock,
) -> anyhow::Result<Server> {
    // Head tags are built once here and only read afterwards
    let head = web::Data::new(HeadAssets::build(&cdn));

    // Wrap application data
    let intake_client = web::Data::new(intake_client);
    let cdn_client = web::Data::new(cdn_client);
    let cdn = web::Data::new(cdn);
    let image_cache = web::Data::new(image_cache);
    let clock = web::Data::new(clock);

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(head.clone())
            .app_data(intake_client.clone())
            .app_data(cdn_client.clone())
            .app_data(cdn.clone())
            .app_data(image_cache.clone())
            .app_data(clock.clone())
            .service(health_check)
            .service(pages::services())
            .service(contact::scope())
            .service(images::scope())
            .default_service(web::route().to(redirect_home))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
