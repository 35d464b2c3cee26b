use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{get, web, HttpResponse, Scope};

use serde::Deserialize;

use crate::client::CdnClient;
use crate::controller::{PageError, PageResult};
use crate::media::{AssetKey, CachedImage, Cdn, Gallery, ImageCache, MASONRY_WIDTHS, TILE_WIDTH};

/// Browsers may keep a served rendition for a day
const MAX_AGE_SECONDS: u32 = 86_400;

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    w: Option<u32>,
}

fn image_response(cached: CachedImage) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(cached.content_type)
        .insert_header(CacheControl(vec![
            CacheDirective::Public,
            CacheDirective::MaxAge(MAX_AGE_SECONDS),
        ]))
        .body(cached.bytes)
}

/// Serve a portfolio image rendition, going to the CDN only on a cache miss
#[tracing::instrument(name = "Serve a gallery image", skip(cdn, cdn_client, cache))]
#[get("/{id}")]
async fn image(
    id: web::Path<u32>,
    query: web::Query<ImageQuery>,
    cdn: web::Data<Cdn>,
    cdn_client: web::Data<CdnClient>,
    cache: web::Data<ImageCache>,
) -> PageResult<HttpResponse> {
    let width = query.w.unwrap_or(TILE_WIDTH);
    if !MASONRY_WIDTHS.contains(&width) {
        return Err(PageError::UnsupportedWidth(width));
    }

    let entry = Gallery::portfolio()
        .get(id.into_inner())
        .ok_or(PageError::UnknownImage)?;
    let key = AssetKey {
        id: entry.id,
        width,
    };

    if let Some(cached) = cache.get(&key) {
        tracing::debug!("Image cache hit");
        return Ok(image_response(cached));
    }

    let fetched = cdn_client.fetch(&cdn.image(entry.path).width(width)).await?;
    if let Some(evicted) = cache.insert(key, fetched.clone()) {
        tracing::debug!(
            evicted_id = evicted.id,
            evicted_width = evicted.width,
            "Evicted an image from the cache"
        );
    }

    Ok(image_response(fetched))
}

/// Gallery image delivery
pub fn scope() -> Scope {
    web::scope("/images").service(image)
}
