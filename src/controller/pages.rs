use actix_web::dev::HttpServiceFactory;
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse};

use askama::Template;

use serde::Deserialize;

use crate::content::{
    Approach, Faq, Service, ABOUT_IMAGE, APPROACH, FAQS, FEATURED, FEATURED_SUBTITLE, HERO_IMAGE,
    PORTFOLIO_SUBTITLE, SERVICES,
};
use crate::controller::{render, Layout, PageResult, Picture};
use crate::media::{
    is_eager, Cdn, Gallery, HeadAssets, ImagePreload, CARD_WIDTHS, HERO_WIDTHS, INITIAL_VISIBLE,
    MASONRY_WIDTHS, PORTRAIT_WIDTHS, TILE_WIDTH,
};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    layout: Layout<'a>,
    hero: Picture,
    featured: Vec<Picture>,
    featured_subtitle: &'static str,
}

#[tracing::instrument(name = "Render home page", skip(head, cdn))]
#[get("/")]
async fn home(head: web::Data<HeadAssets>, cdn: web::Data<Cdn>) -> PageResult<HttpResponse> {
    let hero = cdn.image(HERO_IMAGE);
    let featured = FEATURED
        .iter()
        .map(|item| {
            let image = cdn.image(item.path);
            Picture {
                alt: item.title,
                src: image.width(800),
                src_set: image.src_set(&CARD_WIDTHS),
            }
        })
        .collect();

    render(
        StatusCode::OK,
        &HomeTemplate {
            layout: Layout::new(&head, &cdn, "/", "Home"),
            hero: Picture {
                alt: "Warm, candid portrait from Moments by Sunny",
                src: hero.width(1600),
                src_set: hero.src_set(&HERO_WIDTHS),
            },
            featured,
            featured_subtitle: FEATURED_SUBTITLE,
        },
    )
}

/// One masonry tile of the portfolio
struct Tile {
    label: &'static str,
    caption: String,
    src: String,
    src_set: String,
    placeholder: String,
    eager: bool,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
struct PortfolioTemplate<'a> {
    layout: Layout<'a>,
    subtitle: &'static str,
    preloads: Vec<ImagePreload>,
    tiles: Vec<Tile>,
    /// Count to request for the next reveal, if anything is still hidden
    more: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioQuery {
    show: Option<usize>,
}

#[tracing::instrument(name = "Render portfolio page", skip(head, cdn))]
#[get("/portfolio")]
async fn portfolio(
    head: web::Data<HeadAssets>,
    cdn: web::Data<Cdn>,
    query: web::Query<PortfolioQuery>,
) -> PageResult<HttpResponse> {
    let gallery = Gallery::portfolio();
    let visible = query.show.unwrap_or(INITIAL_VISIBLE);

    let tiles = gallery
        .reveal(visible)
        .iter()
        .enumerate()
        .map(|(index, image)| Tile {
            label: image.label,
            caption: format!("{} · {}", image.category, image.location),
            src: image.route(TILE_WIDTH),
            src_set: image.route_src_set(&MASONRY_WIDTHS),
            placeholder: cdn.image(image.path).placeholder(),
            eager: is_eager(index),
        })
        .collect();

    let more = gallery
        .has_more(visible)
        .then(|| gallery.next_count(visible));

    render(
        StatusCode::OK,
        &PortfolioTemplate {
            layout: Layout::new(&head, &cdn, "/portfolio", "Portfolio"),
            subtitle: PORTFOLIO_SUBTITLE,
            preloads: ImagePreload::for_gallery(gallery),
            tiles,
            more,
        },
    )
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate<'a> {
    layout: Layout<'a>,
    portrait: Picture,
    approach: &'static [Approach],
    faqs: &'static [Faq],
}

#[tracing::instrument(name = "Render about page", skip(head, cdn))]
#[get("/about")]
async fn about(head: web::Data<HeadAssets>, cdn: web::Data<Cdn>) -> PageResult<HttpResponse> {
    let portrait = cdn.image(ABOUT_IMAGE);

    render(
        StatusCode::OK,
        &AboutTemplate {
            layout: Layout::new(&head, &cdn, "/about", "About"),
            portrait: Picture {
                alt: "Sunny, the photographer behind Moments by Sunny",
                src: portrait.width(800),
                src_set: portrait.src_set(&PORTRAIT_WIDTHS),
            },
            approach: &APPROACH,
            faqs: &FAQS,
        },
    )
}

#[derive(Template)]
#[template(path = "services.html")]
struct ServicesTemplate<'a> {
    layout: Layout<'a>,
    services: &'static [Service],
}

#[tracing::instrument(name = "Render services page", skip(head, cdn))]
#[get("/services")]
async fn services_page(
    head: web::Data<HeadAssets>,
    cdn: web::Data<Cdn>,
) -> PageResult<HttpResponse> {
    render(
        StatusCode::OK,
        &ServicesTemplate {
            layout: Layout::new(&head, &cdn, "/services", "Services"),
            services: &SERVICES,
        },
    )
}

/// Marketing pages mounted at the site root
pub fn services() -> impl HttpServiceFactory {
    (home, portfolio, about, services_page)
}
