use actix_web::http::StatusCode;
use actix_web::ResponseError;

use thiserror::Error;

pub type PageResult<T> = Result<T, PageError>;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Internal Server Error")]
    Render(#[from] askama::Error),

    #[error("No such image")]
    UnknownImage,

    #[error("Unsupported image width {0}")]
    UnsupportedWidth(u32),

    #[error("Failed to fetch image")]
    Upstream(#[from] reqwest::Error),
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnknownImage => StatusCode::NOT_FOUND,
            Self::UnsupportedWidth(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
