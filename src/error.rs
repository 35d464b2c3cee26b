pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    // Booking form errors, the message is shown to the visitor as-is
    #[error("{0}")]
    Validation(&'static str),
}
