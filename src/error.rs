use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("unsupported checkout locale: {0:?}")]
    UnknownLocale(String),
    #[error("{0} not set in environment or .env")]
    MissingVar(&'static str),
}
