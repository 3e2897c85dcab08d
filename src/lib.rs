pub mod checkout;
pub mod config;
pub mod error;
pub mod logger;

pub use checkout::{CheckoutLocale, LineItem, RedirectToCheckoutClientOptions, RedirectToCheckoutOptions};
pub use config::CheckoutDefaults;
pub use error::CheckoutError;
