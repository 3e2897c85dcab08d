pub mod locale;
pub mod options;

pub use locale::CheckoutLocale;
pub use options::{LineItem, RedirectToCheckoutClientOptions, RedirectToCheckoutOptions};
