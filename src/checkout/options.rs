use log::trace;
use serde::{Deserialize, Serialize};

/// Parameters handed to the hosted checkout client when redirecting a buyer.
///
/// Nothing here is validated; URL shape, price ids and quantities are checked
/// by the checkout service itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectToCheckoutClientOptions {
    pub success_url: String,
    pub cancel_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
}

pub type RedirectToCheckoutOptions = RedirectToCheckoutClientOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Any JSON number; zero, negative or fractional values pass through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl LineItem {
    pub fn new(price: impl Into<String>, quantity: f64) -> Self {
        Self {
            price: Some(price.into()),
            quantity: Some(quantity),
        }
    }
}

impl RedirectToCheckoutClientOptions {
    pub fn new(success_url: impl Into<String>, cancel_url: impl Into<String>) -> Self {
        Self {
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
            line_items: None,
        }
    }

    pub fn with_line_item(mut self, item: LineItem) -> Self {
        trace!("adding line item {:?}", item);
        self.line_items.get_or_insert_with(Vec::new).push(item);
        self
    }

    /// Sets `lineItems` even when `items` is empty, so an explicit empty list survives serialization.
    pub fn with_line_items(mut self, items: impl IntoIterator<Item = LineItem>) -> Self {
        self.line_items.get_or_insert_with(Vec::new).extend(items);
        self
    }

    pub fn line_items(&self) -> &[LineItem] {
        self.line_items.as_deref().unwrap_or(&[])
    }
}
