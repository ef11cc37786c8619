use chrono::NaiveDateTime;
use serde::Serialize;

/// A fully fetched news item.
///
/// Every field except `product_ids` is optional: the service omits elements
/// freely, and a degenerate response yields an item with nothing filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewsItem {
    /// Primary identifier: the segment of the composite id before the first
    /// `#;` separator.
    pub id: Option<String>,
    /// Headline text.
    pub headline: Option<String>,
    /// Publication time as service-local wall-clock time; the service does
    /// not supply a UTC offset.
    pub publication_time: Option<NaiveDateTime>,
    /// Full body text.
    pub body: Option<String>,
    /// Identifiers of the products this item is associated with, in the
    /// order returned by the service (duplicates preserved).
    pub product_ids: Vec<String>,
}
