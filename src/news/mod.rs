mod api;
mod model;

pub use model::NewsItem;

pub(crate) use api::fetch_entire_news;

use crate::core::{IfxClient, IfxError};

/// Separator joining the primary and secondary segments of a composite news
/// id.
pub const COMPOSITE_ID_SEPARATOR: &str = "#;";

/// Which way the service walks the news stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchDirection {
    /// Search forward.
    #[default]
    Forward,
    /// Search backward.
    Backward,
}

impl SearchDirection {
    pub(crate) const fn as_wire(self) -> &'static str {
        match self {
            SearchDirection::Forward => "0",
            SearchDirection::Backward => "1",
        }
    }
}

/// A builder for listing the most recent composite news ids of a product.
pub struct RealtimeNewsBuilder {
    client: IfxClient,
    product_id: String,
    direction: SearchDirection,
    limit: u32,
}

impl RealtimeNewsBuilder {
    /// Creates a new `RealtimeNewsBuilder` for a given product id.
    pub fn new(client: &IfxClient, product_id: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            product_id: product_id.into(),
            direction: SearchDirection::default(),
            limit: 10,
        }
    }

    /// Sets the search direction.
    #[must_use]
    pub const fn direction(mut self, direction: SearchDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Caps the number of news ids the service is asked for.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Executes the request and returns composite news ids in document
    /// order, each one suitable for
    /// [`IfxClient::entire_news`](crate::IfxClient::entire_news).
    ///
    /// # Errors
    ///
    /// Returns an `IfxError` if the request fails, the service answers with
    /// a non-success status, or the response body is not well-formed XML.
    pub async fn fetch(self) -> Result<Vec<String>, IfxError> {
        api::fetch_realtime_ids(&self.client, self.direction, &self.product_id, self.limit).await
    }
}
