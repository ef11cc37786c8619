//! Public client surface + builder.
//! Session open/close lives in `session`; `constants` holds the endpoint defaults.

pub(crate) mod constants;
mod session;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::RwLock;
use url::Url;

use crate::core::IfxError;
use crate::news::{NewsItem, RealtimeNewsBuilder};
use crate::products::Product;
use constants::DEFAULT_ENDPOINT;

/// Client for the IFX SOAP service.
///
/// All five operations POST to the single configured endpoint; only the
/// envelope body and the `action` parameter of the content-type header vary.
/// Cloning is cheap: clones share the HTTP connection pool and the session
/// cookie state, so a client models one logical session.
#[derive(Debug, Clone)]
pub struct IfxClient {
    http: Client,
    endpoint: Url,
    session: Arc<RwLock<Vec<String>>>,
}

impl Default for IfxClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl IfxClient {
    /// Create a new builder.
    pub fn builder() -> IfxClientBuilder {
        IfxClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether the cookies of an open session are currently held.
    pub async fn has_session(&self) -> bool {
        !self.session.read().await.is_empty()
    }

    /// Pre-rendered `Cookie` header value, if a session is held.
    pub(crate) async fn session_cookie_header(&self) -> Option<String> {
        let cookies = self.session.read().await;
        if cookies.is_empty() {
            None
        } else {
            Some(cookies.join("; "))
        }
    }

    pub(crate) async fn replace_session(&self, cookies: Vec<String>) {
        *self.session.write().await = cookies;
    }

    pub(crate) async fn clear_session(&self) {
        self.session.write().await.clear();
    }

    /// Lists the products available to the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns an `IfxError` if the request fails, the service answers with a
    /// non-success status, or the response body is not well-formed XML.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn products(&self) -> Result<Vec<Product>, IfxError> {
        crate::products::fetch_products(self).await
    }

    /// Starts a request for the most recent composite news ids of a product.
    pub fn realtime_news(&self, product_id: impl Into<String>) -> RealtimeNewsBuilder {
        RealtimeNewsBuilder::new(self, product_id)
    }

    /// Fetches a news item in full by its composite id.
    ///
    /// The id is sent to the service unsplit; the returned item's `id` field
    /// carries only the segment before the first `#;` separator.
    ///
    /// # Errors
    ///
    /// Returns an `IfxError` if the request fails, the service answers with a
    /// non-success status, or the response body is not well-formed XML.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn entire_news(&self, composite_id: &str) -> Result<NewsItem, IfxError> {
        crate::news::fetch_entire_news(self, composite_id).await
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IfxClientBuilder {
    endpoint: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl IfxClientBuilder {
    /// Override the service endpoint (e.g., `http://services.ifx.ru/IFXService.svc/`).
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an `IfxError` if the default endpoint fails to parse or the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<IfxClient, IfxError> {
        let endpoint = match self.endpoint {
            Some(url) => url,
            None => Url::parse(DEFAULT_ENDPOINT)?,
        };

        let mut httpb = reqwest::Client::builder();

        if let Some(ua) = self.user_agent {
            httpb = httpb.user_agent(ua);
        }
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(IfxClient {
            http,
            endpoint,
            session: Arc::new(RwLock::new(Vec::new())),
        })
    }
}
