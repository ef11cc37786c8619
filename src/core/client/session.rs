//! Session open/close against the IFX endpoint.

use reqwest::header::SET_COOKIE;

use crate::core::{error::IfxError, net, soap};

impl super::IfxClient {
    /// Opens a service session and captures the cookies that carry it.
    ///
    /// Returns `Ok(true)` when the service handed back at least one cookie,
    /// `Ok(false)` when it did not (the service rejected the credentials
    /// without raising a transport error). Any previously held cookie set is
    /// replaced either way.
    ///
    /// # Errors
    ///
    /// Returns an `IfxError` if the request fails or the service answers with
    /// a non-success status.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, login, password), err)
    )]
    pub async fn open_session(
        &self,
        client_name: &str,
        language: &str,
        login: &str,
        password: &str,
    ) -> Result<bool, IfxError> {
        let body = soap::open_session(client_name, language, login, password);
        let resp = net::soap_post_fresh(self, "OpenSession", body).await?;

        let cookies: Vec<String> = resp
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .map(|pair| pair.trim().to_string())
            .filter(|pair| !pair.is_empty())
            .collect();

        let opened = !cookies.is_empty();
        self.replace_session(cookies).await;
        Ok(opened)
    }

    /// Closes the current session.
    ///
    /// The stored cookie set is cleared on any successful response,
    /// regardless of the body content.
    ///
    /// # Errors
    ///
    /// Returns an `IfxError` if the request fails or the service answers with
    /// a non-success status; the cookie set is kept in that case.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn close_session(&self) -> Result<(), IfxError> {
        let _resp = net::soap_post(self, "CloseSession", soap::close_session()).await?;
        self.clear_session().await;
        Ok(())
    }
}
