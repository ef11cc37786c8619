//! Request plumbing shared by every operation.

use reqwest::header::{CONTENT_TYPE, COOKIE};

use crate::core::client::IfxClient;
use crate::core::client::constants::SERVICE_NAMESPACE;
use crate::core::error::IfxError;

/// Content-type for a SOAP 1.2 request; only the `action` operation name
/// varies between the five calls.
pub(crate) fn soap_content_type(operation: &str) -> String {
    format!("application/soap+xml;charset=utf-8; action=\"{SERVICE_NAMESPACE}/IIFXService/{operation}\"")
}

/// POST one rendered envelope to the configured endpoint, echoing the session
/// cookies when a session is held. Non-success statuses are errors on every
/// operation.
pub(crate) async fn soap_post(
    client: &IfxClient,
    operation: &str,
    body: String,
) -> Result<reqwest::Response, IfxError> {
    let cookies = client.session_cookie_header().await;
    send(client, operation, body, cookies).await
}

/// POST for the open-session call itself: it never carries cookies, even
/// when a previous session's are still held.
pub(crate) async fn soap_post_fresh(
    client: &IfxClient,
    operation: &str,
    body: String,
) -> Result<reqwest::Response, IfxError> {
    send(client, operation, body, None).await
}

async fn send(
    client: &IfxClient,
    operation: &str,
    body: String,
    cookies: Option<String>,
) -> Result<reqwest::Response, IfxError> {
    let mut req = client
        .http()
        .post(client.endpoint().clone())
        .header(CONTENT_TYPE, soap_content_type(operation))
        .body(body);

    if let Some(cookies) = cookies {
        req = req.header(COOKIE, cookies);
    }

    let resp = req.send().await?;

    if !resp.status().is_success() {
        return Err(IfxError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    Ok(resp)
}
