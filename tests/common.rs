#![allow(dead_code)]

use httpmock::{Method::POST, Mock, MockServer};
use ifx_rs::IfxClient;
use std::{fs, path::Path};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{name}.xml"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> IfxClient {
    IfxClient::builder()
        .endpoint(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

/// Content-type the client must send for a given operation; the `action`
/// parameter is the only part that varies between the five calls.
pub fn soap_action(operation: &str) -> String {
    format!(
        "application/soap+xml;charset=utf-8; action=\"http://ifx.ru/IFX3WebService/IIFXService/{operation}\""
    )
}

pub fn mock_open_session(server: &'_ MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .header("content-type", soap_action("OpenSession"));
        then.status(200)
            .header(
                "set-cookie",
                "ASP.NET_SessionId=abc123; path=/; HttpOnly",
            )
            .body(fixture("empty_envelope"));
    })
}

/// Opens a session against the mock server so later calls carry cookies.
pub async fn open_session(server: &MockServer, client: &IfxClient) {
    let mut mock = mock_open_session(server);
    let opened = client
        .open_session("test_client", "ru-RU", "login", "password")
        .await
        .unwrap();
    assert!(opened);
    mock.delete();
}

pub fn live_enabled() -> bool {
    std::env::var("IFX_LIVE").ok().as_deref() == Some("1")
}

pub fn live_credentials() -> Option<(String, String, String)> {
    let client = std::env::var("IFX_CLIENT").ok()?;
    let login = std::env::var("IFX_LOGIN").ok()?;
    let password = std::env::var("IFX_PASSWORD").ok()?;
    Some((client, login, password))
}
