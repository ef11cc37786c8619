use httpmock::Method::POST;
use ifx_rs::Product;

use crate::common;

#[tokio::test]
async fn products_are_parsed_in_document_order() {
    let server = common::setup_server();
    let client = common::client_for(&server);
    common::open_session(&server, &client).await;

    let mock = server.mock(|when, then| {
        when.method(POST)
            .header("content-type", common::soap_action("GetProductsList"))
            .body_includes("<soap:Body/>");
        then.status(200).body(common::fixture("products_list"));
    });

    let products = client.products().await.unwrap();

    mock.assert();
    assert_eq!(
        products,
        vec![
            Product {
                id: "P1".into(),
                name: "Alpha".into()
            },
            Product {
                id: "P2".into(),
                name: "Beta".into()
            },
        ]
    );
}

#[tokio::test]
async fn entries_without_an_id_are_skipped() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    server.mock(|when, then| {
        when.method(POST)
            .header("content-type", common::soap_action("GetProductsList"));
        then.status(200)
            .body(common::fixture("products_list_missing_id"));
    });

    let products = client.products().await.unwrap();

    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["P1", "P3"]);
}

#[tokio::test]
async fn missing_name_becomes_empty() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    server.mock(|when, then| {
        when.method(POST)
            .header("content-type", common::soap_action("GetProductsList"));
        then.status(200).body(
            r#"<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope">
   <s:Body>
      <gpmresp xmlns="http://ifx.ru/IFX3WebService">
         <mbpl>
            <pitem><i>P9</i></pitem>
         </mbpl>
      </gpmresp>
   </s:Body>
</s:Envelope>"#,
        );
    });

    let products = client.products().await.unwrap();

    assert_eq!(
        products,
        vec![Product {
            id: "P9".into(),
            name: String::new()
        }]
    );
}

#[tokio::test]
async fn missing_product_list_yields_empty() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    server.mock(|when, then| {
        when.method(POST)
            .header("content-type", common::soap_action("GetProductsList"));
        then.status(200).body(
            r#"<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope">
   <s:Body>
      <gpmresp xmlns="http://ifx.ru/IFX3WebService"/>
   </s:Body>
</s:Envelope>"#,
        );
    });

    let products = client.products().await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn empty_envelope_yields_empty() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    server.mock(|when, then| {
        when.method(POST)
            .header("content-type", common::soap_action("GetProductsList"));
        then.status(200).body(common::fixture("empty_envelope"));
    });

    let products = client.products().await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn response_off_the_descent_path_yields_empty() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    // `gpmresp` exists in the document but not on the first-child chain: the
    // descent walks into the header and never widens to siblings.
    server.mock(|when, then| {
        when.method(POST)
            .header("content-type", common::soap_action("GetProductsList"));
        then.status(200).body(
            r#"<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope">
   <s:Header>
      <trace>req-1</trace>
   </s:Header>
   <s:Body>
      <gpmresp xmlns="http://ifx.ru/IFX3WebService">
         <mbpl>
            <pitem><i>P1</i><n>Alpha</n></pitem>
         </mbpl>
      </gpmresp>
   </s:Body>
</s:Envelope>"#,
        );
    });

    let products = client.products().await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn http_failure_is_a_status_error() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    server.mock(|when, then| {
        when.method(POST)
            .header("content-type", common::soap_action("GetProductsList"));
        then.status(502).body("bad gateway");
    });

    let err = client.products().await.unwrap_err();
    assert!(matches!(err, ifx_rs::IfxError::Status { status: 502, .. }));
}

#[tokio::test]
async fn unreadable_body_is_an_error() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    server.mock(|when, then| {
        when.method(POST)
            .header("content-type", common::soap_action("GetProductsList"));
        then.status(200).body("this is not xml");
    });

    assert!(client.products().await.is_err());
}
