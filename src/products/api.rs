use crate::core::{IfxClient, IfxError, net, soap, xml};
use crate::products::Product;

pub(crate) async fn fetch_products(client: &IfxClient) -> Result<Vec<Product>, IfxError> {
    let resp = net::soap_post(client, "GetProductsList", soap::products_list()).await?;
    let body = resp.text().await?;
    let doc = xml::parse(&body)?;

    // `gpmresp` sits on the first-child chain of a well-formed response; a
    // response without it yields an empty listing rather than an error.
    let Some(products_resp) = doc.descend_to("gpmresp") else {
        return Ok(Vec::new());
    };
    let Some(list) = products_resp.find_descendant("mbpl") else {
        return Ok(Vec::new());
    };

    let mut products = Vec::new();
    for entry in list.children() {
        let Some(id) = entry.find_descendant("i") else {
            continue;
        };
        let name = entry
            .find_descendant("n")
            .map(xml::Element::inner_text)
            .unwrap_or_default();
        products.push(Product {
            id: id.inner_text(),
            name,
        });
    }

    Ok(products)
}
