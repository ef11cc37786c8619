use chrono::NaiveDateTime;

use crate::core::{IfxClient, IfxError, net, soap, xml};
use crate::news::{COMPOSITE_ID_SEPARATOR, NewsItem, SearchDirection};

pub(crate) async fn fetch_realtime_ids(
    client: &IfxClient,
    direction: SearchDirection,
    product_id: &str,
    limit: u32,
) -> Result<Vec<String>, IfxError> {
    let body = soap::realtime_news(direction, product_id, limit);
    let resp = net::soap_post(client, "GetRealtimeNewsByProduct", body).await?;
    let text = resp.text().await?;
    let doc = xml::parse(&text)?;

    let Some(news_resp) = doc.descend_to("grnmresp") else {
        return Ok(Vec::new());
    };
    let Some(list) = news_resp.find_descendant("mbnl") else {
        return Ok(Vec::new());
    };

    let mut ids = Vec::new();
    for entry in list.children() {
        // Entries without a primary id carry nothing addressable; skip them.
        let Some(primary) = entry.find_descendant("i") else {
            continue;
        };

        let mut composite = primary.inner_text();
        if let Some(sids) = entry.find_descendant("sids") {
            for sid in sids.children() {
                composite.push_str(COMPOSITE_ID_SEPARATOR);
                composite.push_str(&sid.inner_text());
            }
        }
        ids.push(composite);
    }

    Ok(ids)
}

pub(crate) async fn fetch_entire_news(
    client: &IfxClient,
    composite_id: &str,
) -> Result<NewsItem, IfxError> {
    let body = soap::entire_news(composite_id);
    let resp = net::soap_post(client, "GetEntireNewsByID", body).await?;
    let text = resp.text().await?;
    let doc = xml::parse(&text)?;

    // A response without `mbn` on the descent path is an empty result, not
    // an error.
    let Some(news) = doc.descend_to("mbn") else {
        return Ok(NewsItem::default());
    };

    let mut product_ids = Vec::new();
    for child in news.children() {
        if child.name() == "p" {
            for product in child.children() {
                product_ids.push(product.inner_text());
            }
        }
    }

    Ok(NewsItem {
        id: composite_id
            .split(COMPOSITE_ID_SEPARATOR)
            .next()
            .map(str::to_string),
        headline: child_text(news, "h"),
        publication_time: child_text(news, "pd").and_then(|raw| parse_publication_time(&raw)),
        body: child_text(news, "c"),
        product_ids,
    })
}

fn child_text(news: &xml::Element, name: &str) -> Option<String> {
    news.first_child_named(name).map(xml::Element::inner_text)
}

/// Publication times arrive as service-local wall-clock values with no UTC
/// offset; the shape varies between sortable and space-separated forms.
fn parse_publication_time(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%d.%m.%Y %H:%M:%S",
    ];

    let raw = raw.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
