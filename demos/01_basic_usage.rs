use std::time::Duration;

use ifx_rs::{IfxClient, Product, SearchDirection};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create a client with a defensive request timeout.
    let client = IfxClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Open a session; the service signals bad credentials by returning no
    //    cookies, not by failing the call.
    let opened = client
        .open_session("your_client", "ru-RU", "your_login", "your_password")
        .await?;
    if !opened {
        eprintln!("session was not opened: the service returned no cookies");
        return Ok(());
    }

    // 3. List the products available to this account.
    let products = client.products().await?;
    println!("--- {} products available ---", products.len());

    let Some(first) = products.first() else {
        client.close_session().await?;
        return Ok(());
    };

    // 4. Fetch the most recent composite news id for the first product.
    let news_ids = client
        .realtime_news(&first.id)
        .direction(SearchDirection::Forward)
        .limit(1)
        .fetch()
        .await?;

    let Some(news_id) = news_ids.first() else {
        println!("no recent news for {}", first.name);
        client.close_session().await?;
        return Ok(());
    };

    // 5. Fetch the entire news item and close the session.
    let news = client.entire_news(news_id).await?;
    client.close_session().await?;

    // 6. Join the item's product ids back to their display names.
    let product_names: Vec<&str> = news
        .product_ids
        .iter()
        .filter_map(|pid| Product::find_by_id(&products, pid))
        .map(|p| p.name.as_str())
        .collect();

    println!("id: {}", news.id.as_deref().unwrap_or_default());
    println!("headline: {}", news.headline.as_deref().unwrap_or_default());
    if let Some(published) = news.publication_time {
        println!("publication_time: {published}");
    }
    println!("body:\n{}", news.body.as_deref().unwrap_or_default());
    println!("products: [{}]", product_names.join(", "));

    Ok(())
}
