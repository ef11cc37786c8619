//! ifx-rs: ergonomic client for the IFX news and market-data SOAP service.
//!
//! The service exposes five operations over a single SOAP 1.2 endpoint:
//! opening a session, listing the products available to the account, listing
//! recent composite news ids for a product, fetching an entire news item by
//! id, and closing the session. Session continuity is carried by the HTTP
//! cookies the service sets on the open-session response; the client echoes
//! them on every later request until the session is closed.
//!
//! # Example
//!
//! ```no_run
//! # use ifx_rs::IfxClient;
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IfxClient::default();
//!
//! if client.open_session("my_client", "ru-RU", "login", "password").await? {
//!     let products = client.products().await?;
//!     let ids = client.realtime_news(&products[0].id).limit(1).fetch().await?;
//!     let news = client.entire_news(&ids[0]).await?;
//!     client.close_session().await?;
//!     println!("{}", news.headline.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod news;
pub mod products;

pub use crate::core::{IfxClient, IfxClientBuilder, IfxError};
pub use crate::news::{NewsItem, RealtimeNewsBuilder, SearchDirection};
pub use crate::products::Product;
