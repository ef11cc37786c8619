use serde::Serialize;

/// A named data feed that news items can be associated with.
///
/// Products are produced only by [`IfxClient::products`](crate::IfxClient::products)
/// and held by the caller for the duration of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Opaque identifier, unique within the service.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Product {
    /// Looks up a product by id in a listing, as returned by
    /// [`IfxClient::products`](crate::IfxClient::products).
    ///
    /// News items reference products only by id; this is the caller-side
    /// join back to the display names.
    pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
        products.iter().find(|p| p.id == id)
    }
}
