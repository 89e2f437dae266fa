use gloo::net::http::Request;
use shared::CatalogDocument;

/// Fixed relative path of the catalog document.
pub const CATALOG_URL: &str = "data/services.json";

/// Fetch and parse the catalog document.
///
/// Callers degrade any error to [`CatalogDocument::fallback`] plus a warning
/// toast; nothing from here is allowed past the loader boundary.
pub async fn load_catalog() -> Result<CatalogDocument, String> {
    let response = Request::get(CATALOG_URL)
        .send()
        .await
        .map_err(|e| format!("failed to fetch {}: {}", CATALOG_URL, e))?;

    if !response.ok() {
        return Err(format!(
            "{} returned status {}",
            CATALOG_URL,
            response.status()
        ));
    }

    response
        .json::<CatalogDocument>()
        .await
        .map_err(|e| format!("failed to parse {}: {}", CATALOG_URL, e))
}
