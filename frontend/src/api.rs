use gloo_net::http::Request;
use js_sys::Date;
use serde::{Deserialize, Serialize};

use ema_admin_shared::{AdminError, EmaRecord};

// Store data-plane base URL, read at compile time from the deployment
// environment; defaults to the local emulator address.
pub const STORE_API_BASE: &str = match option_env!("EMA_STORE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

// Collection holding the wish-board entries.
const EMA_COLLECTION: &str = "emas";

#[derive(Debug, Deserialize)]
struct EmaListResponse {
    documents: Vec<EmaRecord>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EmaUpdateRequest {
    pub wish: String,
    pub name: String,
    pub likes: u32,
}

fn collection_url() -> String {
    format!("{}/collections/{}/documents", STORE_API_BASE, EMA_COLLECTION)
}

fn document_url(id: &str) -> String {
    format!(
        "{}/collections/{}/documents/{}",
        STORE_API_BASE,
        EMA_COLLECTION,
        urlencoding::encode(id)
    )
}

/// Fetch the whole collection, ordered by creation time descending.
pub async fn fetch_emas() -> Result<Vec<EmaRecord>, AdminError> {
    let url = format!(
        "{}?order_by=created_at&direction=desc&_ts={}",
        collection_url(),
        Date::now() as u64
    );

    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| AdminError::Fetch(format!("Network error: {:?}", e)))?;

    if !response.ok() {
        return Err(AdminError::Fetch(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    let list: EmaListResponse = response
        .json()
        .await
        .map_err(|e| AdminError::Fetch(format!("Parse error: {:?}", e)))?;

    Ok(list.documents)
}

/// Partially update one document; only the given fields are overwritten.
pub async fn update_ema(id: &str, request: &EmaUpdateRequest) -> Result<(), AdminError> {
    let response = Request::patch(&document_url(id))
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| AdminError::Mutation(format!("Serialize error: {:?}", e)))?
        .send()
        .await
        .map_err(|e| AdminError::Mutation(format!("Network error: {:?}", e)))?;

    if !response.ok() {
        return Err(AdminError::Mutation(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    Ok(())
}

/// Delete one document by identifier.
pub async fn delete_ema(id: &str) -> Result<(), AdminError> {
    let response = Request::delete(&document_url(id))
        .send()
        .await
        .map_err(|e| AdminError::Mutation(format!("Network error: {:?}", e)))?;

    if !response.ok() {
        return Err(AdminError::Mutation(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    Ok(())
}
