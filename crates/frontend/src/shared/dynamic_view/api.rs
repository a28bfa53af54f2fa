//! HTTP client for the view endpoints
//!
//! Both endpoints are POSTs answered with the shared `ApiResponse` envelope.

use contracts::shared::api_response::ApiResponse;
use contracts::shared::dynamic_view::{DataQueryRequest, DataResponse, LayoutResponse, RouteContext};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::api_utils::api_url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Failed to load view layout: {0}")]
    LayoutFetchFailed(String),
    #[error("Failed to load data: {0}")]
    DataFetchFailed(String),
}

/// Async value as seen by the view
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

impl<T> From<Result<T, ViewError>> for FetchState<T> {
    fn from(result: Result<T, ViewError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }
}

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    envelope.into_data().map_err(|e| e.to_string())
}

/// Fetch the view descriptor, layout tree and object fields
pub async fn fetch_layout(route: &RouteContext) -> Result<LayoutResponse, ViewError> {
    log::debug!("fetching layout for {}", route.layout_path());
    let empty = serde_json::Map::new();
    post_json(&route.layout_path(), &empty).await.map_err(|e| {
        log::error!("layout request failed: {}", e);
        ViewError::LayoutFetchFailed(e)
    })
}

/// Fetch one page of rows
pub async fn fetch_data(
    route: &RouteContext,
    query: &DataQueryRequest,
) -> Result<DataResponse, ViewError> {
    log::debug!(
        "fetching page {} of {} ({} fields)",
        query.page,
        route.data_path(),
        query.fields.len()
    );
    post_json(&route.data_path(), query).await.map_err(|e| {
        log::error!("data request failed: {}", e);
        ViewError::DataFetchFailed(e)
    })
}
