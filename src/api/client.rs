// src/api/client.rs
//! Thin HTTP wrapper around reqwest for the listings backend.
//!
//! Every request carries the session credentials, non-2xx answers become
//! `AppError::Transport`, and bodies are dispatched by their declared content
//! type. Endpoint semantics live in the `ListingRepository` impl at the bottom.

use super::parser;
use crate::config::ClientConfig;
use crate::constants::{
    BUILDINGS_PATH, CART_PATH, CSV_CONTENT_TYPE, ERROR_BODY_PREVIEW_LENGTH, JSON_CONTENT_TYPE,
    SEARCH_LINKS_PATH, SOURCES_PATH,
};
use crate::error::AppError;
use crate::export::ExportKind;
use crate::model::{NewSearchLink, RawListingRecord, SearchLink};
use crate::types::{BaseUrl, BuildingId};
use reqwest::{header, Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Response payload, dispatched by content type.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// `text/csv`: raw bytes, handed to the export flow untouched
    Csv(Vec<u8>),
    /// `application/json`: parsed value (`Null` for an empty body)
    Json(Value),
    /// Anything else
    Text(String),
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub url: String,
    pub content_type: String,
}

/// A thin wrapper around reqwest Client bound to one backend.
#[derive(Clone)]
pub struct ListingHttpClient {
    client: Client,
    base_url: BaseUrl,
}

impl ListingHttpClient {
    /// Creates a client from explicit configuration; nothing is read from the
    /// environment here.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(config)?)
            .cookie_store(true)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Creates the default headers sent with every request.
    fn create_headers(config: &ClientConfig) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static(JSON_CONTENT_TYPE),
        );

        if let Some(cookie) = &config.session_cookie {
            headers.insert(
                header::COOKIE,
                header::HeaderValue::from_str(cookie.as_str()).map_err(|e| {
                    AppError::MissingConfiguration(format!("Invalid session cookie: {}", e))
                })?,
            );
        }

        Ok(headers)
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse<ResponseBody>, AppError> {
        self.send::<()>(Method::GET, path, None).await
    }

    pub async fn post<T: Serialize + Sync>(
        &self,
        path: &str,
        body: Option<&T>,
    ) -> Result<ApiResponse<ResponseBody>, AppError> {
        self.send(Method::POST, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse<ResponseBody>, AppError> {
        self.send::<()>(Method::DELETE, path, None).await
    }

    async fn send<T: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<ApiResponse<ResponseBody>, AppError> {
        let url = self.base_url.endpoint(path);
        log::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        log::debug!("{} {} -> {}", method, url, status);

        if !status.is_success() {
            return Err(transport_error(response).await);
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let data = dispatch_body(&content_type, response).await?;

        Ok(ApiResponse {
            data,
            status,
            url,
            content_type,
        })
    }
}

/// Dispatches the body by content type: CSV stays raw, JSON is parsed,
/// anything else is read as text.
async fn dispatch_body(content_type: &str, response: Response) -> Result<ResponseBody, AppError> {
    if content_type.contains(CSV_CONTENT_TYPE) {
        return Ok(ResponseBody::Csv(response.bytes().await?.to_vec()));
    }

    if content_type.contains(JSON_CONTENT_TYPE) {
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ResponseBody::Json(Value::Null));
        }
        return Ok(ResponseBody::Json(serde_json::from_slice(&bytes)?));
    }

    Ok(ResponseBody::Text(response.text().await?))
}

/// Builds the error for a non-2xx answer, keeping a preview of the body.
async fn transport_error(response: Response) -> AppError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    let body = if text.trim().is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
    } else if text.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let preview: String = text.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", preview)
    } else {
        text
    };

    log::debug!("Request failed with {}: {}", status, body);
    AppError::Transport {
        status: status.as_u16(),
        body,
    }
}

#[async_trait::async_trait]
impl super::ListingRepository for ListingHttpClient {
    async fn list_buildings(&self) -> Result<Vec<RawListingRecord>, AppError> {
        let response = self.get(BUILDINGS_PATH).await?;
        Ok(parser::parse_record_list(response))
    }

    async fn get_building(&self, id: BuildingId) -> Result<Option<RawListingRecord>, AppError> {
        let path = format!("{}/{}", BUILDINGS_PATH, id);
        match self.get(&path).await {
            Ok(response) => parser::parse_optional_record(response),
            Err(e) if e.is_not_found() => {
                log::debug!("Building {} not found", id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn get_cart(&self) -> Result<Vec<RawListingRecord>, AppError> {
        let response = self.get(CART_PATH).await?;
        Ok(parser::parse_record_list(response))
    }

    async fn add_to_cart(&self, id: BuildingId) -> Result<(), AppError> {
        let path = format!("{}/{}", CART_PATH, id);
        self.post::<()>(&path, None).await?;
        log::info!("Added building {} to cart", id);
        Ok(())
    }

    async fn remove_from_cart(&self, id: BuildingId) -> Result<(), AppError> {
        let path = format!("{}/{}", CART_PATH, id);
        self.delete(&path).await?;
        log::info!("Removed building {} from cart", id);
        Ok(())
    }

    async fn export_csv(&self, kind: ExportKind) -> Result<Vec<u8>, AppError> {
        let response = self.get(kind.path()).await?;
        parser::expect_csv(response)
    }

    async fn list_search_links(&self) -> Result<Vec<SearchLink>, AppError> {
        let response = self.get(SEARCH_LINKS_PATH).await?;
        Ok(parser::parse_search_links(response))
    }

    async fn list_sources(&self) -> Result<Vec<String>, AppError> {
        let response = self.get(SOURCES_PATH).await?;
        Ok(parser::parse_sources(response))
    }

    async fn add_search_link(&self, link: &NewSearchLink) -> Result<(), AppError> {
        self.post(SEARCH_LINKS_PATH, Some(link)).await?;
        log::info!("Added search link {} ({})", link.url, link.source);
        Ok(())
    }
}
