// src/api/client.rs
//! Pure HTTP client wrapper for the Prismic API.
//!
//! This module provides a thin wrapper around reqwest for making
//! HTTP requests to a Prismic repository. It resolves the master ref
//! once at construction and builds search requests from it; business
//! logic never sees HTTP details.

use super::responses::SearchResponse;
use crate::error::AppError;
use crate::types::{AccessToken, ApiEndpoint, DocumentType, DocumentUid};
use reqwest::{header, Client, Response};
use url::Url;

const SEARCH_SEGMENT: &str = "documents/search";

/// A thin wrapper around reqwest Client for Prismic API requests.
///
/// Constructed exactly once per process and handed to every flow that
/// needs content; nothing else in the crate builds its own client.
#[derive(Clone)]
pub struct PrismicHttpClient {
    client: Client,
    endpoint: ApiEndpoint,
    access_token: Option<AccessToken>,
    master_ref: String,
}

impl PrismicHttpClient {
    /// Connects to a repository: builds the HTTP client and resolves the
    /// master ref the repository currently publishes.
    pub async fn connect(
        endpoint: ApiEndpoint,
        access_token: Option<AccessToken>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .build()?;

        let master_ref =
            Self::resolve_master_ref(&client, &endpoint, access_token.as_ref()).await?;
        log::info!("Resolved master ref for {}: {}", endpoint, master_ref);

        Ok(Self {
            client,
            endpoint,
            access_token,
            master_ref,
        })
    }

    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }

    /// Fetches the repository descriptor and picks out the master ref.
    async fn resolve_master_ref(
        client: &Client,
        endpoint: &ApiEndpoint,
        access_token: Option<&AccessToken>,
    ) -> Result<String, AppError> {
        let mut request = client.get(endpoint.as_url().clone());
        if let Some(token) = access_token {
            request = request.query(&[("access_token", token.as_str())]);
        }

        log::debug!("GET {}", endpoint);
        let response = request.send().await?;
        let result = extract_response_text(response).await?;
        let repository = super::parser::parse_repository_response(result)?;

        repository
            .master_ref()
            .map(|r| r.reference.clone())
            .ok_or_else(|| {
                AppError::MalformedResponse(format!(
                    "Repository descriptor for {} lists no master ref",
                    endpoint
                ))
            })
    }

    fn search_url(&self) -> Result<Url, AppError> {
        Ok(self.endpoint.join(SEARCH_SEGMENT)?)
    }

    /// Issues a GET and captures the body with status metadata.
    async fn get(&self, url: Url) -> Result<ApiResponse<String>, AppError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        extract_response_text(response).await
    }

    /// Runs a document-search query against the resolved master ref.
    async fn search(&self, params: &[(&str, String)]) -> Result<SearchResponse, AppError> {
        let mut url = self.search_url()?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("ref", &self.master_ref);
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
            if let Some(token) = &self.access_token {
                pairs.append_pair("access_token", token.as_str());
            }
        }
        let result = self.get(url).await?;
        super::parser::parse_search_response(result)
    }
}

#[async_trait::async_trait]
impl super::ContentRepository for PrismicHttpClient {
    async fn fetch_by_type(
        &self,
        doc_type: &DocumentType,
        request: &super::PageRequest,
    ) -> Result<SearchResponse, AppError> {
        self.search(&[
            (
                "q",
                format!("[[at(document.type,\"{}\")]]", doc_type.as_str()),
            ),
            ("pageSize", request.page_size.to_string()),
            ("page", request.page.to_string()),
        ])
        .await
    }

    async fn fetch_by_uid(
        &self,
        doc_type: &DocumentType,
        uid: &DocumentUid,
    ) -> Result<super::responses::RawDocument, AppError> {
        let response = self
            .search(&[
                (
                    "q",
                    format!(
                        "[[at(my.{}.uid,\"{}\")]]",
                        doc_type.as_str(),
                        uid.as_str()
                    ),
                ),
                ("pageSize", "1".to_string()),
                ("page", "1".to_string()),
            ])
            .await?;

        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| AppError::DocumentNotFound {
                doc_type: doc_type.as_str().to_string(),
                uid: uid.as_str().to_string(),
            })
    }

    async fn fetch_page_url(&self, next_page: &str) -> Result<SearchResponse, AppError> {
        // The cursor is opaque and fully determined by the API; it is
        // followed verbatim, never reconstructed.
        let url = Url::parse(next_page)?;
        let result = self.get(url).await?;
        super::parser::parse_search_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
