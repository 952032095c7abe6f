// src/api/parser.rs
//! Turns raw HTTP response text into typed API payloads.
//!
//! Success bodies deserialize into the types in `responses`; failure
//! bodies are mined for Prismic's error vocabulary before falling back
//! to the bare HTTP status. No recovery happens here: a parse failure
//! is a build failure.

use super::client::ApiResponse;
use super::responses::{
    PrismicApiErrorResponse, PrismicLegacyErrorResponse, Repository, SearchResponse,
};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, PrismicErrorCode};
use reqwest::StatusCode;

/// Parse any Prismic API response, dispatching on the HTTP status.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        parse_error_body(&result.data, result.status, &result.url)
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

fn parse_error_body<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    // Most failures carry a typed error body
    if let Ok(api_error) = serde_json::from_str::<PrismicApiErrorResponse>(body) {
        return Err(AppError::PrismicService {
            code: PrismicErrorCode::from_api_response(&api_error.error_type),
            message: api_error.message,
            status,
        });
    }

    // Auth failures use the legacy `{"error": ...}` shape
    if let Ok(legacy) = serde_json::from_str::<PrismicLegacyErrorResponse>(body) {
        return Err(AppError::PrismicService {
            code: PrismicErrorCode::from_http_status(status.as_u16()),
            message: legacy.error,
            status,
        });
    }

    Err(AppError::PrismicService {
        code: PrismicErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    })
}

/// Parse the repository descriptor served at the API root.
pub fn parse_repository_response(result: ApiResponse<String>) -> Result<Repository, AppError> {
    parse_api_response(result)
}

/// Parse a document-search envelope.
pub fn parse_search_response(result: ApiResponse<String>) -> Result<SearchResponse, AppError> {
    parse_api_response(result)
}

fn preview(body: &str) -> String {
    if body.len() > ERROR_BODY_PREVIEW_LENGTH {
        let cut = body
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|i| *i <= ERROR_BODY_PREVIEW_LENGTH)
            .last()
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
