// src/api/parser.rs
//! Response parsing with neutral fallbacks.
//!
//! List endpoints are trusted loosely: a body that is not a JSON array reads
//! as an empty list, and array elements that do not deserialize are skipped
//! with a warning rather than failing the whole view.

use super::client::{ApiResponse, ResponseBody};
use crate::constants::CSV_CONTENT_TYPE;
use crate::error::AppError;
use crate::model::{RawListingRecord, SearchLink};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parses a JSON array of listing records.
pub fn parse_record_list(response: ApiResponse<ResponseBody>) -> Vec<RawListingRecord> {
    parse_array(response, "listing")
}

/// Parses a single record; `null` or an empty body means "no such building".
pub fn parse_optional_record(
    response: ApiResponse<ResponseBody>,
) -> Result<Option<RawListingRecord>, AppError> {
    match response.data {
        ResponseBody::Json(Value::Null) => Ok(None),
        ResponseBody::Json(value @ Value::Object(_)) => {
            serde_json::from_value(value).map(Some).map_err(|e| {
                log::error!("Failed to parse building from {}: {}", response.url, e);
                AppError::MalformedResponse(format!("building record from {}: {}", response.url, e))
            })
        }
        ResponseBody::Text(text) if text.trim().is_empty() => Ok(None),
        _ => Err(AppError::MalformedResponse(format!(
            "expected a building object from {} (content type '{}')",
            response.url, response.content_type
        ))),
    }
}

pub fn parse_search_links(response: ApiResponse<ResponseBody>) -> Vec<SearchLink> {
    parse_array(response, "search link")
}

/// Source names; non-string entries are dropped.
pub fn parse_sources(response: ApiResponse<ResponseBody>) -> Vec<String> {
    parse_array(response, "source")
}

/// Extracts the CSV payload; any other content type breaks the export contract.
pub fn expect_csv(response: ApiResponse<ResponseBody>) -> Result<Vec<u8>, AppError> {
    match response.data {
        ResponseBody::Csv(bytes) => Ok(bytes),
        _ => Err(AppError::UnexpectedContentType {
            url: response.url,
            expected: CSV_CONTENT_TYPE,
            actual: response.content_type,
        }),
    }
}

fn parse_array<T: DeserializeOwned>(response: ApiResponse<ResponseBody>, what: &str) -> Vec<T> {
    let items = match response.data {
        ResponseBody::Json(Value::Array(items)) => items,
        other => {
            log::warn!(
                "Expected a JSON array of {}s from {}, got {}; treating as empty",
                what,
                response.url,
                describe(&other)
            );
            return Vec::new();
        }
    };

    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value(item) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Skipping {} #{} from {}: {}", what, idx, response.url, e);
                None
            }
        })
        .collect();

    if parsed.len() < total {
        log::debug!("Parsed {}/{} {}s from {}", parsed.len(), total, what, response.url);
    }
    parsed
}

fn describe(body: &ResponseBody) -> &'static str {
    match body {
        ResponseBody::Csv(_) => "a CSV body",
        ResponseBody::Text(_) => "a text body",
        ResponseBody::Json(Value::Null) => "null",
        ResponseBody::Json(Value::Object(_)) => "an object",
        ResponseBody::Json(_) => "a scalar",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuildingId;
    use reqwest::StatusCode;
    use serde_json::json;

    fn response(data: ResponseBody) -> ApiResponse<ResponseBody> {
        let content_type = match &data {
            ResponseBody::Csv(_) => "text/csv; charset=utf-8",
            ResponseBody::Json(_) => "application/json",
            ResponseBody::Text(_) => "text/plain",
        };
        ApiResponse {
            data,
            status: StatusCode::OK,
            url: "test_url".to_string(),
            content_type: content_type.to_string(),
        }
    }

    #[test]
    fn record_list_skips_non_objects() {
        let body = ResponseBody::Json(json!([
            {"a_id": 1, "a_title": "ok"},
            "not an object",
            {"a_id": 2}
        ]));
        let records = parse_record_list(response(body));
        let ids: Vec<_> = records.iter().filter_map(|r| r.id).collect();
        assert_eq!(ids, vec![BuildingId::new(1), BuildingId::new(2)]);
    }

    #[test]
    fn record_list_keeps_rows_with_odd_keys() {
        let body = ResponseBody::Json(json!([{"a_id": 42.0}, {"a_id": "b-12"}]));
        let records = parse_record_list(response(body));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(BuildingId::new(42)));
        assert_eq!(records[1].id, None);
    }

    #[test]
    fn non_array_list_is_empty() {
        assert!(parse_record_list(response(ResponseBody::Json(json!({"detail": "x"})))).is_empty());
        assert!(parse_record_list(response(ResponseBody::Text("oops".into()))).is_empty());
    }

    #[test]
    fn optional_record() {
        let found = parse_optional_record(response(ResponseBody::Json(json!({"a_id": 9.0}))));
        assert_eq!(found.unwrap().and_then(|r| r.id), Some(BuildingId::new(9)));

        let null = parse_optional_record(response(ResponseBody::Json(Value::Null)));
        assert_eq!(null.unwrap(), None);
        let empty = parse_optional_record(response(ResponseBody::Text(String::new())));
        assert_eq!(empty.unwrap(), None);
        assert!(parse_optional_record(response(ResponseBody::Json(json!([1])))).is_err());
    }

    #[test]
    fn sources_drop_non_strings() {
        let sources = parse_sources(response(ResponseBody::Json(json!(["seloger", 3, "pap"]))));
        assert_eq!(sources, vec!["seloger", "pap"]);
    }

    #[test]
    fn csv_is_required_for_exports() {
        let bytes = expect_csv(response(ResponseBody::Csv(b"a_id\n1\n".to_vec()))).unwrap();
        assert_eq!(bytes, b"a_id\n1\n");

        let err = expect_csv(response(ResponseBody::Json(json!([])))).unwrap_err();
        assert!(matches!(err, AppError::UnexpectedContentType { .. }));
    }
}
