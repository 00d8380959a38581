//! JSON body parsing.
//!
//! Requests declaring `Content-Type: application/json` have their body
//! buffered and parsed before any route runs, so malformed input is
//! rejected uniformly regardless of the target path. The parsed value is
//! stored in the request extensions as [`JsonBody`] and the original bytes
//! are handed on as the body.

use axum::body::Body;
use axum::extract::Request;
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use http_body_util::LengthLimitError;
use serde_json::Value;

use crate::error::ApiError;

/// Maximum number of body bytes buffered for parsing (100 KiB).
pub const BODY_LIMIT: usize = 100 * 1024;

/// Parsed JSON body, available to handlers via request extensions.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

/// Middleware that parses JSON request bodies ahead of routing.
///
/// Empty bodies pass through unparsed. The top-level value must be an
/// object or an array. Compressed bodies are not decoded.
pub async fn parse_json_body(request: Request, next: Next) -> Result<Response, ApiError> {
    if !declares_json(request.headers())? {
        return Ok(next.run(request).await);
    }
    require_identity_encoding(request.headers())?;

    let (mut parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(body_read_error)?;

    if !bytes.is_empty() {
        let value = parse_strict(&bytes)?;
        parts.extensions.insert(JsonBody(value));
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

/// Returns whether the request carries a JSON media type.
///
/// A JSON media type with a charset other than UTF-8 is rejected.
fn declares_json(headers: &HeaderMap) -> Result<bool, ApiError> {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return Ok(false);
    };

    let mut params = value.split(';');
    let essence = params.next().unwrap_or_default().trim();
    if !essence.eq_ignore_ascii_case("application/json") {
        return Ok(false);
    }

    let charset = params.find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    });

    match charset {
        Some(charset) if !charset.eq_ignore_ascii_case("utf-8") => {
            Err(ApiError::UnsupportedCharset(charset.to_lowercase()))
        }
        _ => Ok(true),
    }
}

fn require_identity_encoding(headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(value) = headers.get(header::CONTENT_ENCODING) else {
        return Ok(());
    };

    let encoding = value.to_str().map(str::trim).unwrap_or("<opaque>");
    if encoding.is_empty() || encoding.eq_ignore_ascii_case("identity") {
        Ok(())
    } else {
        Err(ApiError::UnsupportedEncoding(encoding.to_lowercase()))
    }
}

fn parse_strict(bytes: &[u8]) -> Result<Value, ApiError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        other => Err(ApiError::MalformedBody(format!(
            "top-level value must be an object or array, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn body_read_error(err: axum::Error) -> ApiError {
    let mut source = Some(&err as &(dyn std::error::Error + 'static));
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return ApiError::PayloadTooLarge { limit: BODY_LIMIT };
        }
        source = e.source();
    }
    ApiError::BodyRead(err.to_string())
}
