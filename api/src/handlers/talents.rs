//! Talent feed handler
//!
//! Serves the localized dataset with content negotiation: `raw=1` or an
//! `Accept` header naming `application/json` yields plain JSON, everything
//! else goes through the configured encoding mode.

use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderMap, HeaderName};
use axum::response::{IntoResponse, Response};

use crate::encoding::{self, EncodingMode};
use crate::error::AppError;
use crate::i18n::Lang;
use crate::AppState;

const CACHE_ONE_HOUR: &str = "public, max-age=3600";

/// Query options for the feed. Parsing never fails: unparseable pairs are
/// ignored and the defaults (encoded body, German names) apply.
#[derive(Debug, Default, PartialEq, Eq)]
struct FeedQuery {
    raw: bool,
    lang: Lang,
}

fn parse_query(query: Option<&str>) -> FeedQuery {
    let mut parsed = FeedQuery::default();
    let Some(query) = query else {
        return parsed;
    };
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or_default();
        let value = parts.next();
        match key {
            "raw" => parsed.raw = value == Some("1"),
            "lang" => parsed.lang = Lang::from_param(value),
            _ => {}
        }
    }
    parsed
}

/// Check if the client asked for JSON explicitly.
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// GET /api/talents
///
/// Always responds 200; the body is the localized dataset as JSON, base64,
/// or base64 behind a junk prefix depending on the configured mode and the
/// client's preferences.
pub async fn get_talents(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let query = parse_query(query.as_deref());
    let localized = state.talents.localized(query.lang);
    let json = serde_json::to_string(&localized)?;

    let raw_requested = query.raw || wants_json(&headers);

    let response = match state.encoding {
        EncodingMode::Plain => json_response(json, None),
        EncodingMode::Passthrough => json_response(json, Some(CACHE_ONE_HOUR)),
        EncodingMode::Base64 => {
            if raw_requested {
                json_response(json, Some(CACHE_ONE_HOUR))
            } else {
                encoded_response(encoding::to_base64(&json), "text/plain")
            }
        }
        EncodingMode::Obfuscated => {
            if raw_requested {
                json_response(json, Some(CACHE_ONE_HOUR))
            } else {
                let body = encoding::obfuscate(&mut rand::thread_rng(), &json);
                encoded_response(body, "text/plain; charset=utf-8")
            }
        }
    };

    Ok(response)
}

fn json_response(body: String, cache: Option<&'static str>) -> Response {
    match cache {
        Some(cache) => (
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CACHE_CONTROL, cache),
            ],
            body,
        )
            .into_response(),
        None => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
    }
}

fn encoded_response(body: String, content_type: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, CACHE_ONE_HOUR),
            (HeaderName::from_static("x-content-encoded"), "base64"),
        ],
        body,
    )
        .into_response()
}
