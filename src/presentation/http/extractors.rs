// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, config::IdParsing,
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{HeaderName, Method, header::CONTENT_TYPE, request::Parts},
};
use headers::{Authorization, HeaderMapExt, Host, Origin, authorization::Basic};
use serde::Deserialize;

use super::error::HttpError;

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            tracing::error!("application state missing from request extensions");
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;
    Ok(app_state)
}

/// Parse a raw identifier according to the configured policy. `None` means
/// the value was malformed and must be rejected.
fn parse_id(raw: &str, policy: IdParsing) -> Option<i64> {
    match (raw.trim().parse::<i64>(), policy) {
        (Ok(id), _) => Some(id),
        (Err(_), IdParsing::Lenient) => Some(0),
        (Err(_), IdParsing::Strict) => None,
    }
}

const SEC_FETCH_SITE: HeaderName = HeaderName::from_static("sec-fetch-site");

/// Browsers replay cached basic credentials on cross-site submissions, so a
/// state-changing request must come from this site. Requests carrying neither
/// `Sec-Fetch-Site` nor `Origin` are not from a browser form and pass.
fn ensure_same_origin(parts: &Parts) -> Result<(), HttpError> {
    if matches!(parts.method, Method::GET | Method::HEAD | Method::OPTIONS) {
        return Ok(());
    }

    let forbidden = |reason: &str| {
        tracing::warn!(
            method = %parts.method,
            path = %parts.uri.path(),
            reason,
            "cross-site write rejected"
        );
        Err(HttpError::from_error(ApplicationError::forbidden(
            "cross-site request rejected",
        )))
    };

    if let Some(site) = parts.headers.get(&SEC_FETCH_SITE) {
        match site.to_str() {
            Ok("same-origin" | "none") => {}
            _ => return forbidden("sec-fetch-site"),
        }
    }

    let Some(origin) = parts.headers.typed_get::<Origin>() else {
        return Ok(());
    };
    if origin.is_null() {
        return forbidden("null origin");
    }

    let host = parts.headers.typed_get::<Host>();
    let same_host = host.is_some_and(|host| {
        host.hostname().eq_ignore_ascii_case(origin.hostname()) && host.port() == origin.port()
    });
    if same_host {
        Ok(())
    } else {
        forbidden("origin mismatch")
    }
}

/// Guard for write routes: the request must carry the shared basic-auth
/// credential, and unsafe methods must originate from this site.
#[derive(Debug, Clone, Copy)]
pub struct RequireBasicAuth;

impl<S> FromRequestParts<S> for RequireBasicAuth
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Basic>>()
            .ok_or_else(|| {
                tracing::info!(path = %parts.uri.path(), "missing basic auth credentials");
                HttpError::from_error(ApplicationError::unauthorized("credentials required"))
            })?;

        if !app_state
            .credentials
            .matches(header.username(), header.password())
        {
            tracing::warn!(path = %parts.uri.path(), "rejected basic auth credentials");
            return Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid credentials",
            )));
        }

        ensure_same_origin(parts)?;
        Ok(Self)
    }
}

/// Article id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct ArticleIdParam(pub i64);

impl<S> FromRequestParts<S> for ArticleIdParam
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "article id path segment missing");
                HttpError::from_error(ApplicationError::bad_request("invalid article id"))
            })?;

        parse_id(&raw, app_state.id_parsing)
            .map(Self)
            .ok_or_else(|| {
                tracing::warn!(raw = %raw, "malformed article id");
                HttpError::from_error(ApplicationError::bad_request("invalid article id"))
            })
    }
}

#[derive(Debug, Deserialize)]
struct CursorQuery {
    cursor: Option<String>,
}

/// Raw pagination cursor from `?cursor=`; absent or empty means `0`.
#[derive(Debug, Clone, Copy)]
pub struct CursorParam(pub i64);

impl<S> FromRequestParts<S> for CursorParam
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let raw = match Query::<CursorQuery>::from_request_parts(parts, state).await {
            Ok(Query(query)) => query.cursor.filter(|c| !c.trim().is_empty()),
            Err(err) if app_state.id_parsing == IdParsing::Lenient => {
                tracing::debug!(error = %err, "ignoring unreadable query string");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "unreadable query string");
                return Err(HttpError::from_error(ApplicationError::bad_request(
                    "invalid query string",
                )));
            }
        };

        let Some(raw) = raw else {
            return Ok(Self(0));
        };

        parse_id(&raw, app_state.id_parsing)
            .map(Self)
            .ok_or_else(|| {
                tracing::warn!(raw = %raw, "malformed cursor");
                HttpError::from_error(ApplicationError::bad_request("invalid cursor"))
            })
    }
}

/// Submitted article fields. Missing fields become empty strings so they are
/// reported by validation rather than rejected as unparseable.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Article body accepted as JSON or as an urlencoded form.
#[derive(Debug)]
pub struct ArticleForm(pub ArticleRequest);

impl<S> FromRequest<S> for ArticleForm
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::warn!(error = %err, "failed to read request body");
            HttpError::from_error(ApplicationError::bad_request("unreadable request body"))
        })?;

        let parsed = if is_form {
            serde_urlencoded::from_bytes::<ArticleRequest>(&bytes).map_err(|err| err.to_string())
        } else {
            serde_json::from_slice::<ArticleRequest>(&bytes).map_err(|err| err.to_string())
        };

        parsed.map(Self).map_err(|err| {
            tracing::warn!(error = %err, form = is_form, "failed to parse article body");
            HttpError::from_error(ApplicationError::bad_request("unparseable request body"))
        })
    }
}
