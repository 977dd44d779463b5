use axum::extract::State;
use axum::http::header::HOST;
use axum::http::uri::Authority;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use lfs_protocol::{render_metadata, ObjectLinks};
use lfs_types::{Intent, ObjectId};

use crate::error::{LfsError, ServerResult};
use crate::response::LfsResponse;
use crate::router::route;
use crate::state::ServerContext;

/// Single entry point for every request.
///
/// Evaluation order: host, then method, then path, then the store.
pub async fn dispatch(
    State(ctx): State<ServerContext>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    match respond(&ctx, &method, &uri, &headers).await {
        Ok(response) => response.into_http(&method),
        Err(e) => e.into_response(),
    }
}

async fn respond(
    ctx: &ServerContext,
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
) -> ServerResult<LfsResponse> {
    let Some(authority) = request_authority(uri, headers) else {
        tracing::debug!(%uri, "request without host");
        return LfsResponse::error(LfsError::WrongHost);
    };
    if method != Method::GET && method != Method::HEAD {
        return LfsResponse::error(LfsError::NotImplemented);
    }
    let Some((oid, intent)) = route(uri) else {
        return LfsResponse::error(LfsError::WrongPath);
    };
    tracing::debug!(oid = %oid.short(), %intent, %method, "routed");

    match intent {
        Intent::Metadata => metadata(ctx, &authority, &oid).await,
        Intent::RawObject => raw_object(ctx, &oid).await,
    }
}

/// The request's authority: from an absolute-form URI, else the `Host` header.
fn request_authority(uri: &Uri, headers: &HeaderMap) -> Option<Authority> {
    if let Some(authority) = uri.authority() {
        return Some(authority.clone());
    }
    let host = headers.get(HOST)?.to_str().ok()?;
    if host.is_empty() {
        return None;
    }
    host.parse().ok()
}

async fn metadata(
    ctx: &ServerContext,
    authority: &Authority,
    oid: &ObjectId,
) -> ServerResult<LfsResponse> {
    let stat = match ctx.store.stat(oid).await {
        Ok(stat) => stat,
        Err(e) => {
            tracing::debug!(error = ?e, "metadata lookup failed");
            return LfsResponse::error(e.into());
        }
    };
    let links = ObjectLinks::for_request(authority, ctx.listen_port, oid)?;
    let text = render_metadata(oid, stat.size, &links.self_href, &links.download_href)?;
    Ok(LfsResponse::json(StatusCode::OK, text))
}

async fn raw_object(ctx: &ServerContext, oid: &ObjectId) -> ServerResult<LfsResponse> {
    match ctx.store.open(oid).await {
        Ok((file, stat)) => Ok(LfsResponse::object(file, stat.size)),
        Err(e) => {
            tracing::debug!(error = ?e, "object open failed");
            LfsResponse::error(e.into())
        }
    }
}
