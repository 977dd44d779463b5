use axum::http::Uri;
use axum::Router;
use lfs_protocol::endpoints;
use lfs_types::{Intent, ObjectId};
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::ServerContext;

/// Classify a request path as `(oid, intent)`.
///
/// The path is split on its last `/`. The prefix must be exactly
/// `/objects` or `/data/objects`, and the suffix a valid identifier.
pub fn route(uri: &Uri) -> Option<(ObjectId, Intent)> {
    let (prefix, candidate) = uri.path().rsplit_once('/')?;
    let intent = match prefix {
        endpoints::OBJECTS => Intent::Metadata,
        endpoints::DATA_OBJECTS => Intent::RawObject,
        _ => return None,
    };
    let oid = ObjectId::parse(candidate).ok()?;
    Some((oid, intent))
}

/// Build the axum router.
///
/// Every request goes through one dispatcher: host checks, method checks,
/// and path classification all need to see requests no fixed route would
/// match.
pub fn build_router(ctx: ServerContext) -> Router {
    Router::new()
        .fallback(handler::dispatch)
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
}
