//! Test fixtures for the LFS server.

use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use lfs_server::{build_router, ServerContext};
use lfs_store::StoreLayout;
use lfs_types::ObjectId;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// A router over a temporary object directory.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: Router,
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    pub fn new(listen_port: u16) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let router = build_router(ServerContext::new(dir.path(), listen_port));
        Self { router, dir }
    }

    /// File `data` under its content hash, the way an external writer would.
    pub fn put(&self, data: &[u8]) -> ObjectId {
        put_object(self.dir.path(), data)
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn request(&self, method: &str, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

#[allow(dead_code)]
pub fn put_object(root: &Path, data: &[u8]) -> ObjectId {
    let oid = ObjectId::for_content(data);
    let path = StoreLayout::new(root).locate(&oid);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, data).unwrap();
    oid
}

#[allow(dead_code)]
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body is JSON")
}
