use crate::body::empty;
use http_body_util::combinators::BoxBody;
use http_body_util::BodyExt;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use hyper_staticfile::Static;
use std::io;
use std::path::PathBuf;

/// Shared handle to the document root. Path resolution, MIME typing,
/// directory redirects, and range/conditional requests are all delegated
/// to `hyper_staticfile`.
pub struct State {
    files: Static,
}

impl State {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            files: Static::new(root),
        }
    }

    pub async fn serve<B>(&self, req: Request<B>) -> Response<BoxBody<Bytes, io::Error>> {
        let method = req.method().clone();
        let uri = req.uri().clone();
        match self.files.clone().serve(req).await {
            Ok(resp) => resp.map(|body| body.boxed()),
            Err(e) => {
                log::warn!("{} {} -> [file error] {}", method, uri, e);
                let mut resp = Response::new(empty());
                *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                resp
            }
        }
    }
}
