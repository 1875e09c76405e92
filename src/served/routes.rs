use crate::files::State;
use crate::served::access::{self, Capture, Logged};
use http_body_util::combinators::BoxBody;
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response};
use std::io;

pub async fn respond_to_request(
    req: Request<Incoming>,
    state: &State,
) -> Response<Logged<BoxBody<Bytes, io::Error>>> {
    let capture = Capture::new(req.method().clone(), req.uri().clone());
    let resp = state.serve(req).await;
    access::wrap(capture, resp)
}
