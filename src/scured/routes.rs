use crate::files::State;
use http_body_util::combinators::BoxBody;
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response};
use std::io;

pub async fn respond_to_request(
    req: Request<Incoming>,
    state: &State,
) -> Response<BoxBody<Bytes, io::Error>> {
    state.serve(req).await
}
