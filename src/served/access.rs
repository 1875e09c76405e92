use hyper::body::{Body, Frame, SizeHint};
use hyper::{Method, Response, StatusCode, Uri};
use std::fmt::{self, Display};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Per-request record of the access-log line to come. The status starts
/// at 0 ("no status recorded yet") and moves to the exact code sent to
/// the client when the response head is recorded.
pub struct Capture {
    status: u16,
    method: Method,
    uri: Uri,
}

impl Capture {
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            status: 0,
            method,
            uri,
        }
    }

    pub fn record(&mut self, status: StatusCode) {
        self.status = status.as_u16();
    }

    fn emit(&self) {
        log::info!("{}", self);
    }
}

impl Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.status, self.method, self.uri)
    }
}

/// Records the response's status into the capture and hands ownership of
/// the capture to the body, so the log line is emitted only once the
/// response has been fully written out.
pub fn wrap<B>(mut capture: Capture, resp: Response<B>) -> Response<Logged<B>> {
    capture.record(resp.status());
    resp.map(|inner| Logged {
        inner,
        capture: Some(capture),
    })
}

/// Body decorator that forwards every frame unchanged and emits the
/// access-log line once, when the body ends or is dropped (client abort).
pub struct Logged<B> {
    inner: B,
    capture: Option<Capture>,
}

impl<B: Body + Unpin> Body for Logged<B> {
    type Data = B::Data;
    type Error = B::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        let poll = Pin::new(&mut this.inner).poll_frame(cx);
        if let Poll::Ready(None) = poll {
            if let Some(capture) = this.capture.take() {
                capture.emit();
            }
        }
        poll
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl<B> Drop for Logged<B> {
    fn drop(&mut self) {
        if let Some(capture) = self.capture.take() {
            capture.emit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::{BodyExt, Full};
    use hyper::body::Bytes;

    #[test]
    fn capture_starts_at_sentinel() {
        let capture = Capture::new(Method::GET, "/index.html".parse().unwrap());
        assert_eq!(capture.to_string(), "0 GET /index.html");
    }

    #[test]
    fn capture_records_exact_status() {
        let mut capture = Capture::new(Method::GET, "/index.html".parse().unwrap());
        capture.record(StatusCode::OK);
        assert_eq!(capture.to_string(), "200 GET /index.html");

        let mut capture = Capture::new(Method::GET, "/missing.txt".parse().unwrap());
        capture.record(StatusCode::NOT_FOUND);
        assert_eq!(capture.to_string(), "404 GET /missing.txt");
    }

    #[test]
    fn capture_keeps_query_string() {
        let mut capture = Capture::new(Method::GET, "/a.txt?x=1".parse().unwrap());
        capture.record(StatusCode::OK);
        assert_eq!(capture.to_string(), "200 GET /a.txt?x=1");
    }

    #[tokio::test]
    async fn wrap_is_transparent() {
        let resp = Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header("content-type", "text/plain")
            .body(Full::new(Bytes::from("hello")))
            .unwrap();

        let capture = Capture::new(Method::GET, "/missing.txt".parse().unwrap());
        let wrapped = wrap(capture, resp);

        assert_eq!(wrapped.status(), StatusCode::NOT_FOUND);
        assert_eq!(wrapped.headers()["content-type"], "text/plain");
        assert_eq!(wrapped.body().size_hint().exact(), Some(5));
        assert!(!wrapped.body().is_end_stream());

        let bytes = wrapped.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes, Bytes::from("hello"));
    }

    #[test]
    fn empty_body_forwards_end_of_stream() {
        let resp = Response::new(Full::new(Bytes::new()));
        let capture = Capture::new(Method::GET, "/".parse().unwrap());
        let wrapped = wrap(capture, resp);

        assert!(wrapped.body().is_end_stream());
        assert_eq!(wrapped.body().size_hint().exact(), Some(0));
    }
}
