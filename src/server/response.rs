use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Response, StatusCode};

use crate::server::error::ServerError;

pub type ServerResult = Result<Response<BoxBody<Bytes, hyper::Error>>, ServerError>;

pub fn empty() -> BoxBody<Bytes, hyper::Error> {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed()
}

fn full<T: Into<Bytes>>(chunk: T) -> BoxBody<Bytes, hyper::Error> {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}

pub fn send<T: Into<Bytes>>(body: T) -> Response<BoxBody<hyper::body::Bytes, hyper::Error>> {
    Response::new(full(body))
}

pub fn send_plain<T: Into<Bytes>>(body: T) -> Response<BoxBody<hyper::body::Bytes, hyper::Error>> {
    let mut res = send(body);
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    res
}

pub fn send_status(status: StatusCode) -> ServerResult {
    let mut res = Response::new(empty());
    *res.status_mut() = status;
    Ok(res)
}

pub fn send_status_and_message(error: ServerError) -> ServerResult {
    let mut res = Response::new(full(error.message));
    *res.status_mut() = error.status_code;
    Ok(res)
}

pub fn ok() -> ServerResult {
    Ok(send("OK".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_plain_sets_content_type() {
        let res = send_plain("hello");
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
    }

    #[tokio::test]
    async fn send_status_and_message_carries_both() {
        let error = ServerError {
            prefix: "[BAD REQUEST]",
            message: "missing flag".to_owned(),
            status_code: StatusCode::BAD_REQUEST,
        };
        let res = send_status_and_message(error).unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from("missing flag"));
    }
}
