mod greet;
mod healthcheck;

use hyper::body::Incoming;
use hyper::header::HOST;
use hyper::{Method, Request, StatusCode};
use tracing::debug;
use tracing::warn;
use tracing::error;

use crate::server::response;
use crate::server::response::ServerResult;

pub const GET: &Method = &Method::GET;

pub async fn router<T>(req: Request<T>) -> ServerResult {
    let method = req.method();
    let path = req.uri().path();
    let origin = req.headers().get(HOST).ok_or("unknown");

    debug!("Received {} request at {} from {:?}", method, path, origin);

    // Remove the query parameter for routing purposes
    let without_query = match path.split_once("?") {
        None => path,
        Some(x) => x.0
    };

    // Split into subroutes
    let subroutes: Vec<&str> = without_query.split("/").collect();

    match (method, &subroutes[1..]) {
        (GET, ["greet"]) => greet::get(req),
        (GET, ["healthcheck"]) => healthcheck::get(req),
        _ => response::send_status(StatusCode::NOT_FOUND)
    }
}

pub async fn serve(req: Request<Incoming>) -> ServerResult {
    let result = router(req).await;
    if let Err(error) = result {
        if error.status_code == StatusCode::INTERNAL_SERVER_ERROR {
            error!("{}", error);
            response::send_status(error.status_code)
        } else {
            warn!("{}", error);
            response::send_status_and_message(error)
        }
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn request(method: &Method, uri: &str) -> Request<()> {
        Request::builder()
            .method(method.clone())
            .uri(uri)
            .body(())
            .unwrap()
    }

    #[tokio::test]
    async fn get_greet_responds_with_greeting() {
        let res = router(request(GET, "/greet")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = res.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with("method doGet invoked "));
        assert!(text.len() > "method doGet invoked ".len());
    }

    #[tokio::test]
    async fn query_parameters_are_ignored_for_routing() {
        let res = router(request(GET, "/greet?verbose=1")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_healthcheck_responds_ok() {
        let res = router(request(GET, "/healthcheck")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_path_responds_not_found() {
        let res = router(request(GET, "/missing")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_greet_responds_not_found() {
        let res = router(request(&Method::POST, "/greet")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
