use hyper::Request;

use crate::server::response;
use crate::server::response::ServerResult;

pub fn get<T>(_req: Request<T>) -> ServerResult {
    response::ok()
}
